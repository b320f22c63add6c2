//! Shared output formatting helpers for commands

pub mod dispatch;
pub mod grade;
pub mod status;

pub use dispatch::output_by_format_result;
pub use status::{print_json_status, print_records_header};

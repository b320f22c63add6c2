//! Format dispatch macros for command output
//!
//! The macros are defined in `crate::cli::format` and re-exported here for
//! convenient access from command modules.
//!
/// ```rust,ignore
/// use crate::commands::format::output_by_format_result;
///
/// output_by_format_result!(cli.format,
///     json => {
///         print_json_status("ok", None, &[])?;
///         Ok(())
///     },
///     human => { println!("Done"); },
///     records => { print_records_header("done", &[]); }
/// )?;
/// ```
pub use crate::output_by_format_result;

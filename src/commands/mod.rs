//! CLI commands for gradebook

pub mod catalog;
pub mod classes;
pub mod dispatch;
pub mod enroll;
pub mod format;
pub mod gpa;
pub mod grade;
pub mod init;
pub mod recompute;
pub mod score;
pub mod submit;

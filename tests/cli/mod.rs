pub mod support;

mod gpa;
mod grading;
mod init;
mod logging;

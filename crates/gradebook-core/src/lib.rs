//! Gradebook Core Library
//!
//! Grade computation for a course management system: per-category point
//! aggregation, weighted scaling onto a letter grade and GPA aggregation.
//! The engine reads roster data through [`roster::RosterProvider`] and
//! persists grades through [`roster::GradeWriter`]; [`db`] provides SQLite
//! implementations of both.

pub mod config;
pub mod db;
pub mod error;
pub mod format;
pub mod grading;
pub mod logging;
pub mod roster;
pub mod store;

//! Argument groups shared by several commands

use clap::Args;

use crate::cli::parse::parse_season;
use gradebook_core::db::ClassKey;

/// Identifies a class by course and term
#[derive(Args, Debug, Clone)]
pub struct ClassArgs {
    /// Department subject code (e.g. CS)
    #[arg(long)]
    pub subject: String,

    /// Course number
    #[arg(long)]
    pub number: u32,

    /// Term season (Spring, Summer, Fall)
    #[arg(long, value_parser = parse_season)]
    pub season: String,

    /// Term year
    #[arg(long)]
    pub year: u32,
}

impl ClassArgs {
    pub fn key(&self) -> ClassKey {
        ClassKey::new(&self.subject, self.number, &self.season, self.year)
    }
}

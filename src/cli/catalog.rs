//! Subcommands that build up the course catalog

use chrono::{DateTime, Utc};
use clap::Subcommand;

use crate::cli::args::ClassArgs;
use crate::cli::parse::parse_due;

/// Department subcommands
#[derive(Subcommand, Debug)]
pub enum DepartmentCommands {
    /// Create a department
    Add {
        /// Subject code (e.g. CS)
        subject: String,

        /// Department name
        name: String,
    },
}

/// Course subcommands
#[derive(Subcommand, Debug)]
pub enum CourseCommands {
    /// Create a course in a department
    Add {
        /// Subject code of the owning department
        subject: String,

        /// Course number
        number: u32,

        /// Course name
        name: String,
    },
}

/// Class subcommands
#[derive(Subcommand, Debug)]
pub enum ClassCommands {
    /// Offer a course in a term
    Add {
        #[command(flatten)]
        class: ClassArgs,

        /// Room or building
        #[arg(long, default_value = "")]
        location: String,

        /// Teaching professor's uid
        #[arg(long)]
        professor: Option<String>,
    },
}

/// Assignment category subcommands
#[derive(Subcommand, Debug)]
pub enum CategoryCommands {
    /// Create a weighted assignment category
    Add {
        #[command(flatten)]
        class: ClassArgs,

        /// Category name (unique within the class)
        name: String,

        /// Relative weight; weights need not sum to 100
        #[arg(long)]
        weight: u32,
    },
}

/// Assignment subcommands
#[derive(Subcommand, Debug)]
pub enum AssignmentCommands {
    /// Create an assignment in a category
    ///
    /// Stored grades are not recomputed; run `gradebook recompute --all`
    /// afterwards to refresh them.
    Add {
        #[command(flatten)]
        class: ClassArgs,

        /// Category the assignment belongs to
        #[arg(long)]
        category: String,

        /// Assignment name (unique within the category)
        name: String,

        /// Maximum points
        #[arg(long)]
        points: u32,

        /// Due date (YYYY-MM-DD or RFC 3339)
        #[arg(long, value_parser = parse_due)]
        due: Option<DateTime<Utc>>,

        /// Assignment instructions
        #[arg(long, default_value = "")]
        contents: String,
    },
}

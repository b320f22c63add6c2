//! Main CLI commands enum

use clap::{Args, Subcommand};

use crate::cli::args::ClassArgs;
use crate::cli::catalog::{
    AssignmentCommands, CategoryCommands, ClassCommands, CourseCommands, DepartmentCommands,
};

/// Top-level gradebook commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new gradebook store
    Init,

    /// Manage departments
    Department(DepartmentSubcommand),

    /// Manage courses
    Course(CourseSubcommand),

    /// Manage class offerings
    Class(ClassSubcommand),

    /// Manage assignment categories
    Category(CategorySubcommand),

    /// Manage assignments
    Assignment(AssignmentSubcommand),

    /// Enroll a student in a class
    Enroll(EnrollArgs),

    /// Submit text for an assignment
    Submit(SubmitArgs),

    /// Score a submission and recompute the student's grade
    Score(ScoreArgs),

    /// Inspect grades
    Grade(GradeSubcommand),

    /// Recompute stored grades from current scores
    Recompute(RecomputeArgs),

    /// Show a student's GPA
    Gpa(StudentArgs),

    /// List a student's classes and grades
    Classes(StudentArgs),
}

#[derive(Args, Debug)]
pub struct DepartmentSubcommand {
    #[command(subcommand)]
    pub command: DepartmentCommands,
}

#[derive(Args, Debug)]
pub struct CourseSubcommand {
    #[command(subcommand)]
    pub command: CourseCommands,
}

#[derive(Args, Debug)]
pub struct ClassSubcommand {
    #[command(subcommand)]
    pub command: ClassCommands,
}

#[derive(Args, Debug)]
pub struct CategorySubcommand {
    #[command(subcommand)]
    pub command: CategoryCommands,
}

#[derive(Args, Debug)]
pub struct AssignmentSubcommand {
    #[command(subcommand)]
    pub command: AssignmentCommands,
}

#[derive(Args, Debug)]
pub struct GradeSubcommand {
    #[command(subcommand)]
    pub command: GradeCommands,
}

/// Grade subcommands
#[derive(Subcommand, Debug)]
pub enum GradeCommands {
    /// Show a student's scores and grade in a class
    Show {
        #[command(flatten)]
        class: ClassArgs,

        /// Student uid
        #[arg(long)]
        student: String,
    },
}

/// Arguments for the enroll command.
#[derive(Args, Debug)]
pub struct EnrollArgs {
    #[command(flatten)]
    pub class: ClassArgs,

    /// Student uid
    #[arg(long)]
    pub student: String,
}

/// Arguments for the submit command.
#[derive(Args, Debug)]
pub struct SubmitArgs {
    #[command(flatten)]
    pub class: ClassArgs,

    /// Assignment category
    #[arg(long)]
    pub category: String,

    /// Assignment name
    #[arg(long)]
    pub assignment: String,

    /// Student uid
    #[arg(long)]
    pub student: String,

    /// Submission text
    #[arg(long)]
    pub contents: String,
}

/// Arguments for the score command.
#[derive(Args, Debug)]
pub struct ScoreArgs {
    #[command(flatten)]
    pub class: ClassArgs,

    /// Assignment category
    #[arg(long)]
    pub category: String,

    /// Assignment name
    #[arg(long)]
    pub assignment: String,

    /// Student uid
    #[arg(long)]
    pub student: String,

    /// Points earned
    #[arg(long)]
    pub score: u32,
}

/// Arguments for the recompute command.
#[derive(Args, Debug)]
pub struct RecomputeArgs {
    #[command(flatten)]
    pub class: ClassArgs,

    /// Student uid
    #[arg(long, required_unless_present = "all", conflicts_with = "all")]
    pub student: Option<String>,

    /// Recompute every enrolled student
    #[arg(long)]
    pub all: bool,
}

/// Arguments for commands that only need a student.
#[derive(Args, Debug)]
pub struct StudentArgs {
    /// Student uid
    #[arg(long)]
    pub student: String,
}

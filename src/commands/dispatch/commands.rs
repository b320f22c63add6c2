//! Command implementations for all gradebook commands

use crate::cli::Commands;
use crate::commands::dispatch::command::{Command, CommandContext};
use gradebook_core::error::Result;

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        dispatch_command::execute(self, ctx)
    }
}

pub(super) mod dispatch_command {
    use super::*;

    use crate::cli::commands::{GradeCommands, RecomputeArgs};
    use crate::commands::dispatch::command::explicit_store_path;
    use crate::commands::{catalog, classes, enroll, gpa, grade, init, recompute, score, submit};

    pub(super) fn execute(cmd: &Commands, ctx: &CommandContext) -> Result<()> {
        match cmd {
            Commands::Init => init::execute(ctx.cli, ctx.root, explicit_store_path(ctx.cli, ctx.root)),
            Commands::Department(subcmd) => {
                let store = ctx.discover_or_open_store()?;
                catalog::execute_department(ctx.cli, &store, &subcmd.command)
            }
            Commands::Course(subcmd) => {
                let store = ctx.discover_or_open_store()?;
                catalog::execute_course(ctx.cli, &store, &subcmd.command)
            }
            Commands::Class(subcmd) => {
                let store = ctx.discover_or_open_store()?;
                catalog::execute_class(ctx.cli, &store, &subcmd.command)
            }
            Commands::Category(subcmd) => {
                let store = ctx.discover_or_open_store()?;
                catalog::execute_category(ctx.cli, &store, &subcmd.command)
            }
            Commands::Assignment(subcmd) => {
                let store = ctx.discover_or_open_store()?;
                catalog::execute_assignment(ctx.cli, &store, &subcmd.command)
            }
            Commands::Enroll(args) => {
                let store = ctx.discover_or_open_store()?;
                enroll::execute(ctx.cli, &store, args)
            }
            Commands::Submit(args) => {
                let store = ctx.discover_or_open_store()?;
                submit::execute(ctx.cli, &store, args)
            }
            Commands::Score(args) => {
                let store = ctx.discover_or_open_store()?;
                score::execute(ctx.cli, &store, args)
            }
            Commands::Grade(subcmd) => execute_grade(ctx, &subcmd.command),
            Commands::Recompute(args) => execute_recompute(ctx, args),
            Commands::Gpa(args) => {
                let store = ctx.discover_or_open_store()?;
                gpa::execute(ctx.cli, &store, &args.student)
            }
            Commands::Classes(args) => {
                let store = ctx.discover_or_open_store()?;
                classes::execute(ctx.cli, &store, &args.student)
            }
        }
    }

    fn execute_grade(ctx: &CommandContext, command: &GradeCommands) -> Result<()> {
        let store = ctx.discover_or_open_store()?;
        match command {
            GradeCommands::Show { class, student } => {
                grade::execute_show(ctx.cli, &store, &class.key(), student)
            }
        }
    }

    fn execute_recompute(ctx: &CommandContext, args: &RecomputeArgs) -> Result<()> {
        let store = ctx.discover_or_open_store()?;
        let key = args.class.key();
        match &args.student {
            Some(student) => recompute::execute_student(ctx.cli, &store, &key, student),
            None => recompute::execute_class(ctx.cli, &store, &key),
        }
    }
}

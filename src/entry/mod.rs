mod execute;
mod plan;

use std::ffi::OsString;

use clap::{CommandFactory, FromArgMatches};

use crate::args::Cli;
use crate::error::{AppError, AppResult, ValidationError};
use execute::execute_plan;
use plan::build_plan;

pub(crate) fn run() -> AppResult<()> {
    let Some(cli) = parse_args()? else {
        return Ok(());
    };

    crate::logger::init_logging(cli.verbose);

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .map_err(|err| AppError::validation(ValidationError::RuntimeBuildFailed { source: err }))?;

    runtime.block_on(run_async(cli))
}

fn parse_args() -> AppResult<Option<Cli>> {
    let mut cmd = Cli::command();
    let raw_args: Vec<OsString> = std::env::args_os().collect();

    if should_show_help(&raw_args) {
        cmd.print_help()?;
        println!();
        return Ok(None);
    }

    let matches = cmd.get_matches_from(raw_args);
    let cli = Cli::from_arg_matches(&matches)?;
    if cli.command.is_none() {
        Cli::command().print_help()?;
        println!();
        return Ok(None);
    }
    Ok(Some(cli))
}

fn should_show_help(raw_args: &[OsString]) -> bool {
    matches!(raw_args, [] | [_]) || matches!(raw_args, [_, second] if second == "--")
}

async fn run_async(cli: Cli) -> AppResult<()> {
    let Some(command) = cli.command else {
        return Ok(());
    };
    let plan = build_plan(command)?;
    execute_plan(plan).await
}

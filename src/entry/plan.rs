use std::path::PathBuf;

use clap::CommandFactory;

use crate::args::{Cli, Command};
use crate::config::{LoadConfig, load_run_config};
use crate::error::{AppError, AppResult};
use crate::runner::{BatchConfig, sweep_configs, sweep_plan};

pub(super) enum RunPlan {
    Run(LoadConfig),
    Sweep(Vec<LoadConfig>),
    Batch(BatchConfig),
    Smoke { address: String },
    Print { path: PathBuf },
    Serve { listen: String },
}

/// Resolves a parsed command into a fully validated plan. Nothing is
/// dispatched or written when this fails.
pub(super) fn build_plan(command: Command) -> AppResult<RunPlan> {
    match command {
        Command::Run(args) => load_run_config(&args)
            .map(RunPlan::Run)
            .map_err(|err| with_usage("run", err)),
        Command::Sweep(args) => {
            let plan = sweep_plan(args.preset);
            sweep_configs(&plan, &args.address, args.output.as_deref())
                .map(RunPlan::Sweep)
                .map_err(|err| with_usage("sweep", err))
        }
        Command::Batch(args) => Ok(RunPlan::Batch(BatchConfig {
            address: args.address,
            seed: args.seed,
            calls: args.calls,
            timeout: args.timeout,
        })),
        Command::Smoke(args) => Ok(RunPlan::Smoke {
            address: args.address,
        }),
        Command::Print(args) => Ok(RunPlan::Print { path: args.file }),
        Command::Serve(args) => Ok(RunPlan::Serve {
            listen: args.listen,
        }),
    }
}

fn with_usage(subcommand: &str, err: AppError) -> AppError {
    tracing::error!("{}", err);
    let mut cmd = Cli::command();
    if let Some(sub) = cmd.find_subcommand_mut(subcommand)
        && let Err(help_err) = sub.print_help()
    {
        tracing::warn!("Failed to print usage: {}", help_err);
    }
    err
}

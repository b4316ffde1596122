use super::*;
use crate::args::parsers::parse_duration_arg;
use crate::error::{AppError, AppResult};
use crate::workload::OperationMode;
use clap::Parser;
use std::time::Duration;

fn parse(args: &[&str]) -> AppResult<Cli> {
    Cli::try_parse_from(args)
        .map_err(|err| AppError::validation(format!("Expected parse success: {}", err)))
}

#[test]
fn run_accepts_every_option() -> AppResult<()> {
    let cli = parse(&[
        "rpcload", "run", "-a", "127.0.0.1:9000", "-r", "250", "-t", "2s", "-s", "-7", "-m",
        "sort", "-H", "30", "-o", "results",
    ])?;
    let Some(Command::Run(run)) = cli.command else {
        return Err(AppError::validation("Expected run subcommand"));
    };
    if run.address.as_deref() != Some("127.0.0.1:9000") {
        return Err(AppError::validation("Unexpected address"));
    }
    if run.rate.map(PositiveU64::get) != Some(250) {
        return Err(AppError::validation("Unexpected rate"));
    }
    if run.duration != Some(Duration::from_secs(2)) {
        return Err(AppError::validation("Unexpected duration"));
    }
    if run.seed != Some(-7) {
        return Err(AppError::validation("Unexpected seed"));
    }
    if run.mode != Some(OperationMode::SortOnly) {
        return Err(AppError::validation("Unexpected mode"));
    }
    if run.heavy_mix.map(HeavyMix::get) != Some(30) {
        return Err(AppError::validation("Unexpected heavy mix"));
    }
    Ok(())
}

#[test]
fn run_rejects_zero_rate() -> AppResult<()> {
    if Cli::try_parse_from(["rpcload", "run", "-r", "0"]).is_ok() {
        return Err(AppError::validation("Expected zero rate to be rejected"));
    }
    Ok(())
}

#[test]
fn run_rejects_heavy_mix_above_hundred() -> AppResult<()> {
    if Cli::try_parse_from(["rpcload", "run", "--heavy-mix", "101"]).is_ok() {
        return Err(AppError::validation("Expected heavy mix 101 to be rejected"));
    }
    Ok(())
}

#[test]
fn run_rejects_unknown_mode() -> AppResult<()> {
    if Cli::try_parse_from(["rpcload", "run", "--mode", "7"]).is_ok() {
        return Err(AppError::validation("Expected mode 7 to be rejected"));
    }
    if Cli::try_parse_from(["rpcload", "run", "--mode", "fft"]).is_ok() {
        return Err(AppError::validation("Expected mode fft to be rejected"));
    }
    Ok(())
}

#[test]
fn sweep_accepts_legacy_aliases() -> AppResult<()> {
    let cli = parse(&["rpcload", "sweep", "lt3", "-a", "localhost:1234"])?;
    match cli.command {
        Some(Command::Sweep(sweep)) if sweep.preset == SweepPreset::HalfHeavy => Ok(()),
        _ => Err(AppError::validation("Expected half-heavy sweep")),
    }
}

#[test]
fn batch_defaults_to_five_calls_and_three_seconds() -> AppResult<()> {
    let cli = parse(&["rpcload", "batch", "-a", "localhost:1234"])?;
    let Some(Command::Batch(batch)) = cli.command else {
        return Err(AppError::validation("Expected batch subcommand"));
    };
    if batch.calls.get() != 5 || batch.timeout != Duration::from_secs(3) || batch.seed != 1 {
        return Err(AppError::validation("Unexpected batch defaults"));
    }
    Ok(())
}

#[test]
fn serve_has_default_listen_address() -> AppResult<()> {
    let cli = parse(&["rpcload", "serve", "--verbose"])?;
    if !cli.verbose {
        return Err(AppError::validation("Expected global verbose flag"));
    }
    match cli.command {
        Some(Command::Serve(serve)) if serve.listen == "127.0.0.1:1234" => Ok(()),
        _ => Err(AppError::validation("Expected default listen address")),
    }
}

#[test]
fn duration_units_are_parsed() -> AppResult<()> {
    let cases = [
        ("250ms", Duration::from_millis(250)),
        ("3", Duration::from_secs(3)),
        ("2m", Duration::from_secs(120)),
        ("1h", Duration::from_secs(3600)),
    ];
    for (input, expected) in cases {
        let parsed = parse_duration_arg(input)?;
        if parsed != expected {
            return Err(AppError::validation(format!("Unexpected duration for {}", input)));
        }
    }
    Ok(())
}

#[test]
fn duration_rejects_bad_input() -> AppResult<()> {
    for input in ["", "abc", "10d", "0s"] {
        if parse_duration_arg(input).is_ok() {
            return Err(AppError::validation(format!("Expected {} to be rejected", input)));
        }
    }
    Ok(())
}

#[test]
fn heavy_mix_bounds() -> AppResult<()> {
    if HeavyMix::try_from(100_u64)? != HeavyMix::ALL {
        return Err(AppError::validation("Expected 100 to be accepted"));
    }
    if HeavyMix::try_from(256_u64).is_ok() {
        return Err(AppError::validation("Expected 256 to be rejected"));
    }
    Ok(())
}

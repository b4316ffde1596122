use std::time::Duration;

use tracing::debug;

use crate::args::parsers::parse_duration_arg;
use crate::args::{HeavyMix, PositiveU64, RunArgs};
use crate::error::{AppError, AppResult, RunParameter, ValidationError};
use crate::sinks::resolve_result_path;
use crate::workload::OperationMode;

use super::loader::load_config;
use super::types::{ConfigFile, DurationValue, LoadConfig, ModeValue};

const DEFAULT_SEED: i64 = 1;

/// Loads the config file named by `--config` (or a default one) and resolves
/// the run parameters.
///
/// # Errors
///
/// Returns an error when the config file is unreadable or a parameter is
/// missing or invalid.
pub fn load_run_config(args: &RunArgs) -> AppResult<LoadConfig> {
    let file = load_config(args.config.as_deref())?;
    if file.is_some() {
        debug!("Merging run parameters with config file values");
    }
    resolve_load_config(args, file.as_ref())
}

/// Merges command-line values over config-file values and validates the result.
///
/// No file is opened here; the output path is only checked for its extension.
///
/// # Errors
///
/// Returns a validation error naming the first missing or invalid parameter.
pub fn resolve_load_config(args: &RunArgs, file: Option<&ConfigFile>) -> AppResult<LoadConfig> {
    let address = match args.address.clone() {
        Some(address) => address,
        None => file
            .and_then(|config| config.address.as_deref())
            .map(str::trim)
            .filter(|address| !address.is_empty())
            .map(str::to_owned)
            .ok_or_else(|| missing(RunParameter::Address))?,
    };

    let rate = match args.rate {
        Some(rate) => rate,
        None => {
            let value = file
                .and_then(|config| config.rate)
                .ok_or_else(|| missing(RunParameter::Rate))?;
            PositiveU64::try_from(value).map_err(|_err| ValidationError::RateZero)?
        }
    };

    let duration = match args.duration {
        Some(duration) => duration,
        None => {
            let value = file
                .and_then(|config| config.duration.as_ref())
                .ok_or_else(|| missing(RunParameter::Duration))?;
            duration_from_value(value)?
        }
    };

    let seed = args
        .seed
        .or_else(|| file.and_then(|config| config.seed))
        .unwrap_or(DEFAULT_SEED);

    let mode = match args.mode {
        Some(mode) => mode,
        None => match file.and_then(|config| config.mode.as_ref()) {
            Some(ModeValue::Index(index)) => OperationMode::from_index(*index)?,
            Some(ModeValue::Name(name)) => name.parse()?,
            None => OperationMode::default(),
        },
    };

    let heavy_mix = match args.heavy_mix {
        Some(heavy_mix) => heavy_mix,
        None => match file.and_then(|config| config.heavy_mix) {
            Some(value) => HeavyMix::try_from(value)?,
            None => HeavyMix::NONE,
        },
    };

    let output = args
        .output
        .clone()
        .or_else(|| file.and_then(|config| config.output.clone()))
        .ok_or_else(|| missing(RunParameter::Output))?;
    let output = resolve_result_path(&output)?;

    Ok(LoadConfig {
        address,
        rate,
        duration,
        seed,
        mode,
        heavy_mix,
        output,
    })
}

fn missing(parameter: RunParameter) -> AppError {
    AppError::validation(ValidationError::MissingParameter { parameter })
}

fn duration_from_value(value: &DurationValue) -> AppResult<Duration> {
    match value {
        DurationValue::Seconds(0) => Err(AppError::validation(ValidationError::DurationZero)),
        DurationValue::Seconds(secs) => Ok(Duration::from_secs(*secs)),
        DurationValue::Text(text) => parse_duration_arg(text),
    }
}

use super::{ConfigFile, DurationValue, ModeValue, load_config_file, resolve_load_config};
use std::path::PathBuf;
use std::time::Duration;
use tempfile::tempdir;

use crate::args::{HeavyMix, PositiveU64, RunArgs};
use crate::error::{AppError, RunParameter, ValidationError};
use crate::workload::OperationMode;

fn full_args() -> Result<RunArgs, String> {
    Ok(RunArgs {
        address: Some("127.0.0.1:1234".to_owned()),
        rate: Some(PositiveU64::try_from(10_u64).map_err(|err| err.to_string())?),
        duration: Some(Duration::from_secs(1)),
        seed: Some(1),
        mode: Some(OperationMode::SortOnly),
        heavy_mix: Some(HeavyMix::NONE),
        output: Some(PathBuf::from("results.jsonl")),
        config: None,
    })
}

#[test]
fn parse_toml_config() -> Result<(), String> {
    let dir = tempdir().map_err(|err| format!("tempdir failed: {}", err))?;
    let path = dir.path().join("rpcload.toml");
    let content = r#"
address = "127.0.0.1:4000"
rate = 200
duration = "2s"
seed = -3
mode = "matmul"
heavy_mix = 40
output = "sweep"
"#;
    std::fs::write(&path, content).map_err(|err| format!("write failed: {}", err))?;

    let config = load_config_file(&path).map_err(|err| err.to_string())?;
    if config.address.as_deref() != Some("127.0.0.1:4000") {
        return Err("Unexpected address".to_owned());
    }
    if !matches!(config.duration, Some(DurationValue::Text(ref text)) if text == "2s") {
        return Err("Expected textual duration".to_owned());
    }
    if !matches!(config.mode, Some(ModeValue::Name(ref name)) if name == "matmul") {
        return Err("Expected named mode".to_owned());
    }
    Ok(())
}

#[test]
fn parse_json_config_with_numeric_mode() -> Result<(), String> {
    let dir = tempdir().map_err(|err| format!("tempdir failed: {}", err))?;
    let path = dir.path().join("rpcload.json");
    let content = r#"{"rate": 50, "duration": 3, "mode": 4}"#;
    std::fs::write(&path, content).map_err(|err| format!("write failed: {}", err))?;

    let config = load_config_file(&path).map_err(|err| err.to_string())?;
    if !matches!(config.duration, Some(DurationValue::Seconds(3))) {
        return Err("Expected duration in seconds".to_owned());
    }
    if !matches!(config.mode, Some(ModeValue::Index(4))) {
        return Err("Expected mode index".to_owned());
    }
    Ok(())
}

#[test]
fn unsupported_extension_is_rejected() -> Result<(), String> {
    let dir = tempdir().map_err(|err| format!("tempdir failed: {}", err))?;
    let path = dir.path().join("rpcload.yaml");
    std::fs::write(&path, "rate: 1").map_err(|err| format!("write failed: {}", err))?;
    match load_config_file(&path) {
        Err(AppError::Config(_)) => Ok(()),
        Err(err) => Err(format!("Unexpected error: {}", err)),
        Ok(_) => Err("Expected yaml to be rejected".to_owned()),
    }
}

#[test]
fn cli_values_win_over_file_values() -> Result<(), String> {
    let args = full_args()?;
    let file = ConfigFile {
        address: Some("10.0.0.1:9".to_owned()),
        rate: Some(999),
        seed: Some(77),
        ..ConfigFile::default()
    };
    let config = resolve_load_config(&args, Some(&file)).map_err(|err| err.to_string())?;
    if config.address != "127.0.0.1:1234" || config.rate.get() != 10 || config.seed != 1 {
        return Err("Expected command-line values to win".to_owned());
    }
    Ok(())
}

#[test]
fn file_values_fill_missing_parameters() -> Result<(), String> {
    let args = RunArgs {
        address: Some("127.0.0.1:1234".to_owned()),
        ..RunArgs::default()
    };
    let file = ConfigFile {
        rate: Some(25),
        duration: Some(DurationValue::Text("500ms".to_owned())),
        mode: Some(ModeValue::Index(1)),
        heavy_mix: Some(100),
        output: Some(PathBuf::from("records")),
        ..ConfigFile::default()
    };
    let config = resolve_load_config(&args, Some(&file)).map_err(|err| err.to_string())?;
    if config.rate.get() != 25 || config.duration != Duration::from_millis(500) {
        return Err("Expected rate and duration from file".to_owned());
    }
    if config.mode != OperationMode::HashOnly || config.heavy_mix != HeavyMix::ALL {
        return Err("Expected mode and heavy mix from file".to_owned());
    }
    if config.output != PathBuf::from("records.jsonl") {
        return Err(format!("Unexpected output {}", config.output.display()));
    }
    if config.seed != 1 {
        return Err("Expected default seed".to_owned());
    }
    Ok(())
}

#[test]
fn missing_rate_is_reported() -> Result<(), String> {
    let args = RunArgs {
        rate: None,
        ..full_args()?
    };
    match resolve_load_config(&args, None) {
        Err(AppError::Validation(ValidationError::MissingParameter {
            parameter: RunParameter::Rate,
        })) => Ok(()),
        Err(err) => Err(format!("Unexpected error: {}", err)),
        Ok(_) => Err("Expected missing rate".to_owned()),
    }
}

#[test]
fn zero_rate_in_file_is_rejected() -> Result<(), String> {
    let args = RunArgs {
        rate: None,
        ..full_args()?
    };
    let file = ConfigFile {
        rate: Some(0),
        ..ConfigFile::default()
    };
    match resolve_load_config(&args, Some(&file)) {
        Err(AppError::Validation(ValidationError::RateZero)) => Ok(()),
        Err(err) => Err(format!("Unexpected error: {}", err)),
        Ok(_) => Err("Expected zero rate to be rejected".to_owned()),
    }
}

#[test]
fn wrong_output_extension_is_rejected() -> Result<(), String> {
    let args = RunArgs {
        output: Some(PathBuf::from("results.csv")),
        ..full_args()?
    };
    match resolve_load_config(&args, None) {
        Err(AppError::Validation(ValidationError::InvalidOutputExtension { .. })) => Ok(()),
        Err(err) => Err(format!("Unexpected error: {}", err)),
        Ok(_) => Err("Expected csv output to be rejected".to_owned()),
    }
}

#[test]
fn tick_period_is_inverse_of_rate() -> Result<(), String> {
    let config = resolve_load_config(&full_args()?, None).map_err(|err| err.to_string())?;
    if config.tick_period() != Duration::from_millis(100) {
        return Err("Expected 100ms period at 10 req/s".to_owned());
    }
    Ok(())
}

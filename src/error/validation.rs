use std::path::PathBuf;

use thiserror::Error;

/// Run parameters that must be supplied on the command line or in a config file.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum RunParameter {
    #[error("address")]
    Address,
    #[error("rate")]
    Rate,
    #[error("duration")]
    Duration,
    #[error("output")]
    Output,
}

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Missing {parameter} (set --{parameter} or provide it in the config file).")]
    MissingParameter { parameter: RunParameter },
    #[error("Rate must be > 0.")]
    RateZero,
    #[error("Heavy mix must be between 0 and 100, got {value}.")]
    HeavyMixOutOfRange { value: u64 },
    #[error(
        "Invalid mode '{value}'. Use 0-4 or mixed, hash, matmul, compress, sort."
    )]
    InvalidMode { value: String },
    #[error("Result file '{path}' must have the .jsonl extension.")]
    InvalidOutputExtension { path: PathBuf },
    #[error("Address must not be empty.")]
    AddressEmpty,
    #[error("Duration must not be empty.")]
    DurationEmpty,
    #[error("Invalid duration '{value}'.")]
    InvalidDurationFormat { value: String },
    #[error("Invalid duration '{value}': {source}")]
    InvalidDurationNumber {
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },
    #[error("Invalid duration unit '{unit}'.")]
    InvalidDurationUnit { unit: String },
    #[error("Duration overflow.")]
    DurationOverflow,
    #[error("Duration must be > 0.")]
    DurationZero,
    #[error("Value must be >= {min}.")]
    ValueTooSmall { min: u64 },
    #[error("Invalid value: {source}")]
    InvalidNumber {
        #[source]
        source: std::num::ParseIntError,
    },
    #[error("Failed to build runtime: {source}")]
    RuntimeBuildFailed {
        #[source]
        source: std::io::Error,
    },
    #[error("Smoke check failed: {message}")]
    SmokeCheckFailed { message: String },
    #[cfg(test)]
    #[error("Test expectation failed: {message}")]
    TestExpectation { message: &'static str },
    #[cfg(test)]
    #[error("Test expectation failed: {message}: {value}")]
    TestExpectationValue {
        message: &'static str,
        value: String,
    },
}

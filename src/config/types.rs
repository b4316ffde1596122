use std::path::PathBuf;
use std::time::Duration;

use serde::Deserialize;

use crate::args::{HeavyMix, PositiveU64};
use crate::workload::OperationMode;

const NANOS_PER_SECOND: u64 = 1_000_000_000;

/// Values read from `rpcload.toml` / `rpcload.json`. Every field is optional;
/// the command line fills or overrides them.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    pub address: Option<String>,
    pub rate: Option<u64>,
    pub duration: Option<DurationValue>,
    pub seed: Option<i64>,
    pub mode: Option<ModeValue>,
    pub heavy_mix: Option<u64>,
    pub output: Option<PathBuf>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum DurationValue {
    Seconds(u64),
    Text(String),
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ModeValue {
    Index(u64),
    Name(String),
}

/// Immutable parameters of one paced run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadConfig {
    pub address: String,
    pub rate: PositiveU64,
    pub duration: Duration,
    pub seed: i64,
    pub mode: OperationMode,
    pub heavy_mix: HeavyMix,
    pub output: PathBuf,
}

impl LoadConfig {
    /// Interval between two dispatches, `1s / rate`, never shorter than 1ns.
    #[must_use]
    pub fn tick_period(&self) -> Duration {
        let nanos = NANOS_PER_SECOND
            .checked_div(self.rate.get())
            .unwrap_or(NANOS_PER_SECOND)
            .max(1);
        Duration::from_nanos(nanos)
    }

    /// Label written into the summary record.
    #[must_use]
    pub const fn operation_label(&self) -> &'static str {
        self.mode.label()
    }
}

use std::path::PathBuf;
use std::time::Duration;

use crate::args::{HeavyMix, PositiveU64};
use crate::error::AppResult;
use crate::workload::OperationMode;

use super::types::LoadConfig;

pub(crate) fn sample_load_config(
    rate: u64,
    duration: Duration,
    mode: OperationMode,
) -> AppResult<LoadConfig> {
    Ok(LoadConfig {
        address: "127.0.0.1:1".to_owned(),
        rate: PositiveU64::try_from(rate)?,
        duration,
        seed: 1,
        mode,
        heavy_mix: HeavyMix::NONE,
        output: PathBuf::from("results.jsonl"),
    })
}

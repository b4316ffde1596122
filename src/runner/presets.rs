use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::args::{HeavyMix, PositiveU64, SweepPreset};
use crate::config::LoadConfig;
use crate::error::AppResult;
use crate::sinks::resolve_result_path;
use crate::workload::OperationMode;

const SWEEP_SEED: i64 = 1;
const SWEEP_STEP: usize = 100;
const SWEEP_DURATION: Duration = Duration::from_secs(1);
const TRACE_RATE: u64 = 20;
const TRACE_DURATION: Duration = Duration::from_secs(10);

/// Rates, modes, and destination of one preset sweep.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SweepPlan {
    pub rates: Vec<u64>,
    pub modes: Vec<OperationMode>,
    pub heavy_mix: HeavyMix,
    pub duration: Duration,
    pub output: PathBuf,
}

#[must_use]
pub fn sweep_plan(preset: SweepPreset) -> SweepPlan {
    let stepped = |low: u64, high: u64| (low..=high).step_by(SWEEP_STEP).collect::<Vec<_>>();
    let every_mode = OperationMode::ALL.to_vec();
    let (rates, modes, heavy_mix, duration, file) = match preset {
        SweepPreset::Wide => (
            stepped(100, 2000),
            every_mode,
            HeavyMix::NONE,
            SWEEP_DURATION,
            "load_test_eg1.jsonl",
        ),
        SweepPreset::Narrow => (
            stepped(400, 1200),
            every_mode,
            HeavyMix::NONE,
            SWEEP_DURATION,
            "load_test_eg2.jsonl",
        ),
        SweepPreset::HalfHeavy => (
            stepped(400, 1200),
            every_mode,
            HeavyMix::HALF,
            SWEEP_DURATION,
            "load_test_eg3.jsonl",
        ),
        SweepPreset::AllHeavy => (
            stepped(400, 1200),
            every_mode,
            HeavyMix::ALL,
            SWEEP_DURATION,
            "load_test_eg4.jsonl",
        ),
        SweepPreset::Trace => (
            vec![TRACE_RATE],
            vec![OperationMode::Mixed],
            HeavyMix::NONE,
            TRACE_DURATION,
            "load_test_eg5.jsonl",
        ),
    };
    SweepPlan {
        rates,
        modes,
        heavy_mix,
        duration,
        output: PathBuf::from(file),
    }
}

/// Expands a plan into run configurations, rate-major then mode.
///
/// # Errors
///
/// Returns a validation error for a zero rate or a non-`.jsonl` output override.
pub fn sweep_configs(
    plan: &SweepPlan,
    address: &str,
    output: Option<&Path>,
) -> AppResult<Vec<LoadConfig>> {
    let output = resolve_result_path(output.unwrap_or(plan.output.as_path()))?;
    let mut configs = Vec::with_capacity(plan.rates.len().saturating_mul(plan.modes.len()));
    for rate in &plan.rates {
        let rate = PositiveU64::try_from(*rate)?;
        for mode in &plan.modes {
            configs.push(LoadConfig {
                address: address.to_owned(),
                rate,
                duration: plan.duration,
                seed: SWEEP_SEED,
                mode: *mode,
                heavy_mix: plan.heavy_mix,
                output: output.clone(),
            });
        }
    }
    Ok(configs)
}

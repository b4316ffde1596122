use std::time::Duration;

use crate::config::LoadConfig;

use super::percentiles::{LatencyPercentiles, percentiles_ms};
use super::types::{Aggregate, Summary};

/// Reduces a finished run into its summary record.
///
/// Average and percentiles cover successful outcomes only and are NaN when
/// there are none. Throughput is successes per configured second.
#[must_use]
pub fn summarize(config: &LoadConfig, aggregate: &Aggregate) -> Summary {
    let mut micros = aggregate.success_latencies_micros();
    let avg_ms = mean_ms(&micros);
    let LatencyPercentiles {
        p50_ms,
        p95_ms,
        p99_ms,
    } = percentiles_ms(&mut micros);

    Summary {
        operation: config.operation_label().to_owned(),
        seed: config.seed,
        rate: config.rate.get(),
        avg_ms,
        p50_ms,
        p95_ms,
        p99_ms,
        throughput: throughput(aggregate.success_count(), config.duration),
        errors: aggregate.error_count(),
    }
}

#[expect(
    clippy::float_arithmetic,
    reason = "Mean latency is a fractional millisecond value"
)]
fn mean_ms(micros: &[u64]) -> f64 {
    if micros.is_empty() {
        return f64::NAN;
    }
    let total: f64 = micros.iter().map(|value| *value as f64 / 1000.0).sum();
    total / micros.len() as f64
}

#[expect(
    clippy::float_arithmetic,
    reason = "Throughput is successes per fractional second"
)]
fn throughput(successes: u64, duration: Duration) -> f64 {
    let secs = duration.as_secs_f64();
    if secs <= 0.0 {
        return 0.0;
    }
    successes as f64 / secs
}

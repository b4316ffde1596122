const PERCENT: u64 = 100;
const MICROS_PER_MILLI: f64 = 1000.0;

/// Sample at index `floor((n - 1) * percent / 100)` of an ascending slice.
///
/// No interpolation between neighbours; `None` for an empty slice.
#[must_use]
pub fn nearest_rank(sorted: &[u64], percent: u64) -> Option<u64> {
    let last = u64::try_from(sorted.len()).ok()?.checked_sub(1)?;
    let index = last
        .saturating_mul(percent.min(PERCENT))
        .checked_div(PERCENT)?;
    sorted.get(usize::try_from(index).ok()?).copied()
}

#[derive(Debug, Clone, Copy)]
pub struct LatencyPercentiles {
    pub p50_ms: f64,
    pub p95_ms: f64,
    pub p99_ms: f64,
}

impl LatencyPercentiles {
    pub const NAN: Self = Self {
        p50_ms: f64::NAN,
        p95_ms: f64::NAN,
        p99_ms: f64::NAN,
    };
}

/// Sorts microsecond samples in place and returns p50/p95/p99 in milliseconds.
#[must_use]
pub fn percentiles_ms(micros: &mut [u64]) -> LatencyPercentiles {
    micros.sort_unstable();
    let sorted: &[u64] = micros;
    let pick = |percent| nearest_rank(sorted, percent).map_or(f64::NAN, micros_to_ms);
    LatencyPercentiles {
        p50_ms: pick(50),
        p95_ms: pick(95),
        p99_ms: pick(99),
    }
}

#[expect(
    clippy::float_arithmetic,
    reason = "Millisecond latencies are reported as fractional values"
)]
fn micros_to_ms(micros: u64) -> f64 {
    micros as f64 / MICROS_PER_MILLI
}

use std::time::Duration;

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::RpcError;

/// Latency and result of one dispatched request.
#[derive(Debug)]
pub struct Outcome {
    pub latency: Duration,
    pub error: Option<RpcError>,
}

impl Outcome {
    #[must_use]
    pub const fn success(latency: Duration) -> Self {
        Self {
            latency,
            error: None,
        }
    }

    #[must_use]
    pub const fn failure(latency: Duration, error: RpcError) -> Self {
        Self {
            latency,
            error: Some(error),
        }
    }

    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.error.is_none()
    }
}

/// Every outcome of one run, in arrival order.
#[derive(Debug, Default)]
pub struct Aggregate {
    outcomes: Vec<Outcome>,
}

impl Aggregate {
    pub fn push(&mut self, outcome: Outcome) {
        self.outcomes.push(outcome);
    }

    #[must_use]
    pub fn outcomes(&self) -> &[Outcome] {
        &self.outcomes
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }

    #[must_use]
    pub fn success_count(&self) -> u64 {
        let count = self.outcomes.iter().filter(|outcome| outcome.is_success()).count();
        u64::try_from(count).unwrap_or(u64::MAX)
    }

    #[must_use]
    pub fn error_count(&self) -> u64 {
        let count = self.outcomes.iter().filter(|outcome| !outcome.is_success()).count();
        u64::try_from(count).unwrap_or(u64::MAX)
    }

    /// Latencies of successful outcomes in whole microseconds, unsorted.
    #[must_use]
    pub fn success_latencies_micros(&self) -> Vec<u64> {
        self.outcomes
            .iter()
            .filter(|outcome| outcome.is_success())
            .map(|outcome| u64::try_from(outcome.latency.as_micros()).unwrap_or(u64::MAX))
            .collect()
    }
}

impl FromIterator<Outcome> for Aggregate {
    fn from_iter<I: IntoIterator<Item = Outcome>>(iter: I) -> Self {
        Self {
            outcomes: iter.into_iter().collect(),
        }
    }
}

/// One line of the persisted record stream.
///
/// Latency fields are NaN when the run had no successful request. JSON has no
/// NaN, so they are written as `null` and read back as NaN.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Summary {
    pub operation: String,
    pub seed: i64,
    pub rate: u64,
    #[serde(deserialize_with = "nan_when_null")]
    pub avg_ms: f64,
    #[serde(deserialize_with = "nan_when_null")]
    pub p50_ms: f64,
    #[serde(deserialize_with = "nan_when_null")]
    pub p95_ms: f64,
    #[serde(deserialize_with = "nan_when_null")]
    pub p99_ms: f64,
    pub throughput: f64,
    pub errors: u64,
}

fn nan_when_null<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(f64::NAN))
}

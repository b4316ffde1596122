use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinSet;
use tokio::time::timeout;
use tracing::{info, warn};

use crate::args::{HeavyMix, PositiveUsize};
use crate::workload::{OperationMode, OperationSelector};

use super::dispatch::{Dispatch, dispatch};

const FALLBACK_SEED: i64 = 1;

#[derive(Debug, Clone)]
pub struct BatchConfig {
    pub address: String,
    pub seed: i64,
    pub calls: PositiveUsize,
    pub timeout: Duration,
}

impl BatchConfig {
    /// Seed used for selection; negative seeds fall back to 1.
    #[must_use]
    pub const fn effective_seed(&self) -> i64 {
        if self.seed < 0 { FALLBACK_SEED } else { self.seed }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallStatus {
    Completed,
    Failed,
    TimedOut,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchReport {
    pub completed: usize,
    pub failed: usize,
    pub timed_out: usize,
}

impl BatchReport {
    fn record(&mut self, status: CallStatus) {
        let slot = match status {
            CallStatus::Completed => &mut self.completed,
            CallStatus::Failed => &mut self.failed,
            CallStatus::TimedOut => &mut self.timed_out,
        };
        *slot = slot.saturating_add(1);
    }

    #[must_use]
    pub const fn total(&self) -> usize {
        self.completed
            .saturating_add(self.failed)
            .saturating_add(self.timed_out)
    }
}

/// Fires every call of the batch at once, each racing its own timeout.
///
/// Operation kinds are drawn uniformly with light payloads. A slow call only
/// loses its own race; the batch ends when each call has finished or timed out.
pub async fn run_batch(config: &BatchConfig, dispatcher: Arc<dyn Dispatch>) -> BatchReport {
    let mut selector =
        OperationSelector::new(OperationMode::Mixed, config.effective_seed(), HeavyMix::NONE);
    let policy = selector.policy();
    let limit = config.timeout;

    let mut calls = JoinSet::new();
    for _ in 0..config.calls.get() {
        let request = policy.resolve(selector.next_ticket());
        let dispatcher = Arc::clone(&dispatcher);
        calls.spawn(async move {
            let kind = request.kind().as_str();
            match timeout(limit, dispatch(dispatcher.as_ref(), &request)).await {
                Ok(outcome) => match outcome.error {
                    None => {
                        info!(
                            "Call {} ({}) returned in {}ms",
                            request.sequence,
                            kind,
                            outcome.latency.as_millis()
                        );
                        CallStatus::Completed
                    }
                    Some(err) => {
                        warn!("Call {} ({}) failed: {}", request.sequence, kind, err);
                        CallStatus::Failed
                    }
                },
                Err(_elapsed) => {
                    warn!(
                        "Call {} ({}) timed out after {}ms",
                        request.sequence,
                        kind,
                        limit.as_millis()
                    );
                    CallStatus::TimedOut
                }
            }
        });
    }

    let mut report = BatchReport::default();
    while let Some(joined) = calls.join_next().await {
        match joined {
            Ok(status) => report.record(status),
            Err(err) => {
                warn!("Batch call task failed: {}", err);
                report.record(CallStatus::Failed);
            }
        }
    }
    info!(
        "Batch finished: {} completed, {} failed, {} timed out",
        report.completed, report.failed, report.timed_out
    );
    report
}

use tokio::{sync::mpsc, task::JoinHandle};
use tracing::{debug, warn};

use super::types::{Aggregate, Outcome};

/// Producer handle held by every dispatch task of a run.
#[derive(Debug, Clone)]
pub struct OutcomeSender {
    tx: mpsc::UnboundedSender<Outcome>,
}

impl OutcomeSender {
    /// Hands one outcome to the collector task.
    pub fn record(&self, outcome: Outcome) {
        if self.tx.send(outcome).is_err() {
            warn!("Result aggregator stopped before an outcome arrived; outcome dropped");
        }
    }
}

/// Spawns the task that exclusively owns the run's [`Aggregate`].
///
/// The task appends outcomes in arrival order and resolves once every
/// [`OutcomeSender`] clone has been dropped, which hands the complete
/// aggregate to whoever awaits the handle.
#[must_use]
pub fn setup_result_aggregator() -> (OutcomeSender, JoinHandle<Aggregate>) {
    let (tx, mut rx) = mpsc::unbounded_channel::<Outcome>();
    let handle = tokio::spawn(async move {
        let mut aggregate = Aggregate::default();
        while let Some(outcome) = rx.recv().await {
            aggregate.push(outcome);
        }
        debug!("Result aggregator closed with {} outcomes", aggregate.len());
        aggregate
    });
    (OutcomeSender { tx }, handle)
}

use std::sync::Arc;

use tokio::task::JoinSet;
use tokio::time::{Instant, MissedTickBehavior, interval_at};
use tracing::{debug, info, warn};

use crate::config::LoadConfig;
use crate::error::{AppResult, ValidationError};
use crate::metrics::{Aggregate, setup_result_aggregator};
use crate::workload::OperationSelector;

use super::dispatch::{Dispatch, dispatch};

/// Runs one paced load test and returns every outcome.
///
/// A dispatch task is spawned on each tick of a `1/rate` period timer while
/// the wall clock is before `start + duration`. Ticks never wait for earlier
/// dispatches. Late ticks fire back to back rather than being skipped. The
/// aggregate is returned only after every spawned dispatch has finished.
///
/// # Errors
///
/// Returns an error when the run deadline overflows the clock or the result
/// aggregator task fails.
pub async fn run_load_test(
    config: &LoadConfig,
    dispatcher: Arc<dyn Dispatch>,
) -> AppResult<Aggregate> {
    info!(
        "Starting {} at {} req/s for {}ms (seed {}, heavy {}%) against {}",
        config.mode,
        config.rate.get(),
        config.duration.as_millis(),
        config.seed,
        config.heavy_mix.get(),
        config.address
    );

    let mut selector = OperationSelector::new(config.mode, config.seed, config.heavy_mix);
    let policy = selector.policy();
    let (outcome_tx, collector) = setup_result_aggregator();

    let period = config.tick_period();
    let start = Instant::now();
    let deadline = start
        .checked_add(config.duration)
        .ok_or(ValidationError::DurationOverflow)?;
    let first_tick = start
        .checked_add(period)
        .ok_or(ValidationError::DurationOverflow)?;
    let mut ticker = interval_at(first_tick, period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Burst);

    let mut tasks = JoinSet::new();
    let mut dispatched: u64 = 0;
    while Instant::now() < deadline {
        ticker.tick().await;
        let ticket = selector.next_ticket();
        let dispatcher = Arc::clone(&dispatcher);
        let outcome_tx = outcome_tx.clone();
        tasks.spawn(async move {
            let request = policy.resolve(ticket);
            let outcome = dispatch(dispatcher.as_ref(), &request).await;
            if let Some(err) = outcome.error.as_ref() {
                debug!(
                    "Request {} ({}) failed: {}",
                    request.sequence,
                    request.kind().as_str(),
                    err
                );
            }
            outcome_tx.record(outcome);
        });
        dispatched = dispatched.saturating_add(1);
    }

    debug!("Pacing finished; waiting for {} in-flight dispatches", tasks.len());
    while let Some(joined) = tasks.join_next().await {
        if let Err(err) = joined {
            warn!("Dispatch task failed: {}", err);
        }
    }
    drop(outcome_tx);
    let aggregate = collector.await?;

    info!(
        "Finished {}: {} dispatched, {} outcomes collected",
        config.mode,
        dispatched,
        aggregate.len()
    );
    Ok(aggregate)
}

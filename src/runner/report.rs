use std::sync::Arc;

use tracing::info;

use crate::config::LoadConfig;
use crate::error::AppResult;
use crate::metrics::{Summary, summarize};
use crate::sinks::{SummarySink, persist_summary};

use super::dispatch::Dispatch;
use super::scheduler::run_load_test;

/// Runs one load test, reduces it, and appends the summary to `sink`.
///
/// A summary that cannot be written is logged and dropped; it is still returned.
///
/// # Errors
///
/// Returns an error only when the run itself fails.
pub async fn run_and_record(
    config: &LoadConfig,
    dispatcher: Arc<dyn Dispatch>,
    sink: &mut SummarySink,
) -> AppResult<Summary> {
    let aggregate = run_load_test(config, dispatcher).await?;
    let summary = summarize(config, &aggregate);
    info!(
        "{} @ {} req/s: avg {:.2}ms p50 {:.2}ms p95 {:.2}ms p99 {:.2}ms, {:.1} req/s, {} errors",
        summary.operation,
        summary.rate,
        summary.avg_ms,
        summary.p50_ms,
        summary.p95_ms,
        summary.p99_ms,
        summary.throughput,
        summary.errors
    );
    persist_summary(sink, &summary).await;
    Ok(summary)
}

/// Runs every configuration in order through one open record writer.
///
/// # Errors
///
/// Returns the first run failure; summaries already appended stay in the file.
pub async fn run_sweep(
    configs: &[LoadConfig],
    dispatcher: &Arc<dyn Dispatch>,
    sink: &mut SummarySink,
) -> AppResult<Vec<Summary>> {
    let mut summaries = Vec::with_capacity(configs.len());
    for config in configs {
        summaries.push(run_and_record(config, Arc::clone(dispatcher), sink).await?);
    }
    info!(
        "Sweep finished: {} summaries appended to {}",
        summaries.len(),
        sink.path().display()
    );
    Ok(summaries)
}

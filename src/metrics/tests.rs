use super::*;
use crate::config::test_support::sample_load_config;
use crate::error::{AppError, AppResult, RpcError};
use crate::workload::OperationMode;
use std::future::Future;
use std::time::Duration;

fn run_async_test<F>(future: F) -> AppResult<()>
where
    F: Future<Output = AppResult<()>>,
{
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|err| AppError::validation(format!("Failed to build runtime: {}", err)))?;
    runtime.block_on(future)
}

#[expect(
    clippy::float_arithmetic,
    reason = "Approximate comparison of fractional milliseconds"
)]
fn approx(left: f64, right: f64) -> bool {
    (left - right).abs() < 1e-9
}

fn remote_error() -> RpcError {
    RpcError::Remote {
        method: "ArraySort.SortArray",
        message: "boom".to_owned(),
    }
}

#[test]
fn nearest_rank_uses_floor_of_scaled_last_index() -> AppResult<()> {
    let sorted: Vec<u64> = (1..=10).collect();
    // last index 9: 9*50/100 = 4, 9*95/100 = 8, 9*99/100 = 8
    let expected = [(50, 5), (95, 9), (99, 9), (0, 1), (100, 10)];
    for (percent, value) in expected {
        if nearest_rank(&sorted, percent) != Some(value) {
            return Err(AppError::validation(format!(
                "Unexpected p{} for 1..=10",
                percent
            )));
        }
    }
    if nearest_rank(&[], 50).is_some() {
        return Err(AppError::validation("Expected None for empty samples"));
    }
    Ok(())
}

#[test]
fn percentiles_are_monotonic() -> AppResult<()> {
    let mut samples: Vec<u64> = (0..257_u64)
        .map(|value| value.wrapping_mul(7919).wrapping_rem(10_007))
        .collect();
    let percentiles = percentiles_ms(&mut samples);
    if !(percentiles.p50_ms <= percentiles.p95_ms && percentiles.p95_ms <= percentiles.p99_ms) {
        return Err(AppError::validation("Expected p50 <= p95 <= p99"));
    }
    Ok(())
}

#[test]
fn single_sample_is_every_percentile() -> AppResult<()> {
    let mut samples = vec![2500];
    let percentiles = percentiles_ms(&mut samples);
    for value in [percentiles.p50_ms, percentiles.p95_ms, percentiles.p99_ms] {
        if !approx(value, 2.5) {
            return Err(AppError::validation("Expected 2.5ms for every percentile"));
        }
    }
    Ok(())
}

#[test]
fn summary_counts_successes_and_errors() -> AppResult<()> {
    let config = sample_load_config(4, Duration::from_secs(2), OperationMode::SortOnly)?;
    let aggregate: Aggregate = [
        Outcome::success(Duration::from_millis(2)),
        Outcome::success(Duration::from_millis(4)),
        Outcome::failure(Duration::from_millis(50), remote_error()),
        Outcome::success(Duration::from_millis(6)),
    ]
    .into_iter()
    .collect();

    let summary = summarize(&config, &aggregate);
    if summary.errors != 1 || aggregate.success_count() != 3 {
        return Err(AppError::validation("Unexpected success/error split"));
    }
    if summary
        .errors
        .checked_add(aggregate.success_count())
        .and_then(|total| usize::try_from(total).ok())
        != Some(aggregate.len())
    {
        return Err(AppError::validation("errors + successes != total"));
    }
    if !approx(summary.avg_ms, 4.0) || !approx(summary.p50_ms, 4.0) {
        return Err(AppError::validation(format!(
            "Unexpected avg/p50: {} / {}",
            summary.avg_ms, summary.p50_ms
        )));
    }
    if !approx(summary.throughput, 1.5) {
        return Err(AppError::validation("Expected 3 successes over 2s"));
    }
    if summary.operation != "Array Sort" || summary.rate != 4 || summary.seed != 1 {
        return Err(AppError::validation("Unexpected record identity"));
    }
    Ok(())
}

#[test]
fn zero_successes_yield_nan_latencies() -> AppResult<()> {
    let config = sample_load_config(1, Duration::from_secs(1), OperationMode::Mixed)?;
    let aggregate: Aggregate = [Outcome::failure(Duration::from_millis(1), remote_error())]
        .into_iter()
        .collect();
    let summary = summarize(&config, &aggregate);
    for value in [summary.avg_ms, summary.p50_ms, summary.p95_ms, summary.p99_ms] {
        if !value.is_nan() {
            return Err(AppError::validation("Expected NaN latency"));
        }
    }
    if !approx(summary.throughput, 0.0) || summary.errors != 1 {
        return Err(AppError::validation("Expected zero throughput and one error"));
    }
    Ok(())
}

#[test]
fn nan_summary_survives_json_round_trip() -> AppResult<()> {
    let config = sample_load_config(1, Duration::from_secs(1), OperationMode::HashOnly)?;
    let summary = summarize(&config, &Aggregate::default());
    let line = serde_json::to_string(&summary)?;
    if !line.contains("\"avg_ms\":null") {
        return Err(AppError::validation(format!("Expected null avg_ms: {}", line)));
    }
    let parsed: Summary = serde_json::from_str(&line)?;
    if !parsed.avg_ms.is_nan() || !parsed.p99_ms.is_nan() {
        return Err(AppError::validation("Expected NaN after re-parsing"));
    }
    Ok(())
}

#[test]
fn aggregator_collects_from_many_producers() -> AppResult<()> {
    run_async_test(async {
        let (sender, handle) = setup_result_aggregator();
        let mut tasks = tokio::task::JoinSet::new();
        for index in 0..32_u64 {
            let sender = sender.clone();
            tasks.spawn(async move {
                let latency = Duration::from_millis(index);
                if index % 4 == 0 {
                    sender.record(Outcome::failure(latency, remote_error()));
                } else {
                    sender.record(Outcome::success(latency));
                }
            });
        }
        drop(sender);
        while let Some(joined) = tasks.join_next().await {
            joined?;
        }
        let aggregate = handle.await?;
        if aggregate.len() != 32 || aggregate.error_count() != 8 {
            return Err(AppError::validation(format!(
                "Unexpected aggregate: {} outcomes, {} errors",
                aggregate.len(),
                aggregate.error_count()
            )));
        }
        Ok(())
    })
}

//! Outcome collection, nearest-rank percentiles, and run summaries.
mod collector;
mod percentiles;
mod summary;
mod types;

#[cfg(test)]
mod tests;

pub use collector::{OutcomeSender, setup_result_aggregator};
pub use percentiles::{LatencyPercentiles, nearest_rank, percentiles_ms};
pub use summary::summarize;
pub use types::{Aggregate, Outcome, Summary};

//! Paced load runs, unpaced batches, smoke checks, and preset sweeps.
mod batch;
mod dispatch;
mod presets;
mod report;
mod scheduler;
mod smoke;


pub use batch::{BatchConfig, BatchReport, CallStatus, run_batch};
pub use dispatch::{Dispatch, RpcDispatcher, dispatch};
pub use presets::{SweepPlan, sweep_configs, sweep_plan};
pub use report::{run_and_record, run_sweep};
pub use scheduler::run_load_test;
pub use smoke::run_smoke;

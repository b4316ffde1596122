use std::sync::Arc;

use tracing::info;

use crate::error::AppResult;
use crate::runner::{Dispatch, RpcDispatcher, run_and_record, run_batch, run_smoke, run_sweep};
use crate::service::{bind_listener, serve_connections};
use crate::shutdown_handlers::{setup_signal_shutdown_handler, shutdown_channel};
use crate::sinks::{SummarySink, read_summaries, render_summary_table};

use super::plan::RunPlan;

pub(super) async fn execute_plan(plan: RunPlan) -> AppResult<()> {
    match plan {
        RunPlan::Run(config) => {
            let mut sink = SummarySink::open(&config.output).await?;
            let dispatcher: Arc<dyn Dispatch> =
                Arc::new(RpcDispatcher::new(config.address.clone()));
            run_and_record(&config, dispatcher, &mut sink).await?;
            Ok(())
        }
        RunPlan::Sweep(configs) => {
            let Some(first) = configs.first() else {
                return Ok(());
            };
            let mut sink = SummarySink::open(&first.output).await?;
            let dispatcher: Arc<dyn Dispatch> =
                Arc::new(RpcDispatcher::new(first.address.clone()));
            run_sweep(&configs, &dispatcher, &mut sink).await?;
            Ok(())
        }
        RunPlan::Batch(config) => {
            let dispatcher: Arc<dyn Dispatch> =
                Arc::new(RpcDispatcher::new(config.address.clone()));
            let report = run_batch(&config, dispatcher).await;
            info!(
                "Batch of {} against {}: {:?}",
                report.total(),
                config.address,
                report
            );
            Ok(())
        }
        RunPlan::Smoke { address } => run_smoke(&address).await,
        RunPlan::Print { path } => {
            let records = read_summaries(&path).await?;
            println!("{}", render_summary_table(&records));
            Ok(())
        }
        RunPlan::Serve { listen } => {
            let listener = bind_listener(&listen).await?;
            let (shutdown_tx, shutdown_rx) = shutdown_channel();
            let signal_handle = setup_signal_shutdown_handler(&shutdown_tx);
            let served = serve_connections(listener, shutdown_rx).await;
            drop(shutdown_tx.send(()));
            signal_handle.await?;
            served
        }
    }
}

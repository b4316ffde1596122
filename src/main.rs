mod args;
mod config;
mod entry;
mod error;
mod logger;
mod metrics;
mod rpc;
mod runner;
mod service;
mod shutdown;
mod shutdown_handlers;
mod sinks;
mod workload;

use error::AppResult;

fn main() -> AppResult<()> {
    entry::run()
}

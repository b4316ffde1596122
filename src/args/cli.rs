use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use std::time::Duration;

use crate::workload::OperationMode;

use super::parsers::{
    parse_address, parse_duration_arg, parse_heavy_mix, parse_mode, parse_positive_u64,
    parse_positive_usize,
};
use super::types::{HeavyMix, PositiveU64, PositiveUsize, SweepPreset};

pub(crate) const DEFAULT_SERVE_ADDRESS: &str = "127.0.0.1:1234";

#[derive(Debug, Parser, Clone)]
#[clap(
    version,
    about = "Rate-paced RPC load generator with nearest-rank latency summaries and an append-only JSONL record stream."
)]
pub struct Cli {
    /// Enable debug logging (overridden by RPCLOAD_LOG / RUST_LOG)
    #[arg(long = "verbose", short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Run one paced load test and append its summary
    Run(RunArgs),
    /// Run a fixed rate sweep across every mode
    Sweep(SweepArgs),
    /// Fire a small unpaced batch with a per-call timeout
    Batch(BatchArgs),
    /// Call every remote operation once over a single connection
    Smoke(SmokeArgs),
    /// Print a summary record file as a table
    Print(PrintArgs),
    /// Serve the compute operations over TCP
    Serve(ServeArgs),
}

#[derive(Debug, Args, Clone, Default)]
pub struct RunArgs {
    /// Target address (host:port)
    #[arg(long = "address", short = 'a', value_parser = parse_address)]
    pub address: Option<String>,

    /// Requests per second
    #[arg(long = "rate", short = 'r', value_parser = parse_positive_u64)]
    pub rate: Option<PositiveU64>,

    /// Run duration (supports ms/s/m/h; bare numbers are seconds)
    #[arg(long = "duration", short = 't', value_parser = parse_duration_arg)]
    pub duration: Option<Duration>,

    /// Seed for operation and payload selection
    #[arg(long = "seed", short = 's', allow_negative_numbers = true)]
    pub seed: Option<i64>,

    /// Operation mode: 0-4 or mixed/hash/matmul/compress/sort
    #[arg(long = "mode", short = 'm', value_parser = parse_mode)]
    pub mode: Option<OperationMode>,

    /// Percentage of requests carrying the heavy payload (0-100)
    #[arg(long = "heavy-mix", short = 'H', value_parser = parse_heavy_mix)]
    pub heavy_mix: Option<HeavyMix>,

    /// Summary record file (.jsonl; a bare name gets the extension appended)
    #[arg(long = "output", short = 'o')]
    pub output: Option<PathBuf>,

    /// Config file (TOML or JSON); defaults to rpcload.toml/rpcload.json if present
    #[arg(long = "config", short = 'c')]
    pub config: Option<String>,
}

#[derive(Debug, Args, Clone)]
pub struct SweepArgs {
    /// Sweep preset
    #[arg(value_enum)]
    pub preset: SweepPreset,

    /// Target address (host:port)
    #[arg(long = "address", short = 'a', value_parser = parse_address)]
    pub address: String,

    /// Override the preset's record file
    #[arg(long = "output", short = 'o')]
    pub output: Option<PathBuf>,
}

#[derive(Debug, Args, Clone)]
pub struct BatchArgs {
    /// Target address (host:port)
    #[arg(long = "address", short = 'a', value_parser = parse_address)]
    pub address: String,

    /// Seed for operation selection; negative seeds are replaced by 1
    #[arg(long = "seed", short = 's', default_value_t = 1, allow_negative_numbers = true)]
    pub seed: i64,

    /// Number of concurrent calls
    #[arg(long = "calls", default_value = "5", value_parser = parse_positive_usize)]
    pub calls: PositiveUsize,

    /// Per-call timeout (supports ms/s/m/h)
    #[arg(long = "timeout", default_value = "3s", value_parser = parse_duration_arg)]
    pub timeout: Duration,
}

#[derive(Debug, Args, Clone)]
pub struct SmokeArgs {
    /// Target address (host:port)
    #[arg(long = "address", short = 'a', value_parser = parse_address)]
    pub address: String,
}

#[derive(Debug, Args, Clone)]
pub struct PrintArgs {
    /// Summary record file (.jsonl)
    pub file: PathBuf,
}

#[derive(Debug, Args, Clone)]
pub struct ServeArgs {
    /// Listen address (host:port)
    #[arg(long = "listen", short = 'l', default_value = DEFAULT_SERVE_ADDRESS, value_parser = parse_address)]
    pub listen: String,
}

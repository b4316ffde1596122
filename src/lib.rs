//! Core library for the `rpcload` CLI.
//!
//! Provides the building blocks used by the binary: the seeded operation
//! selector and payload fixtures, the paced scheduler and its result
//! aggregation, nearest-rank summaries with their append-only JSONL record
//! stream, the JSON-RPC client, and the reference compute service. The
//! command-line application is the primary interface; library APIs may
//! change as the CLI grows.
pub mod args;
pub mod config;
pub mod error;
pub mod logger;
pub mod metrics;
pub mod rpc;
pub mod runner;
pub mod service;
pub mod shutdown;
pub mod shutdown_handlers;
pub mod sinks;
pub mod workload;

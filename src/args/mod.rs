//! CLI argument types and parsing helpers.
mod cli;
pub(crate) mod parsers;
mod types;

#[cfg(test)]
mod tests;

pub use cli::{BatchArgs, Cli, Command, PrintArgs, RunArgs, ServeArgs, SmokeArgs, SweepArgs};
pub use types::{HeavyMix, PositiveU64, PositiveUsize, SweepPreset};

//! Run configuration: optional config files and resolution into a `LoadConfig`.
mod loader;
mod resolve;
pub mod types;

#[cfg(test)]
pub(crate) mod test_support;
#[cfg(test)]
mod tests;

pub use loader::load_config;
pub use resolve::{load_run_config, resolve_load_config};
pub use types::{ConfigFile, DurationValue, LoadConfig, ModeValue};

#[cfg(test)]
pub(crate) use loader::load_config_file;

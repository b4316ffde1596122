mod app;
mod config;
mod rpc;
mod service;
mod sink;
mod validation;

#[cfg(test)]
mod test_support;

pub use app::{AppError, AppResult};
pub use config::ConfigError;
pub use rpc::RpcError;
pub use service::ServiceError;
pub use sink::SinkError;
pub use validation::{RunParameter, ValidationError};

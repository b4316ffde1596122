use std::time::Duration;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RpcError {
    #[error("Failed to connect to {address}: {source}")]
    Connect {
        address: String,
        #[source]
        source: std::io::Error,
    },
    #[error("I/O error during {context}: {source}")]
    Io {
        context: &'static str,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to encode {method} request: {source}")]
    Encode {
        method: &'static str,
        #[source]
        source: serde_json::Error,
    },
    #[error("Failed to decode {method} response: {source}")]
    Decode {
        method: &'static str,
        #[source]
        source: serde_json::Error,
    },
    #[error("{method} failed: {message}")]
    Remote {
        method: &'static str,
        message: String,
    },
    #[error("Connection closed before {method} replied.")]
    ConnectionClosed { method: &'static str },
    #[error("{method} replied with id {received}, expected {expected}.")]
    MismatchedId {
        method: &'static str,
        expected: u64,
        received: u64,
    },
    #[error("Call timed out after {}ms.", .after.as_millis())]
    Timeout { after: Duration },
    #[cfg(test)]
    #[error("Test expectation failed: {message}")]
    TestExpectation { message: &'static str },
    #[cfg(test)]
    #[error("Test expectation failed: {message}: {value}")]
    TestExpectationValue {
        message: &'static str,
        value: String,
    },
}

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Matrix is not a square of size {size}x{size}.")]
    DimensionMismatch { size: usize },
    #[error("Compression failed: {source}")]
    Compress {
        #[source]
        source: std::io::Error,
    },
    #[error("Decompression failed: {source}")]
    Decompress {
        #[source]
        source: std::io::Error,
    },
    #[error("Unknown method '{method}'.")]
    UnknownMethod { method: String },
    #[error("Invalid params for {method}: {source}")]
    InvalidParams {
        method: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("Failed to encode {method} reply: {source}")]
    EncodeReply {
        method: &'static str,
        #[source]
        source: serde_json::Error,
    },
    #[error("Expected exactly one params entry for {method}, got {count}.")]
    ParamsArity { method: String, count: usize },
    #[error("Failed to bind {address}: {source}")]
    Bind {
        address: String,
        #[source]
        source: std::io::Error,
    },
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

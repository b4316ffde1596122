use serde::{Deserialize, Serialize};

use crate::workload::Payload;

use super::codec::{Method, base64_bytes};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HashArgs {
    #[serde(with = "base64_bytes")]
    pub data: Vec<u8>,
    pub size: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortArgs {
    pub data: Vec<i32>,
    pub size: usize,
}

/// Two row-major `size` x `size` matrices.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatrixArgs {
    pub arr1: Vec<f64>,
    pub arr2: Vec<f64>,
    pub size: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompressArgs {
    #[serde(with = "base64_bytes")]
    pub data: Vec<u8>,
    pub size: usize,
}

/// A byte-array result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ByteReply(#[serde(with = "base64_bytes")] pub Vec<u8>);

impl HashArgs {
    #[must_use]
    pub fn new(data: Vec<u8>) -> Self {
        let size = data.len();
        Self { data, size }
    }
}

impl SortArgs {
    #[must_use]
    pub fn new(data: Vec<i32>) -> Self {
        let size = data.len();
        Self { data, size }
    }
}

impl CompressArgs {
    #[must_use]
    pub fn new(data: Vec<u8>) -> Self {
        let size = data.len();
        Self { data, size }
    }
}

impl Payload {
    /// Remote procedure that consumes this payload.
    #[must_use]
    pub const fn method(&self) -> Method {
        match self {
            Payload::Hash { .. } => Method::HashCompute,
            Payload::MatrixMultiply { .. } => Method::MultiplyMatrix,
            Payload::Compress { .. } => Method::ZlibCompress,
            Payload::Sort { .. } => Method::SortArray,
        }
    }

    /// Encodes the payload as the single argument object of its call.
    ///
    /// # Errors
    ///
    /// Returns the encoder error when the arguments cannot be represented.
    pub fn to_params(&self) -> Result<serde_json::Value, serde_json::Error> {
        match self {
            Payload::Hash { data } => serde_json::to_value(HashArgs::new(data.clone())),
            Payload::MatrixMultiply { left, right, size } => serde_json::to_value(MatrixArgs {
                arr1: left.clone(),
                arr2: right.clone(),
                size: *size,
            }),
            Payload::Compress { data } => serde_json::to_value(CompressArgs::new(data.clone())),
            Payload::Sort { data } => serde_json::to_value(SortArgs::new(data.clone())),
        }
    }
}

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use sha2::{Digest, Sha256};

use crate::error::ServiceError;
use crate::rpc::{ByteReply, CompressArgs, HashArgs, MatrixArgs, Method, SortArgs};

/// Compression level handed to zstd; 0 selects the library default.
const ZSTD_LEVEL: i32 = 0;

/// Lowercase hex SHA-256 of `data`.
#[must_use]
pub fn hash_hex(data: &[u8]) -> String {
    Sha256::digest(data)
        .iter()
        .map(|byte| format!("{:02x}", byte))
        .collect()
}

#[must_use]
pub fn sort_values(mut data: Vec<i32>) -> Vec<i32> {
    data.sort_unstable();
    data
}

/// Row-major product of two `size` x `size` matrices.
///
/// # Errors
///
/// Returns `DimensionMismatch` when either operand does not hold `size * size`
/// cells; no partial product is produced.
pub fn multiply_matrix(left: &[f64], right: &[f64], size: usize) -> Result<Vec<f64>, ServiceError> {
    let cells = size
        .checked_mul(size)
        .ok_or(ServiceError::DimensionMismatch { size })?;
    if left.len() != cells || right.len() != cells {
        return Err(ServiceError::DimensionMismatch { size });
    }
    if size == 0 {
        return Ok(Vec::new());
    }

    let mut product = Vec::with_capacity(cells);
    for row in left.chunks(size) {
        for col in 0..size {
            let column = right.iter().skip(col).step_by(size);
            product.push(dot(row, column));
        }
    }
    Ok(product)
}

#[expect(clippy::float_arithmetic, reason = "Matrix product over f64 cells")]
fn dot<'cell>(row: &[f64], column: impl Iterator<Item = &'cell f64>) -> f64 {
    row.iter().zip(column).map(|(lhs, rhs)| lhs * rhs).sum()
}

/// # Errors
///
/// Returns `Compress` when the encoder fails.
pub fn compress(data: &[u8]) -> Result<Vec<u8>, ServiceError> {
    zstd::encode_all(data, ZSTD_LEVEL).map_err(|err| ServiceError::Compress { source: err })
}

/// # Errors
///
/// Returns `Decompress` when the input is not a valid zstd frame.
pub fn decompress(data: &[u8]) -> Result<Vec<u8>, ServiceError> {
    zstd::decode_all(data).map_err(|err| ServiceError::Decompress { source: err })
}

/// Runs one named procedure against its single JSON argument.
///
/// # Errors
///
/// Returns an error for unknown methods, malformed params, or a failing
/// operation.
pub fn handle_call(method: &str, params: Vec<Value>) -> Result<Value, ServiceError> {
    let resolved = Method::from_name(method).ok_or_else(|| ServiceError::UnknownMethod {
        method: method.to_owned(),
    })?;
    let [argument]: [Value; 1] = params.try_into().map_err(|rest: Vec<Value>| {
        ServiceError::ParamsArity {
            method: method.to_owned(),
            count: rest.len(),
        }
    })?;

    match resolved {
        Method::HashCompute => {
            let args: HashArgs = decode_args(method, argument)?;
            encode_reply(resolved, &hash_hex(&args.data))
        }
        Method::SortArray => {
            let args: SortArgs = decode_args(method, argument)?;
            encode_reply(resolved, &sort_values(args.data))
        }
        Method::MultiplyMatrix => {
            let args: MatrixArgs = decode_args(method, argument)?;
            encode_reply(resolved, &multiply_matrix(&args.arr1, &args.arr2, args.size)?)
        }
        Method::ZlibCompress => {
            let args: CompressArgs = decode_args(method, argument)?;
            encode_reply(resolved, &ByteReply(compress(&args.data)?))
        }
        Method::ZlibDecompress => {
            let args: CompressArgs = decode_args(method, argument)?;
            encode_reply(resolved, &ByteReply(decompress(&args.data)?))
        }
    }
}

fn decode_args<T: DeserializeOwned>(method: &str, argument: Value) -> Result<T, ServiceError> {
    serde_json::from_value(argument).map_err(|err| ServiceError::InvalidParams {
        method: method.to_owned(),
        source: err,
    })
}

fn encode_reply<T: Serialize + ?Sized>(method: Method, reply: &T) -> Result<Value, ServiceError> {
    serde_json::to_value(reply).map_err(|err| ServiceError::EncodeReply {
        method: method.name(),
        source: err,
    })
}

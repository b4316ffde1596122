use tracing::info;

use crate::error::{AppError, AppResult, ValidationError};
use crate::rpc::RpcClient;
use crate::workload::{OperationKind, Payload, PayloadWeight, payload_for};

/// Calls every operation once, in order, over a single connection and checks
/// that compressed data decompresses to the original bytes.
///
/// # Errors
///
/// Returns the first failing call, or `SmokeCheckFailed` when a reply is wrong.
pub async fn run_smoke(address: &str) -> AppResult<()> {
    let mut client = RpcClient::connect(address).await?;

    if let Payload::Hash { data } = payload_for(OperationKind::Hash, PayloadWeight::Light) {
        let digest = client.hash_compute(&data).await?;
        info!("HashCompute -> {}", digest);
    }

    if let Payload::Sort { data } = payload_for(OperationKind::Sort, PayloadWeight::Light) {
        let sorted = client.sort_array(&data).await?;
        if !sorted.is_sorted() || sorted.len() != data.len() {
            return Err(smoke_failure("SortArray returned an unsorted array"));
        }
        info!("SortArray -> {:?}", sorted);
    }

    if let Payload::MatrixMultiply { left, right, size } =
        payload_for(OperationKind::MatrixMultiply, PayloadWeight::Light)
    {
        let product = client.multiply_matrix(&left, &right, size).await?;
        info!("MultiplyMatrix -> {:?}", product);
    }

    if let Payload::Compress { data } = payload_for(OperationKind::Compress, PayloadWeight::Light) {
        let compressed = client.compress_data(&data).await?;
        info!("ZlibCompress -> {} bytes", compressed.len());
        let restored = client.decompress_data(&compressed).await?;
        if restored != data {
            return Err(smoke_failure("ZlibDecompress did not restore the original bytes"));
        }
        info!("ZlibDecompress -> {}", String::from_utf8_lossy(&restored));
    }

    info!("Smoke check passed against {}", address);
    Ok(())
}

fn smoke_failure(message: &str) -> AppError {
    AppError::validation(ValidationError::SmokeCheckFailed {
        message: message.to_owned(),
    })
}

use super::*;
use crate::error::{AppError, AppResult, RpcError, ServiceError};
use crate::rpc::RpcClient;
use crate::shutdown_handlers::shutdown_channel;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde_json::json;
use std::future::Future;

fn run_async_test<F>(future: F) -> AppResult<()>
where
    F: Future<Output = AppResult<()>>,
{
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|err| AppError::validation(format!("Failed to build runtime: {}", err)))?;
    runtime.block_on(future)
}

#[test]
fn hash_matches_known_digest() -> AppResult<()> {
    let digest = hash_hex(b"abc");
    if digest != "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad" {
        return Err(AppError::validation(format!("Unexpected digest {}", digest)));
    }
    Ok(())
}

#[test]
fn sort_orders_ascending() -> AppResult<()> {
    if sort_values(vec![9, -3, 5, 5, 0]) != vec![-3, 0, 5, 5, 9] {
        return Err(AppError::validation("Unexpected sort order"));
    }
    Ok(())
}

#[test]
fn matrix_product_is_row_major() -> AppResult<()> {
    let product = multiply_matrix(&[1.0, 2.0, 3.0, 4.0], &[5.0, 6.0, 7.0, 8.0], 2)?;
    let expected = [19.0, 22.0, 43.0, 50.0];
    let matches = product.len() == expected.len()
        && product
            .iter()
            .zip(expected)
            .all(|(value, want)| value.to_bits() == f64::to_bits(want));
    if !matches {
        return Err(AppError::validation(format!("Unexpected product {:?}", product)));
    }
    Ok(())
}

#[test]
fn matrix_dimension_mismatch_is_an_error() -> AppResult<()> {
    match multiply_matrix(&[1.0, 2.0, 3.0], &[1.0, 2.0, 3.0, 4.0], 2) {
        Err(ServiceError::DimensionMismatch { size: 2 }) => Ok(()),
        Err(err) => Err(AppError::validation(format!("Unexpected error: {}", err))),
        Ok(_) => Err(AppError::validation("Expected a dimension mismatch")),
    }
}

#[test]
fn compression_round_trips_exactly() -> AppResult<()> {
    let inputs: [&[u8]; 3] = [b"", b"I am crushed and reborn!", &[0_u8; 4096]];
    for input in inputs {
        let restored = decompress(&compress(input)?)?;
        if restored != input {
            return Err(AppError::validation(format!(
                "Round trip changed {} bytes",
                input.len()
            )));
        }
    }
    Ok(())
}

#[test]
fn random_buffers_round_trip_exactly() -> AppResult<()> {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    for len in [0_usize, 1, 2, 17, 255, 1024, 4097, 65_536] {
        let mut input = vec![0_u8; len];
        rng.fill(input.as_mut_slice());
        let restored = decompress(&compress(&input)?)?;
        if restored != input {
            return Err(AppError::validation(format!(
                "Round trip changed a random {} byte buffer",
                len
            )));
        }
    }
    Ok(())
}

#[test]
fn unknown_method_and_bad_params_are_errors() -> AppResult<()> {
    if !matches!(
        handle_call("GetHash.Nope", vec![json!({})]),
        Err(ServiceError::UnknownMethod { .. })
    ) {
        return Err(AppError::validation("Expected UnknownMethod"));
    }
    if !matches!(
        handle_call("ArraySort.SortArray", vec![json!({"data": "x", "size": 1})]),
        Err(ServiceError::InvalidParams { .. })
    ) {
        return Err(AppError::validation("Expected InvalidParams"));
    }
    if !matches!(
        handle_call("ArraySort.SortArray", vec![]),
        Err(ServiceError::ParamsArity { count: 0, .. })
    ) {
        return Err(AppError::validation("Expected ParamsArity"));
    }
    Ok(())
}

#[test]
fn client_and_server_round_trip() -> AppResult<()> {
    run_async_test(async {
        let listener = bind_listener("127.0.0.1:0").await?;
        let address = listener.local_addr()?.to_string();
        let (shutdown_tx, shutdown_rx) = shutdown_channel();
        let server = tokio::spawn(serve_connections(listener, shutdown_rx));

        let mut client = RpcClient::connect(&address).await?;
        let digest = client.hash_compute(b"abc").await?;
        if digest != hash_hex(b"abc") {
            return Err(AppError::validation("Unexpected remote digest"));
        }
        if client.sort_array(&[3, 1, 2]).await? != vec![1, 2, 3] {
            return Err(AppError::validation("Unexpected remote sort"));
        }
        let compressed = client.compress_data(b"").await?;
        if !client.decompress_data(&compressed).await?.is_empty() {
            return Err(AppError::validation("Expected empty round trip"));
        }
        match client.multiply_matrix(&[1.0], &[1.0, 2.0], 1).await {
            Err(RpcError::Remote { .. }) => {}
            Err(err) => return Err(AppError::validation(format!("Unexpected error: {}", err))),
            Ok(_) => return Err(AppError::validation("Expected remote dimension error")),
        }
        // the connection stays usable after a remote error
        if client.sort_array(&[2, 1]).await? != vec![1, 2] {
            return Err(AppError::validation("Connection unusable after error"));
        }

        drop(shutdown_tx.send(()));
        server.await??;
        Ok(())
    })
}

use serde_json::Value;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::net::{TcpListener, TcpStream};
use tokio::task::JoinSet;
use tracing::{debug, info, warn};

use crate::error::{AppError, AppResult, ServiceError};
use crate::rpc::{RpcRequest, RpcResponse};
use crate::shutdown::ShutdownReceiver;

use super::handlers::handle_call;

/// Binds the service listener.
///
/// # Errors
///
/// Returns `Bind` when the address is unavailable.
pub async fn bind_listener(address: &str) -> AppResult<TcpListener> {
    let listener = TcpListener::bind(address).await.map_err(|err| {
        AppError::service(ServiceError::Bind {
            address: address.to_owned(),
            source: err,
        })
    })?;
    match listener.local_addr() {
        Ok(local) => info!("Compute service listening on {}", local),
        Err(_) => info!("Compute service listening on {}", address),
    }
    Ok(listener)
}

/// Accepts connections until shutdown, serving each on its own task.
///
/// Open connections are aborted once shutdown is received.
///
/// # Errors
///
/// Returns an error when accepting a connection fails.
pub async fn serve_connections(
    listener: TcpListener,
    mut shutdown_rx: ShutdownReceiver,
) -> AppResult<()> {
    let mut connections = JoinSet::new();
    loop {
        tokio::select! {
            _ = shutdown_rx.recv() => {
                info!("Shutdown received; stopping compute service");
                break;
            }
            accepted = listener.accept() => {
                let (stream, peer) = accepted?;
                debug!("Accepted connection from {}", peer);
                connections.spawn(async move {
                    if let Err(err) = serve_connection(stream).await {
                        debug!("Connection from {} ended with error: {}", peer, err);
                    }
                });
            }
            Some(finished) = connections.join_next(), if !connections.is_empty() => {
                if let Err(err) = finished {
                    warn!("Connection task failed: {}", err);
                }
            }
        }
    }
    connections.shutdown().await;
    Ok(())
}

async fn serve_connection(stream: TcpStream) -> std::io::Result<()> {
    let (read_half, mut writer) = stream.into_split();
    let mut lines = BufReader::new(read_half).lines();
    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }
        let response = respond(&line);
        let mut encoded = serde_json::to_vec(&response)?;
        encoded.push(b'\n');
        writer.write_all(&encoded).await?;
    }
    Ok(())
}

fn respond(line: &str) -> RpcResponse {
    let envelope: Value = match serde_json::from_str(line) {
        Ok(value) => value,
        Err(err) => return RpcResponse::failure(0, format!("Malformed request: {}", err)),
    };
    let id = envelope.get("id").and_then(Value::as_u64).unwrap_or_default();
    let request: RpcRequest = match serde_json::from_value(envelope) {
        Ok(request) => request,
        Err(err) => return RpcResponse::failure(id, format!("Malformed request: {}", err)),
    };
    match handle_call(&request.method, request.params) {
        Ok(result) => RpcResponse::success(request.id, result),
        Err(err) => {
            debug!("{} failed: {}", request.method, err);
            RpcResponse::failure(request.id, err.to_string())
        }
    }
}

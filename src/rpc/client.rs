use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::net::TcpStream;
use tokio::net::tcp::{OwnedReadHalf, OwnedWriteHalf};

use crate::error::RpcError;
use crate::workload::Payload;

use super::codec::{Method, RpcRequest, RpcResponse};
use super::messages::{ByteReply, CompressArgs, HashArgs, MatrixArgs, SortArgs};

/// One TCP connection to the compute service. Calls on it are sequential.
#[derive(Debug)]
pub struct RpcClient {
    reader: BufReader<OwnedReadHalf>,
    writer: OwnedWriteHalf,
    next_id: u64,
    line: String,
}

impl RpcClient {
    /// Opens a new connection.
    ///
    /// # Errors
    ///
    /// Returns `Connect` when the address cannot be reached.
    pub async fn connect(address: &str) -> Result<Self, RpcError> {
        let stream = TcpStream::connect(address)
            .await
            .map_err(|err| RpcError::Connect {
                address: address.to_owned(),
                source: err,
            })?;
        if let Err(err) = stream.set_nodelay(true) {
            tracing::debug!("Failed to set TCP_NODELAY: {}", err);
        }
        let (read_half, writer) = stream.into_split();
        Ok(Self {
            reader: BufReader::new(read_half),
            writer,
            next_id: 0,
            line: String::new(),
        })
    }

    /// Sends one request line and waits for the matching response line.
    ///
    /// # Errors
    ///
    /// Returns an error on I/O failure, a closed connection, an undecodable or
    /// mismatched response, or a remote error string.
    pub async fn call<P, R>(&mut self, method: Method, params: &P) -> Result<R, RpcError>
    where
        P: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let name = method.name();
        let params = serde_json::to_value(params)
            .map_err(|err| RpcError::Encode { method: name, source: err })?;
        let result = self.call_value(method, params).await?;
        serde_json::from_value(result).map_err(|err| RpcError::Decode { method: name, source: err })
    }

    async fn call_value(&mut self, method: Method, params: Value) -> Result<Value, RpcError> {
        let name = method.name();
        let id = self.next_id;
        self.next_id = self.next_id.wrapping_add(1);

        let request = RpcRequest {
            method: name.to_owned(),
            params: vec![params],
            id,
        };
        let mut encoded = serde_json::to_vec(&request)
            .map_err(|err| RpcError::Encode { method: name, source: err })?;
        encoded.push(b'\n');
        self.writer
            .write_all(&encoded)
            .await
            .map_err(|err| RpcError::Io {
                context: "request write",
                source: err,
            })?;

        self.line.clear();
        let read = self
            .reader
            .read_line(&mut self.line)
            .await
            .map_err(|err| RpcError::Io {
                context: "response read",
                source: err,
            })?;
        if read == 0 {
            return Err(RpcError::ConnectionClosed { method: name });
        }

        let response: RpcResponse = serde_json::from_str(self.line.trim_end())
            .map_err(|err| RpcError::Decode { method: name, source: err })?;
        if response.id != id {
            return Err(RpcError::MismatchedId {
                method: name,
                expected: id,
                received: response.id,
            });
        }
        if let Some(message) = response.error {
            return Err(RpcError::Remote {
                method: name,
                message,
            });
        }
        Ok(response.result.unwrap_or(Value::Null))
    }

    /// Invokes the procedure matching `payload`, discarding the reply body.
    ///
    /// # Errors
    ///
    /// Returns the call's error.
    pub async fn invoke(&mut self, payload: &Payload) -> Result<(), RpcError> {
        let method = payload.method();
        let params = payload.to_params().map_err(|err| RpcError::Encode {
            method: method.name(),
            source: err,
        })?;
        self.call_value(method, params).await.map(drop)
    }

    /// # Errors
    ///
    /// Returns the call's error.
    pub async fn hash_compute(&mut self, data: &[u8]) -> Result<String, RpcError> {
        self.call(Method::HashCompute, &HashArgs::new(data.to_vec()))
            .await
    }

    /// # Errors
    ///
    /// Returns the call's error.
    pub async fn sort_array(&mut self, data: &[i32]) -> Result<Vec<i32>, RpcError> {
        self.call(Method::SortArray, &SortArgs::new(data.to_vec()))
            .await
    }

    /// # Errors
    ///
    /// Returns the call's error, including a remote dimension mismatch.
    pub async fn multiply_matrix(
        &mut self,
        left: &[f64],
        right: &[f64],
        size: usize,
    ) -> Result<Vec<f64>, RpcError> {
        let args = MatrixArgs {
            arr1: left.to_vec(),
            arr2: right.to_vec(),
            size,
        };
        self.call(Method::MultiplyMatrix, &args).await
    }

    /// # Errors
    ///
    /// Returns the call's error.
    pub async fn compress_data(&mut self, data: &[u8]) -> Result<Vec<u8>, RpcError> {
        let reply: ByteReply = self
            .call(Method::ZlibCompress, &CompressArgs::new(data.to_vec()))
            .await?;
        Ok(reply.0)
    }

    /// # Errors
    ///
    /// Returns the call's error.
    pub async fn decompress_data(&mut self, data: &[u8]) -> Result<Vec<u8>, RpcError> {
        let reply: ByteReply = self
            .call(Method::ZlibDecompress, &CompressArgs::new(data.to_vec()))
            .await?;
        Ok(reply.0)
    }
}

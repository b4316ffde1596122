use async_trait::async_trait;
use tokio::time::Instant;

use crate::error::RpcError;
use crate::metrics::Outcome;
use crate::rpc::RpcClient;
use crate::workload::OperationRequest;

/// Performs one remote operation.
#[async_trait]
pub trait Dispatch: Send + Sync {
    async fn invoke(&self, request: &OperationRequest) -> Result<(), RpcError>;
}

/// Opens a fresh connection for every request and closes it afterwards, so
/// each latency includes connection setup.
#[derive(Debug, Clone)]
pub struct RpcDispatcher {
    address: String,
}

impl RpcDispatcher {
    #[must_use]
    pub const fn new(address: String) -> Self {
        Self { address }
    }
}

#[async_trait]
impl Dispatch for RpcDispatcher {
    async fn invoke(&self, request: &OperationRequest) -> Result<(), RpcError> {
        let mut client = RpcClient::connect(&self.address).await?;
        client.invoke(&request.payload).await
    }
}

/// Invokes `request` and times it; failures keep the elapsed time too.
pub async fn dispatch(dispatcher: &dyn Dispatch, request: &OperationRequest) -> Outcome {
    let start = Instant::now();
    let result = dispatcher.invoke(request).await;
    let latency = start.elapsed();
    match result {
        Ok(()) => Outcome::success(latency),
        Err(err) => Outcome::failure(latency, err),
    }
}

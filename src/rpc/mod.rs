//! Newline-delimited JSON-RPC: wire envelopes, argument shapes, and a one-shot client.
mod client;
mod codec;
mod messages;


pub use client::RpcClient;
pub use codec::{Method, RpcRequest, RpcResponse, base64_bytes};
pub use messages::{ByteReply, CompressArgs, HashArgs, MatrixArgs, SortArgs};

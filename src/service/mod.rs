//! Reference compute service answering the load generator's calls.
mod handlers;
mod server;

#[cfg(test)]
mod tests;

pub use handlers::{compress, decompress, handle_call, hash_hex, multiply_matrix, sort_values};
pub use server::{bind_listener, serve_connections};

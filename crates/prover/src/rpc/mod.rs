//! JSON-RPC backed implementations of the pipeline collaborators.

use std::time::Duration;

use jsonrpsee::http_client::{HttpClient, HttpClientBuilder};

use crate::error::RpcError;

mod celestia;
mod evm;
mod wire;

pub use celestia::CelestiaRpcClient;
pub use evm::EvmRpcClient;

fn http_client(url: &str, timeout: Duration) -> Result<HttpClient, RpcError> {
    Ok(HttpClientBuilder::default()
        .request_timeout(timeout)
        .build(url)?)
}

use std::time::Duration;

use alloy_primitives::B256;
use blobproof_primitives::RawAuditPath;
use jsonrpsee::{
    core::{client::ClientT, params::ObjectParams},
    http_client::HttpClient,
};
use serde::de::DeserializeOwned;
use tracing::debug;

use super::{
    http_client,
    wire::{self, BlockResponse, DataRootInclusionProofResponse, ShareProofResponse, TxResponse},
};
use crate::client::{DataAvailabilityClient, RawShareProof, TxInfo};
use crate::error::RpcError;

/// A Celestia consensus node reached over Tendermint JSON-RPC.
#[derive(Debug, Clone)]
pub struct CelestiaRpcClient {
    client: HttpClient,
}

impl CelestiaRpcClient {
    /// Connects to the node at `url`.
    pub fn new(url: &str, timeout: Duration) -> Result<Self, RpcError> {
        Ok(Self {
            client: http_client(url, timeout)?,
        })
    }

    async fn call<T: DeserializeOwned>(
        &self,
        method: &'static str,
        params: ObjectParams,
    ) -> Result<T, RpcError> {
        debug!(%method, "DA request");
        Ok(self.client.request(method, params).await?)
    }
}

/// Builds named params. Tendermint takes 64 bit integers as decimal strings.
fn height_params(height: u64) -> Result<ObjectParams, RpcError> {
    let mut params = ObjectParams::new();
    params.insert("height", height.to_string())?;
    Ok(params)
}

impl DataAvailabilityClient for CelestiaRpcClient {
    async fn tx(&self, hash: B256) -> Result<TxInfo, RpcError> {
        let mut params = ObjectParams::new();
        params.insert("hash", wire::encode_base64(hash.as_slice()))?;
        params.insert("prove", false)?;

        let tx: TxResponse = self.call("tx", params).await?;
        Ok(tx.into())
    }

    async fn data_root(&self, height: u64) -> Result<B256, RpcError> {
        let block: BlockResponse = self.call("block", height_params(height)?).await?;
        Ok(block.data_root())
    }

    async fn data_root_inclusion_proof(
        &self,
        height: u64,
        start: u64,
        end: u64,
    ) -> Result<RawAuditPath, RpcError> {
        let mut params = height_params(height)?;
        params.insert("start", start.to_string())?;
        params.insert("end", end.to_string())?;

        let proof: DataRootInclusionProofResponse =
            self.call("data_root_inclusion_proof", params).await?;
        proof.try_into()
    }

    async fn prove_shares(
        &self,
        height: u64,
        start_share: u64,
        end_share: u64,
    ) -> Result<RawShareProof, RpcError> {
        let mut params = height_params(height)?;
        params.insert("startShare", start_share.to_string())?;
        params.insert("endShare", end_share.to_string())?;

        let proof: ShareProofResponse = self.call("prove_shares", params).await?;
        proof.try_into()
    }
}

use std::time::Duration;

use alloy_primitives::{Address, B256, Bytes, U64};
use alloy_sol_types::SolEvent;
use blobproof_contracts::IBlobstreamX::DataCommitmentStored;
use jsonrpsee::{
    core::{client::ClientT, params::ArrayParams},
    http_client::HttpClient,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::http_client;
use crate::client::CommitmentSource;
use crate::commitment::DataCommitment;
use crate::error::RpcError;

/// An `eth_getLogs` filter.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct LogFilter {
    address: Address,
    from_block: U64,
    to_block: U64,
    topics: Vec<B256>,
}

/// The parts of an EVM log needed to decode it.
#[derive(Debug, Deserialize)]
struct RpcLog {
    topics: Vec<B256>,
    data: Bytes,
}

impl RpcLog {
    fn decode(&self) -> Result<DataCommitment, RpcError> {
        let event = DataCommitmentStored::decode_raw_log(self.topics.iter().copied(), &self.data)?;
        Ok(event.into())
    }
}

/// An EVM node serving the bridge contract's logs.
#[derive(Debug, Clone)]
pub struct EvmRpcClient {
    client: HttpClient,
    bridge: Address,
}

impl EvmRpcClient {
    /// Connects to the node at `url`, reading events of the bridge at `bridge`.
    pub fn new(url: &str, bridge: Address, timeout: Duration) -> Result<Self, RpcError> {
        Ok(Self {
            client: http_client(url, timeout)?,
            bridge,
        })
    }

    /// Address of the bridge contract.
    #[inline]
    pub const fn bridge(&self) -> Address {
        self.bridge
    }
}

impl CommitmentSource for EvmRpcClient {
    async fn latest_block(&self) -> Result<u64, RpcError> {
        let number: U64 = self
            .client
            .request("eth_blockNumber", ArrayParams::new())
            .await?;
        Ok(number.to())
    }

    async fn commitments(
        &self,
        from_block: u64,
        to_block: u64,
    ) -> Result<Vec<DataCommitment>, RpcError> {
        let filter = LogFilter {
            address: self.bridge,
            from_block: U64::from(from_block),
            to_block: U64::from(to_block),
            topics: vec![DataCommitmentStored::SIGNATURE_HASH],
        };
        let mut params = ArrayParams::new();
        params.insert(filter)?;

        let logs: Vec<RpcLog> = self.client.request("eth_getLogs", params).await?;
        debug!(from_block, to_block, logs = logs.len(), "fetched bridge logs");

        logs.iter().map(RpcLog::decode).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::{U256, address};

    #[test]
    fn test_log_filter_json() {
        let filter = LogFilter {
            address: address!("F0c6429ebAB2e7DC6e05DaFB61128bE21f13cb1e"),
            from_block: U64::from(100),
            to_block: U64::from(5100),
            topics: vec![DataCommitmentStored::SIGNATURE_HASH],
        };
        let json = serde_json::to_value(&filter).unwrap();

        assert_eq!(json["fromBlock"], "0x64");
        assert_eq!(json["toBlock"], "0x13ec");
        assert!(
            json["address"]
                .as_str()
                .unwrap()
                .eq_ignore_ascii_case("0xf0c6429ebab2e7dc6e05dafb61128be21f13cb1e")
        );
        assert_eq!(
            json["topics"][0],
            DataCommitmentStored::SIGNATURE_HASH.to_string()
        );
    }

    #[test]
    fn test_decode_log() {
        let event = DataCommitmentStored {
            proofNonce: U256::from(42),
            startBlock: 1000,
            endBlock: 1400,
            dataCommitment: B256::repeat_byte(0x5a),
        };
        let log = RpcLog {
            topics: event.encode_topics().into_iter().map(|t| t.0).collect(),
            data: event.encode_data().into(),
        };

        assert_eq!(log.decode().unwrap(), DataCommitment {
            proof_nonce: U256::from(42),
            start_block: 1000,
            end_block: 1400,
            data_commitment: B256::repeat_byte(0x5a),
        });
    }

    #[test]
    fn test_decode_log_wrong_topic() {
        let log = RpcLog {
            topics: vec![B256::ZERO],
            data: Bytes::from(vec![0u8; 32]),
        };
        assert!(matches!(log.decode(), Err(RpcError::Event(_))));
    }

    #[test]
    fn test_rpc_log_ignores_extra_fields() {
        let json = format!(
            r#"{{"address":"0xf0c6429ebab2e7dc6e05dafb61128be21f13cb1e","topics":["{}"],"data":"0x","blockNumber":"0x1","removed":false}}"#,
            B256::ZERO
        );
        let log: RpcLog = serde_json::from_str(&json).unwrap();
        assert_eq!(log.topics, vec![B256::ZERO]);
        assert!(log.data.is_empty());
    }
}

//! Tendermint JSON-RPC response payloads.
//!
//! Tendermint's JSON encoding has a few quirks:
//! - 64 bit integers are encoded as decimal strings, 32 bit ones as numbers
//! - `[]byte` is base64, while `HexBytes` is uppercase hex without a prefix
//! - empty slices may be `null`, and zero proto fields may be omitted

use alloy_primitives::{B256, Bytes};
use base64::{Engine, engine::general_purpose::STANDARD};
use blobproof_primitives::{RawAuditPath, RawRangeProof};
use serde::{Deserialize, Deserializer, de};

use crate::client::{RawShareProof, TxInfo};
use crate::error::RpcError;

fn int<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u64, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum StrOrNum {
        Str(String),
        Num(u64),
    }

    match StrOrNum::deserialize(deserializer)? {
        StrOrNum::Str(s) => s.parse().map_err(de::Error::custom),
        StrOrNum::Num(n) => Ok(n),
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn base64_bytes<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Bytes, D::Error> {
    let encoded: String = null_as_default(deserializer)?;
    STANDARD
        .decode(encoded)
        .map(Bytes::from)
        .map_err(de::Error::custom)
}

fn base64_vec<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<Bytes>, D::Error> {
    let encoded: Vec<String> = null_as_default(deserializer)?;
    encoded
        .into_iter()
        .map(|e| STANDARD.decode(e).map(Bytes::from))
        .collect::<Result<_, _>>()
        .map_err(de::Error::custom)
}

/// Encodes bytes the way Tendermint expects `[]byte` params.
pub(crate) fn encode_base64(bytes: &[u8]) -> String {
    STANDARD.encode(bytes)
}

/// Result of `tx`.
#[derive(Debug, Deserialize)]
pub(crate) struct TxResponse {
    #[serde(deserialize_with = "int")]
    height: u64,
    #[serde(default, deserialize_with = "int")]
    index: u64,
}

impl From<TxResponse> for TxInfo {
    fn from(tx: TxResponse) -> Self {
        Self {
            height: tx.height,
            index: tx.index,
        }
    }
}

/// Result of `block`.
#[derive(Debug, Deserialize)]
pub(crate) struct BlockResponse {
    block: WireBlock,
}

#[derive(Debug, Deserialize)]
struct WireBlock {
    header: WireHeader,
}

#[derive(Debug, Deserialize)]
struct WireHeader {
    data_hash: B256,
}

impl BlockResponse {
    pub(crate) const fn data_root(&self) -> B256 {
        self.block.header.data_hash
    }
}

/// A `crypto/merkle.Proof`.
#[derive(Debug, Deserialize)]
pub(crate) struct WireMerkleProof {
    #[serde(deserialize_with = "int")]
    total: u64,
    #[serde(default, deserialize_with = "int")]
    index: u64,
    #[serde(default, deserialize_with = "base64_vec")]
    aunts: Vec<Bytes>,
}

impl TryFrom<WireMerkleProof> for RawAuditPath {
    type Error = RpcError;

    fn try_from(proof: WireMerkleProof) -> Result<Self, Self::Error> {
        let siblings = proof
            .aunts
            .iter()
            .map(|aunt| {
                B256::try_from(&aunt[..]).map_err(|_| {
                    RpcError::decode(format!("audit path sibling has {} bytes", aunt.len()))
                })
            })
            .collect::<Result<_, _>>()?;

        Ok(Self::new(siblings, proof.index, proof.total))
    }
}

/// Result of `data_root_inclusion_proof`.
#[derive(Debug, Deserialize)]
pub(crate) struct DataRootInclusionProofResponse {
    proof: WireMerkleProof,
}

impl TryFrom<DataRootInclusionProofResponse> for RawAuditPath {
    type Error = RpcError;

    fn try_from(response: DataRootInclusionProofResponse) -> Result<Self, Self::Error> {
        response.proof.try_into()
    }
}

/// An `NMTProof`.
#[derive(Debug, Deserialize)]
struct WireNmtProof {
    #[serde(default, deserialize_with = "int")]
    start: u64,
    #[serde(default, deserialize_with = "int")]
    end: u64,
    #[serde(default, deserialize_with = "base64_vec")]
    nodes: Vec<Bytes>,
}

#[derive(Debug, Deserialize)]
struct WireRowProof {
    #[serde(default, deserialize_with = "null_as_default")]
    row_roots: Vec<Bytes>,
    #[serde(default, deserialize_with = "null_as_default")]
    proofs: Vec<WireMerkleProof>,
}

/// Result of `prove_shares`.
#[derive(Debug, Deserialize)]
pub(crate) struct ShareProofResponse {
    #[serde(default, deserialize_with = "base64_vec")]
    data: Vec<Bytes>,
    #[serde(default, deserialize_with = "null_as_default")]
    share_proofs: Vec<WireNmtProof>,
    #[serde(default, deserialize_with = "base64_bytes")]
    namespace_id: Bytes,
    row_proof: WireRowProof,
    #[serde(default, deserialize_with = "int")]
    namespace_version: u64,
}

impl TryFrom<ShareProofResponse> for RawShareProof {
    type Error = RpcError;

    fn try_from(response: ShareProofResponse) -> Result<Self, Self::Error> {
        Ok(Self {
            data: response.data,
            share_proofs: response
                .share_proofs
                .into_iter()
                .map(|p| RawRangeProof::new(p.start, p.end, p.nodes))
                .collect(),
            namespace_id: response.namespace_id,
            namespace_version: response.namespace_version,
            row_roots: response.row_proof.row_roots,
            row_proofs: response
                .row_proof
                .proofs
                .into_iter()
                .map(RawAuditPath::try_from)
                .collect::<Result<_, _>>()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn b64(bytes: &[u8]) -> String {
        encode_base64(bytes)
    }

    #[test]
    fn test_tx_response() {
        let tx: TxResponse = serde_json::from_str(
            r#"{"hash":"5EC9E71F","height":"1234567","index":3,"tx_result":{},"tx":"AAAA"}"#,
        )
        .unwrap();
        assert_eq!(TxInfo::from(tx), TxInfo {
            height: 1_234_567,
            index: 3
        });
    }

    #[test]
    fn test_block_response_uppercase_hex() {
        let hash = "AB".repeat(32);
        let json = format!(
            r#"{{"block_id":{{}},"block":{{"header":{{"height":"10","data_hash":"{hash}"}},"data":{{"txs":[]}}}}}}"#
        );
        let block: BlockResponse = serde_json::from_str(&json).unwrap();
        assert_eq!(block.data_root(), B256::repeat_byte(0xab));
    }

    #[test]
    fn test_merkle_proof() {
        let json = format!(
            r#"{{"proof":{{"total":"4","index":"2","leaf_hash":"{}","aunts":["{}","{}"]}}}}"#,
            b64(&[0u8; 32]),
            b64(&[1u8; 32]),
            b64(&[2u8; 32]),
        );
        let response: DataRootInclusionProofResponse = serde_json::from_str(&json).unwrap();
        let path = RawAuditPath::try_from(response).unwrap();

        assert_eq!(path, RawAuditPath::new(
            vec![B256::repeat_byte(1), B256::repeat_byte(2)],
            2,
            4
        ));
    }

    #[test]
    fn test_merkle_proof_omitted_fields() {
        let response: DataRootInclusionProofResponse =
            serde_json::from_str(r#"{"proof":{"total":"1","aunts":null}}"#).unwrap();
        let path = RawAuditPath::try_from(response).unwrap();
        assert_eq!(path, RawAuditPath::new(vec![], 0, 1));
    }

    #[test]
    fn test_merkle_proof_short_sibling() {
        let json = format!(
            r#"{{"proof":{{"total":"2","index":"0","aunts":["{}"]}}}}"#,
            b64(&[1u8; 20])
        );
        let response: DataRootInclusionProofResponse = serde_json::from_str(&json).unwrap();
        assert!(matches!(
            RawAuditPath::try_from(response),
            Err(RpcError::Decode(_))
        ));
    }

    #[test]
    fn test_invalid_base64_rejected() {
        let result: Result<DataRootInclusionProofResponse, _> =
            serde_json::from_str(r#"{"proof":{"total":"1","aunts":["not base64!"]}}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_share_proof_response() {
        let share = vec![0x11u8; 512];
        let node = vec![0x22u8; 90];
        let json = format!(
            r#"{{
                "data": ["{share}"],
                "share_proofs": [{{"end": 1, "nodes": ["{node}"]}}, {{"start": 2, "end": 5}}],
                "namespace_id": "{ns}",
                "row_proof": {{
                    "row_roots": ["{root}", "{root}"],
                    "proofs": [
                        {{"total": "8", "index": "0", "aunts": ["{aunt}"]}},
                        {{"total": "8", "index": "1", "aunts": ["{aunt}"]}}
                    ],
                    "start_row": 0,
                    "end_row": 1
                }},
                "namespace_version": 0
            }}"#,
            share = b64(&share),
            node = b64(&node),
            ns = b64(&[0x33u8; 28]),
            root = "CD".repeat(90),
            aunt = b64(&[0x44u8; 32]),
        );

        let response: ShareProofResponse = serde_json::from_str(&json).unwrap();
        let proof = RawShareProof::try_from(response).unwrap();

        assert_eq!(proof.data, vec![Bytes::from(share)]);
        assert_eq!(proof.share_proofs, vec![
            RawRangeProof::new(0, 1, vec![Bytes::from(node)]),
            RawRangeProof::new(2, 5, vec![]),
        ]);
        assert_eq!(proof.namespace_id, Bytes::from(vec![0x33u8; 28]));
        assert_eq!(proof.namespace_version, 0);
        assert_eq!(proof.row_roots, vec![Bytes::from(vec![0xcdu8; 90]); 2]);
        assert_eq!(proof.row_proofs[1], RawAuditPath::new(
            vec![B256::repeat_byte(0x44)],
            1,
            8
        ));
    }
}

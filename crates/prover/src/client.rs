//! Collaborators the pipeline fetches proof material from.
//!
//! Both traits use native `async fn` and are consumed generically, so tests
//! can drive the pipeline with in-memory implementations.

use alloy_primitives::{B256, Bytes};
use blobproof_primitives::{RawAuditPath, RawRangeProof};

use crate::commitment::DataCommitment;
use crate::error::RpcError;

type RpcResult<T> = Result<T, RpcError>;

/// Location of a transaction in the DA chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TxInfo {
    /// Height of the block containing the transaction.
    pub height: u64,
    /// Position of the transaction within the block.
    pub index: u64,
}

/// Share inclusion proof material for a share range, as served by the DA node.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RawShareProof {
    /// The raw shares.
    pub data: Vec<Bytes>,
    /// One namespace range proof per spanned row.
    pub share_proofs: Vec<RawRangeProof>,
    /// Namespace id of the shares.
    pub namespace_id: Bytes,
    /// Namespace version of the shares.
    pub namespace_version: u64,
    /// Raw root of every spanned row.
    pub row_roots: Vec<Bytes>,
    /// Audit path of every row root under the data root.
    pub row_proofs: Vec<RawAuditPath>,
}

/// A data availability node.
#[allow(async_fn_in_trait)]
pub trait DataAvailabilityClient {
    /// Looks up a transaction by hash.
    async fn tx(&self, hash: B256) -> RpcResult<TxInfo>;

    /// Returns the data root of the block at `height`.
    async fn data_root(&self, height: u64) -> RpcResult<B256>;

    /// Proves the data root at `height` under the tuple root over `[start, end)`.
    async fn data_root_inclusion_proof(
        &self,
        height: u64,
        start: u64,
        end: u64,
    ) -> RpcResult<RawAuditPath>;

    /// Proves the shares `[start_share, end_share)` of the block at `height`.
    async fn prove_shares(
        &self,
        height: u64,
        start_share: u64,
        end_share: u64,
    ) -> RpcResult<RawShareProof>;
}

/// A chain hosting the bridge contract.
#[allow(async_fn_in_trait)]
pub trait CommitmentSource {
    /// Returns the latest block number.
    async fn latest_block(&self) -> RpcResult<u64>;

    /// Returns every data commitment emitted in `[from_block, to_block]`, in log order.
    async fn commitments(&self, from_block: u64, to_block: u64)
    -> RpcResult<Vec<DataCommitment>>;
}

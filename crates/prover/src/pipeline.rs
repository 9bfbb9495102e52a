//! End-to-end proof generation for a single blob transaction.

use alloy_primitives::B256;
use blobproof_primitives::{AttestationProof, NAMESPACE_VERSION_ZERO, SharesProof};
use tracing::{debug, info};

use crate::client::{CommitmentSource, DataAvailabilityClient};
use crate::commitment::{DataCommitment, select_commitment};
use crate::error::{ProverError, Result};

/// What to prove.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProofRequest {
    tx_hash: B256,
    share_start: u64,
    share_end: u64,
    search_range: u64,
}

impl ProofRequest {
    /// Creates a request for the shares `[share_start, share_end)` of the
    /// blob paid for by `tx_hash`, scanning `search_range` bridge blocks back.
    pub fn new(
        tx_hash: B256,
        share_start: u64,
        share_end: u64,
        search_range: u64,
    ) -> Result<Self> {
        if share_start >= share_end {
            return Err(ProverError::InvalidShareRange {
                start: share_start,
                end: share_end,
            });
        }

        Ok(Self {
            tx_hash,
            share_start,
            share_end,
            search_range,
        })
    }

    /// Hash of the blob transaction.
    #[inline]
    pub const fn tx_hash(&self) -> B256 {
        self.tx_hash
    }

    /// Share range as `(start, end)`, end exclusive.
    #[inline]
    pub const fn share_range(&self) -> (u64, u64) {
        (self.share_start, self.share_end)
    }

    /// Number of bridge blocks scanned back from the latest one.
    #[inline]
    pub const fn search_range(&self) -> u64 {
        self.search_range
    }
}

/// A generated proof with the context it was built from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProofOutput {
    /// DA height of the transaction.
    pub height: u64,
    /// Data root of the block at `height`.
    pub data_root: B256,
    /// The bridge commitment the proof attests against.
    pub commitment: DataCommitment,
    /// The assembled proof bundle.
    pub proof: SharesProof,
}

/// Fetches every piece of proof material for `request` and assembles it.
///
/// Requests are issued one after another and the first failure aborts the run.
pub async fn generate_proof<D, C>(
    da: &D,
    bridge: &C,
    request: &ProofRequest,
) -> Result<ProofOutput>
where
    D: DataAvailabilityClient,
    C: CommitmentSource,
{
    let tx = da.tx(request.tx_hash).await?;
    info!(tx_hash = %request.tx_hash, height = tx.height, index = tx.index, "found transaction");

    let to_block = bridge.latest_block().await?;
    let from_block = to_block.saturating_sub(request.search_range);
    let commitments = bridge.commitments(from_block, to_block).await?;
    debug!(from_block, to_block, count = commitments.len(), "scanned bridge commitments");

    let commitment = *select_commitment(&commitments, tx.height).ok_or(
        ProverError::CommitmentNotFound {
            height: tx.height,
            from_block,
            to_block,
        },
    )?;
    let nonce = u64::try_from(commitment.proof_nonce)
        .map_err(|_| ProverError::NonceOverflow(commitment.proof_nonce))?;
    info!(
        nonce,
        start_block = commitment.start_block,
        end_block = commitment.end_block,
        "selected data commitment"
    );

    let tuple_path = da
        .data_root_inclusion_proof(tx.height, commitment.start_block, commitment.end_block)
        .await?;
    let data_root = da.data_root(tx.height).await?;
    debug!(%data_root, "fetched data root");

    let (share_start, share_end) = request.share_range();
    let shares = da.prove_shares(tx.height, share_start, share_end).await?;
    if shares.namespace_version != u64::from(NAMESPACE_VERSION_ZERO) {
        return Err(ProverError::UnsupportedNamespaceVersion(
            shares.namespace_version,
        ));
    }
    debug!(
        shares = shares.data.len(),
        rows = shares.share_proofs.len(),
        "fetched share proof"
    );

    let attestation = AttestationProof::build(nonce, tx.height, data_root, &tuple_path)?;
    let proof = SharesProof::assemble(
        &shares.data,
        &shares.share_proofs,
        &shares.namespace_id,
        &shares.row_roots,
        &shares.row_proofs,
        attestation,
    )?;
    info!(height = tx.height, rows = proof.row_roots().len(), "assembled shares proof");

    Ok(ProofOutput {
        height: tx.height,
        data_root,
        commitment,
        proof,
    })
}

//! Shares proof assembly.
//!
//! A [`SharesProof`] is the complete bundle a Blobstream verifier needs to
//! check that a run of shares was published in a block whose data root was
//! attested by the bridge:
//!
//! 1. the shares themselves,
//! 2. one namespace multiproof per spanned row, proving the shares against that row's root,
//! 3. one binary proof per spanned row, proving the row root against the block data root,
//! 4. the attestation proof of the block's data root against the committed tuple root.
//!
//! [`SharesProof::assemble`] builds the bundle from the raw proof material
//! returned by the DA node. It does no I/O, so the whole conversion can be
//! tested without a live chain.

use alloy_primitives::FixedBytes;
use serde::{Deserialize, Serialize};

use crate::attestation::AttestationProof;
use crate::binary::{BinaryMerkleProof, RawAuditPath, convert_binary_proofs};
use crate::error::{ProofError, Result};
use crate::multiproof::{NamespaceMerkleMultiproof, RawRangeProof, convert_multiproofs};
use crate::namespace::Namespace;
use crate::node::NamespaceNode;

/// Fixed size of a share in bytes.
pub const SHARE_SIZE: usize = 512;

/// A single share of block data.
pub type Share = FixedBytes<SHARE_SIZE>;

/// A complete proof that a run of shares is committed by the bridge.
///
/// `share_proofs`, `row_roots` and `row_proofs` always have the same length,
/// with entry `i` of each describing the same row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SharesProof {
    data: Vec<Share>,
    share_proofs: Vec<NamespaceMerkleMultiproof>,
    namespace: Namespace,
    row_roots: Vec<NamespaceNode>,
    row_proofs: Vec<BinaryMerkleProof>,
    attestation_proof: AttestationProof,
}

impl SharesProof {
    /// Assembles a shares proof from raw DA node proof material.
    ///
    /// Each step fails fast and nothing is returned on error:
    /// share sizes, row multiproofs, the namespace id, row roots, and
    /// finally the per-row counts.
    pub fn assemble<S, R>(
        raw_shares: &[S],
        row_multiproofs: &[RawRangeProof],
        namespace_id: &[u8],
        row_roots: &[R],
        row_audit_paths: &[RawAuditPath],
        attestation_proof: AttestationProof,
    ) -> Result<Self>
    where
        S: AsRef<[u8]>,
        R: AsRef<[u8]>,
    {
        let data = raw_shares
            .iter()
            .enumerate()
            .map(|(index, share)| {
                let share = share.as_ref();
                Share::try_from(share)
                    .map_err(|_| ProofError::invalid_share_size(index, SHARE_SIZE, share.len()))
            })
            .collect::<Result<Vec<_>>>()?;

        let share_proofs = convert_multiproofs(row_multiproofs)?;
        let namespace = Namespace::decode_v0(namespace_id)?;
        let row_roots = row_roots
            .iter()
            .map(|root| NamespaceNode::parse(root.as_ref()))
            .collect::<Result<Vec<_>>>()?;
        let row_proofs = convert_binary_proofs(row_audit_paths);

        let proof = Self {
            data,
            share_proofs,
            namespace,
            row_roots,
            row_proofs,
            attestation_proof,
        };
        proof.check_row_counts()?;

        Ok(proof)
    }

    fn check_row_counts(&self) -> Result<()> {
        let (share_proofs, row_roots, row_proofs) = (
            self.share_proofs.len(),
            self.row_roots.len(),
            self.row_proofs.len(),
        );
        if share_proofs != row_roots || share_proofs != row_proofs {
            return Err(ProofError::row_count_mismatch(
                share_proofs,
                row_roots,
                row_proofs,
            ));
        }
        Ok(())
    }

    /// Returns the proven shares.
    #[inline]
    pub fn data(&self) -> &[Share] {
        &self.data
    }

    /// Returns the namespace multiproof of every spanned row.
    #[inline]
    pub fn share_proofs(&self) -> &[NamespaceMerkleMultiproof] {
        &self.share_proofs
    }

    /// Returns the blob namespace.
    #[inline]
    pub const fn namespace(&self) -> &Namespace {
        &self.namespace
    }

    /// Returns the root of every spanned row.
    #[inline]
    pub fn row_roots(&self) -> &[NamespaceNode] {
        &self.row_roots
    }

    /// Returns the inclusion proof of every row root under the data root.
    #[inline]
    pub fn row_proofs(&self) -> &[BinaryMerkleProof] {
        &self.row_proofs
    }

    /// Returns the attestation proof of the block's data root.
    #[inline]
    pub const fn attestation_proof(&self) -> &AttestationProof {
        &self.attestation_proof
    }

    /// Serializes the proof into the verifier tooling's JSON document.
    ///
    /// Output is pretty-printed with two-space indentation and is
    /// deterministic for a given value.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parses a proof document, re-checking the tuple height and the
    /// per-row counts.
    pub fn from_json(json: &str) -> Result<Self> {
        let proof: Self = serde_json::from_str(json)?;
        proof.check_row_counts()?;
        Ok(proof)
    }
}

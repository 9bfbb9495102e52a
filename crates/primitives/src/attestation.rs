//! Data root tuple attestation proofs.
//!
//! The bridge oracle periodically commits a merkle root over a range of
//! `(height, data_root)` tuples under a monotonically increasing nonce. An
//! [`AttestationProof`] proves that one tuple is a leaf of such a root.

use alloy_primitives::B256;
use serde::{Deserialize, Serialize};

use crate::binary::{BinaryMerkleProof, RawAuditPath};
use crate::error::{ProofError, Result};

/// A block height paired with that block's data root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "UncheckedTuple")]
pub struct DataRootTuple {
    height: u64,
    data_root: B256,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct UncheckedTuple {
    height: u64,
    data_root: B256,
}

impl TryFrom<UncheckedTuple> for DataRootTuple {
    type Error = ProofError;

    fn try_from(tuple: UncheckedTuple) -> Result<Self> {
        Self::new(tuple.height, tuple.data_root)
    }
}

impl DataRootTuple {
    /// Creates a data root tuple.
    ///
    /// Fails with [`ProofError::InvalidHeight`] for height 0, which no
    /// produced block can have.
    pub fn new(height: u64, data_root: B256) -> Result<Self> {
        if height == 0 {
            return Err(ProofError::InvalidHeight(height));
        }
        Ok(Self { height, data_root })
    }

    /// Returns the block height.
    #[inline]
    pub const fn height(&self) -> u64 {
        self.height
    }

    /// Returns the block data root.
    #[inline]
    pub const fn data_root(&self) -> B256 {
        self.data_root
    }
}

/// Proof that a [`DataRootTuple`] is committed under a tuple root nonce.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttestationProof {
    tuple_root_nonce: u64,
    tuple: DataRootTuple,
    proof: BinaryMerkleProof,
}

impl AttestationProof {
    /// Combines a commitment nonce, a tuple and the tuple's audit path.
    pub fn build(
        tuple_root_nonce: u64,
        height: u64,
        data_root: B256,
        audit_path: &RawAuditPath,
    ) -> Result<Self> {
        Ok(Self {
            tuple_root_nonce,
            tuple: DataRootTuple::new(height, data_root)?,
            proof: BinaryMerkleProof::from(audit_path),
        })
    }

    /// Returns the nonce of the tuple root commitment.
    #[inline]
    pub const fn tuple_root_nonce(&self) -> u64 {
        self.tuple_root_nonce
    }

    /// Returns the attested tuple.
    #[inline]
    pub const fn tuple(&self) -> &DataRootTuple {
        &self.tuple
    }

    /// Returns the tuple's inclusion proof under the tuple root.
    #[inline]
    pub const fn proof(&self) -> &BinaryMerkleProof {
        &self.proof
    }
}

//! Binary merkle audit paths.
//!
//! Used both for row roots against the block data root and for a data root
//! tuple against the attested tuple root.

use alloy_primitives::B256;
use serde::{Deserialize, Serialize};

/// A classic merkle audit path as produced by the DA node.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RawAuditPath {
    /// Sibling hashes from leaf to root.
    pub siblings: Vec<B256>,
    /// Zero-based leaf index.
    pub index: u64,
    /// Total number of leaves in the tree.
    pub total: u64,
}

impl RawAuditPath {
    /// Creates a raw audit path.
    pub const fn new(siblings: Vec<B256>, index: u64, total: u64) -> Self {
        Self {
            siblings,
            index,
            total,
        }
    }
}

/// A binary merkle inclusion proof in the verifier's layout.
///
/// `key < num_leaves` is expected but not checked.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BinaryMerkleProof {
    side_nodes: Vec<B256>,
    key: u64,
    num_leaves: u64,
}

impl BinaryMerkleProof {
    /// Creates a binary merkle proof.
    pub const fn new(side_nodes: Vec<B256>, key: u64, num_leaves: u64) -> Self {
        Self {
            side_nodes,
            key,
            num_leaves,
        }
    }

    /// Returns the sibling hashes.
    #[inline]
    pub fn side_nodes(&self) -> &[B256] {
        &self.side_nodes
    }

    /// Returns the leaf index.
    #[inline]
    pub const fn key(&self) -> u64 {
        self.key
    }

    /// Returns the number of leaves in the tree.
    #[inline]
    pub const fn num_leaves(&self) -> u64 {
        self.num_leaves
    }
}

impl From<&RawAuditPath> for BinaryMerkleProof {
    fn from(path: &RawAuditPath) -> Self {
        Self::new(path.siblings.clone(), path.index, path.total)
    }
}

impl From<RawAuditPath> for BinaryMerkleProof {
    fn from(path: RawAuditPath) -> Self {
        Self::new(path.siblings, path.index, path.total)
    }
}

/// Converts a sequence of audit paths, keeping their order.
pub fn convert_binary_proofs(paths: &[RawAuditPath]) -> Vec<BinaryMerkleProof> {
    paths.iter().map(BinaryMerkleProof::from).collect()
}

//! Namespaced merkle tree node codec.
//!
//! Every node of the tree variant targeted here is serialized as
//!
//! ```text
//! | min version | min id | max version | max id | digest    |
//! | 1 byte      | 28     | 1           | 28     | remaining |
//! ```
//!
//! The offsets below are all derived from the namespace field widths. If the
//! tree ever changes its namespace width, only [`NAMESPACE_VERSION_SIZE`] and
//! [`NAMESPACE_ID_SIZE`] need to change.

use alloy_primitives::Bytes;
use serde::{Deserialize, Serialize};

use crate::error::{ProofError, Result};
use crate::namespace::{
    NAMESPACE_ID_SIZE, NAMESPACE_SIZE, NAMESPACE_VERSION_SIZE, Namespace, NamespaceId,
    NamespaceVersion,
};

/// Offset of the minimum namespace version.
pub const MIN_VERSION_OFFSET: usize = 0;

/// Offset of the minimum namespace id.
pub const MIN_ID_OFFSET: usize = MIN_VERSION_OFFSET + NAMESPACE_VERSION_SIZE;

/// Offset of the maximum namespace version.
pub const MAX_VERSION_OFFSET: usize = MIN_ID_OFFSET + NAMESPACE_ID_SIZE;

/// Offset of the maximum namespace id.
pub const MAX_ID_OFFSET: usize = MAX_VERSION_OFFSET + NAMESPACE_VERSION_SIZE;

/// Offset of the node digest, and the minimum width of a node.
pub const DIGEST_OFFSET: usize = MAX_ID_OFFSET + NAMESPACE_ID_SIZE;

const _: () = assert!(DIGEST_OFFSET == 2 * NAMESPACE_SIZE);

/// A namespaced merkle tree node: the namespace range of its subtree and its digest.
///
/// `min <= max` holds for every node produced by a consistent tree. It is not
/// re-checked here.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NamespaceNode {
    min: Namespace,
    max: Namespace,
    digest: Bytes,
}

impl NamespaceNode {
    /// Creates a node from its parts.
    pub const fn new(min: Namespace, max: Namespace, digest: Bytes) -> Self {
        Self { min, max, digest }
    }

    /// Splits a raw node into its min namespace, max namespace and digest.
    ///
    /// Fails with [`ProofError::MalformedNode`] if `raw` is shorter than
    /// [`DIGEST_OFFSET`]. A buffer of exactly that width yields an empty digest.
    pub fn parse(raw: &[u8]) -> Result<Self> {
        if raw.len() < DIGEST_OFFSET {
            return Err(ProofError::malformed_node(DIGEST_OFFSET, raw.len()));
        }

        let min = Namespace::new(
            NamespaceVersion::from_slice(&raw[MIN_VERSION_OFFSET..MIN_ID_OFFSET]),
            NamespaceId::from_slice(&raw[MIN_ID_OFFSET..MAX_VERSION_OFFSET]),
        );
        let max = Namespace::new(
            NamespaceVersion::from_slice(&raw[MAX_VERSION_OFFSET..MAX_ID_OFFSET]),
            NamespaceId::from_slice(&raw[MAX_ID_OFFSET..DIGEST_OFFSET]),
        );

        Ok(Self::new(min, max, Bytes::copy_from_slice(&raw[DIGEST_OFFSET..])))
    }

    /// Returns the minimum namespace of the subtree.
    #[inline]
    pub const fn min(&self) -> &Namespace {
        &self.min
    }

    /// Returns the maximum namespace of the subtree.
    #[inline]
    pub const fn max(&self) -> &Namespace {
        &self.max
    }

    /// Returns the node digest.
    #[inline]
    pub const fn digest(&self) -> &Bytes {
        &self.digest
    }

    /// Re-serializes the node into its raw tree encoding.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(DIGEST_OFFSET + self.digest.len());
        out.extend_from_slice(&self.min.to_bytes());
        out.extend_from_slice(&self.max.to_bytes());
        out.extend_from_slice(&self.digest);
        out
    }
}

impl TryFrom<&[u8]> for NamespaceNode {
    type Error = ProofError;

    fn try_from(raw: &[u8]) -> Result<Self> {
        Self::parse(raw)
    }
}

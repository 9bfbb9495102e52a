//! Namespace identifiers for namespaced merkle trees.
//!
//! A namespace is encoded as a single version byte followed by a 28 byte id.
//! This 29 byte width is what the verifier contracts expect and what the
//! node layout in [`crate::node`] is derived from.

use alloy_primitives::FixedBytes;
use serde::{Deserialize, Serialize};

use crate::error::{ProofError, Result};

/// Width of the namespace version field in bytes.
pub const NAMESPACE_VERSION_SIZE: usize = 1;

/// Width of the namespace id field in bytes.
pub const NAMESPACE_ID_SIZE: usize = 28;

/// Width of an encoded namespace (version followed by id).
pub const NAMESPACE_SIZE: usize = NAMESPACE_VERSION_SIZE + NAMESPACE_ID_SIZE;

/// The reserved version used by every blob namespace handled here.
pub const NAMESPACE_VERSION_ZERO: u8 = 0;

/// A namespace version byte.
pub type NamespaceVersion = FixedBytes<NAMESPACE_VERSION_SIZE>;

/// A namespace id.
pub type NamespaceId = FixedBytes<NAMESPACE_ID_SIZE>;

/// A versioned namespace identifier.
///
/// Ordering compares the version first and then the id, both big-endian,
/// which matches how namespaced merkle trees order their leaves.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
pub struct Namespace {
    version: NamespaceVersion,
    id: NamespaceId,
}

impl Namespace {
    /// Creates a namespace from its already-sized parts.
    #[inline]
    pub const fn new(version: NamespaceVersion, id: NamespaceId) -> Self {
        Self { version, id }
    }

    /// Encodes a namespace from a version byte and an id.
    ///
    /// Fails with [`ProofError::InvalidLength`] unless `id` is exactly
    /// [`NAMESPACE_ID_SIZE`] bytes.
    pub fn encode(version: u8, id: &[u8]) -> Result<Self> {
        let id = NamespaceId::try_from(id)
            .map_err(|_| ProofError::invalid_length(NAMESPACE_ID_SIZE, id.len()))?;
        Ok(Self::new(FixedBytes([version]), id))
    }

    /// Decodes a version 0 namespace from its id.
    pub fn decode_v0(id: &[u8]) -> Result<Self> {
        Self::encode(NAMESPACE_VERSION_ZERO, id)
    }

    /// Returns the version byte.
    #[inline]
    pub const fn version(&self) -> NamespaceVersion {
        self.version
    }

    /// Returns the id.
    #[inline]
    pub const fn id(&self) -> NamespaceId {
        self.id
    }

    /// Returns the 29 byte encoding (`version || id`).
    pub fn to_bytes(&self) -> [u8; NAMESPACE_SIZE] {
        let mut out = [0u8; NAMESPACE_SIZE];
        out[..NAMESPACE_VERSION_SIZE].copy_from_slice(self.version.as_slice());
        out[NAMESPACE_VERSION_SIZE..].copy_from_slice(self.id.as_slice());
        out
    }
}

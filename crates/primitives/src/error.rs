//! Error types for the blobproof-primitives crate
//!
//! Every conversion in this crate is a pure function of already-fetched proof
//! material, so every error here means the upstream data is malformed. None
//! of them are transient and none should be retried.
//!
//! ## Example Usage
//!
//! ```
//! use blobproof_primitives::{Namespace, ProofError};
//!
//! match Namespace::decode_v0(&[0u8; 27]) {
//!     Err(ProofError::InvalidLength { expected, actual }) => {
//!         assert_eq!(expected, 28);
//!         assert_eq!(actual, 27);
//!     }
//!     other => panic!("unexpected result: {other:?}"),
//! }
//! ```

use thiserror::Error;

/// Result type for operations in the primitives crate
pub type Result<T> = std::result::Result<T, ProofError>;

/// Main error type for the primitives crate
#[derive(Error, Debug)]
pub enum ProofError {
    /// A namespace id does not have the fixed id width
    #[error("Invalid namespace id length: expected {expected}, got {actual}")]
    InvalidLength {
        /// Required id width.
        expected: usize,
        /// Width that was supplied.
        actual: usize,
    },

    /// A namespaced tree node is shorter than its min/max namespace header
    #[error("Malformed namespace node: expected at least {expected} bytes, got {actual}")]
    MalformedNode {
        /// Minimum node width (both namespaces, empty digest).
        expected: usize,
        /// Width that was supplied.
        actual: usize,
    },

    /// A data root tuple was built for a height no block can have
    #[error("Invalid data root tuple height: {0}")]
    InvalidHeight(u64),

    /// A share does not have the protocol's fixed share width
    #[error("Invalid share size at index {index}: expected {expected}, got {actual}")]
    InvalidShareSize {
        /// Position of the offending share.
        index: usize,
        /// Protocol share width.
        expected: usize,
        /// Width that was supplied.
        actual: usize,
    },

    /// Per-row proof material disagrees on the number of rows
    #[error(
        "Row count mismatch: {share_proofs} share proofs, {row_roots} row roots, {row_proofs} row proofs"
    )]
    RowCountMismatch {
        /// Number of namespace multiproofs.
        share_proofs: usize,
        /// Number of row roots.
        row_roots: usize,
        /// Number of row inclusion proofs.
        row_proofs: usize,
    },

    /// JSON encoding or decoding of a shares proof failed
    #[error("JSON codec error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ProofError {
    /// Creates a [`ProofError::InvalidLength`].
    pub const fn invalid_length(expected: usize, actual: usize) -> Self {
        Self::InvalidLength { expected, actual }
    }

    /// Creates a [`ProofError::MalformedNode`].
    pub const fn malformed_node(expected: usize, actual: usize) -> Self {
        Self::MalformedNode { expected, actual }
    }

    /// Creates a [`ProofError::InvalidShareSize`].
    pub const fn invalid_share_size(index: usize, expected: usize, actual: usize) -> Self {
        Self::InvalidShareSize {
            index,
            expected,
            actual,
        }
    }

    /// Creates a [`ProofError::RowCountMismatch`].
    pub const fn row_count_mismatch(
        share_proofs: usize,
        row_roots: usize,
        row_proofs: usize,
    ) -> Self {
        Self::RowCountMismatch {
            share_proofs,
            row_roots,
            row_proofs,
        }
    }
}

//! Proof conversion primitives for Blobstream share inclusion proofs
//!
//! This crate turns a data availability node's native merkle proof objects
//! into the single bundle that a Blobstream verifier contract checks.
//!
//! ## Key Components
//!
//! - **Namespaces**: versioned 29 byte identifiers ([`Namespace`])
//! - **Namespace nodes**: min/max namespace plus digest, sliced from raw tree nodes ([`NamespaceNode`])
//! - **Multiproofs**: per-row namespaced range proofs ([`NamespaceMerkleMultiproof`])
//! - **Binary proofs**: row root and tuple audit paths ([`BinaryMerkleProof`])
//! - **Attestations**: a data root tuple proven under a bridge commitment ([`AttestationProof`])
//! - **Shares proofs**: the complete bundle and its JSON encoding ([`SharesProof`])
//!
//! Every function here is a pure transformation of its inputs. Nothing
//! performs I/O and nothing holds shared state.
//!
//! ## Usage Examples
//!
//! ```
//! use alloy_primitives::B256;
//! use blobproof_primitives::{AttestationProof, RawAuditPath, RawRangeProof, SharesProof};
//!
//! let attestation =
//!     AttestationProof::build(7, 100, B256::ZERO, &RawAuditPath::new(vec![], 0, 1)).unwrap();
//!
//! let proof = SharesProof::assemble(
//!     &[vec![0u8; 512]],
//!     &[RawRangeProof::new(0, 1, vec![])],
//!     &[0u8; 28],
//!     &[vec![0u8; 90]],
//!     &[RawAuditPath::new(vec![B256::ZERO], 0, 2)],
//!     attestation,
//! )
//! .unwrap();
//!
//! let json = proof.to_json().unwrap();
//! assert!(json.contains("\"tupleRootNonce\": 7"));
//! ```

#![cfg_attr(not(test), warn(unused_crate_dependencies))]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]

pub mod attestation;
pub mod binary;
pub mod error;
pub mod multiproof;
pub mod namespace;
pub mod node;
pub mod shares;

// Re-export core constants
pub use namespace::{NAMESPACE_ID_SIZE, NAMESPACE_SIZE, NAMESPACE_VERSION_ZERO};
pub use node::DIGEST_OFFSET as NAMESPACE_NODE_MIN_SIZE;
pub use shares::SHARE_SIZE;

// Re-export core types
pub use attestation::{AttestationProof, DataRootTuple};
pub use binary::{BinaryMerkleProof, RawAuditPath, convert_binary_proofs};
pub use error::{ProofError, Result};
pub use multiproof::{NamespaceMerkleMultiproof, RawRangeProof, convert_multiproofs};
pub use namespace::{Namespace, NamespaceId, NamespaceVersion};
pub use node::NamespaceNode;
pub use shares::{Share, SharesProof};

//! Blobstream proof generation for Celestia blob transactions
//!
//! Given a PayForBlob transaction and the share range holding its blob, the
//! prover collects everything a Blobstream verifier needs:
//!
//! 1. the transaction's DA height, from the DA node
//! 2. the bridge commitment covering that height, from `DataCommitmentStored` logs
//! 3. the data root tuple's audit path under that commitment
//! 4. the share and row inclusion proofs
//!
//! and assembles them into a [`SharesProof`](blobproof_primitives::SharesProof).
//!
//! The pipeline in [`generate_proof`] is generic over its collaborators
//! ([`DataAvailabilityClient`], [`CommitmentSource`]). The [`rpc`] module
//! provides JSON-RPC implementations of both.

#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]

pub mod client;
pub mod commitment;
pub mod config;
pub mod error;
pub mod output;
pub mod pipeline;
pub mod rpc;

pub use client::{CommitmentSource, DataAvailabilityClient, RawShareProof, TxInfo};
pub use commitment::{DataCommitment, select_commitment};
pub use config::{ConfigOverrides, ProverConfig};
pub use error::{ConfigError, ProverError, Result, RpcError};
pub use output::{write_calldata, write_proof};
pub use pipeline::{ProofOutput, ProofRequest, generate_proof};
pub use rpc::{CelestiaRpcClient, EvmRpcClient};

//! Error types for the prover.
//!
//! Errors are layered the same way as the rest of the workspace:
//!
//! - [`RpcError`]: transport and response decoding failures from a node
//! - [`ConfigError`]: unusable configuration or command line input
//! - [`ProverError`]: the top-level error of the proof pipeline, wrapping the
//!   above together with the core [`ProofError`]
//!
//! Nothing is retried. A failed run is re-issued as a whole.

use std::path::PathBuf;

use alloy_primitives::U256;
use blobproof_contracts::AbiError;
use blobproof_primitives::ProofError;
use thiserror::Error;

/// Result type for prover operations
pub type Result<T> = std::result::Result<T, ProverError>;

/// Errors talking to a DA or EVM node
#[derive(Error, Debug)]
pub enum RpcError {
    /// The JSON-RPC client failed or the node returned an error
    #[error("RPC client error: {0}")]
    Client(#[from] jsonrpsee::core::ClientError),

    /// Request parameters could not be encoded
    #[error("failed to encode RPC params: {0}")]
    Params(#[from] serde_json::Error),

    /// The response was well-formed JSON but not a valid payload
    #[error("failed to decode RPC response: {0}")]
    Decode(String),

    /// A bridge log could not be decoded as a commitment event
    #[error("failed to decode bridge event: {0}")]
    Event(#[from] alloy_sol_types::Error),
}

impl RpcError {
    /// Creates a [`RpcError::Decode`].
    pub fn decode<S: Into<String>>(msg: S) -> Self {
        Self::Decode(msg.into())
    }
}

/// Errors loading the prover configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The config file could not be read
    #[error("failed to read config {path}: {source}")]
    Read {
        /// Path of the config file.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The config file is not valid TOML for [`crate::ProverConfig`]
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    /// A required setting was not provided
    #[error("missing required setting: {0}")]
    Missing(&'static str),

    /// The transaction hash is not 32 bytes of hex
    #[error("invalid transaction hash: {0}")]
    InvalidTxHash(String),
}

/// Errors from the proof pipeline
#[derive(Error, Debug)]
pub enum ProverError {
    /// Proof material could not be converted
    #[error(transparent)]
    Proof(#[from] ProofError),

    /// A node request failed
    #[error(transparent)]
    Rpc(#[from] RpcError),

    /// Configuration is unusable
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The proof could not be ABI encoded
    #[error(transparent)]
    Abi(#[from] AbiError),

    /// Writing the output failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// No bridge commitment in the scanned window covers the height
    #[error(
        "no data commitment covering height {height} in bridge blocks {from_block}..={to_block}"
    )]
    CommitmentNotFound {
        /// DA block height of the transaction.
        height: u64,
        /// First scanned EVM block.
        from_block: u64,
        /// Last scanned EVM block.
        to_block: u64,
    },

    /// A commitment nonce does not fit the proof's nonce field
    #[error("commitment nonce {0} does not fit in 64 bits")]
    NonceOverflow(U256),

    /// The requested share range is empty
    #[error("invalid share range: start {start} must be below end {end}")]
    InvalidShareRange {
        /// First share index.
        start: u64,
        /// One past the last share index.
        end: u64,
    },

    /// The blob does not use namespace version 0
    #[error("unsupported namespace version: {0}")]
    UnsupportedNamespaceVersion(u64),
}

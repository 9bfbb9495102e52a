//! Blobstream contract bindings and deployment information.
//!
//! This crate provides type-safe Solidity bindings using Alloy's `sol!` macro
//! for the structs a Blobstream `DAVerifier` consumes, the bridge oracle's
//! commitment event, and the observatory contract that accepts a proof.
//!
//! # Deployment Information
//!
//! ```
//! use blobproof_contracts::sepolia;
//!
//! let bridge = sepolia::BLOBSTREAM_X;
//! assert_ne!(bridge.address, alloy_primitives::Address::ZERO);
//! assert_eq!(bridge.chain_id, 11_155_111);
//! ```
//!
//! # Contract Bindings
//!
//! Proofs assembled by `blobproof-primitives` convert into their ABI
//! counterparts and can be encoded as calldata:
//!
//! ```ignore
//! use blobproof_contracts::prove_comet_calldata;
//!
//! let calldata = prove_comet_calldata(&shares_proof, Bytes::from_static(&[0]))?;
//! ```

#![cfg_attr(not(test), warn(unused_crate_dependencies))]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]

use alloy_primitives::{Address, address};
use alloy_sol_types::sol;

mod convert;

pub use convert::{AbiError, prove_comet_calldata, verify_attestation_call};

// Deployment Info Macro

/// Macro to define a contract deployment struct with address and chain.
macro_rules! define_deployment {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        pub struct $name {
            /// Contract address.
            pub address: Address,
            /// EVM chain id the contract is deployed on.
            pub chain_id: u64,
        }

        impl $name {
            /// Creates a new deployment.
            #[must_use]
            pub const fn new(address: Address, chain_id: u64) -> Self {
                Self { address, chain_id }
            }
        }
    };
}

define_deployment!(
    /// BlobstreamX bridge oracle deployment information.
    BlobstreamX
);

// Verifier Types

sol! {
    /// A versioned namespace.
    #[derive(Debug, PartialEq, Eq)]
    struct Namespace {
        bytes1 version;
        bytes28 id;
    }

    /// A namespaced merkle tree node.
    #[derive(Debug, PartialEq, Eq)]
    struct NamespaceNode {
        Namespace min;
        Namespace max;
        bytes32 digest;
    }

    /// A namespace merkle multiproof over `[beginKey, endKey)`.
    #[derive(Debug, PartialEq, Eq)]
    struct NamespaceMerkleMultiproof {
        uint256 beginKey;
        uint256 endKey;
        NamespaceNode[] sideNodes;
    }

    /// A binary merkle inclusion proof.
    #[derive(Debug, PartialEq, Eq)]
    struct BinaryMerkleProof {
        bytes32[] sideNodes;
        uint256 key;
        uint256 numLeaves;
    }

    /// A block height and its data root.
    #[derive(Debug, PartialEq, Eq)]
    struct DataRootTuple {
        uint256 height;
        bytes32 dataRoot;
    }

    /// A data root tuple proven under a committed tuple root.
    #[derive(Debug, PartialEq, Eq)]
    struct AttestationProof {
        uint256 tupleRootNonce;
        DataRootTuple tuple;
        BinaryMerkleProof proof;
    }

    /// The full shares to data root tuple root proof.
    #[derive(Debug, PartialEq, Eq)]
    struct SharesProof {
        bytes[] data;
        NamespaceMerkleMultiproof[] shareProofs;
        Namespace namespace;
        NamespaceNode[] rowRoots;
        BinaryMerkleProof[] rowProofs;
        AttestationProof attestationProof;
    }

    /// Data availability oracle interface that checks attestation proofs.
    #[derive(Debug, PartialEq, Eq)]
    interface IDAOracle {
        function verifyAttestation(
            uint256 _tupleRootNonce,
            DataRootTuple memory _tuple,
            BinaryMerkleProof memory _proof
        ) external view returns (bool);
    }

    /// BlobstreamX bridge oracle interface.
    ///
    /// Emits one event per data commitment covering blocks `[startBlock, endBlock)`.
    #[derive(Debug, PartialEq, Eq)]
    interface IBlobstreamX {
        event DataCommitmentStored(
            uint256 proofNonce,
            uint64 indexed startBlock,
            uint64 indexed endBlock,
            bytes32 indexed dataCommitment
        );
    }

    /// Observatory contract that accepts a blob inclusion proof.
    #[derive(Debug, PartialEq, Eq)]
    interface IObservatory {
        function proveComet(SharesProof memory proof, bytes memory data) external;
        function isProven() external view returns (bool);
    }
}

// Sepolia Testnet Deployments

/// Sepolia testnet contract deployments.
pub mod sepolia {
    use super::*;

    /// Sepolia chain id.
    pub const CHAIN_ID: u64 = 11_155_111;

    /// BlobstreamX bridge oracle, attesting the Celestia Mocha testnet.
    pub const BLOBSTREAM_X: BlobstreamX = BlobstreamX::new(
        address!("F0c6429ebAB2e7DC6e05DaFB61128bE21f13cb1e"),
        CHAIN_ID,
    );
}

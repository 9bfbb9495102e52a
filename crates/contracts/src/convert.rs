//! Conversions from assembled proofs into their ABI counterparts.

use alloy_primitives::{B256, Bytes, U256};
use alloy_sol_types::SolCall;
use blobproof_primitives as primitives;
use thiserror::Error;

use crate::{
    AttestationProof, BinaryMerkleProof, DataRootTuple, IDAOracle, IObservatory, Namespace,
    NamespaceMerkleMultiproof, NamespaceNode, SharesProof,
};

/// Errors converting a proof into its ABI form.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AbiError {
    /// The verifier stores node digests as `bytes32`.
    #[error("invalid node digest length: expected {expected}, got {actual}")]
    DigestLength {
        /// Digest width required by the verifier.
        expected: usize,
        /// Digest width of the node.
        actual: usize,
    },
}

impl From<&primitives::Namespace> for Namespace {
    fn from(ns: &primitives::Namespace) -> Self {
        Self {
            version: ns.version(),
            id: ns.id(),
        }
    }
}

impl TryFrom<&primitives::NamespaceNode> for NamespaceNode {
    type Error = AbiError;

    fn try_from(node: &primitives::NamespaceNode) -> Result<Self, Self::Error> {
        let digest = B256::try_from(&node.digest()[..]).map_err(|_| AbiError::DigestLength {
            expected: B256::len_bytes(),
            actual: node.digest().len(),
        })?;

        Ok(Self {
            min: node.min().into(),
            max: node.max().into(),
            digest,
        })
    }
}

impl TryFrom<&primitives::NamespaceMerkleMultiproof> for NamespaceMerkleMultiproof {
    type Error = AbiError;

    fn try_from(proof: &primitives::NamespaceMerkleMultiproof) -> Result<Self, Self::Error> {
        Ok(Self {
            beginKey: U256::from(proof.begin_key()),
            endKey: U256::from(proof.end_key()),
            sideNodes: proof
                .side_nodes()
                .iter()
                .map(NamespaceNode::try_from)
                .collect::<Result<_, _>>()?,
        })
    }
}

impl From<&primitives::BinaryMerkleProof> for BinaryMerkleProof {
    fn from(proof: &primitives::BinaryMerkleProof) -> Self {
        Self {
            sideNodes: proof.side_nodes().to_vec(),
            key: U256::from(proof.key()),
            numLeaves: U256::from(proof.num_leaves()),
        }
    }
}

impl From<&primitives::DataRootTuple> for DataRootTuple {
    fn from(tuple: &primitives::DataRootTuple) -> Self {
        Self {
            height: U256::from(tuple.height()),
            dataRoot: tuple.data_root(),
        }
    }
}

impl From<&primitives::AttestationProof> for AttestationProof {
    fn from(proof: &primitives::AttestationProof) -> Self {
        Self {
            tupleRootNonce: U256::from(proof.tuple_root_nonce()),
            tuple: proof.tuple().into(),
            proof: proof.proof().into(),
        }
    }
}

impl TryFrom<&primitives::SharesProof> for SharesProof {
    type Error = AbiError;

    fn try_from(proof: &primitives::SharesProof) -> Result<Self, Self::Error> {
        Ok(Self {
            data: proof
                .data()
                .iter()
                .map(|share| Bytes::copy_from_slice(share.as_slice()))
                .collect(),
            shareProofs: proof
                .share_proofs()
                .iter()
                .map(NamespaceMerkleMultiproof::try_from)
                .collect::<Result<_, _>>()?,
            namespace: proof.namespace().into(),
            rowRoots: proof
                .row_roots()
                .iter()
                .map(NamespaceNode::try_from)
                .collect::<Result<_, _>>()?,
            rowProofs: proof
                .row_proofs()
                .iter()
                .map(BinaryMerkleProof::from)
                .collect(),
            attestationProof: proof.attestation_proof().into(),
        })
    }
}

/// Encodes an `IObservatory.proveComet` call carrying `proof`.
pub fn prove_comet_calldata(
    proof: &primitives::SharesProof,
    data: Bytes,
) -> Result<Bytes, AbiError> {
    let call = IObservatory::proveCometCall {
        proof: proof.try_into()?,
        data,
    };
    Ok(call.abi_encode().into())
}

/// Builds the bridge call that checks an attestation proof on its own.
pub fn verify_attestation_call(
    proof: &primitives::AttestationProof,
) -> IDAOracle::verifyAttestationCall {
    IDAOracle::verifyAttestationCall {
        _tupleRootNonce: U256::from(proof.tuple_root_nonce()),
        _tuple: proof.tuple().into(),
        _proof: proof.proof().into(),
    }
}

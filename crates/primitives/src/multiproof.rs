//! Namespace merkle multiproofs.
//!
//! A multiproof proves a contiguous leaf range `[begin_key, end_key)` of one
//! row of the extended data square. The DA node returns these as raw range
//! proofs whose side nodes are still in the tree's byte encoding. This module
//! splits every side node into its namespace range and digest.

use alloy_primitives::Bytes;
use serde::{Deserialize, Serialize};

use crate::error::{ProofError, Result};
use crate::node::NamespaceNode;

/// A range proof for one row, as produced by the DA node.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RawRangeProof {
    /// First leaf index covered by the proof.
    pub start: u64,
    /// One past the last leaf index covered by the proof.
    pub end: u64,
    /// Raw side nodes, bottom-up.
    pub nodes: Vec<Bytes>,
}

impl RawRangeProof {
    /// Creates a raw range proof.
    pub const fn new(start: u64, end: u64, nodes: Vec<Bytes>) -> Self {
        Self { start, end, nodes }
    }
}

/// An inclusion proof for the leaf range `[begin_key, end_key)` of a namespaced tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NamespaceMerkleMultiproof {
    begin_key: u64,
    end_key: u64,
    side_nodes: Vec<NamespaceNode>,
}

impl NamespaceMerkleMultiproof {
    /// Creates a multiproof from already-parsed side nodes.
    pub const fn new(begin_key: u64, end_key: u64, side_nodes: Vec<NamespaceNode>) -> Self {
        Self {
            begin_key,
            end_key,
            side_nodes,
        }
    }

    /// Returns the first leaf index covered by the proof.
    #[inline]
    pub const fn begin_key(&self) -> u64 {
        self.begin_key
    }

    /// Returns one past the last leaf index covered by the proof.
    #[inline]
    pub const fn end_key(&self) -> u64 {
        self.end_key
    }

    /// Returns the side nodes in verification order.
    #[inline]
    pub fn side_nodes(&self) -> &[NamespaceNode] {
        &self.side_nodes
    }
}

impl TryFrom<&RawRangeProof> for NamespaceMerkleMultiproof {
    type Error = ProofError;

    fn try_from(raw: &RawRangeProof) -> Result<Self> {
        let side_nodes = raw
            .nodes
            .iter()
            .map(|node| NamespaceNode::parse(node))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self::new(raw.start, raw.end, side_nodes))
    }
}

/// Converts the raw range proofs of every spanned row, keeping their order.
///
/// The first malformed side node aborts the whole conversion.
pub fn convert_multiproofs(rows: &[RawRangeProof]) -> Result<Vec<NamespaceMerkleMultiproof>> {
    rows.iter().map(NamespaceMerkleMultiproof::try_from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::DIGEST_OFFSET;
    use proptest::prelude::*;

    fn node_with_digest(marker: u8) -> Bytes {
        let mut raw = vec![0u8; DIGEST_OFFSET];
        raw.extend_from_slice(&[marker; 32]);
        raw.into()
    }

    #[test]
    fn test_keys_and_side_node_order() {
        let raw = RawRangeProof::new(
            3,
            9,
            vec![node_with_digest(1), node_with_digest(2), node_with_digest(3)],
        );

        let proof = NamespaceMerkleMultiproof::try_from(&raw).unwrap();

        assert_eq!(proof.begin_key(), 3);
        assert_eq!(proof.end_key(), 9);
        let markers: Vec<u8> = proof.side_nodes().iter().map(|n| n.digest()[0]).collect();
        assert_eq!(markers, vec![1, 2, 3]);
    }

    #[test]
    fn test_empty_side_nodes() {
        let proofs = convert_multiproofs(&[RawRangeProof::new(0, 1, vec![])]).unwrap();
        assert_eq!(proofs.len(), 1);
        assert!(proofs[0].side_nodes().is_empty());
    }

    #[test]
    fn test_malformed_node_fails_whole_conversion() {
        let rows = vec![
            RawRangeProof::new(0, 4, vec![node_with_digest(1)]),
            RawRangeProof::new(0, 2, vec![node_with_digest(2), Bytes::from(vec![0u8; 10])]),
        ];

        let result = convert_multiproofs(&rows);
        assert!(matches!(
            result,
            Err(ProofError::MalformedNode { actual: 10, .. })
        ));
    }

    #[test]
    fn test_json_field_names() {
        let proof = NamespaceMerkleMultiproof::try_from(&RawRangeProof::new(
            1,
            2,
            vec![node_with_digest(0xaa)],
        ))
        .unwrap();

        let json = serde_json::to_value(&proof).unwrap();
        assert_eq!(json["beginKey"], 1);
        assert_eq!(json["endKey"], 2);
        assert_eq!(json["sideNodes"].as_array().unwrap().len(), 1);
        assert_eq!(
            json["sideNodes"][0]["digest"],
            format!("0x{}", "aa".repeat(32))
        );
    }

    proptest! {
        #[test]
        fn test_row_order_preserved(markers in proptest::collection::hash_set(any::<u64>(), 0..32)) {
            let markers: Vec<u64> = markers.into_iter().collect();
            let rows: Vec<RawRangeProof> = markers
                .iter()
                .map(|&m| RawRangeProof::new(m, m.saturating_add(1), vec![node_with_digest(m as u8)]))
                .collect();

            let proofs = convert_multiproofs(&rows).unwrap();

            prop_assert_eq!(proofs.len(), markers.len());
            for (proof, marker) in proofs.iter().zip(&markers) {
                prop_assert_eq!(proof.begin_key(), *marker);
                prop_assert_eq!(proof.side_nodes()[0].digest()[0], *marker as u8);
            }
        }
    }
}

//! Bridge data commitments.
//!
//! The bridge emits a `DataCommitmentStored` event every time it commits a
//! tuple root over the DA blocks `[start_block, end_block)`. The proof for a
//! transaction must reference the commitment whose range covers its block.

use alloy_primitives::{B256, U256};
use blobproof_contracts::IBlobstreamX::DataCommitmentStored;
use tracing::warn;

/// A tuple root committed by the bridge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DataCommitment {
    /// Commitment nonce.
    pub proof_nonce: U256,
    /// First DA height covered.
    pub start_block: u64,
    /// One past the last DA height covered.
    pub end_block: u64,
    /// The committed tuple root.
    pub data_commitment: B256,
}

impl DataCommitment {
    /// Returns whether `height` falls inside `[start_block, end_block)`.
    #[inline]
    pub const fn covers(&self, height: u64) -> bool {
        self.start_block <= height && height < self.end_block
    }
}

impl From<DataCommitmentStored> for DataCommitment {
    fn from(event: DataCommitmentStored) -> Self {
        Self {
            proof_nonce: event.proofNonce,
            start_block: event.startBlock,
            end_block: event.endBlock,
            data_commitment: event.dataCommitment,
        }
    }
}

/// Picks the commitment covering `height`, in log order.
///
/// The first covering commitment wins. Overlapping commitments are not
/// expected from the bridge, so a second match is only reported.
pub fn select_commitment(commitments: &[DataCommitment], height: u64) -> Option<&DataCommitment> {
    let mut covering = commitments.iter().filter(|c| c.covers(height));
    let selected = covering.next()?;

    let overlapping = covering.count();
    if overlapping > 0 {
        warn!(
            %height,
            nonce = %selected.proof_nonce,
            overlapping,
            "multiple data commitments cover height, using the first"
        );
    }

    Some(selected)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn commitment(nonce: u64, start_block: u64, end_block: u64) -> DataCommitment {
        DataCommitment {
            proof_nonce: U256::from(nonce),
            start_block,
            end_block,
            data_commitment: B256::with_last_byte(nonce as u8),
        }
    }

    #[test]
    fn test_covers_is_half_open() {
        let c = commitment(1, 100, 200);
        assert!(!c.covers(99));
        assert!(c.covers(100));
        assert!(c.covers(199));
        assert!(!c.covers(200));
    }

    #[test]
    fn test_select_first_match() {
        let commitments = vec![
            commitment(1, 0, 100),
            commitment(2, 100, 200),
            commitment(3, 150, 250),
        ];

        assert_eq!(
            select_commitment(&commitments, 100).unwrap().proof_nonce,
            U256::from(2)
        );
        assert_eq!(
            select_commitment(&commitments, 160).unwrap().proof_nonce,
            U256::from(2)
        );
        assert_eq!(
            select_commitment(&commitments, 220).unwrap().proof_nonce,
            U256::from(3)
        );
    }

    #[test]
    fn test_select_none() {
        let commitments = vec![commitment(1, 0, 100)];
        assert!(select_commitment(&commitments, 100).is_none());
        assert!(select_commitment(&[], 1).is_none());
    }

    #[test]
    fn test_from_event() {
        let event = DataCommitmentStored {
            proofNonce: U256::from(9),
            startBlock: 10,
            endBlock: 20,
            dataCommitment: B256::repeat_byte(7),
        };

        assert_eq!(DataCommitment::from(event), DataCommitment {
            proof_nonce: U256::from(9),
            start_block: 10,
            end_block: 20,
            data_commitment: B256::repeat_byte(7),
        });
    }

    proptest! {
        #[test]
        fn test_selected_always_covers(
            ranges in proptest::collection::vec((0u64..1000, 1u64..200), 0..16),
            height in 0u64..1200,
        ) {
            let commitments: Vec<DataCommitment> = ranges
                .iter()
                .enumerate()
                .map(|(i, &(start, len))| commitment(i as u64, start, start + len))
                .collect();

            match select_commitment(&commitments, height) {
                Some(selected) => {
                    prop_assert!(selected.covers(height));
                    let first = commitments.iter().position(|c| c.covers(height)).unwrap();
                    prop_assert_eq!(selected, &commitments[first]);
                }
                None => prop_assert!(commitments.iter().all(|c| !c.covers(height))),
            }
        }
    }
}

//! Writing generated artifacts to disk.

use std::{fs, path::Path};

use alloy_primitives::{Bytes, hex};
use blobproof_primitives::SharesProof;
use tracing::info;

use crate::error::Result;

fn create_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    Ok(())
}

/// Writes the proof document to `path`, creating missing parent directories.
pub fn write_proof(path: &Path, proof: &SharesProof) -> Result<()> {
    create_parent(path)?;
    fs::write(path, proof.to_json()?)?;
    info!(path = %path.display(), "wrote proof");
    Ok(())
}

/// Writes `0x`-prefixed hex calldata to `path`.
pub fn write_calldata(path: &Path, calldata: &Bytes) -> Result<()> {
    create_parent(path)?;
    fs::write(path, hex::encode_prefixed(calldata))?;
    info!(path = %path.display(), bytes = calldata.len(), "wrote calldata");
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use alloy_primitives::B256;
    use blobproof_primitives::{AttestationProof, RawAuditPath, RawRangeProof};

    use super::*;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "blobproof-{name}-{}-{}",
            std::process::id(),
            rand::random::<u64>()
        ));
        let _ = fs::remove_dir_all(&dir);
        dir
    }

    fn proof() -> SharesProof {
        let attestation =
            AttestationProof::build(7, 100, B256::ZERO, &RawAuditPath::new(vec![], 0, 1)).unwrap();
        SharesProof::assemble(
            &[vec![0u8; 512]],
            &[RawRangeProof::new(0, 1, vec![])],
            &[1u8; 28],
            &[vec![2u8; 90]],
            &[RawAuditPath::new(vec![B256::ZERO], 0, 2)],
            attestation,
        )
        .unwrap()
    }

    #[test]
    fn test_write_proof_creates_dirs() {
        let dir = scratch_dir("proof");
        let path = dir.join("data").join("proof.json");
        let proof = proof();

        write_proof(&path, &proof).unwrap();

        let written = fs::read_to_string(&path).unwrap();
        assert_eq!(written, proof.to_json().unwrap());
        assert_eq!(SharesProof::from_json(&written).unwrap(), proof);

        fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn test_write_calldata_hex() {
        let dir = scratch_dir("calldata");
        let path = dir.join("calldata.hex");

        write_calldata(&path, &Bytes::from(vec![0xde, 0xad, 0xbe, 0xef])).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "0xdeadbeef");

        fs::remove_dir_all(dir).unwrap();
    }
}

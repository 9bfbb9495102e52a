//! Prover configuration.
//!
//! Settings are layered: built-in defaults, then an optional TOML file, then
//! command line overrides. Endpoints, the bridge address and the lookback
//! window all live here rather than in code.

use std::path::{Path, PathBuf};

use alloy_primitives::Address;
use blobproof_contracts::sepolia;
use serde::Deserialize;

use crate::error::ConfigError;

/// Default Celestia Mocha consensus node.
pub const DEFAULT_DA_RPC_URL: &str = "http://consensus-full-mocha-4.celestia-mocha.com:26657";

/// Default Sepolia JSON-RPC endpoint.
pub const DEFAULT_ETH_RPC_URL: &str = "https://rpc-sepolia-eth.nodeguardians.io";

/// Default number of EVM blocks scanned back from the latest one.
pub const DEFAULT_SEARCH_RANGE: u64 = 5000;

/// Default per-request timeout in seconds.
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Default output path of the proof document.
pub const DEFAULT_OUTPUT_PATH: &str = "data/proof.json";

/// Prover settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProverConfig {
    /// Tendermint JSON-RPC endpoint of the DA node.
    pub da_rpc_url: String,
    /// JSON-RPC endpoint of the chain hosting the bridge.
    pub eth_rpc_url: String,
    /// Address of the bridge contract.
    pub bridge_address: Address,
    /// Number of EVM blocks to scan back for commitment events.
    pub search_range: u64,
    /// Per-request timeout in seconds.
    pub request_timeout_secs: u64,
    /// Where the proof document is written.
    pub output_path: PathBuf,
}

impl Default for ProverConfig {
    fn default() -> Self {
        Self {
            da_rpc_url: DEFAULT_DA_RPC_URL.to_string(),
            eth_rpc_url: DEFAULT_ETH_RPC_URL.to_string(),
            bridge_address: sepolia::BLOBSTREAM_X.address,
            search_range: DEFAULT_SEARCH_RANGE,
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
        }
    }
}

/// Command line overrides. Unset fields keep the loaded value.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    /// Overrides [`ProverConfig::da_rpc_url`].
    pub da_rpc_url: Option<String>,
    /// Overrides [`ProverConfig::eth_rpc_url`].
    pub eth_rpc_url: Option<String>,
    /// Overrides [`ProverConfig::bridge_address`].
    pub bridge_address: Option<Address>,
    /// Overrides [`ProverConfig::search_range`].
    pub search_range: Option<u64>,
    /// Overrides [`ProverConfig::output_path`].
    pub output_path: Option<PathBuf>,
}

impl ProverConfig {
    /// Parses a config from TOML. Missing keys take their defaults.
    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(contents)?)
    }

    /// Loads a config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&contents)
    }

    /// Applies command line overrides on top of this config.
    pub fn with_overrides(mut self, overrides: ConfigOverrides) -> Self {
        if let Some(url) = overrides.da_rpc_url {
            self.da_rpc_url = url;
        }
        if let Some(url) = overrides.eth_rpc_url {
            self.eth_rpc_url = url;
        }
        if let Some(address) = overrides.bridge_address {
            self.bridge_address = address;
        }
        if let Some(range) = overrides.search_range {
            self.search_range = range;
        }
        if let Some(path) = overrides.output_path {
            self.output_path = path;
        }
        self
    }

    /// Returns the request timeout.
    pub const fn request_timeout(&self) -> std::time::Duration {
        std::time::Duration::from_secs(self.request_timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::address;

    #[test]
    fn test_defaults() {
        let config = ProverConfig::default();
        assert_eq!(config.search_range, 5000);
        assert_eq!(config.bridge_address, sepolia::BLOBSTREAM_X.address);
        assert_eq!(config.output_path, PathBuf::from("data/proof.json"));
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = ProverConfig::from_toml(
            r#"
            eth_rpc_url = "http://localhost:8545"
            search_range = 100
            "#,
        )
        .unwrap();

        assert_eq!(config.eth_rpc_url, "http://localhost:8545");
        assert_eq!(config.search_range, 100);
        assert_eq!(config.da_rpc_url, DEFAULT_DA_RPC_URL);
        assert_eq!(config.request_timeout_secs, DEFAULT_REQUEST_TIMEOUT_SECS);
    }

    #[test]
    fn test_bridge_address_from_toml() {
        let config = ProverConfig::from_toml(
            r#"bridge_address = "0x00000000000000000000000000000000000000aa""#,
        )
        .unwrap();
        assert_eq!(
            config.bridge_address,
            address!("00000000000000000000000000000000000000aa")
        );
    }

    #[test]
    fn test_unknown_key_rejected() {
        let result = ProverConfig::from_toml("lookback = 10");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_overrides_win() {
        let config = ProverConfig::from_toml("search_range = 100")
            .unwrap()
            .with_overrides(ConfigOverrides {
                search_range: Some(7),
                output_path: Some(PathBuf::from("out.json")),
                ..Default::default()
            });

        assert_eq!(config.search_range, 7);
        assert_eq!(config.output_path, PathBuf::from("out.json"));
        assert_eq!(config.eth_rpc_url, DEFAULT_ETH_RPC_URL);
    }

    #[test]
    fn test_load_missing_file() {
        let result = ProverConfig::load(Path::new("/nonexistent/blobproof.toml"));
        assert!(matches!(result, Err(ConfigError::Read { .. })));
    }
}

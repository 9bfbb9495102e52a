//! `blobproof`: builds a Blobstream shares proof for a blob transaction.

use std::{path::PathBuf, str::FromStr};

use alloy_primitives::{Address, B256, Bytes};
use argh::FromArgs;
use blobproof_contracts::prove_comet_calldata;
use blobproof_prover::{
    CelestiaRpcClient, ConfigError, ConfigOverrides, EvmRpcClient, ProofRequest, ProverConfig,
    ProverError, Result, generate_proof, write_calldata, write_proof,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, FromArgs)]
#[argh(description = "Blobstream shares proof generator")]
struct Args {
    #[argh(option, short = 'c', description = "path to a TOML config file")]
    config: Option<PathBuf>,

    #[argh(option, short = 't', description = "hex hash of the PayForBlob transaction")]
    tx_hash: Option<String>,

    #[argh(option, description = "index of the first share of the blob")]
    share_start: Option<u64>,

    #[argh(option, description = "index one past the last share of the blob")]
    share_end: Option<u64>,

    #[argh(option, description = "tendermint JSON-RPC endpoint of the DA node")]
    da_rpc: Option<String>,

    #[argh(option, description = "JSON-RPC endpoint of the bridge chain")]
    eth_rpc: Option<String>,

    #[argh(option, description = "address of the bridge contract")]
    bridge: Option<Address>,

    #[argh(option, description = "number of bridge blocks to scan for commitments")]
    search_range: Option<u64>,

    #[argh(option, short = 'o', description = "where to write the proof JSON")]
    output: Option<PathBuf>,

    #[argh(option, description = "also write proveComet calldata to this path")]
    calldata: Option<PathBuf>,
}

impl Args {
    fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            da_rpc_url: self.da_rpc.clone(),
            eth_rpc_url: self.eth_rpc.clone(),
            bridge_address: self.bridge,
            search_range: self.search_range,
            output_path: self.output.clone(),
        }
    }
}

fn main() -> Result<()> {
    let args: Args = argh::from_env();
    if let Err(e) = main_inner(args) {
        eprintln!("FATAL ERROR: {e}");

        return Err(e);
    }

    Ok(())
}

fn main_inner(args: Args) -> Result<()> {
    init_logging();

    let config = match &args.config {
        Some(path) => ProverConfig::load(path)?,
        None => ProverConfig::default(),
    }
    .with_overrides(args.overrides());
    let request = build_request(&args, &config)?;

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    let output = runtime.block_on(async {
        let da = CelestiaRpcClient::new(&config.da_rpc_url, config.request_timeout())?;
        let bridge = EvmRpcClient::new(
            &config.eth_rpc_url,
            config.bridge_address,
            config.request_timeout(),
        )?;
        info!(da = %config.da_rpc_url, eth = %config.eth_rpc_url, bridge = %bridge.bridge(), "connected");

        Ok::<_, ProverError>(generate_proof(&da, &bridge, &request).await?)
    })?;

    write_proof(&config.output_path, &output.proof)?;
    if let Some(path) = &args.calldata {
        let calldata = prove_comet_calldata(&output.proof, Bytes::from_static(&[0x00]))?;
        write_calldata(path, &calldata)?;
    }

    Ok(())
}

fn build_request(args: &Args, config: &ProverConfig) -> Result<ProofRequest> {
    let tx_hash = args
        .tx_hash
        .as_deref()
        .ok_or(ConfigError::Missing("tx-hash"))?;
    let tx_hash =
        B256::from_str(tx_hash).map_err(|_| ConfigError::InvalidTxHash(tx_hash.to_string()))?;
    let share_start = args.share_start.ok_or(ConfigError::Missing("share-start"))?;
    let share_end = args.share_end.ok_or(ConfigError::Missing("share-end"))?;

    ProofRequest::new(tx_hash, share_start, share_end, config.search_range)
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Args {
        Args::from_args(&["blobproof"], args).unwrap()
    }

    #[test]
    fn test_build_request() {
        let hash = "5EC9E71FC8BD0DFB14E9ED1B29C0C2D2F9A3E2D3A71F9A4D2A0F2C7C1C4E9B10";
        let args = parse(&[
            "--tx-hash",
            hash,
            "--share-start",
            "4",
            "--share-end",
            "9",
            "--search-range",
            "42",
        ]);
        let config = ProverConfig::default().with_overrides(args.overrides());
        let request = build_request(&args, &config).unwrap();

        assert_eq!(request.tx_hash(), B256::from_str(hash).unwrap());
        assert_eq!(request.share_range(), (4, 9));
        assert_eq!(request.search_range(), 42);
    }

    #[test]
    fn test_missing_tx_hash() {
        let args = parse(&["--share-start", "0", "--share-end", "1"]);
        let err = build_request(&args, &ProverConfig::default()).unwrap_err();
        assert!(matches!(
            err,
            ProverError::Config(ConfigError::Missing("tx-hash"))
        ));
    }

    #[test]
    fn test_invalid_tx_hash() {
        let args = parse(&["--tx-hash", "0x1234", "--share-start", "0", "--share-end", "1"]);
        let err = build_request(&args, &ProverConfig::default()).unwrap_err();
        assert!(matches!(
            err,
            ProverError::Config(ConfigError::InvalidTxHash(_))
        ));
    }

    #[test]
    fn test_flags_override_config() {
        let args = parse(&[
            "--bridge",
            "0x00000000000000000000000000000000000000aa",
            "--output",
            "out/proof.json",
        ]);
        let config = ProverConfig::default().with_overrides(args.overrides());

        assert_eq!(config.bridge_address, Address::with_last_byte(0xaa));
        assert_eq!(config.output_path, PathBuf::from("out/proof.json"));
    }
}

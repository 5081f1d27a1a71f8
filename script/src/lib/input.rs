use alloy_primitives::U256;
use anyhow::{Context, Result};
use papr_lib::{Auction, OracleInfo, Vault};
use serde::de::DeserializeOwned;
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

/// Parses a U256 command line argument, written in decimal or `0x` prefixed hex.
pub fn parse_u256(value: &str) -> std::result::Result<U256, String> {
    value
        .trim()
        .parse::<U256>()
        .map_err(|err| format!("invalid uint256 `{value}`: {err}"))
}

/// Reads and deserializes a JSON file.
pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let contents: String = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&contents).with_context(|| format!("Failed to parse {}", path.display()))
}

/// Reads the vaults of a controller, as exported from the subgraph.
pub fn load_vaults(path: &Path) -> Result<Vec<Vault>> {
    read_json(path)
}

/// Reads oracle quotes keyed by collateral address.
pub fn load_oracle_info(path: &Path) -> Result<OracleInfo> {
    read_json(path)
}

/// Reads an onchain auction struct.
pub fn load_auction(path: &Path) -> Result<Auction> {
    read_json(path)
}

/// Current unix timestamp in seconds.
pub fn now() -> Result<u64> {
    Ok(SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .context("System clock is before the unix epoch")?
        .as_secs())
}

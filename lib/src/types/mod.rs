pub mod auction;
pub mod oracle;
pub mod vaults;

use alloy_primitives::{keccak256, U256};
use alloy_sol_types::SolValue;

/// Trait for Solidity structs identified onchain by the hash of their ABI encoding.
pub trait OnchainIdentifiable: SolValue {
    /// Computes `uint256(keccak256(abi.encode(self)))`, the identifier contracts store the struct under.
    ///
    /// # Arguments
    ///
    /// * `self` - The struct to identify.
    fn onchain_id(&self) -> U256 {
        U256::from_be_bytes(keccak256(self.abi_encode()).0)
    }
}

use alloy_primitives::Address;
use alloy_sol_types::sol;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

sol! {
    /// An `OracleMessage` is the signed payload an oracle attaches to a collateral price
    #[derive(Serialize, Deserialize, PartialEq, Eq, Debug)]
    struct OracleMessage {
        /// Identifier of the queried price, derived from the collateral and price kind
        bytes32 id;
        /// ABI encoded price data
        bytes payload;
        /// Time at which the price was signed
        uint256 timestamp;
        /// Signature of the oracle over the message
        bytes signature;
    }
}

/// A floor price quote for a collateral collection, as served by the price oracle API.
#[derive(PartialEq, Debug, Clone, Serialize, Deserialize)]
pub struct OraclePriceQuote {
    /// Floor price in the debt token's display units.
    pub price: f64,
    /// The signed message backing the price.
    pub message: OracleMessage,
}

/// Oracle quotes indexed by collateral contract address.
pub type OracleInfo = HashMap<Address, OraclePriceQuote>;

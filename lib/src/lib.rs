//! Off-chain math of the papr lending protocol: liquidation auction prices, loan to value
//! ratios and liquidation time estimates, computed from values read onchain.
pub mod auctions;
pub mod constants;
pub mod controllers;
pub mod errors;
pub mod types;
pub mod utils;

pub use auctions::{chart::price_series, chart::PricePoint, current_price, price_after};
pub use controllers::{
    compute_ltv, compute_ltv_from_debts, compute_ltv_precise, controller_debt,
    controller_nft_value, convert_one_scaled_value, liquidation::LiquidationEstimator, max_debt,
};
pub use errors::PaprMathError;
pub use types::{
    auction::{Auction, AuctionParameters},
    oracle::{OracleInfo, OracleMessage, OraclePriceQuote},
    vaults::{Vault, VaultDebtSnapshot},
    OnchainIdentifiable,
};

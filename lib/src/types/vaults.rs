use crate::controllers::{compute_ltv_from_debts, liquidation::LiquidationEstimator};
use crate::errors::Result;
use alloy_primitives::{Address, U256};
use serde::{Deserialize, Serialize};

/// A vault holding NFTs of a single collection as collateral for papr debt.
#[derive(PartialEq, Eq, Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vault {
    /// Address of the collateral ERC721 contract.
    pub token: Address,
    /// Number of NFTs of `token` locked in the vault.
    pub collateral_count: u64,
    /// Outstanding debt of the vault in papr.
    pub debt: U256,
}

/// The debt of a position next to the maximum debt its collateral allows.
#[derive(PartialEq, Eq, Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VaultDebtSnapshot {
    /// Debt taken, in the debt token's smallest unit.
    pub debt: U256,
    /// Maximum debt the collateral allows, in the debt token's smallest unit.
    pub max_debt: U256,
    /// Decimals of the debt token.
    pub decimals: u8,
}

impl VaultDebtSnapshot {
    /// Loan to value of the position, see [`compute_ltv_from_debts`].
    pub fn ltv(&self, max_ltv: &U256) -> Result<f64> {
        compute_ltv_from_debts(&self.debt, &self.max_debt, max_ltv, self.decimals)
    }

    /// Days until the position is projected to become liquidatable.
    pub fn days_to_liquidation(&self, estimator: &LiquidationEstimator) -> Result<f64> {
        estimator.estimate_days(&self.debt, &self.max_debt, self.decimals)
    }
}

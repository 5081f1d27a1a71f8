pub mod liquidation;

use crate::constants::{MAX_LTV_DISPLAY_DECIMALS, WAD_DECIMALS};
use crate::errors::{PaprMathError, Result};
use crate::types::{
    oracle::{OracleInfo, OraclePriceQuote},
    vaults::Vault,
};
use crate::utils::{div_wad_down, mul_wad_down, pow10, to_display_float, u256_to_f64};
use alloy_primitives::U256;
use tracing::debug;

/// Converts a one-scaled value into a float keeping `decimals` fractional digits.
///
/// The value is truncated to `decimals` digits with integer division before the
/// conversion to float, so the result never rounds up.
///
/// # Arguments
///
/// * `value` - A real number scaled by 1e18.
/// * `decimals` - The number of fractional digits to keep, at most 18.
///
/// # Returns
///
/// The truncated float, e.g. `1.239e18` with 2 decimals is `1.23`.
pub fn convert_one_scaled_value(value: &U256, decimals: u8) -> Result<f64> {
    if decimals > WAD_DECIMALS {
        return Err(PaprMathError::InvalidDecimals(decimals));
    }
    let truncated: U256 = *value / pow10(WAD_DECIMALS - decimals)?;
    Ok(u256_to_f64(&truncated) / 10f64.powi(decimals as i32))
}

/// Computes the loan to value of a controller as `debt / (total_collateral_value / norm)`.
///
/// Integer division is applied to `total_collateral_value / norm` first, matching the
/// values shown by the papr interface. The intermediate quotient truncates to zero
/// whenever the collateral value is below `norm`; see [`compute_ltv_precise`] for the
/// untruncated ratio.
///
/// # Returns
///
/// The loan to value, or zero when the intermediate quotient is zero.
pub fn compute_ltv(debt: &U256, total_collateral_value: &U256, norm: &U256) -> U256 {
    let normalized_value: U256 = total_collateral_value
        .checked_div(*norm)
        .unwrap_or_default();
    if normalized_value.is_zero() {
        debug!(
            %total_collateral_value,
            %norm,
            "normalized collateral value is zero, reporting zero LTV"
        );
        return U256::ZERO;
    }
    *debt / normalized_value
}

/// Computes `debt * norm / total_collateral_value` without truncating intermediate ratios.
pub fn compute_ltv_precise(
    debt: &U256,
    total_collateral_value: &U256,
    norm: &U256,
) -> Result<U256> {
    if total_collateral_value.is_zero() {
        return Err(PaprMathError::DivisionByZero("total collateral value"));
    }
    debt.checked_mul(*norm)
        .map(|scaled_debt: U256| scaled_debt / *total_collateral_value)
        .ok_or(PaprMathError::Overflow("loan to value"))
}

/// Computes the loan to value of a position from its debt and maximum debt.
///
/// # Arguments
///
/// * `debt` - Debt taken, in the debt token's smallest unit.
/// * `max_debt` - Maximum debt the collateral allows, in the same unit.
/// * `max_ltv` - The protocol max loan to value, as a wad.
/// * `decimals` - Decimals of the debt token.
///
/// # Returns
///
/// `(debt / max_debt) * max_ltv` as a display float.
pub fn compute_ltv_from_debts(
    debt: &U256,
    max_debt: &U256,
    max_ltv: &U256,
    decimals: u8,
) -> Result<f64> {
    if max_debt.is_zero() {
        return Err(PaprMathError::DivisionByZero("max debt"));
    }
    let debt_ratio: f64 = to_display_float(debt, decimals)? / to_display_float(max_debt, decimals)?;
    Ok(debt_ratio * convert_one_scaled_value(max_ltv, MAX_LTV_DISPLAY_DECIMALS)?)
}

/// Maximum debt a collateral value allows, mirroring the controller contract.
///
/// # Arguments
///
/// * `total_collateral_value` - Value of the collateral in the underlying token.
/// * `max_ltv` - The protocol max loan to value, as a wad.
/// * `target` - The papr target price in the underlying token, as a wad.
///
/// # Returns
///
/// `divWadDown(mulWadDown(total_collateral_value, max_ltv), target)`.
pub fn max_debt(total_collateral_value: &U256, max_ltv: &U256, target: &U256) -> Result<U256> {
    div_wad_down(&mul_wad_down(total_collateral_value, max_ltv)?, target)
}

/// Sums the oracle value of the collateral held by `vaults`.
///
/// # Arguments
///
/// * `vaults` - The vaults of a controller.
/// * `oracle_info` - Oracle quotes per collateral address, if available.
///
/// # Returns
///
/// `sum(price(vault.token) * vault.collateral_count)`, zero without vaults or oracle info.
/// A vault whose collateral has no quote yields `PaprMathError::MissingOraclePrice`.
pub fn controller_nft_value(vaults: &[Vault], oracle_info: Option<&OracleInfo>) -> Result<f64> {
    let Some(oracle_info) = oracle_info else {
        debug!(
            vaults = vaults.len(),
            "no oracle info, reporting zero collateral value"
        );
        return Ok(0.0);
    };

    vaults
        .iter()
        .try_fold(0.0, |total: f64, vault: &Vault| -> Result<f64> {
            let quote: &OraclePriceQuote = oracle_info
                .get(&vault.token)
                .ok_or(PaprMathError::MissingOraclePrice(vault.token))?;
            Ok(total + quote.price * vault.collateral_count as f64)
        })
}

/// Sums the papr debt of `vaults`, zero without vaults.
pub fn controller_debt(vaults: &[Vault]) -> Result<U256> {
    vaults
        .iter()
        .try_fold(U256::ZERO, |total: U256, vault: &Vault| -> Result<U256> {
            total
                .checked_add(vault.debt)
                .ok_or(PaprMathError::Overflow("controller debt"))
        })
}

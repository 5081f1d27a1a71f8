pub mod product_log;

use crate::constants::WAD;
use crate::errors::{PaprMathError, Result};
use alloy_primitives::U256;

/// Computes `10^exp` as a U256.
///
/// # Arguments
///
/// * `exp` - The power of ten to compute.
///
/// # Returns
///
/// The power of ten, or `PaprMathError::Overflow` if it does not fit in 256 bits.
pub fn pow10(exp: u8) -> Result<U256> {
    U256::from(10u8)
        .checked_pow(U256::from(exp))
        .ok_or(PaprMathError::Overflow("power of ten"))
}

/// Lossy conversion of a U256 into the nearest `f64`.
pub fn u256_to_f64(value: &U256) -> f64 {
    // Decimal parsing rounds to nearest and every U256 is below f64::MAX
    value.to_string().parse::<f64>().unwrap_or(f64::INFINITY)
}

/// Converts an amount expressed in a token's smallest unit into display units.
///
/// This is the boundary where onchain fixed-point integers become floats. The integer
/// and fractional parts are split exactly before the single rounding to `f64`.
///
/// # Arguments
///
/// * `amount` - The amount in the token's smallest unit.
/// * `decimals` - The number of decimals of the token.
///
/// # Returns
///
/// The amount in display units, e.g. `1_500_000` with 6 decimals is `1.5`.
pub fn to_display_float(amount: &U256, decimals: u8) -> Result<f64> {
    if decimals == 0 {
        return Ok(u256_to_f64(amount));
    }
    let unit: U256 = pow10(decimals)?;
    let integer: U256 = *amount / unit;
    let fraction: String = (*amount % unit).to_string();
    format!(
        "{}.{:0>width$}",
        integer,
        fraction,
        width = decimals as usize
    )
    .parse::<f64>()
    .map_err(|_| PaprMathError::NotComputable("display value"))
}

/// Multiplies two wad values, rounding down: `x * y / 1e18`.
pub fn mul_wad_down(x: &U256, y: &U256) -> Result<U256> {
    x.checked_mul(*y)
        .map(|product: U256| product / U256::from(WAD))
        .ok_or(PaprMathError::Overflow("wad multiplication"))
}

/// Divides two wad values, rounding down: `x * 1e18 / y`.
pub fn div_wad_down(x: &U256, y: &U256) -> Result<U256> {
    if y.is_zero() {
        return Err(PaprMathError::DivisionByZero("wad divisor"));
    }
    x.checked_mul(U256::from(WAD))
        .map(|scaled: U256| scaled / *y)
        .ok_or(PaprMathError::Overflow("wad division"))
}

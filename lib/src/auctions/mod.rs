pub mod chart;

use crate::constants::{MULTIPLIER_DECIMALS, PRICE_PADDING, WAD, WAD_DECIMALS};
use crate::errors::{PaprMathError, Result};
use crate::types::auction::AuctionParameters;
use crate::utils::{pow10, to_display_float};
use alloy_primitives::U256;

/// Computes the price of an exponential decay Dutch auction after `seconds_elapsed`.
///
/// The price follows `start_price * (1 - decay)^(seconds_elapsed / seconds_in_period)`.
/// The multiplier is evaluated as a float and quantized to 10 decimal digits before it
/// scales the integer start price, so float error never reaches the integer side.
/// `PRICE_PADDING` is added to the result, so the price is never below it.
///
/// # Arguments
///
/// * `start_price` - The price the auction starts at, one-scaled.
/// * `seconds_elapsed` - Seconds since the auction started.
/// * `seconds_in_period` - Length of a decay period, must be positive.
/// * `per_period_decay_percent_wad` - Share of the price lost every period, below one wad.
///
/// # Returns
///
/// The padded price, one-scaled.
pub fn price_after(
    start_price: &U256,
    seconds_elapsed: u64,
    seconds_in_period: u64,
    per_period_decay_percent_wad: &U256,
) -> Result<U256> {
    if seconds_in_period == 0 {
        return Err(PaprMathError::ZeroSecondsInPeriod);
    }
    if *per_period_decay_percent_wad >= U256::from(WAD) {
        return Err(PaprMathError::DecayPercentOutOfRange(
            *per_period_decay_percent_wad,
        ));
    }

    let ratio: f64 = seconds_elapsed as f64 / seconds_in_period as f64;
    // Subtract in fixed point, a decay close to one wad cancels out as a float
    let remaining_wad: U256 = U256::from(WAD) - *per_period_decay_percent_wad;
    let remaining_per_period: f64 = to_display_float(&remaining_wad, WAD_DECIMALS)?;
    let multiplier: f64 = remaining_per_period.powf(ratio);

    let precision: U256 = pow10(MULTIPLIER_DECIMALS)?;
    let quantized_multiplier: U256 =
        U256::from((multiplier * 10f64.powi(MULTIPLIER_DECIMALS as i32)).round() as u64);

    start_price
        .checked_mul(quantized_multiplier)
        .map(|scaled: U256| scaled / precision)
        .and_then(|price: U256| price.checked_add(U256::from(PRICE_PADDING)))
        .ok_or(PaprMathError::Overflow("auction price"))
}

/// Computes the price of `auction` at `timestamp`.
///
/// # Arguments
///
/// * `auction` - The decay schedule of the auction.
/// * `timestamp` - The time to price at, no earlier than the auction start.
///
/// # Returns
///
/// The padded price, one-scaled. Errors if the schedule is invalid or `timestamp`
/// precedes the auction start.
pub fn current_price(auction: &AuctionParameters, timestamp: u64) -> Result<U256> {
    price_after(
        &auction.start_price,
        auction.seconds_elapsed(timestamp)?,
        auction.seconds_in_period,
        &auction.per_period_decay_percent_wad,
    )
}

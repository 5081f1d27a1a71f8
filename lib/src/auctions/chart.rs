use super::current_price;
use crate::constants::{CHART_SAMPLE_INTERVAL, CHART_WINDOW};
use crate::errors::{PaprMathError, Result};
use crate::types::auction::AuctionParameters;
use alloy_primitives::U256;
use serde::{Deserialize, Serialize};

/// A sample of an auction price curve.
#[derive(PartialEq, Eq, Debug, Clone, Serialize, Deserialize)]
pub struct PricePoint {
    pub timestamp: u64,
    pub price: U256,
}

/// Number of chart samples for an auction started at `start_timestamp`.
///
/// A full chart covers `CHART_WINDOW` in `CHART_SAMPLE_INTERVAL` steps. When
/// `current_timestamp` falls inside that window the chart stops at the last full step
/// before it.
pub fn sample_count(start_timestamp: u64, current_timestamp: Option<u64>) -> u64 {
    let full_window: u64 = CHART_WINDOW / CHART_SAMPLE_INTERVAL;
    match current_timestamp {
        Some(current) => {
            full_window.min(current.saturating_sub(start_timestamp) / CHART_SAMPLE_INTERVAL)
        }
        None => full_window,
    }
}

/// Samples the price curve of `auction` every `CHART_SAMPLE_INTERVAL` seconds from its start.
///
/// # Arguments
///
/// * `auction` - The decay schedule of the auction.
/// * `current_timestamp` - Optional upper bound for the sampled timestamps.
///
/// # Returns
///
/// The sampled points ordered by timestamp, see [`sample_count`] for their number.
pub fn price_series(
    auction: &AuctionParameters,
    current_timestamp: Option<u64>,
) -> Result<Vec<PricePoint>> {
    auction.validate()?;

    (0..sample_count(auction.start_timestamp, current_timestamp))
        .map(|step: u64| -> Result<PricePoint> {
            let timestamp: u64 = step
                .checked_mul(CHART_SAMPLE_INTERVAL)
                .and_then(|offset: u64| auction.start_timestamp.checked_add(offset))
                .ok_or(PaprMathError::Overflow("chart timestamp"))?;
            Ok(PricePoint {
                timestamp,
                price: current_price(auction, timestamp)?,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{PRICE_PADDING, WAD};

    #[test]
    fn test_full_window() {
        let auction: AuctionParameters = sample_auction(1_700_000_000);
        let series: Vec<PricePoint> = price_series(&auction, None).unwrap();

        assert_eq!(series.len(), 288);
        assert_eq!(series[0].timestamp, auction.start_timestamp);
        assert_eq!(
            series[0].price,
            auction.start_price + U256::from(PRICE_PADDING)
        );
        assert_eq!(series[287].timestamp, auction.start_timestamp + 287 * 900);
        for pair in series.windows(2) {
            assert!(pair[0].price >= pair[1].price);
            assert_eq!(pair[1].timestamp - pair[0].timestamp, 900);
        }
    }

    #[test]
    fn test_capped_by_current_timestamp() {
        let start: u64 = 1_700_000_000;
        let auction: AuctionParameters = sample_auction(start);

        assert_eq!(
            price_series(&auction, Some(start + 3_600)).unwrap().len(),
            4
        );
        assert_eq!(
            price_series(&auction, Some(start + 3_599)).unwrap().len(),
            3
        );
        // A current timestamp past the window does not extend it
        assert_eq!(
            price_series(&auction, Some(start + 10 * 86_400)).unwrap().len(),
            288
        );
        // Before the auction started there is nothing to draw
        assert!(price_series(&auction, Some(start - 1)).unwrap().is_empty());
    }

    #[test]
    fn test_random_sample_counts() {
        for _ in 0..100 {
            let start: u64 = rand::random::<u32>() as u64;
            let elapsed: u64 = rand::random::<u64>() % (4 * 86_400);
            let expected: u64 = (elapsed / 900).min(288);
            assert_eq!(sample_count(start, Some(start + elapsed)), expected);
        }
    }

    #[test]
    fn test_invalid_schedule() {
        let mut auction: AuctionParameters = sample_auction(0);
        auction.seconds_in_period = 0;
        assert_eq!(
            price_series(&auction, None),
            Err(PaprMathError::ZeroSecondsInPeriod)
        );
    }

    // HELPER FUNCTIONS
    fn sample_auction(start_timestamp: u64) -> AuctionParameters {
        AuctionParameters {
            start_price: U256::from(25 * WAD),
            start_timestamp,
            seconds_in_period: 86_400,
            per_period_decay_percent_wad: U256::from(9 * WAD / 10),
        }
    }
}

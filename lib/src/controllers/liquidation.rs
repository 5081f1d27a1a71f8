//! Estimates how long a papr position can grow before it becomes liquidatable.
use crate::constants::{
    DEFAULT_INDEX_MARK_RATIO, DEFAULT_TARGET_GROWTH_PER_PERIOD, FUNDING_PERIOD, SECONDS_PER_DAY,
};
use crate::errors::{PaprMathError, Result};
use crate::utils::{product_log::lambert_w0, to_display_float};
use alloy_primitives::U256;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Market assumptions used to project the growth of a position's debt.
///
/// The defaults are placeholders until these values are read from the controller.
#[derive(PartialEq, Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct LiquidationEstimator {
    /// Length of a funding period, in seconds.
    pub funding_period: u64,
    /// Assumed ratio between the papr index and mark prices.
    pub index_mark_ratio: f64,
    /// Assumed target growth per funding period.
    pub target_growth_per_period: f64,
}

impl Default for LiquidationEstimator {
    fn default() -> Self {
        Self {
            funding_period: FUNDING_PERIOD,
            index_mark_ratio: DEFAULT_INDEX_MARK_RATIO,
            target_growth_per_period: DEFAULT_TARGET_GROWTH_PER_PERIOD,
        }
    }
}

impl LiquidationEstimator {
    /// Creates an estimator, rejecting assumptions the closed form cannot work with.
    pub fn new(
        funding_period: u64,
        index_mark_ratio: f64,
        target_growth_per_period: f64,
    ) -> Result<Self> {
        let estimator = Self {
            funding_period,
            index_mark_ratio,
            target_growth_per_period,
        };
        estimator.validate()?;
        Ok(estimator)
    }

    /// Checks that `ln(index_mark_ratio)` and `1 / target_growth_per_period` are usable divisors.
    pub fn validate(&self) -> Result<()> {
        if self.funding_period == 0 {
            return Err(PaprMathError::NotComputable("zero length funding period"));
        }
        if !self.index_mark_ratio.is_finite()
            || self.index_mark_ratio <= 0.0
            || self.index_mark_ratio == 1.0
        {
            return Err(PaprMathError::NotComputable("index mark ratio"));
        }
        if !self.target_growth_per_period.is_finite() || self.target_growth_per_period <= 0.0 {
            return Err(PaprMathError::NotComputable("target growth per period"));
        }
        Ok(())
    }

    /// Solves for the number of funding periods until the debt grows by `desired_multiplier`.
    ///
    /// `W0(r^(1/g) * m * ln(r) / g) / ln(r) - 1/g` with `r` the index mark ratio, `g` the
    /// target growth per period and `m` the desired multiplier.
    pub fn period_ratio(&self, desired_multiplier: f64) -> Result<f64> {
        self.validate()?;
        let ln_ratio: f64 = self.index_mark_ratio.ln();
        let inverse_growth: f64 = 1.0 / self.target_growth_per_period;
        let growth_factor: f64 = self.index_mark_ratio.powf(inverse_growth);
        let product_log_argument: f64 =
            growth_factor * desired_multiplier * ln_ratio / self.target_growth_per_period;

        let period_ratio: f64 = lambert_w0(product_log_argument)? / ln_ratio - inverse_growth;
        if !period_ratio.is_finite() {
            return Err(PaprMathError::NotComputable("period ratio"));
        }
        Ok(period_ratio)
    }

    /// Estimates the seconds until liquidation from debts in display units.
    ///
    /// # Arguments
    ///
    /// * `debt` - Debt taken, must be positive.
    /// * `max_debt` - Maximum debt the collateral allows, must be non zero.
    ///
    /// # Returns
    ///
    /// The projected seconds, negative when the debt is already above `max_debt`.
    pub fn estimate_seconds_from_display(&self, debt: f64, max_debt: f64) -> Result<f64> {
        if max_debt == 0.0 {
            return Err(PaprMathError::DivisionByZero("max debt"));
        }
        let percentage_of_max: f64 = debt / max_debt * 100.0;
        if !percentage_of_max.is_finite() || percentage_of_max <= 0.0 {
            return Err(PaprMathError::NotComputable("percentage of max debt"));
        }
        let desired_multiplier: f64 = 100.0 / percentage_of_max;
        let period_ratio: f64 = self.period_ratio(desired_multiplier)?;

        debug!(
            percentage_of_max,
            desired_multiplier, period_ratio, "estimated liquidation"
        );
        Ok(self.funding_period as f64 * period_ratio)
    }

    /// Estimates the days until liquidation from debts in display units.
    pub fn estimate_days_from_display(&self, debt: f64, max_debt: f64) -> Result<f64> {
        Ok(self.estimate_seconds_from_display(debt, max_debt)? / SECONDS_PER_DAY as f64)
    }

    /// Estimates the days until liquidation of a position.
    ///
    /// # Arguments
    ///
    /// * `debt` - Debt taken, in the debt token's smallest unit.
    /// * `max_debt` - Maximum debt the collateral allows, in the same unit.
    /// * `decimals` - Decimals of the debt token.
    pub fn estimate_days(&self, debt: &U256, max_debt: &U256, decimals: u8) -> Result<f64> {
        if max_debt.is_zero() {
            return Err(PaprMathError::DivisionByZero("max debt"));
        }
        self.estimate_days_from_display(
            to_display_float(debt, decimals)?,
            to_display_float(max_debt, decimals)?,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::vaults::VaultDebtSnapshot;

    fn assert_relative_eq(actual: f64, expected: f64) {
        assert!(
            ((actual - expected) / expected).abs() <= 1e-6,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_half_of_max_debt() {
        let estimator = LiquidationEstimator::default();
        let days: f64 = estimator.estimate_days_from_display(50.0, 100.0).unwrap();
        assert_relative_eq(days, 17.421_920_346_774_256);
        assert_relative_eq(
            estimator
                .estimate_seconds_from_display(50.0, 100.0)
                .unwrap(),
            1_505_253.917_961_295_7,
        );
    }

    #[test]
    fn test_reference_values() {
        let estimator = LiquidationEstimator::default();
        for (debt, expected_days) in [
            (10.0, 79.591_856_475_806_41),
            (25.0, 40.687_327_672_244_48),
            (80.0, 4.970_618_279_718_995),
            (99.0, 0.211_154_108_173_243_06),
            (150.0, -7.558_471_569_046_675),
        ] {
            assert_relative_eq(
                estimator.estimate_days_from_display(debt, 100.0).unwrap(),
                expected_days,
            );
        }
    }

    #[test]
    fn test_at_max_debt_is_zero() {
        let days: f64 = LiquidationEstimator::default()
            .estimate_days_from_display(100.0, 100.0)
            .unwrap();
        assert!(days.abs() < 1e-9);
    }

    #[test]
    fn test_more_debt_liquidates_sooner() {
        let estimator = LiquidationEstimator::default();
        let mut debts: Vec<f64> = (0..100)
            .map(|_| 1.0 + rand::random::<f64>() * 200.0)
            .collect();
        debts.sort_by(|a: &f64, b: &f64| a.total_cmp(b));

        let days: Vec<f64> = debts
            .iter()
            .map(|debt: &f64| estimator.estimate_days_from_display(*debt, 100.0).unwrap())
            .collect();
        assert!(days.windows(2).all(|pair: &[f64]| pair[0] >= pair[1]));
    }

    #[test]
    fn test_token_amounts() {
        // 50 USDC of debt out of 100 USDC
        let snapshot = VaultDebtSnapshot {
            debt: U256::from(50_000_000u64),
            max_debt: U256::from(100_000_000u64),
            decimals: 6,
        };
        assert_relative_eq(
            snapshot
                .days_to_liquidation(&LiquidationEstimator::default())
                .unwrap(),
            17.421_920_346_774_256,
        );
    }

    #[test]
    fn test_custom_assumptions() {
        let estimator = LiquidationEstimator::new(FUNDING_PERIOD, 1.2, 2.0).unwrap();
        assert_relative_eq(
            estimator.estimate_days_from_display(50.0, 100.0).unwrap(),
            11.910_526_293_650_752,
        );

        let weekly = LiquidationEstimator::new(7 * SECONDS_PER_DAY, 1.4, 1.0).unwrap();
        assert_relative_eq(
            weekly.estimate_days_from_display(50.0, 100.0).unwrap(),
            4.355_480_086_693_564,
        );
    }

    #[test]
    fn test_not_computable() {
        let estimator = LiquidationEstimator::default();
        assert_eq!(
            estimator.estimate_days(&U256::from(1), &U256::ZERO, 18),
            Err(PaprMathError::DivisionByZero("max debt"))
        );
        assert_eq!(
            estimator.estimate_days_from_display(1.0, 0.0),
            Err(PaprMathError::DivisionByZero("max debt"))
        );
        assert_eq!(
            estimator.estimate_days(&U256::ZERO, &U256::from(100), 18),
            Err(PaprMathError::NotComputable("percentage of max debt"))
        );

        assert_eq!(
            LiquidationEstimator::new(FUNDING_PERIOD, 1.0, 1.0),
            Err(PaprMathError::NotComputable("index mark ratio"))
        );
        assert_eq!(
            LiquidationEstimator::new(FUNDING_PERIOD, 1.4, 0.0),
            Err(PaprMathError::NotComputable("target growth per period"))
        );
        assert_eq!(
            LiquidationEstimator::new(0, 1.4, 1.0),
            Err(PaprMathError::NotComputable("zero length funding period"))
        );
    }
}

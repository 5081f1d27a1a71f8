//! Principal branch of the Lambert W (product-log) function.
use crate::errors::{PaprMathError, Result};
use std::f64::consts::E;

/// The branch point of W0 sits at `-1/e`
const BRANCH_POINT: f64 = -1.0 / E;

const MAX_ITERATIONS: usize = 64;

const TOLERANCE: f64 = 4.0 * f64::EPSILON;

/// Computes `W0(x)`, the real solution `w >= -1` of `w * e^w = x`.
///
/// Starts from a branch-point series (close to `-1/e`), `ln(1 + x)` for moderate
/// arguments or `ln(x) - ln(ln(x))` for large ones, then refines with Halley's method.
///
/// # Arguments
///
/// * `x` - The argument, must be finite and `>= -1/e`.
///
/// # Returns
///
/// `W0(x)`, or `PaprMathError::LambertWDomain` when `x` is outside the domain.
pub fn lambert_w0(x: f64) -> Result<f64> {
    if !x.is_finite() || x < BRANCH_POINT {
        return Err(PaprMathError::LambertWDomain(x));
    }
    if x == 0.0 {
        return Ok(0.0);
    }
    if x == BRANCH_POINT {
        return Ok(-1.0);
    }

    let mut w: f64 = initial_guess(x);
    for _ in 0..MAX_ITERATIONS {
        let ew: f64 = w.exp();
        let f: f64 = w * ew - x;
        let w_plus_one: f64 = w + 1.0;
        if w_plus_one == 0.0 {
            break;
        }
        let step: f64 = f / (ew * w_plus_one - (w + 2.0) * f / (2.0 * w_plus_one));
        w -= step;
        if step.abs() <= TOLERANCE * (1.0 + w.abs()) {
            break;
        }
    }

    if w.is_finite() {
        Ok(w)
    } else {
        Err(PaprMathError::NotComputable("lambert W"))
    }
}

fn initial_guess(x: f64) -> f64 {
    if x < -0.25 {
        let p: f64 = (2.0 * (E * x + 1.0)).max(0.0).sqrt();
        -1.0 + p - p * p / 3.0 + 11.0 / 72.0 * p * p * p
    } else if x < 3.0 {
        x.ln_1p()
    } else {
        let l: f64 = x.ln();
        l - l.ln()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64, tolerance: f64) {
        assert!(
            (actual - expected).abs() <= tolerance * expected.abs().max(1.0),
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_known_values() {
        assert_eq!(lambert_w0(0.0).unwrap(), 0.0);
        assert_close(lambert_w0(1.0).unwrap(), 0.567_143_290_409_783_9, 1e-14);
        assert_close(lambert_w0(E).unwrap(), 1.0, 1e-14);
        assert_close(lambert_w0(10.0).unwrap(), 1.745_528_002_740_699_4, 1e-14);
        assert_close(lambert_w0(1e6).unwrap(), 11.383_358_086_140_053, 1e-14);
        assert_close(lambert_w0(-0.25).unwrap(), -0.357_402_956_181_388_9, 1e-13);
    }

    #[test]
    fn test_branch_point() {
        assert_eq!(lambert_w0(BRANCH_POINT).unwrap(), -1.0);
        assert_close(
            lambert_w0(BRANCH_POINT + 1e-6).unwrap(),
            -0.997_670_166_272_007_9,
            1e-6,
        );
    }

    #[test]
    fn test_random_inverse() {
        for _ in 0..1000 {
            let x: f64 = rand::random::<f64>() * 1000.0 + BRANCH_POINT / 2.0;
            let w: f64 = lambert_w0(x).unwrap();
            assert!(w >= -1.0);
            assert_close(w * w.exp(), x, 1e-12);
        }
    }

    #[test]
    fn test_out_of_domain() {
        assert_eq!(lambert_w0(-1.0), Err(PaprMathError::LambertWDomain(-1.0)));
        assert!(lambert_w0(f64::NAN).is_err());
        assert!(lambert_w0(f64::INFINITY).is_err());
    }
}

//! Stirling approximation of `n!` as a decimal mantissa and exponent.
//!
//! `ln(n!) ≈ n·ln(n) − n + ½·ln(2πn)`, optionally refined with the first
//! three terms of the Stirling series `1/(12n) − 1/(360n³) + 1/(1260n⁵)`.
//! The refined form keeps the mantissa accurate to roughly twelve
//! significant digits for moderate `n`; beyond `n ≈ 1e12` the `f64`
//! logarithm itself limits accuracy. The exponent stays exact up to the
//! `f64` resolution of `log10(n!)` for every `u64` input.

use std::f64::consts::{LN_10, PI};

use crate::calculator::{Calculator, FactorialError};
use crate::options::Options;
use crate::value::{Approximation, FactorialValue};

/// Approximates `n!` in constant time.
pub struct StirlingEstimator;

impl StirlingEstimator {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Natural logarithm of `n!`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn ln_factorial(n: u64, series_correction: bool) -> f64 {
        if n <= 1 {
            return 0.0;
        }
        let n = n as f64;
        let mut ln = n * n.ln() - n + 0.5 * (2.0 * PI * n).ln();
        if series_correction {
            let n3 = n * n * n;
            ln += 1.0 / (12.0 * n) - 1.0 / (360.0 * n3) + 1.0 / (1260.0 * n3 * n * n);
        }
        ln
    }

    /// Decompose the approximation of `n!` into mantissa and exponent.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn estimate(n: u64, opts: &Options) -> Approximation {
        let log10 = Self::ln_factorial(n, opts.series_correction) / LN_10;
        let exponent = log10.floor();
        let mantissa = 10f64.powf(log10 - exponent);
        Approximation::new(mantissa, exponent as u128, opts.precision)
    }
}

impl Default for StirlingEstimator {
    fn default() -> Self {
        Self::new()
    }
}

impl Calculator for StirlingEstimator {
    fn calculate(&self, n: u64, opts: &Options) -> Result<FactorialValue, FactorialError> {
        Ok(FactorialValue::Approximate(Self::estimate(n, opts)))
    }

    fn name(&self) -> &'static str {
        "Stirling"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain() -> Options {
        Options {
            series_correction: false,
            ..Default::default()
        }
    }

    #[test]
    fn estimate_1000() {
        let a = StirlingEstimator::estimate(1000, &Options::default());
        assert_eq!(a.exponent, 2567);
        assert!((a.mantissa - 4.023_872_600_770_937).abs() < 1e-9, "{}", a.mantissa);
        assert!(a.to_string().starts_with("4.02387260"));
        assert!(a.to_string().ends_with("e+2567"));
    }

    #[test]
    fn plain_formula_1000() {
        let a = StirlingEstimator::estimate(1000, &plain());
        assert_eq!(a.exponent, 2567);
        // Uncorrected Stirling underestimates by about 1/(12n)
        assert!((a.mantissa - 4.023_537_292_034_747).abs() < 1e-9, "{}", a.mantissa);
    }

    #[test]
    fn estimate_21() {
        let a = StirlingEstimator::estimate(21, &Options::default());
        assert_eq!(a.exponent, 19);
        assert!((a.mantissa - 5.109_094_217_170_944).abs() < 1e-9);
    }

    #[test]
    fn mantissa_in_range() {
        for n in 21..5000u64 {
            let a = StirlingEstimator::estimate(n, &Options::default());
            assert!((1.0..10.0).contains(&a.mantissa), "n={n} m={}", a.mantissa);
        }
    }

    #[test]
    fn trivial_inputs() {
        let a = StirlingEstimator::estimate(0, &Options::default());
        assert_eq!(a.exponent, 0);
        assert!((a.mantissa - 1.0).abs() < f64::EPSILON);
        assert_eq!(StirlingEstimator::ln_factorial(1, true), 0.0);
    }

    #[test]
    fn precision_option() {
        let opts = Options {
            precision: 3,
            ..Default::default()
        };
        assert_eq!(StirlingEstimator::estimate(1000, &opts).to_string(), "4.024e+2567");
    }

    #[test]
    #[allow(clippy::cast_precision_loss, clippy::cast_sign_loss)]
    fn exponent_beyond_u64_range() {
        let opts = Options::default();
        for n in [1_100_000_000_000_000_000u64, i64::MAX as u64, u64::MAX] {
            let a = StirlingEstimator::estimate(n, &opts);
            let reference = (StirlingEstimator::ln_factorial(n, true) / LN_10).floor();
            assert!(a.mantissa.is_finite());
            assert!(a.exponent > u128::from(u64::MAX), "n={n} exp={}", a.exponent);
            // Normalization may bump the exponent by one
            let diff = a.exponent.abs_diff(reference as u128);
            assert!(diff <= 1, "n={n} exp={} reference={reference}", a.exponent);
        }

        let a = StirlingEstimator::estimate(i64::MAX as u64, &opts);
        assert_eq!(a.exponent / 10u128.pow(17), 1709, "{}", a.exponent);
    }

    #[test]
    fn calculator_output() {
        let value = StirlingEstimator::new()
            .calculate(100, &Options::default())
            .unwrap();
        assert!(!value.is_exact());
        assert!(value.to_string().starts_with("9.33262154"));
        assert!(value.to_string().ends_with("e+157"));
    }
}

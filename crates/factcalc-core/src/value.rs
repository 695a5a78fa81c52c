//! Result values produced by the exact and approximate paths.

use std::fmt;

use num_bigint::BigUint;
use serde::Serialize;

/// Scientific-notation approximation `mantissa × 10^exponent`.
///
/// Constructed through [`Approximation::new`], which keeps the printed
/// mantissa in `[1, 10)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Approximation {
    /// Decimal mantissa in `[1, 10)`.
    pub mantissa: f64,
    /// Base-10 exponent. `log10(n!)` exceeds `u64::MAX` once `n` passes
    /// roughly 1e18, so the exponent is kept wider than the input.
    pub exponent: u128,
    /// Fractional digits used when formatting the mantissa.
    pub precision: usize,
}

impl Approximation {
    /// Build a normalized approximation.
    ///
    /// A mantissa at or above 10, or one that rounds to `10.000…` at the
    /// requested precision, is rewritten as `1.0` with the exponent bumped.
    #[must_use]
    pub fn new(mantissa: f64, exponent: u128, precision: usize) -> Self {
        let (mut mantissa, mut exponent) = (mantissa, exponent);
        if mantissa >= 10.0 {
            mantissa /= 10.0;
            exponent += 1;
        }
        if format!("{mantissa:.precision$}").starts_with("10") {
            mantissa = 1.0;
            exponent += 1;
        }
        Self {
            mantissa,
            exponent,
            precision,
        }
    }
}

impl fmt::Display for Approximation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:.*}e+{}",
            self.precision, self.mantissa, self.exponent
        )
    }
}

/// Outcome of a factorial calculation.
#[derive(Debug, Clone, PartialEq)]
pub enum FactorialValue {
    /// Exact big-integer factorial.
    Exact(BigUint),
    /// Stirling approximation.
    Approximate(Approximation),
}

impl FactorialValue {
    /// Whether this value came from the exact path.
    #[must_use]
    pub fn is_exact(&self) -> bool {
        matches!(self, Self::Exact(_))
    }

    /// The exact value, if any.
    #[must_use]
    pub fn as_exact(&self) -> Option<&BigUint> {
        match self {
            Self::Exact(v) => Some(v),
            Self::Approximate(_) => None,
        }
    }

    /// The approximation, if any.
    #[must_use]
    pub fn as_approximation(&self) -> Option<&Approximation> {
        match self {
            Self::Exact(_) => None,
            Self::Approximate(a) => Some(a),
        }
    }

    /// Number of decimal digits of `n!` (estimated for approximations).
    #[must_use]
    pub fn digits(&self) -> u128 {
        match self {
            Self::Exact(v) => v.to_string().len() as u128,
            Self::Approximate(a) => a.exponent + 1,
        }
    }
}

impl fmt::Display for FactorialValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exact(v) => write!(f, "{v}"),
            Self::Approximate(a) => write!(f, "{a}"),
        }
    }
}

//! Arithmetic operations over `f64`
//!
//! Every function here is pure: no I/O, no logging, no shared state.
//! Only `divide` and `sqrt` are fallible.

use crate::utils::error::{CalcError, Result, DIVIDE_BY_ZERO, NEGATIVE_SQRT};

pub fn add(a: f64, b: f64) -> f64 {
    a + b
}

/// Returns `a - b`.
pub fn subtract(a: f64, b: f64) -> f64 {
    a - b
}

pub fn multiply(a: f64, b: f64) -> f64 {
    a * b
}

/// Divide `a` by `b`
///
/// Rejects a divisor exactly equal to zero (`-0.0` included). Any other
/// divisor follows IEEE-754, so a tiny `b` may overflow to infinity.
pub fn divide(a: f64, b: f64) -> Result<f64> {
    if b == 0.0 {
        return Err(CalcError::invalid_argument(DIVIDE_BY_ZERO));
    }
    Ok(a / b)
}

/// Square root of `a`
///
/// Rejects `a < 0`. NaN is not less than zero and comes back as NaN.
pub fn sqrt(a: f64) -> Result<f64> {
    if a < 0.0 {
        return Err(CalcError::invalid_argument(NEGATIVE_SQRT));
    }
    Ok(a.sqrt())
}

/// `base` raised to `exponent`. `power(x, 0.0)` is `1.0` for every `x`.
pub fn power(base: f64, exponent: f64) -> f64 {
    base.powf(exponent)
}

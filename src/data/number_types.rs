//! # Number types
//!
//! All tableaus hold `f64` values. Results are reported, and integrality is decided, on values
//! rounded to a fixed number of decimal digits, so that an accumulated error like `2.999999999`
//! reads as `3`.
use num_traits::Float;

/// Number of decimal digits that results are rounded to.
pub const PRECISION: i32 = 2;

/// Round half away from zero to `precision` decimal digits.
///
/// # Arguments
///
/// * `value`: Number to round.
/// * `precision`: Number of digits after the decimal point that are kept.
///
/// # Return value
///
/// The closest number with at most `precision` decimal digits.
pub fn round_to<F: Float>(value: F, precision: i32) -> F {
    let two = F::one() + F::one();
    let ratio = (two * two * two + two).powi(precision);

    let rounded = (value * ratio).round() / ratio;
    // Avoid a negative zero leaking into results and comparisons on the sign.
    if rounded.is_zero() { F::zero() } else { rounded }
}

/// Round to the default `PRECISION`.
pub fn round<F: Float>(value: F) -> F {
    round_to(value, PRECISION)
}

/// Round every element of a slice to the default `PRECISION`.
pub fn round_all<F: Float>(values: &[F]) -> Vec<F> {
    values.iter().map(|&value| round(value)).collect()
}

/// Whether a value is an integer once rounded to the default `PRECISION`.
pub fn is_integer<F: Float>(value: F) -> bool {
    let rounded = round(value);
    rounded == rounded.floor()
}

/// Fractional part `value - floor(value)` of the rounded value, itself rounded.
///
/// The floor rounds towards negative infinity, so the result is always in `[0, 1)`: the
/// fractional part of `-4.5` is `0.5`.
pub fn fractional_part<F: Float>(value: F) -> F {
    let rounded = round(value);
    round(rounded - rounded.floor())
}

#[cfg(test)]
mod test {
    use crate::data::number_types::{fractional_part, is_integer, round, round_to};

    #[test]
    fn rounding() {
        assert_eq!(round(1f64 / 6f64), 0.17);
        assert_eq!(round(-1f64 / 3f64), -0.33);
        assert_eq!(round(3.125f64), 3.13);
        assert_eq!(round(-3.125f64), -3.13);
        assert_eq!(round(2.999999999f64), 3f64);
        assert_eq!(round_to(2.5f64, 0), 3f64);
        assert_eq!(round_to(1.23456f32, 3), 1.235f32);
    }

    #[test]
    fn no_negative_zero() {
        assert!(round(-0.001f64).is_sign_positive());
    }

    #[test]
    fn integrality() {
        assert!(is_integer(2.999999999f64));
        assert!(is_integer(-4f64));
        assert!(!is_integer(4.5f64));
        assert!(!is_integer(0.01f64));
    }

    #[test]
    fn fractional_parts() {
        assert_eq!(fractional_part(0.5f64), 0.5);
        assert_eq!(fractional_part(-4.5f64), 0.5);
        assert_eq!(fractional_part(1.3f64), 0.3);
        assert_eq!(fractional_part(-0.5f64), 0.5);
        assert_eq!(fractional_part(-2f64), 0f64);
        assert_eq!(fractional_part(2.999999999f64), 0f64);
    }
}

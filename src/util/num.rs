/// Largest signed integer exactly representable as an `f64` (`2^53 - 1`).
pub const MAX_SAFE_I64_INT: i64 = 9_007_199_254_740_991;

/// Safely converts an `i64` to `f64` if and only if it is exactly
/// representable.
///
/// ## Errors
/// Returns `Err(error)` if the value exceeds `MAX_SAFE_I64_INT` in absolute
/// value.
///
/// ## Example
/// ```
/// use umni::util::num::{MAX_SAFE_I64_INT, i64_to_f64_checked};
///
/// assert_eq!(i64_to_f64_checked(42, "too big!"), Ok(42.0));
/// assert!(i64_to_f64_checked(MAX_SAFE_I64_INT + 1, "too big!").is_err());
/// ```
#[allow(clippy::cast_precision_loss)]
pub fn i64_to_f64_checked<E>(value: i64, error: E) -> Result<f64, E> {
    if value.unsigned_abs() > MAX_SAFE_I64_INT.unsigned_abs() {
        return Err(error);
    }
    Ok(value as f64)
}

/// Converts an `f64` to `i64` when the value is integral and exactly
/// representable, returning `None` otherwise.
///
/// This is the check behind Natural/Real reclassification: an arithmetic
/// result becomes a Natural only if this returns `Some`.
///
/// ## Example
/// ```
/// use umni::util::num::f64_to_natural;
///
/// assert_eq!(f64_to_natural(5.0), Some(5));
/// assert_eq!(f64_to_natural(-12.0), Some(-12));
/// assert_eq!(f64_to_natural(5.5), None);
/// assert_eq!(f64_to_natural(f64::INFINITY), None);
/// assert_eq!(f64_to_natural(1e300), None);
/// ```
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
pub fn f64_to_natural(value: f64) -> Option<i64> {
    if !value.is_finite() || value.fract() != 0.0 || value.abs() > MAX_SAFE_I64_INT as f64 {
        return None;
    }
    Some(value as i64)
}

/// Converts a repetition factor to a count, flooring fractional values and
/// mapping negative or non-finite values to zero.
///
/// ## Example
/// ```
/// use umni::util::num::repeat_count;
///
/// assert_eq!(repeat_count(3.0), 3);
/// assert_eq!(repeat_count(2.9), 2);
/// assert_eq!(repeat_count(-1.0), 0);
/// ```
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn repeat_count(value: f64) -> usize {
    let floored = value.floor();
    if !floored.is_finite() || floored <= 0.0 {
        return 0;
    }
    floored as usize
}

//! Numeric coercions shared by the sequence types.
//!
//! Sequence parameters arrive as any primitive number (`i32`, `u64`, `f64`, ...)
//! through [`ToPrimitive`]. These helpers decide whether such a value is finite,
//! whether it is an exact integer that survives a round trip through an `f64`
//! (a "safe" integer), and how a possibly fractional position is truncated into
//! an index.

use num_traits::ToPrimitive;

/// The largest integer `n` such that `n` and `n + 1` are both exactly
/// representable as an `f64`.
pub const MAX_SAFE_INTEGER: i64 = (1 << 53) - 1;

/// The negation of [`MAX_SAFE_INTEGER`].
pub const MIN_SAFE_INTEGER: i64 = -MAX_SAFE_INTEGER;

/// Returns `true` if `value` is neither NaN nor infinite.
///
/// Integer inputs are always finite.
pub fn is_finite<N: ToPrimitive>(value: N) -> bool {
    value.to_f64().is_some_and(f64::is_finite)
}

/// Returns `value` as an `i64` if it is an integer with no fractional part
/// that fits into `i64`.
///
/// Returns `None` for NaN, infinities and fractional values.
pub fn to_exact_integer<N: ToPrimitive>(value: N) -> Option<i64> {
    let float = value.to_f64()?;
    if !float.is_finite() || float.fract() != 0.0 {
        return None;
    }
    value.to_i64()
}

/// Returns `value` as an `i64` if it is an exact integer within
/// `MIN_SAFE_INTEGER..=MAX_SAFE_INTEGER`.
pub fn to_safe_integer<N: ToPrimitive>(value: N) -> Option<i64> {
    to_exact_integer(value).filter(|v| is_safe_integer(*v))
}

#[inline]
pub fn is_safe_integer(value: i64) -> bool {
    (MIN_SAFE_INTEGER..=MAX_SAFE_INTEGER).contains(&value)
}

/// Truncates `value` toward zero into an `i128` position.
///
/// Values too large in magnitude (including infinities) saturate to
/// `i128::MAX` / `i128::MIN`. Returns `None` for NaN.
pub fn to_truncated_index<N: ToPrimitive>(value: N) -> Option<i128> {
    if let Some(index) = value.to_i128() {
        return Some(index);
    }
    let float = value.to_f64()?;
    if float.is_nan() {
        None
    } else if float > 0.0 {
        Some(i128::MAX)
    } else {
        Some(i128::MIN)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_finite() {
        assert!(is_finite(0));
        assert!(is_finite(u128::MAX));
        assert!(is_finite(-0.5f64));
        assert!(!is_finite(f64::NAN));
        assert!(!is_finite(f64::INFINITY));
        assert!(!is_finite(f32::NEG_INFINITY));
    }

    #[test]
    fn test_to_exact_integer() {
        assert_eq!(to_exact_integer(42u8), Some(42));
        assert_eq!(to_exact_integer(-7i32), Some(-7));
        assert_eq!(to_exact_integer(3.0f64), Some(3));
        assert_eq!(to_exact_integer(-0.0f64), Some(0));
        assert_eq!(to_exact_integer(3.5f64), None);
        assert_eq!(to_exact_integer(f64::NAN), None);
        assert_eq!(to_exact_integer(f64::INFINITY), None);
        assert_eq!(to_exact_integer(u64::MAX), None);
        assert_eq!(to_exact_integer(i64::MIN), Some(i64::MIN));
    }

    #[test]
    fn test_to_safe_integer() {
        assert_eq!(to_safe_integer(MAX_SAFE_INTEGER), Some(MAX_SAFE_INTEGER));
        assert_eq!(to_safe_integer(MIN_SAFE_INTEGER), Some(MIN_SAFE_INTEGER));
        assert_eq!(to_safe_integer(MAX_SAFE_INTEGER + 1), None);
        assert_eq!(to_safe_integer(MIN_SAFE_INTEGER - 1), None);
        assert_eq!(to_safe_integer(std::f64::consts::PI), None);
        assert_eq!(to_safe_integer(9007199254740992f64), None);
    }

    #[test]
    fn test_to_truncated_index() {
        assert_eq!(to_truncated_index(3.5f64), Some(3));
        assert_eq!(to_truncated_index(-3.5f64), Some(-3));
        assert_eq!(to_truncated_index(-4i32), Some(-4));
        assert_eq!(to_truncated_index(f64::NAN), None);
        assert_eq!(to_truncated_index(f64::INFINITY), Some(i128::MAX));
        assert_eq!(to_truncated_index(f64::NEG_INFINITY), Some(i128::MIN));
        assert_eq!(to_truncated_index(u128::MAX), Some(i128::MAX));
    }
}

//! The [`Range`] value type.

use std::{
    fmt,
    ops::{Bound, RangeBounds},
};

use num_traits::ToPrimitive;
use stride_common::{
    Result,
    error::Error,
    num::{to_exact_integer, to_safe_integer, to_truncated_index},
    result::verify_arg_some,
    verify_arg,
};

use crate::iter::RangeIter;

/// A finite arithmetic progression of integers.
///
/// Holds `start` (the first element), `stop` (an exclusive bound) and a nonzero
/// `step`. The elements are `start + k * step` for every `k >= 0` that stays
/// strictly before `stop` in the direction of `step`. When the direction from
/// `start` to `stop` disagrees with the sign of `step`, the range is empty.
///
/// The fields are stored verbatim; two ranges compare equal when their fields
/// do, even if they describe the same elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Range {
    start: i64,
    stop: i64,
    step: i64,
}

impl Range {
    /// Creates a range from `start` (inclusive) to `stop` (exclusive) by `step`.
    ///
    /// Integer and floating point arguments are accepted, as long as each one
    /// is an exact integer within `MIN_SAFE_INTEGER..=MAX_SAFE_INTEGER`.
    ///
    /// # Errors
    ///
    /// Returns an `InvalidArgument` error if `step` is zero, or if any argument
    /// is NaN, infinite, fractional or outside the safe integer window.
    pub fn new<A, B, C>(start: A, stop: B, step: C) -> Result<Range>
    where
        A: ToPrimitive,
        B: ToPrimitive,
        C: ToPrimitive,
    {
        let start = safe_integer_arg("start", start)?;
        let stop = safe_integer_arg("stop", stop)?;
        let step = safe_integer_arg("step", step)?;
        verify_arg!(step, step != 0);
        Ok(Range { start, stop, step })
    }

    /// Creates the range `0..stop` with a step of one.
    pub fn from_stop<N: ToPrimitive>(stop: N) -> Result<Range> {
        Range::new(0, stop, 1)
    }

    /// Creates the range `start..stop` with a step of one.
    pub fn from_bounds<A, B>(start: A, stop: B) -> Result<Range>
    where
        A: ToPrimitive,
        B: ToPrimitive,
    {
        Range::new(start, stop, 1)
    }

    /// Builds a range from values derived from an already validated range.
    ///
    /// Derived values may sit up to one `step` outside the safe integer window.
    fn from_parts(start: i64, stop: i64, step: i64) -> Range {
        debug_assert_ne!(step, 0);
        log::trace!("derived Range({start}, {stop}, {step})");
        Range { start, stop, step }
    }

    pub fn start(&self) -> i64 {
        self.start
    }

    pub fn stop(&self) -> i64 {
        self.stop
    }

    pub fn step(&self) -> i64 {
        self.step
    }

    /// Returns a fresh cursor over the elements of the range.
    pub fn iter(&self) -> RangeIter {
        RangeIter::new(self)
    }

    /// The number of elements: `max(0, ceil((stop - start) / step))`.
    pub fn len(&self) -> u64 {
        let span = self.stop - self.start;
        let quotient = span / self.step;
        let remainder = span % self.step;
        let ceil = if remainder != 0 && (remainder > 0) == (self.step > 0) {
            quotient + 1
        } else {
            quotient
        };
        u64::try_from(ceil).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.sign() == 0
    }

    /// Returns a range with the same elements in the opposite order.
    ///
    /// The reversed range starts at the last element, stops one step before
    /// `start`, and walks by `-step`. Reversing an empty range gives an empty
    /// range.
    pub fn reverse(&self) -> Range {
        let start = self.sentinel() - self.step;
        let stop = self.start - self.step;
        Range::from_parts(start, stop, -self.step)
    }

    /// Returns `true` if `element` is one of the values the range yields.
    ///
    /// Values that are not integers (fractions, NaN, infinities) are never
    /// included.
    pub fn includes<N: ToPrimitive>(&self, element: N) -> bool {
        to_exact_integer(element)
            .is_some_and(|element| self.includes_integer(i128::from(element)))
    }

    /// Returns the element at position `n`.
    ///
    /// A negative `n` counts back from the end, so `at(-1)` is the last
    /// element. Returns `None` if `n` is not a safe integer or the position is
    /// outside the range.
    pub fn at<N: ToPrimitive>(&self, n: N) -> Option<i64> {
        let n = i128::from(to_safe_integer(n)?);
        let index = if n < 0 {
            n + i128::from(self.len())
        } else {
            n
        };
        let element = i128::from(self.start) + i128::from(self.step) * index;
        if self.is_contained(element) {
            i64::try_from(element).ok()
        } else {
            None
        }
    }

    /// Returns the position of `element`, or `None` if the range does not
    /// include it.
    pub fn index_of<N: ToPrimitive>(&self, element: N) -> Option<u64> {
        let element = i128::from(to_exact_integer(element)?);
        if !self.includes_integer(element) {
            return None;
        }
        let index = (element - i128::from(self.start)) / i128::from(self.step);
        u64::try_from(index).ok()
    }

    /// Returns the sub-range holding the elements at positions within `bounds`.
    ///
    /// Positions follow [`Range::at`]: a negative position counts back from the
    /// end. Fractional positions are truncated toward zero and every position
    /// is clamped to `0..=len`. A NaN start position resolves past the end and
    /// a NaN end position resolves to zero, so either makes the slice empty.
    ///
    /// ```
    /// use stride_range::range;
    ///
    /// let r = range!(10, 0, -2).unwrap();
    /// assert_eq!(r.slice(1..-1).iter().collect::<Vec<_>>(), vec![8, 6, 4]);
    /// assert_eq!(r.slice(3.5..).iter().collect::<Vec<_>>(), vec![4, 2]);
    /// ```
    pub fn slice<N, R>(&self, bounds: R) -> Range
    where
        N: ToPrimitive + Copy,
        R: RangeBounds<N>,
    {
        let len = i128::from(self.len());
        let from = match bounds.start_bound() {
            Bound::Included(&i) => resolve_position(i, len).unwrap_or(len),
            Bound::Excluded(&i) => resolve_position(i, len).map_or(len, |i| (i + 1).min(len)),
            Bound::Unbounded => 0,
        };
        let to = match bounds.end_bound() {
            Bound::Included(&j) => resolve_position(j, len).map_or(0, |j| (j + 1).min(len)),
            Bound::Excluded(&j) => resolve_position(j, len).unwrap_or(0),
            Bound::Unbounded => len,
        };
        let to = to.max(from);
        // Both positions are clamped to `0..=len`, so the products stay within
        // one step of the existing bounds.
        let start = self.start + self.step * from as i64;
        let stop = self.start + self.step * to as i64;
        Range::from_parts(start, stop, self.step)
    }

    /// +1 for an ascending range, -1 for a descending one, 0 when empty.
    fn sign(&self) -> i64 {
        let sign = (self.stop - self.start).signum();
        if sign == self.step.signum() { sign } else { 0 }
    }

    /// The first value at or beyond `stop` that is congruent to `start`
    /// modulo `step`.
    ///
    /// Iteration ends when the running value equals this, so it never
    /// overshoots by a partial step.
    pub(crate) fn sentinel(&self) -> i64 {
        self.stop + floor_mod(self.start - self.stop, self.step)
    }

    /// Whether `element` lies between `start` (inclusive) and `stop`
    /// (exclusive) in the direction of the range.
    fn is_contained(&self, element: i128) -> bool {
        let start = i128::from(self.start);
        let stop = i128::from(self.stop);
        match self.sign() {
            1 => start <= element && element < stop,
            -1 => stop < element && element <= start,
            _ => false,
        }
    }

    fn is_congruent(&self, element: i128) -> bool {
        // Remainder sign is irrelevant when only comparing against zero.
        (i128::from(self.start) - element) % i128::from(self.step) == 0
    }

    fn includes_integer(&self, element: i128) -> bool {
        self.is_contained(element) && self.is_congruent(element)
    }
}

/// Remainder of `dividend / divisor` carrying the sign of the divisor.
#[inline]
fn floor_mod(dividend: i64, divisor: i64) -> i64 {
    ((dividend % divisor) + divisor) % divisor
}

fn safe_integer_arg<N: ToPrimitive>(name: &str, value: N) -> Result<i64> {
    verify_arg_some(to_safe_integer(value), name, "must be a safe integer")
}

/// Resolves a slice position into `0..=len`, or `None` for NaN.
fn resolve_position<N: ToPrimitive>(position: N, len: i128) -> Option<i128> {
    let position = to_truncated_index(position)?;
    Some(if position < 0 {
        position.saturating_add(len).max(0)
    } else {
        position.min(len)
    })
}

impl fmt::Display for Range {
    /// Formats as `Range(start, stop, step)`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Range({}, {}, {})", self.start, self.stop, self.step)
    }
}

impl TryFrom<std::ops::Range<i64>> for Range {
    type Error = Error;

    fn try_from(range: std::ops::Range<i64>) -> Result<Range> {
        Range::from_bounds(range.start, range.end)
    }
}

impl IntoIterator for Range {
    type Item = i64;
    type IntoIter = RangeIter;

    fn into_iter(self) -> RangeIter {
        RangeIter::new(&self)
    }
}

impl IntoIterator for &Range {
    type Item = i64;
    type IntoIter = RangeIter;

    fn into_iter(self) -> RangeIter {
        RangeIter::new(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_floor_mod_follows_divisor_sign() {
        assert_eq!(floor_mod(-5, 2), 1);
        assert_eq!(floor_mod(5, 2), 1);
        assert_eq!(floor_mod(5, -2), -1);
        assert_eq!(floor_mod(-5, -2), -1);
        assert_eq!(floor_mod(4, -2), 0);
        assert_eq!(floor_mod(0, 3), 0);
    }

    #[test]
    fn test_sign() {
        assert_eq!(Range::new(0, 10, 1).unwrap().sign(), 1);
        assert_eq!(Range::new(10, 0, -1).unwrap().sign(), -1);
        assert_eq!(Range::new(0, 10, -1).unwrap().sign(), 0);
        assert_eq!(Range::new(10, 0, 1).unwrap().sign(), 0);
        assert_eq!(Range::new(0, 0, 1).unwrap().sign(), 0);
        assert_eq!(Range::new(0, 0, -1).unwrap().sign(), 0);
    }

    #[test]
    fn test_sentinel() {
        assert_eq!(Range::new(1, 5, 2).unwrap().sentinel(), 5);
        assert_eq!(Range::new(1, 6, 2).unwrap().sentinel(), 7);
        assert_eq!(Range::new(0, -5, -2).unwrap().sentinel(), -6);
        assert_eq!(Range::new(0, -3, -1).unwrap().sentinel(), -3);
        assert_eq!(Range::new(0, 10, 3).unwrap().sentinel(), 12);
    }

    #[test]
    fn test_resolve_position() {
        assert_eq!(resolve_position(-2, 4), Some(2));
        assert_eq!(resolve_position(-10, 4), Some(0));
        assert_eq!(resolve_position(10, 4), Some(4));
        assert_eq!(resolve_position(3.9, 4), Some(3));
        assert_eq!(resolve_position(-0.5, 4), Some(0));
        assert_eq!(resolve_position(f64::NEG_INFINITY, 4), Some(0));
        assert_eq!(resolve_position(f64::NAN, 4), None);
    }
}

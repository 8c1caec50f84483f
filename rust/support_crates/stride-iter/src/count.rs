//! An endless, evenly spaced sequence of numbers.

use std::iter::FusedIterator;

use num_traits::{Num, ToPrimitive};
use stride_common::{Result, num::is_finite, verify_arg};

/// Creates an iterator that yields `start`, `start + step`, `start + 2 * step`, ...
///
/// The sequence never ends on its own; the caller stops pulling. Both integer
/// and floating point parameters are accepted.
///
/// # Errors
///
/// Returns an `InvalidArgument` error if `start` or `step` is NaN or infinite.
///
/// # Examples
///
/// ```
/// use stride_iter::count;
///
/// let values: Vec<i32> = count(10, -5).unwrap().take(4).collect();
/// assert_eq!(values, vec![10, 5, 0, -5]);
/// ```
pub fn count<T>(start: T, step: T) -> Result<Count<T>>
where
    T: Num + ToPrimitive + Copy,
{
    verify_arg!(start, is_finite(start));
    verify_arg!(step, is_finite(step));
    Ok(Count {
        start,
        step,
        last: None,
    })
}

/// An endless arithmetic progression, created by [`count`].
///
/// Cloning a fresh `Count` gives an independent cursor that starts over from
/// the same `start`.
///
/// For integer `T`, stepping past the bounds of `T` panics in debug builds,
/// the same as [`std::ops::RangeFrom`].
#[derive(Debug, Clone)]
pub struct Count<T> {
    start: T,
    step: T,
    /// The most recently yielded value, `None` before the first pull.
    last: Option<T>,
}

impl<T: Copy> Count<T> {
    pub fn start(&self) -> T {
        self.start
    }

    pub fn step(&self) -> T {
        self.step
    }
}

impl<T: Num + Copy> Default for Count<T> {
    /// Counts up from zero by one.
    fn default() -> Self {
        Count {
            start: T::zero(),
            step: T::one(),
            last: None,
        }
    }
}

impl<T: Num + Copy> Iterator for Count<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        let value = match self.last {
            None => self.start,
            Some(last) => last + self.step,
        };
        self.last = Some(value);
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

impl<T: Num + Copy> FusedIterator for Count<T> {}

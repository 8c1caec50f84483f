//! Cursor over the elements of a [`Range`].

use std::iter::FusedIterator;

use crate::range::Range;

/// An iterator over the elements of a [`Range`], created by [`Range::iter`].
///
/// The cursor walks `front` toward `back` by `step`. `back` starts at the
/// range's sentinel, which is congruent to `start`, so both ends meet with an
/// exact equality test and the cursor never overshoots. Once they meet, the
/// cursor stays exhausted.
#[derive(Debug, Clone)]
pub struct RangeIter {
    /// The next value yielded from the front.
    front: i64,
    /// One step past the next value yielded from the back.
    back: i64,
    step: i64,
}

impl RangeIter {
    pub(crate) fn new(range: &Range) -> RangeIter {
        log::trace!("iterating {range}");
        let (front, back) = if range.is_empty() {
            (range.start(), range.start())
        } else {
            (range.start(), range.sentinel())
        };
        RangeIter {
            front,
            back,
            step: range.step(),
        }
    }

    /// The number of elements left to yield.
    pub fn remaining(&self) -> u64 {
        // `back - front` is always an exact, same-signed multiple of `step`.
        ((self.back - self.front) / self.step).unsigned_abs()
    }
}

impl Iterator for RangeIter {
    type Item = i64;

    #[inline]
    fn next(&mut self) -> Option<i64> {
        if self.front == self.back {
            return None;
        }
        let value = self.front;
        self.front += self.step;
        Some(value)
    }

    fn nth(&mut self, n: usize) -> Option<i64> {
        match u64::try_from(n) {
            Ok(n) if n < self.remaining() => {
                // `n` is below the remaining count, so the jump stays in range.
                self.front += self.step * n as i64;
                self.next()
            }
            _ => {
                self.front = self.back;
                None
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match usize::try_from(self.remaining()) {
            Ok(n) => (n, Some(n)),
            Err(_) => (usize::MAX, None),
        }
    }

    fn count(self) -> usize {
        self.len()
    }

    fn last(mut self) -> Option<i64> {
        self.next_back()
    }
}

impl DoubleEndedIterator for RangeIter {
    #[inline]
    fn next_back(&mut self) -> Option<i64> {
        if self.front == self.back {
            return None;
        }
        self.back -= self.step;
        Some(self.back)
    }
}

impl ExactSizeIterator for RangeIter {}

impl FusedIterator for RangeIter {}

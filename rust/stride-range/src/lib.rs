//! Finite arithmetic progressions of integers.
//!
//! A [`Range`] describes the integers `start, start + step, start + 2 * step, ...`
//! that lie before `stop` in the direction of `step`. It is an immutable value:
//! iterating it creates an independent [`RangeIter`] cursor, and operations such
//! as [`Range::reverse`] and [`Range::slice`] return new ranges.
//!
//! Lookups never fail: [`Range::at`] and [`Range::index_of`] return `None` for
//! misses, and [`Range::includes`] returns `false` for values that are not
//! integers. Only construction validates its arguments.
//!
//! # Examples
//!
//! ```
//! use stride_range::{Range, range};
//!
//! let r = range!(0, 10, 3).unwrap();
//! assert_eq!(r.iter().collect::<Vec<_>>(), vec![0, 3, 6, 9]);
//! assert_eq!(r.len(), 4);
//! assert_eq!(r.at(-1), Some(9));
//! assert_eq!(r.index_of(6), Some(2));
//! assert_eq!(r.reverse().to_string(), "Range(9, -3, -3)");
//!
//! let descending = Range::new(10, 0, -1).unwrap();
//! assert!(descending.includes(10));
//! assert!(!descending.includes(0));
//! ```

pub mod iter;
pub mod range;


pub use iter::RangeIter;
pub use range::Range;

/// Builds a [`Range`] from one to three positional arguments.
///
/// - `range!(stop)` is `Range::new(0, stop, 1)`
/// - `range!(start, stop)` is `Range::new(start, stop, 1)`
/// - `range!(start, stop, step)` is `Range::new(start, stop, step)`
///
/// Evaluates to a `stride_common::Result<Range>`.
#[macro_export]
macro_rules! range {
    ($stop:expr $(,)?) => {
        $crate::Range::from_stop($stop)
    };
    ($start:expr, $stop:expr $(,)?) => {
        $crate::Range::from_bounds($start, $stop)
    };
    ($start:expr, $stop:expr, $step:expr $(,)?) => {
        $crate::Range::new($start, $stop, $step)
    };
}

//! # Stride: lazy integer sequences
//!
//! Stride is a small set of pull-based sequence utilities built on the standard
//! [`Iterator`] protocol. Every sequence is lazy: nothing is computed until the
//! consumer asks for the next element, and no sequence holds resources that
//! need releasing.
//!
//! ## Module Organization
//!
//! * [`ranges`] - [`Range`], a finite arithmetic progression of integers with
//!   membership, indexing, reversal and slicing
//! * [`iter`] - [`count`], an endless arithmetic progression, and [`zip`], a
//!   lockstep combinator that stops at its shortest input
//! * [`common`] - The shared error type and numeric coercions
//!
//! ## Errors
//!
//! Only construction fails. [`Range::new`] rejects a zero step and parameters
//! that are not exact safe integers; [`count`] rejects non-finite parameters.
//! Both report an `InvalidArgument` error. Lookups such as [`Range::at`] and
//! [`Range::index_of`] return `None` on a miss instead.
//!
//! ## Getting Started
//!
//! ```
//! use stride::{Range, count, range, zip};
//!
//! let evens = range!(0, 10, 2)?;
//! let labelled: Vec<(i64, char)> = zip((evens, "abcdefg".chars())).collect();
//! assert_eq!(labelled, vec![(0, 'a'), (2, 'b'), (4, 'c'), (6, 'd'), (8, 'e')]);
//!
//! let countdown: Vec<i32> = count(10, -5)?.take(4).collect();
//! assert_eq!(countdown, vec![10, 5, 0, -5]);
//!
//! let r = Range::new(10, 0, -1)?;
//! assert_eq!(r.reverse().iter().collect::<Vec<_>>(), (1..=10).collect::<Vec<_>>());
//! # Ok::<(), stride::common::error::Error>(())
//! ```

pub use stride_common as common;
pub use stride_iter as iter;
pub use stride_range as ranges;

pub use stride_iter::{count, zip};
pub use stride_range::{Range, range};

//! Lockstep aggregation of several sequences.
//!
//! [`zip`] takes a set of inputs and yields one aggregate per position, built
//! from exactly one item of every input. The output ends as soon as any input
//! ends. The supported input sets are:
//!
//! - tuples of up to eight `IntoIterator`s, yielding tuples (items may differ in type)
//! - a `Vec` of same-typed `IntoIterator`s, yielding a `Vec` per position
//! - `()`, which yields nothing
//!
//! # Examples
//!
//! ```
//! use stride_iter::zip;
//!
//! let pairs: Vec<(char, i32)> = zip(("abcde".chars(), [1, 2])).collect();
//! assert_eq!(pairs, vec![('a', 1), ('b', 2)]);
//!
//! let rows: Vec<Vec<u8>> = zip(vec![vec![1, 2], vec![3, 4], vec![5, 6]]).collect();
//! assert_eq!(rows, vec![vec![1, 3, 5], vec![2, 4, 6]]);
//! ```

use std::{fmt, iter::FusedIterator};

/// A fixed set of iterators that are advanced together.
pub trait Lockstep {
    /// One item from every iterator in the set.
    type Item;

    /// Pulls the next item from every iterator, in order.
    ///
    /// Returns `None` as soon as any iterator is exhausted; the remaining
    /// iterators are not pulled on that call. An empty set always returns `None`.
    fn pull(&mut self) -> Option<Self::Item>;

    /// The smallest of the member iterators' size hints.
    fn size_hint(&self) -> (usize, Option<usize>);
}

/// Conversion of a set of `IntoIterator`s into a [`Lockstep`] set of iterators.
pub trait IntoLockstep {
    type Lockstep: Lockstep;

    fn into_lockstep(self) -> Self::Lockstep;
}

/// Creates an iterator that aggregates the items of every input in `sources`.
///
/// The `i`-th element of each aggregate comes from the `i`-th input, all taken
/// at the same position. The resulting iterator is as long as the shortest
/// input, and yields nothing if there are no inputs.
pub fn zip<S: IntoLockstep>(sources: S) -> Zip<S::Lockstep> {
    Zip::new(sources.into_lockstep())
}

/// Iterator adapter that yields aggregated items from a [`Lockstep`] set.
///
/// The next aggregate is always fetched one step ahead of the one being
/// returned, so exhaustion of any input is observed at the element boundary
/// where it occurs. Once exhausted, the inputs are never pulled again.
pub struct Zip<L: Lockstep> {
    /// The inputs being advanced together.
    sources: L,
    /// The pre-fetched aggregate returned by the next call to `next()`.
    next: Option<L::Item>,
}

impl<L: Lockstep> Zip<L> {
    /// Creates a new `Zip`, immediately pre-fetching the first aggregate.
    pub fn new(mut sources: L) -> Self {
        let next = sources.pull();
        Zip { sources, next }
    }

    /// Returns a reference to the aggregate the next call to `next()` yields.
    pub fn peek(&self) -> Option<&L::Item> {
        self.next.as_ref()
    }
}

impl<L: Lockstep> Iterator for Zip<L> {
    type Item = L::Item;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let value = self.next.take()?;
        self.next = self.sources.pull();
        Some(value)
    }

    /// The inputs' smallest size hint, plus one for the buffered aggregate.
    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.next.is_none() {
            return (0, Some(0));
        }
        let (lower, upper) = self.sources.size_hint();
        (
            lower.saturating_add(1),
            upper.and_then(|n| n.checked_add(1)),
        )
    }
}

impl<L: Lockstep> FusedIterator for Zip<L> {}

impl<L> Clone for Zip<L>
where
    L: Lockstep + Clone,
    L::Item: Clone,
{
    fn clone(&self) -> Self {
        Zip {
            sources: self.sources.clone(),
            next: self.next.clone(),
        }
    }
}

impl<L> fmt::Debug for Zip<L>
where
    L: Lockstep + fmt::Debug,
    L::Item: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Zip")
            .field("sources", &self.sources)
            .field("next", &self.next)
            .finish()
    }
}

fn min_size_hint(
    a: (usize, Option<usize>),
    b: (usize, Option<usize>),
) -> (usize, Option<usize>) {
    let upper = match (a.1, b.1) {
        (Some(x), Some(y)) => Some(x.min(y)),
        (Some(x), None) | (None, Some(x)) => Some(x),
        (None, None) => None,
    };
    (a.0.min(b.0), upper)
}

impl Lockstep for () {
    type Item = ();

    fn pull(&mut self) -> Option<()> {
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(0))
    }
}

impl IntoLockstep for () {
    type Lockstep = ();

    fn into_lockstep(self) -> Self::Lockstep {}
}

impl<I: Iterator> Lockstep for Vec<I> {
    type Item = Vec<I::Item>;

    fn pull(&mut self) -> Option<Self::Item> {
        if self.is_empty() {
            return None;
        }
        self.iter_mut().map(Iterator::next).collect()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.is_empty() {
            return (0, Some(0));
        }
        self.iter()
            .map(Iterator::size_hint)
            .fold((usize::MAX, None), min_size_hint)
    }
}

impl<I: IntoIterator> IntoLockstep for Vec<I> {
    type Lockstep = Vec<I::IntoIter>;

    fn into_lockstep(self) -> Self::Lockstep {
        self.into_iter().map(IntoIterator::into_iter).collect()
    }
}

macro_rules! impl_lockstep_tuple {
    ($($I:ident),+) => {
        #[allow(non_snake_case)]
        impl<$($I: Iterator),+> Lockstep for ($($I,)+) {
            type Item = ($($I::Item,)+);

            fn pull(&mut self) -> Option<Self::Item> {
                let ($($I,)+) = self;
                Some(($($I.next()?,)+))
            }

            fn size_hint(&self) -> (usize, Option<usize>) {
                let ($($I,)+) = self;
                let hint = (usize::MAX, None);
                $(let hint = min_size_hint(hint, $I.size_hint());)+
                hint
            }
        }

        #[allow(non_snake_case)]
        impl<$($I: IntoIterator),+> IntoLockstep for ($($I,)+) {
            type Lockstep = ($($I::IntoIter,)+);

            fn into_lockstep(self) -> Self::Lockstep {
                let ($($I,)+) = self;
                ($($I.into_iter(),)+)
            }
        }
    };
}

impl_lockstep_tuple!(A);
impl_lockstep_tuple!(A, B);
impl_lockstep_tuple!(A, B, C);
impl_lockstep_tuple!(A, B, C, D);
impl_lockstep_tuple!(A, B, C, D, E);
impl_lockstep_tuple!(A, B, C, D, E, F);
impl_lockstep_tuple!(A, B, C, D, E, F, G);
impl_lockstep_tuple!(A, B, C, D, E, F, G, H);

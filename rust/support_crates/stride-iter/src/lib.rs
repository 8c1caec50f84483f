//! Lazy sequence generators and combinators.
//!
//! - [`count`] - An endless arithmetic progression (`start, start + step, ...`)
//! - [`zip`] - Lockstep aggregation of several sequences, stopping at the shortest
//!
//! # Key Types
//!
//! - [`Count`] - The iterator returned by [`count`]
//! - [`Zip`] - The look-ahead iterator returned by [`zip`]
//! - [`Lockstep`] / [`IntoLockstep`] - The set of inputs a [`Zip`] pulls from

pub mod count;
pub mod zip;

pub use count::{Count, count};
pub use zip::{IntoLockstep, Lockstep, Zip, zip};

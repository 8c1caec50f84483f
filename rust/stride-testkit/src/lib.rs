//! Test utilities and helpers for the stride project.
//!
//! This crate provides:
//! - Range parameter generation (exhaustive grids and seeded random samples)
//! - A naive reference materialization of the elements a range yields
//! - Probe windows for membership checks around a range's bounds
//!
//! # Usage
//!
//! This crate is primarily intended for use within the stride test suite.
//! It deliberately does not depend on the crates it tests, so each test
//! compares against an independent oracle.

pub mod data_gen;

pub use data_gen::RangeParams;

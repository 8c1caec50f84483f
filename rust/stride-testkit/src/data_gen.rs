//! Data generation utilities for testing.
//!
//! This module produces `(start, stop, step)` triples with a nonzero step,
//! either as an exhaustive grid over small magnitudes or as a seeded random
//! sample that mixes small, large and near-boundary values.

use std::ops::RangeInclusive;

use itertools::iproduct;

/// The largest integer that round-trips through an `f64` exactly.
pub const MAX_SAFE_INTEGER: i64 = (1 << 53) - 1;

/// Parameters of an integer range with a nonzero step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RangeParams {
    pub start: i64,
    pub stop: i64,
    pub step: i64,
}

impl RangeParams {
    pub fn new(start: i64, stop: i64, step: i64) -> RangeParams {
        assert_ne!(step, 0);
        RangeParams { start, stop, step }
    }

    /// Materializes the elements by walking from `start` toward `stop`.
    ///
    /// This is a plain loop with an inequality test, independent from the
    /// sentinel-based iteration under test. Intended for small ranges only.
    pub fn elements(&self) -> Vec<i64> {
        let mut elements = Vec::new();
        let mut value = self.start;
        if self.step > 0 {
            while value < self.stop {
                elements.push(value);
                value += self.step;
            }
        } else {
            while value > self.stop {
                elements.push(value);
                value += self.step;
            }
        }
        elements
    }

    /// A window of candidate elements reaching a couple of steps past both bounds.
    pub fn probe_window(&self) -> RangeInclusive<i64> {
        let margin = 2 * self.step.abs();
        let low = self.start.min(self.stop) - margin;
        let high = self.start.max(self.stop) + margin;
        low..=high
    }
}

/// Every triple with `start` and `stop` in `-bound..=bound` and a nonzero
/// `step` in `-max_step..=max_step`.
pub fn parameter_grid(bound: i64, max_step: i64) -> impl Iterator<Item = RangeParams> {
    iproduct!(-bound..=bound, -bound..=bound, -max_step..=max_step)
        .filter(|&(_, _, step)| step != 0)
        .map(|(start, stop, step)| RangeParams::new(start, stop, step))
}

/// `count` random triples, reproducible for a given `seed`.
///
/// Bounds are drawn within `magnitude` of a random anchor, and the anchor is
/// occasionally pushed next to the edge of the safe integer window. The span
/// between bounds is kept below `64 * |step|` so the element lists stay small.
pub fn random_params(seed: u64, count: usize, magnitude: i64) -> Vec<RangeParams> {
    assert!(magnitude > 0);
    let mut rng = fastrand::Rng::with_seed(seed);
    (0..count)
        .map(|_| {
            let step = loop {
                let step = rng.i64(-magnitude..=magnitude);
                if step != 0 {
                    break step;
                }
            };
            let reach = 64 * step.abs();
            let anchor = match rng.u8(0..8) {
                0 => MAX_SAFE_INTEGER - reach,
                1 => -MAX_SAFE_INTEGER + reach,
                _ => rng.i64(-magnitude * 1000..=magnitude * 1000),
            };
            let start = anchor + rng.i64(-reach..=reach) / 2;
            let stop = anchor + rng.i64(-reach..=reach) / 2;
            RangeParams::new(start, stop, step)
        })
        .collect()
}

//! Uniform random source used during setup
//!
//! The simulation only draws randomness while building groups. Any source of
//! uniform values in `[0, 1)` can drive it: a seeded `rand` generator in the
//! application, or a fixed sequence in tests.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// A source of uniform values in `[0, 1)`
pub trait RandomSource {
    /// Next uniform value in `[0, 1)`
    fn uniform(&mut self) -> f64;

    /// Integer in `[lo, hi)`, computed as `floor(lo + u * (hi - lo))`
    ///
    /// Values are clamped into range so a source that returns exactly 1.0
    /// cannot produce `hi`.
    fn int_in_range(&mut self, lo: i32, hi: i32) -> i32 {
        if hi <= lo {
            return lo;
        }
        let u = self.uniform();
        let v = (lo as f64 + u * (hi - lo) as f64).floor() as i32;
        v.clamp(lo, hi - 1)
    }

    /// Returns true with probability `p`
    fn chance(&mut self, p: f64) -> bool {
        self.uniform() < p
    }
}

/// Adapter from any `rand` generator
#[derive(Debug, Clone)]
pub struct RngSource<R> {
    rng: R,
}

impl<R: Rng> RngSource<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RngSource<StdRng> {
    /// Deterministic source for reproducible fields
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    /// Source seeded from the operating system
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }
}

impl<R: Rng> RandomSource for RngSource<R> {
    fn uniform(&mut self) -> f64 {
        self.rng.gen::<f64>()
    }
}

/// Replays a fixed cycle of values
///
/// Useful for driving setup through exact code paths in tests.
#[derive(Debug, Clone)]
pub struct SequenceSource {
    values: Vec<f64>,
    cursor: usize,
}

impl SequenceSource {
    /// Create a source cycling through `values` (a lone 0.0 if empty)
    pub fn new(values: impl Into<Vec<f64>>) -> Self {
        let mut values = values.into();
        if values.is_empty() {
            values.push(0.0);
        }
        Self { values, cursor: 0 }
    }

    /// Source that always returns the same value
    pub fn constant(value: f64) -> Self {
        Self::new(vec![value])
    }

    /// Number of values drawn so far
    pub fn draws(&self) -> usize {
        self.cursor
    }
}

impl RandomSource for SequenceSource {
    fn uniform(&mut self) -> f64 {
        let v = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        v
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_int_in_range_maps_uniformly() {
        // [-1, 2): thirds of the unit interval map to -1, 0, 1
        assert_eq!(SequenceSource::constant(0.0).int_in_range(-1, 2), -1);
        assert_eq!(SequenceSource::constant(0.2).int_in_range(-1, 2), -1);
        assert_eq!(SequenceSource::constant(0.5).int_in_range(-1, 2), 0);
        assert_eq!(SequenceSource::constant(0.99).int_in_range(-1, 2), 1);
    }

    #[test]
    fn test_int_in_range_clamps_bad_source() {
        assert_eq!(SequenceSource::constant(1.0).int_in_range(0, 3), 2);
        assert_eq!(SequenceSource::constant(-0.5).int_in_range(0, 3), 0);
    }

    #[test]
    fn test_int_in_range_empty_range() {
        assert_eq!(SequenceSource::constant(0.7).int_in_range(4, 4), 4);
    }

    #[test]
    fn test_chance() {
        assert!(SequenceSource::constant(0.05).chance(0.1));
        assert!(!SequenceSource::constant(0.1).chance(0.1));
        assert!(!SequenceSource::constant(0.0).chance(0.0));
    }

    #[test]
    fn test_sequence_cycles() {
        let mut src = SequenceSource::new(vec![0.1, 0.2]);
        assert_eq!(src.uniform(), 0.1);
        assert_eq!(src.uniform(), 0.2);
        assert_eq!(src.uniform(), 0.1);
        assert_eq!(src.draws(), 3);
    }

    #[test]
    fn test_seeded_source_is_reproducible() {
        let mut a = RngSource::seeded(7);
        let mut b = RngSource::seeded(7);
        for _ in 0..16 {
            let u = a.uniform();
            assert_eq!(u, b.uniform());
            assert!((0.0..1.0).contains(&u));
        }
    }
}

use rand::rngs::{StdRng, ThreadRng};
use rand::{Rng, RngCore, SeedableRng};

use super::RandomSource;

/// Thread-local CSPRNG, reseeded from the operating system.
pub struct OsSource(ThreadRng);

impl OsSource {
    pub fn new() -> Self {
        Self(rand::rng())
    }
}

impl Default for OsSource {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomSource for OsSource {
    fn next_u64(&mut self) -> u64 {
        self.0.next_u64()
    }

    fn below(&mut self, bound: usize) -> usize {
        self.0.random_range(0..bound)
    }
}

/// Deterministic generator for reproducible output. Never use for real secrets.
pub struct SeededSource(StdRng);

impl SeededSource {
    pub fn new(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }
}

impl RandomSource for SeededSource {
    fn next_u64(&mut self) -> u64 {
        self.0.next_u64()
    }

    fn below(&mut self, bound: usize) -> usize {
        self.0.random_range(0..bound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_sources_repeat() {
        let mut a = SeededSource::new(42);
        let mut b = SeededSource::new(42);
        for _ in 0..16 {
            assert_eq!(a.below(81), b.below(81));
        }
    }

    #[test]
    fn os_source_respects_bound() {
        let mut rng = OsSource::new();
        assert!((0..500).all(|_| rng.below(19) < 19));
        assert_eq!(rng.below(1), 0);
    }
}

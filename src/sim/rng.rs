//! Seeded random source for procedural level generation
//!
//! A plain 32-bit linear congruential generator. This is the only entropy
//! source allowed in level generation: two generators built from the same
//! seed must produce bit-identical sequences forever, and saved level ids
//! must keep regenerating the same layouts across builds and platforms.

/// Deterministic LCG over 32-bit state: `state = state * 1664525 + 1013904223 mod 2^32`.
///
/// Restartable (rebuild from the seed to replay the sequence) but a single
/// instance is not rewindable.
#[derive(Debug, Clone)]
pub struct LcgRng {
    state: u32,
}

impl LcgRng {
    pub fn new(seed: u32) -> Self {
        Self { state: seed }
    }

    /// Next value in `[0, 1)`.
    ///
    /// Returns f64: the quotient `state / 2^32` is exact in f64, while an f32
    /// result could round up to exactly 1.0 and break `(r * len) as usize`
    /// table indexing.
    pub fn next(&mut self) -> f64 {
        self.state = self.state.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
        self.state as f64 / 4_294_967_296.0
    }

    /// Uniform draw in `[lo, lo + span)`.
    pub fn range(&mut self, lo: f64, span: f64) -> f64 {
        lo + self.next() * span
    }

    /// Uniform index in `[0, len)`.
    pub fn index(&mut self, len: usize) -> usize {
        (self.next() * len as f64) as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_sequence() {
        let mut a = LcgRng::new(101);
        let mut b = LcgRng::new(101);
        for _ in 0..1000 {
            assert_eq!(a.next().to_bits(), b.next().to_bits());
        }
    }

    #[test]
    fn test_restartable() {
        let mut a = LcgRng::new(42);
        let first: Vec<f64> = (0..16).map(|_| a.next()).collect();
        let mut b = LcgRng::new(42);
        let second: Vec<f64> = (0..16).map(|_| b.next()).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_output_range() {
        let mut rng = LcgRng::new(0xFFFF_FFFF);
        for _ in 0..10_000 {
            let v = rng.next();
            assert!((0.0..1.0).contains(&v));
        }
    }

    #[test]
    fn test_known_first_step() {
        // 12345 * 1664525 + 1013904223 mod 2^32 = 87628868 (the chaos-level
        // seed's first state), so the first draw is 87628868 / 2^32.
        let mut rng = LcgRng::new(12345);
        let expected = 87_628_868u32 as f64 / 4_294_967_296.0;
        assert_eq!(rng.next(), expected);
    }

    #[test]
    fn test_index_never_out_of_bounds() {
        let mut rng = LcgRng::new(7);
        for _ in 0..10_000 {
            assert!(rng.index(5) < 5);
        }
    }
}

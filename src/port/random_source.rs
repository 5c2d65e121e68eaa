use rand::Rng;

/// Source of randomness for content selection.
///
/// Any `rand::Rng` is a `RandomSource`; tests inject deterministic ones.
pub trait RandomSource: Send {
    /// Uniform index in `0..len`. `len` must be non-zero.
    fn index(&mut self, len: usize) -> usize;

    /// Uniform integer in `low..=high`.
    fn between(&mut self, low: u32, high: u32) -> u32;
}

impl<R: Rng + Send> RandomSource for R {
    fn index(&mut self, len: usize) -> usize {
        self.random_range(0..len)
    }

    fn between(&mut self, low: u32, high: u32) -> u32 {
        self.random_range(low..=high)
    }
}

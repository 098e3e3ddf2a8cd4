use rand::Rng;
use std::ops::RangeInclusive;

/// Capability that picks the secret at session start
pub trait SecretSource {
    /// Draw a value uniformly from `range`
    fn draw(&mut self, range: RangeInclusive<i64>) -> i64;
}

impl<R: Rng> SecretSource for R {
    fn draw(&mut self, range: RangeInclusive<i64>) -> i64 {
        self.gen_range(range)
    }
}

/// Source that always yields the same value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedSecret(pub i64);

impl SecretSource for FixedSecret {
    fn draw(&mut self, _range: RangeInclusive<i64>) -> i64 {
        self.0
    }
}

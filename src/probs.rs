//! Utilities for working with probabilities.

pub trait SliceExt {
    fn sum(&self) -> f64;
    fn scale(&mut self, factor: f64);
    fn normalise(&mut self, target: f64) -> f64;
}
impl SliceExt for [f64] {
    fn sum(&self) -> f64 {
        self.iter().sum()
    }

    fn scale(&mut self, factor: f64) {
        for element in self {
            *element *= factor;
        }
    }

    fn normalise(&mut self, target: f64) -> f64 {
        let sum = self.sum();
        self.scale(target / sum);
        sum
    }
}

/// Confines a probability to the [0, 1] interval, guarding the outputs against
/// floating-point drift.
#[inline]
pub fn clamp01(p: f64) -> f64 {
    p.clamp(0.0, 1.0)
}

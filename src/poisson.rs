use crate::factorial::Factorial;

/// Poisson pmf; a non-positive `lambda` collapses to a point distribution at zero.
#[inline]
pub fn univariate(k: u8, lambda: f64, factorial: &impl Factorial) -> f64 {
    if lambda <= 0.0 {
        return if k == 0 { 1.0 } else { 0.0 };
    }
    lambda.powi(k as i32) * f64::exp(-lambda) / factorial.get(k) as f64
}

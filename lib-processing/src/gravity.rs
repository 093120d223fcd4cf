use crate::*;

/// Single-pole low-pass filter that tracks the gravity component of raw accelerometer samples.
/// 
/// The estimate starts at zero, so right after tracking starts most of gravity still leaks into
/// the linear acceleration. With the default coefficient it takes about 21 samples before the
/// estimate is within 1% of a constant input.
/// 
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GravityEstimator
{
    /// Weight of the previous estimate.
    pub alpha: f64,
}

impl GravityEstimator
{
    pub const fn new(alpha: f64) -> Self {
        GravityEstimator { alpha }
    }

    /// Folds `raw` into `estimate` per axis and returns the new estimate.
    /// 
    pub fn update(&self, estimate: &mut Vector3, raw: Vector3) -> Vector3 {
        let alpha = self.alpha;
        *estimate = estimate.zip_with(raw, |g, r| alpha * g + (1.0 - alpha) * r);
        *estimate
    }
}

impl Default for GravityEstimator {
    fn default() -> Self {
        GravityEstimator::new(GRAVITY_FILTER_ALPHA)
    }
}

#[cfg(test)]
mod tests
{
    use super::*;

    #[test]
    fn first_update_only_takes_a_fifth_of_the_input() {
        let estimator = GravityEstimator::default();
        let mut estimate = Vector3::zero();
        let result = estimator.update(&mut estimate, Vector3::new(0.0, 0.0, 9.8));
        assert_eq!(result, estimate);
        assert!(estimate.approx_eq(&Vector3::new(0.0, 0.0, 1.96), 1e-12));
    }

    #[test]
    fn axes_are_filtered_independently() {
        let estimator = GravityEstimator::default();
        let mut estimate = Vector3::new(1.0, -1.0, 0.0);
        estimator.update(&mut estimate, Vector3::new(0.0, 4.0, -5.0));
        assert!(estimate.approx_eq(&Vector3::new(0.8, 0.0, -1.0), 1e-12));
    }
}

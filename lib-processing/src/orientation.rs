use core::fmt;
use crate::*;

/// Orientation carries no model, samples are passed through untouched.
/// 
#[inline]
pub fn report(sample: OrientationSample) -> OrientationSample {
    sample
}

impl fmt::Display for OrientationSample {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "α: {:.2}°, β: {:.2}°, γ: {:.2}°", self.alpha, self.beta, self.gamma)
    }
}

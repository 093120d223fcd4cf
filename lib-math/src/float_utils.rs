/// Approximate equality check of two floats with an absolute tolerance.
/// 
pub fn approx_eq_f64(a: f64, b: f64, tol: f64) -> bool {
    libm::fabs(a - b) <= tol
}

/// Relative error of `value` with respect to `reference`, falls back to the absolute error when
/// the reference is zero.
/// 
pub fn relative_error(value: f64, reference: f64) -> f64 {
    let diff = libm::fabs(value - reference);
    if reference == 0.0 {
        return diff;
    }
    diff / libm::fabs(reference)
}

use core::time::Duration;
use crate::*;

/// One accelerometer reading as delivered by the sensor feed.
/// 
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotionSample
{
    /// In m/s²; raw reading, gravity still included.
    pub acceleration_including_gravity: Vector3,

    /// Monotonic time since the clock origin of the feed.
    pub timestamp: Duration,
}

impl MotionSample
{
    pub const fn new(acceleration_including_gravity: Vector3, timestamp: Duration) -> Self {
        MotionSample { acceleration_including_gravity, timestamp }
    }

    /// Convenience constructor taking the timestamp in (fractional) seconds.
    /// 
    pub fn from_secs(x: f64, y: f64, z: f64, secs: f64) -> Self {
        MotionSample::new(Vector3::new(x, y, z), Duration::from_secs_f64(secs))
    }
}

/// Device orientation angles in degrees, reported as-is.
/// 
/// alpha = rotation around the Z-axis (0..360)
/// beta  = rotation around the X-axis (-180..180)
/// gamma = rotation around the Y-axis (-90..90)
/// 
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct OrientationSample
{
    pub alpha: f64,
    pub beta: f64,
    pub gamma: f64,
}

impl OrientationSample
{
    pub const fn new(alpha: f64, beta: f64, gamma: f64) -> Self {
        OrientationSample { alpha, beta, gamma }
    }
}

use core::time::Duration;

/// Weight of the previous gravity estimate in the low-pass filter.
pub const GRAVITY_FILTER_ALPHA: f64 = 0.8;

/// In m/s; velocity components below this magnitude are treated as sensor noise and zeroed.
pub const VELOCITY_NOISE_THRESHOLD: f64 = 0.05;

/// Per drift tick multiplicative decay applied to every velocity component.
pub const VELOCITY_DAMPING_FACTOR: f64 = 0.95;

/// Cadence of the drift correction, independent of sample arrival.
pub const DRIFT_CORRECTION_PERIOD: Duration = Duration::from_millis(100);

/// Tunables of the dead reckoning pipeline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackerConfig
{
    /// Gravity low-pass coefficient, `estimate' = alpha * estimate + (1 - alpha) * raw`.
    pub gravity_alpha: f64,

    /// In m/s; see [`VELOCITY_NOISE_THRESHOLD`].
    pub velocity_threshold: f64,

    /// See [`VELOCITY_DAMPING_FACTOR`].
    pub damping_factor: f64,

    /// Wall clock period of the drift corrector.
    pub drift_period: Duration,
}

impl TrackerConfig
{
    pub const fn new() -> Self {
        TrackerConfig {
            gravity_alpha: GRAVITY_FILTER_ALPHA,
            velocity_threshold: VELOCITY_NOISE_THRESHOLD,
            damping_factor: VELOCITY_DAMPING_FACTOR,
            drift_period: DRIFT_CORRECTION_PERIOD,
        }
    }

    pub fn with_gravity_alpha(mut self, alpha: f64) -> Self {
        self.gravity_alpha = alpha;
        self
    }

    pub fn with_velocity_threshold(mut self, threshold: f64) -> Self {
        self.velocity_threshold = threshold;
        self
    }

    pub fn with_damping_factor(mut self, damping: f64) -> Self {
        self.damping_factor = damping;
        self
    }

    pub fn with_drift_period(mut self, period: Duration) -> Self {
        self.drift_period = period;
        self
    }
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self::new()
    }
}

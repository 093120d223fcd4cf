use core::fmt;
use crate::*;

/// Result of feeding one motion sample through the pipeline.
/// 
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepReport
{
    /// In m/s²; gravity-free acceleration computed for this sample.
    pub linear_acceleration: Vector3,

    pub integration: Integration,
}

/// Everything a display layer may want to show.
/// 
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Readings
{
    pub linear_acceleration: Vector3,
    pub gravity_estimate: Vector3,
    pub velocity: Vector3,
    pub position: Vector3,

    /// Latest orientation, `None` until the first orientation sample arrives.
    pub orientation: Option<OrientationSample>,
}

/// Dead reckoning pipeline: gravity estimation, linear acceleration extraction and integration
/// for motion samples, periodic drift correction and orientation pass-through.
/// 
/// Holds no clock and no timer of its own, the caller decides when samples and ticks happen.
/// 
pub struct DeadReckoning
{
    config: TrackerConfig,

    gravity: GravityEstimator,
    drift: DriftCorrector,

    pub state: TrackerState,

    /// Linear acceleration of the most recent sample.
    pub linear_acceleration: Vector3,

    /// Most recent orientation sample.
    pub orientation: Option<OrientationSample>,
}

impl DeadReckoning {

    #[inline]
    pub fn new(config: TrackerConfig) -> Self {
        DeadReckoning {
            config,
            gravity: GravityEstimator::new(config.gravity_alpha),
            drift: DriftCorrector::new(config.velocity_threshold, config.damping_factor),
            state: TrackerState::new(),
            linear_acceleration: Vector3::zero(),
            orientation: None,
        }
    }

    pub fn config(&self) -> &TrackerConfig {
        &self.config
    }

    /// Process one motion sample. Gravity is updated before it is subtracted, so the returned
    /// linear acceleration already uses the estimate that includes this sample.
    /// 
    pub fn step(&mut self, sample: &MotionSample) -> StepReport
    {
        let raw = sample.acceleration_including_gravity;

        let gravity = self.gravity.update(&mut self.state.gravity_estimate, raw);
        let linear_acceleration = extract(raw, gravity);
        self.linear_acceleration = linear_acceleration;

        let integration = integrate(&mut self.state, linear_acceleration, sample.timestamp);
        log::trace!(
            "t={:?} linear={:?} velocity={:?} position={:?}",
            sample.timestamp, linear_acceleration, self.state.velocity, self.state.position
        );

        StepReport { linear_acceleration, integration }
    }

    /// Apply one drift correction.
    /// 
    pub fn tick(&mut self) {
        self.drift.tick(&mut self.state);
    }

    /// Record and pass through an orientation sample.
    /// 
    pub fn orient(&mut self, sample: OrientationSample) -> OrientationSample {
        let sample = report(sample);
        self.orientation = Some(sample);
        sample
    }

    pub fn readings(&self) -> Readings {
        Readings {
            linear_acceleration: self.linear_acceleration,
            gravity_estimate: self.state.gravity_estimate,
            velocity: self.state.velocity,
            position: self.state.position,
            orientation: self.orientation,
        }
    }

    /// Throw away everything learned so far and start over from the zero state.
    /// 
    pub fn reset(&mut self) {
        self.state.reset();
        self.linear_acceleration = Vector3::zero();
        self.orientation = None;
    }
}

impl Default for DeadReckoning {
    fn default() -> Self {
        DeadReckoning::new(TrackerConfig::default())
    }
}

/// Formats an acceleration the way the status display shows it.
/// 
pub struct AccelerationDisplay(pub Vector3);

impl fmt::Display for AccelerationDisplay {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let v = self.0;
        write!(f, "X: {:.2} m/s², Y: {:.2} m/s², Z: {:.2} m/s²", v.x, v.y, v.z)
    }
}

/// Formats a position the way the status display shows it.
/// 
pub struct PositionDisplay(pub Vector3);

impl fmt::Display for PositionDisplay {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let v = self.0;
        write!(f, "X: {:.2} m, Y: {:.2} m, Z: {:.2} m", v.x, v.y, v.z)
    }
}

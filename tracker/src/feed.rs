use processing::{MotionSample, OrientationSample};

/// One event from a sensor subscription.
/// 
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SensorEvent
{
    Motion(MotionSample),
    Orientation(OrientationSample),
}

impl From<MotionSample> for SensorEvent {
    fn from(sample: MotionSample) -> Self {
        SensorEvent::Motion(sample)
    }
}

impl From<OrientationSample> for SensorEvent {
    fn from(sample: OrientationSample) -> Self {
        SensorEvent::Orientation(sample)
    }
}

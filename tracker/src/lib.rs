//! Runtime around the dead reckoning core: lifecycle, permission boundary, clock injection and
//! the threads that feed samples and drift corrections into one shared state.

pub mod clock;
pub use clock::*;

pub mod error;
pub use error::*;

pub mod permission;
pub use permission::*;

pub mod status;
pub use status::*;

pub mod feed;
pub use feed::*;

pub mod motion_tracker;
pub use motion_tracker::*;

pub use processing::{
    Integration, MotionSample, OrientationSample, Readings, StepReport, TrackerConfig, TrackerState,
    Vector3,
};

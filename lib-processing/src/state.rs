use core::time::Duration;
use crate::*;

/// The mutable state of one tracking session. A fresh value is all zeros with an unset clock;
/// stopping a session discards it rather than pausing it.
/// 
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TrackerState
{
    /// In m/s²; low-pass estimate of the gravity component of the raw readings.
    pub gravity_estimate: Vector3,

    /// In m/s; current velocity of the device.
    pub velocity: Vector3,

    /// In meters; current position relative to where tracking started.
    pub position: Vector3,

    /// Timestamp of the previously integrated sample, unset until the first sample arrives.
    pub last_timestamp: Option<Duration>,

    /// Number of samples dropped from integration because their timestamp went backwards.
    pub out_of_order_samples: u64,

    /// Number of drift corrections applied so far.
    pub drift_ticks: u64,
}

impl TrackerState
{
    #[inline]
    pub const fn new() -> Self {
        TrackerState {
            gravity_estimate: Vector3::zero(),
            velocity: Vector3::zero(),
            position: Vector3::zero(),
            last_timestamp: None,
            out_of_order_samples: 0,
            drift_ticks: 0,
        }
    }

    /// Puts the state back to its initial values, used when a session is (re)started.
    /// 
    pub fn reset(&mut self) {
        *self = TrackerState::new();
    }
}

use core::time::Duration;
use crate::*;

/// What [`integrate`] did with a sample.
/// 
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Integration
{
    /// First sample of the session, it only seeds the clock.
    Seeded,

    /// Velocity and position were advanced by `dt` seconds.
    Advanced { dt: f64 },

    /// Same timestamp as the previous sample, nothing changed.
    Duplicate,

    /// The timestamp lies `behind` the previous one. The step is clamped to zero and the clock is
    /// not moved back.
    OutOfOrder { behind: Duration },
}

impl Integration
{
    /// Whether this outcome should be surfaced as a data-quality problem.
    /// 
    pub fn is_data_quality_event(&self) -> bool {
        matches!(self, Integration::OutOfOrder { .. })
    }
}

/// Advances velocity and position with semi-implicit Euler: the velocity is updated first and
/// the new velocity is used for the position step.
/// 
pub fn integrate(state: &mut TrackerState, linear_accel: Vector3, now: Duration) -> Integration {
    let Some(last) = state.last_timestamp else {
        state.last_timestamp = Some(now);
        return Integration::Seeded;
    };

    let Some(elapsed) = now.checked_sub(last) else {
        let behind = last - now;
        state.out_of_order_samples += 1;
        log::warn!(
            "Sample at {:?} is {:?} older than the previous one, integration step skipped",
            now, behind
        );
        return Integration::OutOfOrder { behind };
    };

    if elapsed.is_zero() {
        return Integration::Duplicate;
    }

    let dt = elapsed.as_secs_f64();
    state.velocity += linear_accel * dt;
    state.position += state.velocity * dt;
    state.last_timestamp = Some(now);

    Integration::Advanced { dt }
}

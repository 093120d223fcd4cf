use core::time::Duration;
use crate::*;

/// Periodic velocity clean-up that keeps integration drift bounded.
/// 
/// Every tick, per axis: a component below the noise threshold is zeroed, then the component is
/// multiplied by the damping factor. Position and the gravity estimate are never touched.
/// 
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DriftCorrector
{
    /// In m/s.
    pub threshold: f64,
    pub damping: f64,
}

impl DriftCorrector
{
    pub const fn new(threshold: f64, damping: f64) -> Self {
        DriftCorrector { threshold, damping }
    }

    pub fn tick(&self, state: &mut TrackerState) {
        let (threshold, damping) = (self.threshold, self.damping);
        state.velocity = state.velocity.map(|v| {
            let v = if libm::fabs(v) < threshold { 0.0 } else { v };
            v * damping
        });
        state.drift_ticks += 1;
    }
}

impl Default for DriftCorrector {
    fn default() -> Self {
        DriftCorrector::new(VELOCITY_NOISE_THRESHOLD, VELOCITY_DAMPING_FACTOR)
    }
}

/// Tells how many drift ticks fall due as time moves forward. Used to replay recorded sensor logs
/// with the same cadence the live tracker gets from its timer.
/// 
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DriftSchedule
{
    period: Duration,

    /// Time of the next tick, unset until the schedule sees its first timestamp.
    next_due: Option<Duration>,

    /// Set once the next tick would lie beyond `Duration::MAX`.
    exhausted: bool,
}

impl DriftSchedule
{
    pub const fn new(period: Duration) -> Self {
        DriftSchedule { period, next_due: None, exhausted: false }
    }

    /// Returns the number of ticks that elapsed up to and including `now`. The first call arms
    /// the schedule and never reports a tick. Times that go backwards report nothing, and a gap
    /// longer than `u32::MAX` periods reports `u32::MAX`.
    /// 
    pub fn due(&mut self, now: Duration) -> u32 {
        if self.period.is_zero() || self.exhausted {
            return 0;
        }

        let Some(next) = self.next_due else {
            match now.checked_add(self.period) {
                Some(next) => self.next_due = Some(next),
                None => self.exhausted = true,
            }
            return 0;
        };

        if now < next {
            return 0;
        }

        let period = self.period.as_nanos();
        let elapsed = (now - next).as_nanos() / period + 1;

        // Multiplying in u128 nanoseconds cannot overflow for any count derived from a Duration.
        let advance = elapsed * period;
        let advance = Duration::new(
            u64::try_from(advance / 1_000_000_000).unwrap_or(u64::MAX),
            (advance % 1_000_000_000) as u32,
        );
        match next.checked_add(advance) {
            Some(next) => self.next_due = Some(next),
            None => self.exhausted = true,
        }

        u32::try_from(elapsed).unwrap_or(u32::MAX)
    }

    pub fn reset(&mut self) {
        self.next_due = None;
        self.exhausted = false;
    }
}

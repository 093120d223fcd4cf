use crate::TrackingError;

/// Tracking lifecycle.
/// 
/// `Idle -> AwaitingPermission -> Tracking | Denied`, or `Idle -> Tracking` when no grant is
/// needed. `Denied` is left only by a new start request, `Tracking` only by a stop which
/// discards all motion state.
/// 
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum TrackingStatus
{
    #[default]
    Idle,
    AwaitingPermission,
    Tracking,
    Denied(TrackingError),
}

impl TrackingStatus {

    pub fn is_tracking(&self) -> bool {
        matches!(self, TrackingStatus::Tracking)
    }

    /// Short text for a status line.
    /// 
    pub fn status_message(&self) -> String {
        match self {
            TrackingStatus::Idle => "Press start to begin tracking".to_string(),
            TrackingStatus::AwaitingPermission => "Waiting for sensor permission...".to_string(),
            TrackingStatus::Tracking => "Tracking...".to_string(),
            TrackingStatus::Denied(err) => err.to_string(),
        }
    }
}

/// Answer of the platform to a sensor permission request.
/// 
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PermissionResponse
{
    Granted,
    Denied,

    /// The request itself failed, carries the platform's reason.
    Failed(String),
}

/// Boundary to whatever grants access to the motion sensors.
/// 
pub trait PermissionGate {

    /// Platforms without an explicit grant go straight to tracking.
    fn requires_permission(&self) -> bool;

    /// Ask for access. Only called when [`PermissionGate::requires_permission`] is true.
    fn request(&mut self) -> PermissionResponse;

    /// Whether the device has the sensors at all.
    fn sensors_available(&self) -> bool {
        true
    }
}

/// Gate for platforms where sensor access needs no grant.
/// 
#[derive(Debug, Clone, Copy, Default)]
pub struct NoGate;

impl PermissionGate for NoGate {
    fn requires_permission(&self) -> bool {
        false
    }

    fn request(&mut self) -> PermissionResponse {
        PermissionResponse::Granted
    }
}

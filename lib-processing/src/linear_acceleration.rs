use crate::*;

/// Removes the gravity estimate from a raw reading, leaving the motion induced acceleration.
/// 
#[inline]
pub fn extract(raw: Vector3, gravity_estimate: Vector3) -> Vector3 {
    raw - gravity_estimate
}

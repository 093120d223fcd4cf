use std::{error::Error, fmt, io};

/// Everything that can keep tracking from running. None of these come from the numeric core,
/// they all originate at the sensor and permission boundary or from the host runtime.
/// 
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TrackingError
{
    PermissionDenied,
    PermissionRequestFailed(String),
    SensorUnavailable,
    AlreadyTracking,
    NotTracking,

    /// A worker thread could not be spawned.
    WorkerSpawn(String),
}

impl Error for TrackingError {}

impl fmt::Display for TrackingError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::PermissionDenied => write!(f, "Permission denied"),
            Self::PermissionRequestFailed(reason) => write!(f, "Error: {}", reason),
            Self::SensorUnavailable => write!(f, "Motion sensors unavailable"),
            Self::AlreadyTracking => write!(f, "Tracking already started"),
            Self::NotTracking => write!(f, "Tracking is not active"),
            Self::WorkerSpawn(reason) => write!(f, "Could not start worker thread: {}", reason),
        }
    }
}

impl From<io::Error> for TrackingError
{
    fn from(err: io::Error) -> Self {
        TrackingError::WorkerSpawn(err.to_string())
    }
}

#[cfg(test)]
mod tests
{
    use super::*;

    #[test]
    fn spawn_failure_converts_from_io_error() {
        let err: TrackingError = io::Error::new(io::ErrorKind::OutOfMemory, "no threads left").into();
        assert_eq!(err, TrackingError::WorkerSpawn("no threads left".to_string()));
        assert_eq!(err.to_string(), "Could not start worker thread: no threads left");
    }
}

use std::{io, sync::Arc, thread::{self, JoinHandle}, time::Duration};

use crossbeam_channel::{bounded, select, tick, Receiver, Sender};
use parking_lot::Mutex;
use processing::*;

use crate::*;

/// Everything guarded by the tracker's single lock. A sample or a drift tick holds it for its
/// whole read-modify-write, so the state is never seen half updated.
struct Session
{
    status: TrackingStatus,

    /// Present only while tracking.
    algo: Option<DeadReckoning>,
}

struct Shared
{
    session: Mutex<Session>,
}

impl Shared {

    /// Runs `f` against the live pipeline, returns `None` when not tracking.
    fn with_algo<R>(&self, f: impl FnOnce(&mut DeadReckoning) -> R) -> Option<R> {
        let mut session = self.session.lock();
        session.algo.as_mut().map(f)
    }

    fn apply(&self, event: SensorEvent) {
        match event {
            SensorEvent::Motion(sample) => {
                self.with_algo(|algo| algo.step(&sample));
            },
            SensorEvent::Orientation(sample) => {
                self.with_algo(|algo| algo.orient(sample));
            },
        }
    }
}

/// Worker threads of one tracking session. Dropping `stop` disconnects the channel every worker
/// selects on, which makes them return.
struct Workers
{
    stop: Sender<()>,
    stop_signal: Receiver<()>,
    handles: Vec<JoinHandle<()>>,
}

/// Thread-safe dead reckoning tracker.
///
/// Motion and orientation samples may arrive from any thread, drift correction runs on its own
/// thread at the configured period. Several trackers can live side by side, each owns its state.
///
pub struct MotionTracker
{
    config: TrackerConfig,
    clock: Arc<dyn Clock>,
    shared: Arc<Shared>,
    workers: Option<Workers>,
}

impl MotionTracker {

    pub fn new(config: TrackerConfig) -> Self {
        Self::with_clock(config, Arc::new(MonotonicClock::new()))
    }

    pub fn with_clock(config: TrackerConfig, clock: Arc<dyn Clock>) -> Self {
        MotionTracker {
            config,
            clock,
            shared: Arc::new(Shared {
                session: Mutex::new(Session { status: TrackingStatus::Idle, algo: None }),
            }),
            workers: None,
        }
    }

    pub fn config(&self) -> &TrackerConfig {
        &self.config
    }

    /// Clock used to stamp samples passed to [`MotionTracker::on_motion`].
    pub fn clock(&self) -> Arc<dyn Clock> {
        self.clock.clone()
    }

    pub fn status(&self) -> TrackingStatus {
        self.shared.session.lock().status.clone()
    }

    pub fn is_tracking(&self) -> bool {
        self.shared.session.lock().status.is_tracking()
    }

    /// Handle a start request: check for sensors, ask the gate for permission when the platform
    /// needs it and begin a fresh session on success.
    ///
    pub fn start(&mut self, gate: &mut dyn PermissionGate) -> Result<(), TrackingError> {
        if self.is_tracking() {
            return Err(TrackingError::AlreadyTracking);
        }

        if !gate.sensors_available() {
            return self.deny(TrackingError::SensorUnavailable);
        }

        if gate.requires_permission() {
            self.set_status(TrackingStatus::AwaitingPermission);
            log::info!("Requesting motion sensor permission");

            match gate.request() {
                PermissionResponse::Granted => log::info!("Motion sensor permission granted"),
                PermissionResponse::Denied => return self.deny(TrackingError::PermissionDenied),
                PermissionResponse::Failed(reason) => {
                    return self.deny(TrackingError::PermissionRequestFailed(reason));
                },
            }
        }

        self.begin()
    }

    fn deny(&mut self, err: TrackingError) -> Result<(), TrackingError> {
        log::warn!("Tracking not started: {}", err);
        self.set_status(TrackingStatus::Denied(err.clone()));
        Err(err)
    }

    fn set_status(&self, status: TrackingStatus) {
        self.shared.session.lock().status = status;
    }

    fn begin(&mut self) -> Result<(), TrackingError> {
        {
            let mut session = self.shared.session.lock();
            session.algo = Some(DeadReckoning::new(self.config));
            session.status = TrackingStatus::Tracking;
        }

        let (stop, stop_signal) = bounded::<()>(0);
        let mut handles = Vec::new();

        let period = self.config.drift_period;
        if period.is_zero() {
            log::warn!("Drift correction period is zero, periodic correction disabled");
        } else {
            match Self::spawn_drift_correction(self.shared.clone(), period, stop_signal.clone()) {
                Ok(handle) => handles.push(handle),
                Err(err) => {
                    let mut session = self.shared.session.lock();
                    session.algo = None;
                    session.status = TrackingStatus::Idle;
                    log::error!("Could not start drift correction: {}", err);
                    return Err(err.into());
                },
            }
        }

        self.workers = Some(Workers { stop, stop_signal, handles });
        log::info!("Tracking started, drift correction every {:?}", period);
        Ok(())
    }

    /// Spawn the thread that applies drift correction at a fixed period, whether or not samples
    /// arrive in between.
    fn spawn_drift_correction(
        shared: Arc<Shared>,
        period: Duration,
        stop_signal: Receiver<()>,
    ) -> io::Result<JoinHandle<()>> {
        thread::Builder::new().name("drift-correction".to_string()).spawn(move || {
            let ticker = tick(period);
            loop {
                select! {
                    recv(stop_signal) -> _ => break,
                    recv(ticker) -> _ => {
                        let ticked = shared.with_algo(|algo| {
                            algo.tick();
                            algo.state.drift_ticks
                        });
                        if let Some(ticks) = ticked {
                            log::trace!("Drift correction #{}", ticks);
                        }
                    },
                }
            }
            log::debug!("Drift correction thread stopped");
        })
    }

    /// Subscribe to a sensor feed. Events are drained on a worker thread into the same state the
    /// direct entry points use, until the feed closes or tracking stops.
    ///
    pub fn attach_feed(&mut self, feed: Receiver<SensorEvent>) -> Result<(), TrackingError> {
        let Some(workers) = self.workers.as_mut() else {
            return Err(TrackingError::NotTracking);
        };

        let shared = self.shared.clone();
        let stop_signal = workers.stop_signal.clone();
        let handle = thread::Builder::new().name("sensor-feed".to_string()).spawn(move || {
            log::debug!("Sensor feed attached");
            loop {
                select! {
                    recv(stop_signal) -> _ => break,
                    recv(feed) -> event => match event {
                        Ok(event) => shared.apply(event),
                        Err(_) => {
                            log::debug!("Sensor feed closed");
                            break;
                        },
                    },
                }
            }
        })?;
        workers.handles.push(handle);
        Ok(())
    }

    /// Handle a raw accelerometer reading, stamped with the tracker's clock.
    ///
    pub fn on_motion(&self, acceleration_including_gravity: Vector3) -> Option<StepReport> {
        let sample = MotionSample::new(acceleration_including_gravity, self.clock.now());
        self.on_motion_sample(sample)
    }

    /// Handle a motion sample that carries its own timestamp. Ignored when not tracking.
    ///
    pub fn on_motion_sample(&self, sample: MotionSample) -> Option<StepReport> {
        self.shared.with_algo(|algo| algo.step(&sample))
    }

    /// Handle an orientation sample. Ignored when not tracking.
    ///
    pub fn on_orientation(&self, sample: OrientationSample) -> Option<OrientationSample> {
        self.shared.with_algo(|algo| algo.orient(sample))
    }

    /// Apply one drift correction right away, outside of the periodic thread.
    ///
    pub fn drift_tick(&self) -> bool {
        self.shared.with_algo(|algo| algo.tick()).is_some()
    }

    pub fn readings(&self) -> Option<Readings> {
        self.shared.with_algo(|algo| algo.readings())
    }

    pub fn state(&self) -> Option<TrackerState> {
        self.shared.with_algo(|algo| algo.state)
    }

    pub fn velocity(&self) -> Option<Vector3> {
        self.shared.with_algo(|algo| algo.state.velocity)
    }

    pub fn position(&self) -> Option<Vector3> {
        self.shared.with_algo(|algo| algo.state.position)
    }

    /// End the session. The state is discarded under the lock first, so neither a late sample nor
    /// a pending tick can touch it, then the workers are told to stop and joined.
    ///
    pub fn stop(&mut self) {
        let was_tracking = {
            let mut session = self.shared.session.lock();
            let was_tracking = session.algo.take().is_some();
            if was_tracking {
                session.status = TrackingStatus::Idle;
            }
            was_tracking
        };

        if let Some(Workers { stop, stop_signal, handles }) = self.workers.take() {
            drop(stop);
            drop(stop_signal);
            for handle in handles {
                let name = handle.thread().name().unwrap_or("worker").to_string();
                if handle.join().is_err() {
                    log::error!("Worker thread {} panicked", name);
                }
            }
        }

        if was_tracking {
            log::info!("Tracking stopped");
        }
    }
}

impl Drop for MotionTracker {
    fn drop(&mut self) {
        self.stop();
    }
}

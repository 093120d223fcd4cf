use std::{
    sync::{atomic::{AtomicU64, Ordering}, Arc},
    thread,
    time::{Duration, Instant},
};

use tracker::*;

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Poll `condition` until it holds or the timeout passes.
fn wait_for(timeout: Duration, mut condition: impl FnMut() -> bool) -> bool {
    let deadline = Instant::now() + timeout;
    while Instant::now() < deadline {
        if condition() {
            return true;
        }
        thread::sleep(Duration::from_millis(2));
    }
    condition()
}

fn fast_drift_config() -> TrackerConfig {
    TrackerConfig::default().with_drift_period(Duration::from_millis(5))
}

#[test]
fn feed_samples_are_integrated_and_drift_settles_velocity() {
    init_logger();

    let mut tracker = MotionTracker::new(fast_drift_config());
    tracker.start(&mut NoGate).unwrap();

    let (tx, rx) = crossbeam_channel::unbounded();
    tracker.attach_feed(rx).unwrap();

    tx.send(SensorEvent::from(MotionSample::from_secs(0.0, 0.0, 0.0, 0.0))).unwrap();
    tx.send(SensorEvent::from(MotionSample::from_secs(5.0, 0.0, 0.0, 1.0))).unwrap();
    tx.send(SensorEvent::from(OrientationSample::new(90.0, -10.0, 5.0))).unwrap();

    let settled = wait_for(Duration::from_secs(10), || {
        let state = tracker.state().unwrap();
        state.last_timestamp == Some(Duration::from_secs(1))
            && state.drift_ticks > 0
            && state.velocity == Vector3::zero()
    });
    assert!(settled, "velocity never settled: {:?}", tracker.state());

    let readings = tracker.readings().unwrap();
    assert_eq!(readings.orientation, Some(OrientationSample::new(90.0, -10.0, 5.0)));
    // Position keeps what was accumulated before the drift correction stopped the motion.
    assert!(readings.position.x > 0.0);

    tracker.stop();
}

#[test]
fn stop_halts_feed_and_drift() {
    init_logger();

    let mut tracker = MotionTracker::new(fast_drift_config());
    tracker.start(&mut NoGate).unwrap();

    let (tx, rx) = crossbeam_channel::unbounded();
    tracker.attach_feed(rx).unwrap();
    tx.send(SensorEvent::from(MotionSample::from_secs(1.0, 1.0, 1.0, 0.0))).unwrap();
    assert!(wait_for(Duration::from_secs(5), || tracker.state().unwrap().last_timestamp.is_some()));

    tracker.stop();

    assert_eq!(tracker.status(), TrackingStatus::Idle);
    assert!(tracker.readings().is_none());
    // The feed worker is gone, so the receiving side has been dropped.
    assert!(tx.send(SensorEvent::from(MotionSample::from_secs(1.0, 1.0, 1.0, 0.1))).is_err());

    tracker.start(&mut NoGate).unwrap();
    let state = tracker.state().unwrap();
    assert_eq!(state.last_timestamp, None);
    assert_eq!(state.gravity_estimate, Vector3::zero());
}

#[test]
fn trackers_do_not_share_state() {
    let clock = ManualClock::new(Duration::ZERO);
    let config = TrackerConfig::default().with_drift_period(Duration::ZERO);
    let mut left = MotionTracker::with_clock(config, Arc::new(clock.clone()));
    let mut right = MotionTracker::with_clock(config, Arc::new(clock.clone()));
    left.start(&mut NoGate).unwrap();
    right.start(&mut NoGate).unwrap();

    left.on_motion(Vector3::zero());
    right.on_motion(Vector3::zero());
    clock.advance(Duration::from_millis(100));
    left.on_motion(Vector3::new(0.0, 10.0, 0.0));

    assert!(left.velocity().unwrap().y > 0.0);
    assert_eq!(right.velocity().unwrap(), Vector3::zero());
    assert_eq!(right.state().unwrap().last_timestamp, Some(Duration::ZERO));
}

#[test]
fn concurrent_producers_never_integrate_backwards() {
    init_logger();

    let config = TrackerConfig::default().with_drift_period(Duration::from_millis(1));
    let mut tracker = MotionTracker::new(config);
    tracker.start(&mut NoGate).unwrap();
    let tracker = Arc::new(tracker);

    let next_stamp = Arc::new(AtomicU64::new(0));
    let threads = 4;
    let per_thread = 250;

    let handles: Vec<_> = (0..threads)
        .map(|_| {
            let tracker = tracker.clone();
            let next_stamp = next_stamp.clone();
            thread::spawn(move || {
                let mut outcomes = Vec::with_capacity(per_thread);
                for _ in 0..per_thread {
                    let millis = next_stamp.fetch_add(1, Ordering::SeqCst);
                    let sample = MotionSample::new(
                        Vector3::new(0.1, -0.2, 9.81),
                        Duration::from_millis(millis),
                    );
                    outcomes.push(tracker.on_motion_sample(sample).unwrap().integration);
                }
                outcomes
            })
        })
        .collect();

    let outcomes: Vec<Integration> = handles
        .into_iter()
        .flat_map(|handle| handle.join().unwrap())
        .collect();

    let total = (threads * per_thread) as u64;
    let seeded = outcomes.iter().filter(|o| matches!(o, Integration::Seeded)).count();
    let out_of_order = outcomes.iter().filter(|o| o.is_data_quality_event()).count() as u64;

    let state = tracker.state().unwrap();
    assert_eq!(outcomes.len() as u64, total);
    assert_eq!(seeded, 1);
    assert_eq!(state.out_of_order_samples, out_of_order);
    assert_eq!(state.last_timestamp, Some(Duration::from_millis(total - 1)));
    assert!(state.position.x.is_finite() && state.position.z.is_finite());
}

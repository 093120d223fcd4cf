use std::{io, time::Duration};
use anyhow::{Context, Result};
use math::Vector3;
use processing::*;
use serde::{Deserialize, Serialize};

/// One line of a recorded sensor log. Time is in seconds, the orientation columns are optional.
#[derive(Debug, Deserialize)]
struct LogRow
{
    time: f64,
    ax: f64,
    ay: f64,
    az: f64,
    #[serde(default)]
    alpha: Option<f64>,
    #[serde(default)]
    beta: Option<f64>,
    #[serde(default)]
    gamma: Option<f64>,
}

impl LogRow {
    fn orientation(&self) -> Option<OrientationSample> {
        Some(OrientationSample::new(self.alpha?, self.beta?, self.gamma?))
    }
}

#[derive(Debug, Serialize)]
struct TrajectoryRow
{
    time: f64,
    lin_x: f64,
    lin_y: f64,
    lin_z: f64,
    vel_x: f64,
    vel_y: f64,
    vel_z: f64,
    pos_x: f64,
    pos_y: f64,
    pos_z: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Summary
{
    pub motion_samples: usize,
    pub orientation_samples: usize,
    pub drift_ticks: u64,
    pub out_of_order_samples: u64,
    pub final_velocity: Vector3,
    pub final_position: Vector3,
    pub final_orientation: Option<OrientationSample>,
}

/// Runs a sensor log through the dead reckoning pipeline. Drift corrections are applied on the
/// log's own time axis, so a replay gives the same result no matter how fast it runs.
pub fn replay<R: io::Read, W: io::Write>(
    input: R,
    output: W,
    config: TrackerConfig,
) -> Result<Summary> {
    let mut reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(input);
    let mut writer = csv::Writer::from_writer(output);

    let mut algo = DeadReckoning::new(config);
    let mut schedule = DriftSchedule::new(config.drift_period);
    let mut motion_samples = 0;
    let mut orientation_samples = 0;

    for (index, result) in reader.deserialize::<LogRow>().enumerate() {
        let line = index + 2;
        let row = result.with_context(|| format!("malformed row on line {}", line))?;
        let timestamp = Duration::try_from_secs_f64(row.time)
            .with_context(|| format!("invalid time {} on line {}", row.time, line))?;

        for _ in 0..schedule.due(timestamp) {
            algo.tick();
        }

        let sample = MotionSample::new(Vector3::new(row.ax, row.ay, row.az), timestamp);
        let report = algo.step(&sample);
        motion_samples += 1;

        if let Some(orientation) = row.orientation() {
            algo.orient(orientation);
            orientation_samples += 1;
        }

        let (lin, vel, pos) = (report.linear_acceleration, algo.state.velocity, algo.state.position);
        writer.serialize(TrajectoryRow {
            time: row.time,
            lin_x: lin.x,
            lin_y: lin.y,
            lin_z: lin.z,
            vel_x: vel.x,
            vel_y: vel.y,
            vel_z: vel.z,
            pos_x: pos.x,
            pos_y: pos.y,
            pos_z: pos.z,
        })?;
    }
    writer.flush()?;

    Ok(Summary {
        motion_samples,
        orientation_samples,
        drift_ticks: algo.state.drift_ticks,
        out_of_order_samples: algo.state.out_of_order_samples,
        final_velocity: algo.state.velocity,
        final_position: algo.state.position,
        final_orientation: algo.orientation,
    })
}

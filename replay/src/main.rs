use std::{env, fs::{self, File}, path::Path};
use anyhow::{bail, Context, Result};
use env_logger::Env;
use processing::{PositionDisplay, TrackerConfig};

mod replay;

static RESULTS_DIR: &str = "analysis";

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        bail!("usage: {} <sensor-log.csv> [results-dir]", args[0]);
    }

    // Open the input CSV file.
    let in_path = Path::new(&args[1]);
    let in_file = File::open(in_path)
        .with_context(|| format!("could not open {}", in_path.display()))?;

    // Every input CSV file gets its own folder in the results directory.
    let results_dir = args.get(2).map(String::as_str).unwrap_or(RESULTS_DIR);
    let log_name = in_path
        .file_stem()
        .and_then(|stem| stem.to_str())
        .context("input path has no file name")?;
    let out_dir = Path::new(results_dir).join(log_name);
    fs::create_dir_all(&out_dir)
        .with_context(|| format!("could not create {}", out_dir.display()))?;

    let out_path = out_dir.join("trajectory.csv");
    let out_file = File::create(&out_path)
        .with_context(|| format!("could not create {}", out_path.display()))?;

    let summary = replay::replay(in_file, out_file, TrackerConfig::default())?;

    log::info!(
        "Replayed {} motion and {} orientation samples with {} drift corrections",
        summary.motion_samples, summary.orientation_samples, summary.drift_ticks
    );
    if summary.out_of_order_samples > 0 {
        log::warn!("{} samples had out-of-order timestamps", summary.out_of_order_samples);
    }
    log::info!("Final position: {}", PositionDisplay(summary.final_position));
    log::info!(
        "Final velocity: {:.3} m/s ({:.3}, {:.3}, {:.3})",
        summary.final_velocity.magnitude(),
        summary.final_velocity.x, summary.final_velocity.y, summary.final_velocity.z
    );
    if let Some(orientation) = summary.final_orientation {
        log::info!("Final orientation: {}", orientation);
    }
    log::info!("Trajectory written to {}", out_path.display());

    Ok(())
}

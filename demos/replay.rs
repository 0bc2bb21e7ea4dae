use std::env;
use std::error::Error;
use std::fs::File;
use std::path::{Path, PathBuf};

use gyro_raise::display::DEFAULT_GREETING_NAME;
use gyro_raise::{EstimatorState, GyroscopeSample, RotationEstimator};
use serde::Deserialize;

const DEFAULT_RECORDING: &str = "demos/data/raise-and-rest.csv";

/// A recorded gyroscope sample.
#[derive(Debug, Deserialize)]
struct RecordedSample {
    /// The sample time, in milliseconds.
    timestamp_ms: i64,
    /// Angular rate around the x-axis, in radians per second.
    x: f32,
    /// Angular rate around the y-axis, in radians per second.
    y: f32,
    /// Angular rate around the z-axis, in radians per second.
    z: f32,
}

impl From<RecordedSample> for GyroscopeSample<f32> {
    fn from(value: RecordedSample) -> Self {
        GyroscopeSample::from_parts(value.timestamp_ms, value.x, value.y, value.z)
    }
}

fn load_recording(path: &Path) -> Result<Vec<GyroscopeSample<f32>>, Box<dyn Error>> {
    let file = File::open(path)?;
    let mut reader = csv::Reader::from_reader(file);
    let mut samples = Vec::new();
    for row in reader.deserialize::<RecordedSample>() {
        samples.push(row?.into());
    }
    Ok(samples)
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let path = env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_RECORDING));

    let samples = load_recording(&path)?;
    if samples.is_empty() {
        log::error!(target: gyro_raise::LOG_TARGET, "This device does not have a gyroscope sensor.");
        return Ok(());
    }
    log::info!("Replaying {} samples from {}", samples.len(), path.display());

    let mut estimator = RotationEstimator::<f32>::default();
    let mut was_raised = false;
    let mut render = |state: &EstimatorState<f32>| {
        if state.is_raised() != was_raised {
            was_raised = state.is_raised();
            log::info!("Phone raised changed to {was_raised}");
        }
        println!("{}\n", state.greeting(DEFAULT_GREETING_NAME));
    };

    let state = estimator.feed(samples, &mut render);
    log::info!("Final state: {}", state.diagnostic_line());
    Ok(())
}

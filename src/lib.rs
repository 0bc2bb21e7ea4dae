//! Integrates gyroscope readings into an accumulated rotation, detects when a phone is
//! raised and discards the rotation once the phone has been still for a while.
//!
//! ```
//! use gyro_raise::{GyroscopeSample, RotationEstimator};
//!
//! let mut estimator = RotationEstimator::<f32>::default();
//! estimator.on_sample(&GyroscopeSample::from_parts(0, 0.0, 0.0, 0.0));
//! let state = estimator.on_sample(&GyroscopeSample::from_parts(1000, 2.0, 0.0, 0.0));
//!
//! assert!(state.is_raised());
//! assert_eq!(state.rotation().x, 2.0);
//! ```

// Enable no_std mode.
#![cfg_attr(not(any(test, feature = "std")), no_std)]
#![forbid(unsafe_code)]
// Only enables the `doc_cfg` feature when the `docsrs` configuration attribute is defined.
#![cfg_attr(docsrs, feature(doc_cfg))]

mod config;
pub mod display;
mod error;
mod estimator;
mod gyroscope_reading;
mod gyroscope_sample;
mod macros;
mod num_traits;
mod rotation;
#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
mod shared;
mod sink;
mod state;

pub use crate::config::{EstimatorConfig, DEFAULT_STILLNESS_WINDOW_MS};
pub use crate::error::ConfigError;
pub use crate::estimator::{RotationEstimator, LOG_TARGET};
pub use crate::gyroscope_reading::GyroscopeReading;
pub use crate::gyroscope_sample::GyroscopeSample;
pub use crate::num_traits::*;
pub use crate::rotation::Rotation;
#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
pub use crate::shared::SharedRotationEstimator;
pub use crate::sink::{NullSink, RotationSink};
pub use crate::state::EstimatorState;

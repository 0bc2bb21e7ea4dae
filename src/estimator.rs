use crate::config::EstimatorConfig;
use crate::gyroscope_sample::GyroscopeSample;
use crate::num_traits::{EstimatorDefaults, FromMillis};
use crate::rotation::Rotation;
use crate::sink::RotationSink;
use crate::state::EstimatorState;
use core::fmt::Debug;
use num_traits::float::FloatCore;

/// The log target of the per-update diagnostic line.
pub const LOG_TARGET: &str = "PhoneRaiseLogger";

/// Integrates gyroscope samples into an accumulated rotation and detects a raised phone.
///
/// Every significant sample adds its angular rates, multiplied by the time elapsed since
/// the previous sample, to the rotation. When no significant sample has been observed
/// for longer than the stillness window, the rotation is discarded. The phone counts as
/// raised while the accumulated x-axis rotation is at or above the raised threshold.
///
/// This is a plain forward Euler integrator. There is no drift correction, and the
/// rate of the current sample is applied to the interval preceding it.
#[derive(Debug, Clone)]
pub struct RotationEstimator<T> {
    config: EstimatorConfig<T>,
    state: EstimatorState<T>,
}

impl<T> RotationEstimator<T> {
    /// Initializes a new [`RotationEstimator`] with the given thresholds.
    pub fn new(config: EstimatorConfig<T>) -> Self
    where
        T: FloatCore,
    {
        Self {
            config,
            state: EstimatorState::initial(),
        }
    }

    /// The thresholds in use.
    #[inline]
    pub fn config(&self) -> &EstimatorConfig<T> {
        &self.config
    }

    /// Obtains a copy of the current state.
    #[inline]
    pub fn state(&self) -> EstimatorState<T>
    where
        T: Copy,
    {
        self.state
    }

    /// Returns to the state before the first sample, keeping the configuration.
    pub fn reset(&mut self)
    where
        T: FloatCore,
    {
        self.state = EstimatorState::initial();
    }

    /// Processes a single sample and returns the updated state.
    ///
    /// The first sample only establishes the time base. Timestamps are expected to be
    /// non-decreasing but are not checked; an out-of-order sample integrates over a
    /// negative interval.
    pub fn on_sample(&mut self, sample: &GyroscopeSample<T>) -> EstimatorState<T>
    where
        T: FloatCore + FromMillis + Debug,
    {
        let now = sample.timestamp_ms;
        let Some(last_update_ms) = self.state.last_update_ms else {
            log::trace!(target: LOG_TARGET, "First gyroscope sample at {now} ms");
            self.state.last_update_ms = Some(now);
            return self.state;
        };

        let delta_t = T::from_millis(now.wrapping_sub(last_update_ms));

        if sample.reading.is_significant(self.config.significant_rate()) {
            self.state.last_movement_ms = now;
            self.state.rotation = self.state.rotation + sample.reading.integrate(delta_t);
        } else if now.wrapping_sub(self.state.last_movement_ms) > self.config.stillness_window_ms()
        {
            if !self.state.rotation.is_zero() {
                log::trace!(
                    target: LOG_TARGET,
                    "Still since {} ms, resetting rotation",
                    self.state.last_movement_ms
                );
            }
            self.state.rotation = Rotation::zero();
        }

        self.state.is_raised = self.state.rotation.x >= self.config.raised_rotation();
        self.state.last_update_ms = Some(now);

        log::debug!(target: LOG_TARGET, "{}", self.state.diagnostic_line());
        self.state
    }

    /// Processes all `samples` in order, handing each updated state to `sink`.
    ///
    /// Returns the state after the last sample.
    pub fn feed<I, S>(&mut self, samples: I, sink: &mut S) -> EstimatorState<T>
    where
        I: IntoIterator<Item = GyroscopeSample<T>>,
        S: RotationSink<T> + ?Sized,
        T: FloatCore + FromMillis + Debug,
    {
        for sample in samples {
            let state = self.on_sample(&sample);
            sink.on_state(&state);
        }
        self.state
    }
}

impl<T> Default for RotationEstimator<T>
where
    T: FloatCore + EstimatorDefaults<T>,
{
    fn default() -> Self {
        Self::new(EstimatorConfig::default())
    }
}

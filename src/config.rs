use crate::error::ConfigError;
use crate::num_traits::EstimatorDefaults;
use num_traits::float::FloatCore;

/// The default stillness window, in milliseconds.
pub const DEFAULT_STILLNESS_WINDOW_MS: i64 = 2000;

/// Thresholds of the [`RotationEstimator`](crate::RotationEstimator).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EstimatorConfig<T> {
    stillness_window_ms: i64,
    significant_rate: T,
    raised_rotation: T,
}

impl<T> EstimatorConfig<T> {
    /// Initializes a new [`EstimatorConfig`] instance.
    ///
    /// ## Arguments
    /// * `stillness_window_ms` - How long, in milliseconds, no significant movement may be
    ///   observed before the accumulated rotation is discarded. Defaults to `2000`.
    /// * `significant_rate` - The angular rate, in radians per second, that any axis must
    ///   exceed for a sample to count as movement. Defaults to `0.01`.
    /// * `raised_rotation` - The accumulated x-axis rotation at or above which the phone
    ///   is considered raised. Defaults to `1.0`.
    pub fn new(
        stillness_window_ms: i64,
        significant_rate: T,
        raised_rotation: T,
    ) -> Result<Self, ConfigError>
    where
        T: FloatCore,
    {
        Ok(Self {
            stillness_window_ms: validate_stillness_window(stillness_window_ms)?,
            significant_rate: validate_significant_rate(significant_rate)?,
            raised_rotation: validate_raised_rotation(raised_rotation)?,
        })
    }

    /// Replaces the stillness window.
    pub fn with_stillness_window_ms(mut self, value: i64) -> Result<Self, ConfigError> {
        self.stillness_window_ms = validate_stillness_window(value)?;
        Ok(self)
    }

    /// Replaces the significance threshold.
    pub fn with_significant_rate(mut self, value: T) -> Result<Self, ConfigError>
    where
        T: FloatCore,
    {
        self.significant_rate = validate_significant_rate(value)?;
        Ok(self)
    }

    /// Replaces the raised threshold.
    pub fn with_raised_rotation(mut self, value: T) -> Result<Self, ConfigError>
    where
        T: FloatCore,
    {
        self.raised_rotation = validate_raised_rotation(value)?;
        Ok(self)
    }

    /// The stillness window, in milliseconds.
    #[inline]
    pub fn stillness_window_ms(&self) -> i64 {
        self.stillness_window_ms
    }

    /// The significance threshold, in radians per second.
    #[inline]
    pub fn significant_rate(&self) -> T
    where
        T: Copy,
    {
        self.significant_rate
    }

    /// The raised threshold for the accumulated x-axis rotation.
    #[inline]
    pub fn raised_rotation(&self) -> T
    where
        T: Copy,
    {
        self.raised_rotation
    }
}

impl<T> Default for EstimatorConfig<T>
where
    T: EstimatorDefaults<T>,
{
    fn default() -> Self {
        Self {
            stillness_window_ms: DEFAULT_STILLNESS_WINDOW_MS,
            significant_rate: T::SIGNIFICANT_RATE,
            raised_rotation: T::RAISED_ROTATION,
        }
    }
}

fn validate_stillness_window(value: i64) -> Result<i64, ConfigError> {
    if value < 0 {
        return Err(ConfigError::NegativeStillnessWindow(value));
    }
    Ok(value)
}

fn validate_significant_rate<T: FloatCore>(value: T) -> Result<T, ConfigError> {
    if value.is_nan() || value < T::zero() {
        return Err(ConfigError::InvalidSignificantRate);
    }
    Ok(value)
}

fn validate_raised_rotation<T: FloatCore>(value: T) -> Result<T, ConfigError> {
    if value.is_nan() {
        return Err(ConfigError::InvalidRaisedRotation);
    }
    Ok(value)
}

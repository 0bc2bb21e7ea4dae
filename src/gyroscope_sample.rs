use crate::gyroscope_reading::GyroscopeReading;

/// A gyroscope reading together with the time it was taken.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GyroscopeSample<T> {
    /// The sample time, in milliseconds relative to an arbitrary but fixed epoch.
    pub timestamp_ms: i64,
    /// The angular rates.
    pub reading: GyroscopeReading<T>,
}

impl<T> GyroscopeSample<T> {
    /// Initializes a new [`GyroscopeSample`] instance.
    #[inline(always)]
    pub const fn new(timestamp_ms: i64, reading: GyroscopeReading<T>) -> Self {
        Self {
            timestamp_ms,
            reading,
        }
    }

    /// Initializes a new [`GyroscopeSample`] from the timestamp and the three angular rates.
    #[inline(always)]
    pub const fn from_parts(timestamp_ms: i64, omega_x: T, omega_y: T, omega_z: T) -> Self {
        Self::new(
            timestamp_ms,
            GyroscopeReading::new(omega_x, omega_y, omega_z),
        )
    }
}

impl<T> From<(i64, GyroscopeReading<T>)> for GyroscopeSample<T> {
    fn from(value: (i64, GyroscopeReading<T>)) -> Self {
        Self::new(value.0, value.1)
    }
}

/// Default thresholds of the rotation estimator for a given scalar type.
pub trait EstimatorDefaults<T> {
    /// The angular rate, in radians per second, that a single axis must exceed
    /// for a sample to count as movement, i.e. `0.01`.
    const SIGNIFICANT_RATE: T;

    /// The accumulated x-axis rotation at which the phone counts as raised, i.e. `1.0`.
    const RAISED_ROTATION: T;
}

impl EstimatorDefaults<f32> for f32 {
    const SIGNIFICANT_RATE: f32 = 0.01;
    const RAISED_ROTATION: f32 = 1.0;
}

impl EstimatorDefaults<f64> for f64 {
    const SIGNIFICANT_RATE: f64 = 0.01;
    const RAISED_ROTATION: f64 = 1.0;
}

/// Converts a millisecond interval into seconds of the implementing scalar type.
pub trait FromMillis {
    /// Converts the (possibly negative) interval `delta_ms` into seconds.
    fn from_millis(delta_ms: i64) -> Self;
}

impl FromMillis for f32 {
    #[inline(always)]
    fn from_millis(delta_ms: i64) -> Self {
        delta_ms as f32 / 1000.0
    }
}

impl FromMillis for f64 {
    #[inline(always)]
    fn from_millis(delta_ms: i64) -> Self {
        delta_ms as f64 / 1000.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_millis_f32() {
        assert_eq!(f32::from_millis(1000), 1.0);
        assert_eq!(f32::from_millis(250), 0.25);
        assert_eq!(f32::from_millis(0), 0.0);
        assert_eq!(f32::from_millis(-500), -0.5);
    }

    #[test]
    fn test_from_millis_f64() {
        assert_eq!(f64::from_millis(1000), 1.0);
        assert_eq!(f64::from_millis(1), 0.001);
        assert_eq!(f64::from_millis(-2000), -2.0);
    }

    #[test]
    fn test_defaults_agree_across_types() {
        assert_eq!(f32::SIGNIFICANT_RATE as f64, 0.01_f32 as f64);
        assert_eq!(f64::SIGNIFICANT_RATE, 0.01);
        assert_eq!(f32::RAISED_ROTATION, 1.0);
        assert_eq!(f64::RAISED_ROTATION, 1.0);
    }
}

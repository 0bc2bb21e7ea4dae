use crate::display::{DiagnosticLine, Greeting};
use crate::rotation::Rotation;
use num_traits::Zero;

/// The state of a [`RotationEstimator`](crate::RotationEstimator).
///
/// Instances are plain values; the estimator hands out copies after every update so
/// that the rotation and the raised flag are always observed together.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EstimatorState<T> {
    pub(crate) rotation: Rotation<T>,
    pub(crate) is_raised: bool,
    pub(crate) last_update_ms: Option<i64>,
    pub(crate) last_movement_ms: i64,
}

impl<T> EstimatorState<T> {
    /// The state before the first sample: no rotation, no timestamps.
    pub fn initial() -> Self
    where
        T: Zero,
    {
        Self {
            rotation: Rotation::zero(),
            is_raised: false,
            last_update_ms: None,
            last_movement_ms: 0,
        }
    }

    /// The rotation accumulated so far.
    #[inline]
    pub fn rotation(&self) -> Rotation<T>
    where
        T: Copy,
    {
        self.rotation
    }

    /// Whether the accumulated x-axis rotation has reached the raised threshold.
    #[inline]
    pub fn is_raised(&self) -> bool {
        self.is_raised
    }

    /// The timestamp of the previously processed sample, if any.
    #[inline]
    pub fn last_update_ms(&self) -> Option<i64> {
        self.last_update_ms
    }

    /// The timestamp of the most recent significant sample.
    ///
    /// This is `0` until the first movement, not the time of the first sample.
    #[inline]
    pub fn last_movement_ms(&self) -> i64 {
        self.last_movement_ms
    }

    /// Whether a sample has been received yet.
    #[inline]
    pub fn has_received_sample(&self) -> bool {
        self.last_update_ms.is_some()
    }

    /// Renders the state for display, greeting `name`.
    pub fn greeting<'a>(&self, name: &'a str) -> Greeting<'a, T>
    where
        T: Copy,
    {
        Greeting::new(name, self.rotation, self.is_raised)
    }

    /// Renders the state as a diagnostic log line.
    pub fn diagnostic_line(&self) -> DiagnosticLine<T>
    where
        T: Copy,
    {
        DiagnosticLine::new(self.rotation, self.is_raised)
    }
}

impl<T> Default for EstimatorState<T>
where
    T: Zero,
{
    fn default() -> Self {
        Self::initial()
    }
}

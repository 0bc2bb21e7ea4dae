use crate::state::EstimatorState;

/// Receives the estimator state after every processed sample.
///
/// This is the push-style counterpart to [`RotationEstimator::state`](crate::RotationEstimator::state);
/// a display layer implements it to re-render on each update.
pub trait RotationSink<T> {
    /// Called once per sample with the updated state.
    fn on_state(&mut self, state: &EstimatorState<T>);
}

impl<T, F> RotationSink<T> for F
where
    F: FnMut(&EstimatorState<T>),
{
    #[inline]
    fn on_state(&mut self, state: &EstimatorState<T>) {
        self(state)
    }
}

/// A sink that discards every state.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl<T> RotationSink<T> for NullSink {
    #[inline(always)]
    fn on_state(&mut self, _state: &EstimatorState<T>) {}
}

use crate::config::EstimatorConfig;
use crate::estimator::RotationEstimator;
use crate::gyroscope_sample::GyroscopeSample;
use crate::num_traits::{EstimatorDefaults, FromMillis};
use crate::state::EstimatorState;
use core::fmt::Debug;
use num_traits::float::FloatCore;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// A [`RotationEstimator`] that can be written from a sensor thread and read from a
/// display thread.
///
/// Updates and snapshots take the same lock, so a reader always sees the rotation and
/// the raised flag of the same sample. Cloning the handle shares the estimator.
#[derive(Debug)]
pub struct SharedRotationEstimator<T> {
    inner: Arc<Mutex<RotationEstimator<T>>>,
}

impl<T> SharedRotationEstimator<T> {
    /// Initializes a new [`SharedRotationEstimator`] with the given thresholds.
    pub fn new(config: EstimatorConfig<T>) -> Self
    where
        T: FloatCore,
    {
        Self::from(RotationEstimator::new(config))
    }

    /// Processes a single sample; see [`RotationEstimator::on_sample`].
    pub fn on_sample(&self, sample: &GyroscopeSample<T>) -> EstimatorState<T>
    where
        T: FloatCore + FromMillis + Debug,
    {
        self.lock().on_sample(sample)
    }

    /// Obtains a consistent copy of the current state.
    pub fn snapshot(&self) -> EstimatorState<T>
    where
        T: Copy,
    {
        self.lock().state()
    }

    /// Returns to the state before the first sample.
    pub fn reset(&self)
    where
        T: FloatCore,
    {
        self.lock().reset()
    }

    // The update path cannot panic while the lock is held, so a poisoned
    // lock still guards a complete state.
    fn lock(&self) -> MutexGuard<'_, RotationEstimator<T>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<T> Clone for SharedRotationEstimator<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T> From<RotationEstimator<T>> for SharedRotationEstimator<T> {
    fn from(value: RotationEstimator<T>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(value)),
        }
    }
}

impl<T> Default for SharedRotationEstimator<T>
where
    T: FloatCore + EstimatorDefaults<T>,
{
    fn default() -> Self {
        Self::from(RotationEstimator::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc;
    use std::thread;

    #[test]
    fn test_clones_share_state() {
        let writer = SharedRotationEstimator::<f32>::default();
        let reader = writer.clone();

        writer.on_sample(&GyroscopeSample::from_parts(0, 0.0, 0.0, 0.0));
        writer.on_sample(&GyroscopeSample::from_parts(1000, 2.0, 0.0, 0.0));

        let snapshot = reader.snapshot();
        assert_eq!(snapshot.rotation().x, 2.0);
        assert!(snapshot.is_raised());

        reader.reset();
        assert_eq!(writer.snapshot(), EstimatorState::initial());
    }

    #[test]
    fn test_snapshots_are_never_torn() {
        let estimator = SharedRotationEstimator::<f64>::default();
        let (done_tx, done_rx) = mpsc::channel();

        let writer = estimator.clone();
        let handle = thread::spawn(move || {
            writer.on_sample(&GyroscopeSample::from_parts(0, 0.0, 0.0, 0.0));
            for i in 1..=2000_i64 {
                // Alternate between rising and falling so the raised flag flips often.
                let rate = if (i / 50) % 2 == 0 { 40.0 } else { -40.0 };
                writer.on_sample(&GyroscopeSample::from_parts(i, rate, 0.0, 0.0));
            }
            done_tx.send(()).expect("reader is alive");
        });

        loop {
            let snapshot = estimator.snapshot();
            assert_eq!(snapshot.is_raised(), snapshot.rotation().x >= 1.0);
            if !matches!(done_rx.try_recv(), Err(mpsc::TryRecvError::Empty)) {
                break;
            }
        }

        handle.join().expect("writer finished");
    }
}

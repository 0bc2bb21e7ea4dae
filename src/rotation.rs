use crate::impl_standard_traits;
use core::ops::{Add, AddAssign};
use num_traits::Zero;
use uniform_array_derive::UniformArray;

/// Rotation accumulated around the three device axes.
///
/// Each component is the integral of the respective angular rate, in radians. The
/// estimator treats the values as a score rather than as an attitude; no wrapping
/// or normalization is applied.
#[derive(UniformArray)]
#[cfg_attr(test, ensure_uniform_type::ensure_uniform_type)]
#[repr(C)]
pub struct Rotation<T> {
    /// Accumulated rotation around the x-axis.
    pub x: T,
    /// Accumulated rotation around the y-axis.
    pub y: T,
    /// Accumulated rotation around the z-axis.
    pub z: T,
}

impl<T> Rotation<T> {
    /// Initializes a new [`Rotation`] instance.
    #[inline(always)]
    pub const fn new(x: T, y: T, z: T) -> Self {
        Self { x, y, z }
    }

    /// Returns a rotation of zero around every axis.
    #[inline]
    pub fn zero() -> Self
    where
        T: Zero,
    {
        Self::new(T::zero(), T::zero(), T::zero())
    }

    /// Determines whether the rotation is zero around every axis.
    #[inline]
    pub fn is_zero(&self) -> bool
    where
        T: Zero,
    {
        self.x.is_zero() && self.y.is_zero() && self.z.is_zero()
    }
}

impl<T> Add<Rotation<T>> for Rotation<T>
where
    T: Add<T, Output = T>,
{
    type Output = Rotation<T>;

    #[inline]
    fn add(self, rhs: Rotation<T>) -> Self::Output {
        Self {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
            z: self.z + rhs.z,
        }
    }
}

impl<T> AddAssign<Rotation<T>> for Rotation<T>
where
    T: AddAssign<T>,
{
    #[inline]
    fn add_assign(&mut self, rhs: Rotation<T>) {
        self.x += rhs.x;
        self.y += rhs.y;
        self.z += rhs.z;
    }
}

impl<T> From<Rotation<T>> for (T, T, T) {
    fn from(value: Rotation<T>) -> Self {
        (value.x, value.y, value.z)
    }
}

impl<T> From<(T, T, T)> for Rotation<T> {
    fn from(value: (T, T, T)) -> Self {
        Self::new(value.0, value.1, value.2)
    }
}

impl_standard_traits!(Rotation, T, x, y, z);

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_len() {
        let rotation = Rotation::<f32>::default();
        assert_eq!(rotation.len(), 3);
    }

    #[test]
    fn test_index() {
        let rotation = Rotation::<f32>::new(1.0, 2.0, 3.0);

        assert_eq!(rotation[0], 1.0);
        assert_eq!(rotation[1], 2.0);
        assert_eq!(rotation[2], 3.0);
    }

    #[test]
    fn test_zero() {
        let rotation = Rotation::<f64>::zero();
        assert!(rotation.is_zero());
        assert!(!Rotation::<f64>::new(0.0, 0.0, 0.1).is_zero());
    }

    #[test]
    fn test_add_assign_accumulates() {
        let mut rotation = Rotation::<f32>::new(0.5, 0.0, -1.0);
        rotation += Rotation::new(0.25, 1.0, 1.0);
        rotation += Rotation::new(0.25, 0.0, 0.0);
        assert_eq!(rotation.x, 1.0);
        assert_eq!(rotation.y, 1.0);
        assert_eq!(rotation.z, 0.0);
    }

    #[test]
    fn test_tuple_conversion() {
        let rotation: Rotation<f32> = (1.0, 2.0, 3.0).into();
        let (x, y, z) = rotation.into();
        assert_eq!((x, y, z), (1.0, 2.0, 3.0));
        assert_eq!(rotation + Rotation::new(1.0, 1.0, 1.0), Rotation::new(2.0, 3.0, 4.0));
    }
}

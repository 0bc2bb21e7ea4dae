use crate::impl_standard_traits;
use crate::rotation::Rotation;
use core::ops::Mul;
use num_traits::float::FloatCore;
use uniform_array_derive::UniformArray;

/// A single gyroscope reading in the device frame.
///
/// The device frame is the one Android reports gyroscope values in: the x-axis points to
/// the right edge of the screen, the y-axis towards the top edge and the z-axis out of
/// the screen. Tilting the top edge of the phone up is a positive rotation around x.
#[derive(UniformArray)]
#[cfg_attr(test, ensure_uniform_type::ensure_uniform_type)]
#[repr(C)]
pub struct GyroscopeReading<T> {
    /// The angular rate around the x-axis, in radians per second.
    pub omega_x: T,
    /// The angular rate around the y-axis, in radians per second.
    pub omega_y: T,
    /// The angular rate around the z-axis, in radians per second.
    pub omega_z: T,
}

impl<T> GyroscopeReading<T> {
    /// Initializes a new [`GyroscopeReading`] instance.
    #[inline(always)]
    pub const fn new(omega_x: T, omega_y: T, omega_z: T) -> Self {
        Self {
            omega_x,
            omega_y,
            omega_z,
        }
    }

    /// Constructs a new [`GyroscopeReading`] from a reading given in the device's
    /// East, North, Up frame.
    #[cfg(feature = "coordinate-frame")]
    #[cfg_attr(docsrs, doc(cfg(feature = "coordinate-frame")))]
    pub fn east_north_up<C>(coordinate: C) -> Self
    where
        C: Into<coordinate_frame::EastNorthUp<T>>,
        T: Clone,
    {
        let coordinate = coordinate.into();
        Self {
            omega_x: coordinate.x(),
            omega_y: coordinate.y(),
            omega_z: coordinate.z(),
        }
    }

    /// Determines whether any axis turns faster than `threshold` radians per second.
    ///
    /// The comparison is strict; a rate exactly at the threshold does not count.
    pub fn is_significant(&self, threshold: T) -> bool
    where
        T: FloatCore,
    {
        self.omega_x.abs() > threshold
            || self.omega_y.abs() > threshold
            || self.omega_z.abs() > threshold
    }

    /// Integrates the angular rates over `delta_t` seconds (a forward Euler step).
    #[inline]
    pub fn integrate(&self, delta_t: T) -> Rotation<T>
    where
        T: Mul<T, Output = T> + Copy,
    {
        Rotation::new(
            self.omega_x * delta_t,
            self.omega_y * delta_t,
            self.omega_z * delta_t,
        )
    }
}

impl<T> Mul<T> for GyroscopeReading<T>
where
    T: Mul<T, Output = T> + Clone,
{
    type Output = GyroscopeReading<T>;

    fn mul(self, rhs: T) -> Self::Output {
        Self {
            omega_x: self.omega_x * rhs.clone(),
            omega_y: self.omega_y * rhs.clone(),
            omega_z: self.omega_z * rhs,
        }
    }
}

#[cfg(feature = "coordinate-frame")]
#[cfg_attr(docsrs, doc(cfg(feature = "coordinate-frame")))]
impl<T, C> From<C> for GyroscopeReading<T>
where
    C: coordinate_frame::CoordinateFrame<Type = T>,
    T: Copy + coordinate_frame::SaturatingNeg<Output = T>,
{
    fn from(value: C) -> Self {
        Self::east_north_up(value.to_enu())
    }
}

impl_standard_traits!(GyroscopeReading, T, omega_x, omega_y, omega_z);

//! Text renderings of the estimator state.

use crate::rotation::Rotation;
use core::fmt::{Debug, Display, Formatter};

/// The name greeted by the phone-raise screen.
pub const DEFAULT_GREETING_NAME: &str = "Andy, Jiang, Matt & Sagar";

/// The name greeted in design previews.
pub const PREVIEW_GREETING_NAME: &str = "Android";

/// The on-screen text: a greeting, the raised flag and the rotation rounded to two
/// decimal places.
///
/// Rounding is that of `{:.2}`, applied to the exact value of the stored float; exact
/// ties round to even. `1.005_f32` is stored as `1.00499999…` and renders as `1.00`.
#[derive(Debug, Clone, Copy)]
pub struct Greeting<'a, T> {
    name: &'a str,
    rotation: Rotation<T>,
    is_raised: bool,
}

impl<'a, T> Greeting<'a, T> {
    /// Initializes a new [`Greeting`] instance.
    pub const fn new(name: &'a str, rotation: Rotation<T>, is_raised: bool) -> Self {
        Self {
            name,
            rotation,
            is_raised,
        }
    }
}

impl<T> Display for Greeting<'_, T>
where
    T: Display,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "Hello {}!\nPhone Raised: {}\nX Rotation: {:.2}\nY Rotation: {:.2}\nZ Rotation: {:.2}",
            self.name, self.is_raised, self.rotation.x, self.rotation.y, self.rotation.z
        )
    }
}

/// The per-update log line, with unrounded values.
///
/// Values always carry a fractional part (`2.0`, not `2`) so that whole numbers read the
/// same as on the phone's own log.
#[derive(Debug, Clone, Copy)]
pub struct DiagnosticLine<T> {
    rotation: Rotation<T>,
    is_raised: bool,
}

impl<T> DiagnosticLine<T> {
    /// Initializes a new [`DiagnosticLine`] instance.
    pub const fn new(rotation: Rotation<T>, is_raised: bool) -> Self {
        Self {
            rotation,
            is_raised,
        }
    }
}

impl<T> Display for DiagnosticLine<T>
where
    T: Debug,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "X Rotation: {:?}, Y Rotation: {:?}, Z Rotation: {:?}, Phone Raised: {}",
            self.rotation.x, self.rotation.y, self.rotation.z, self.is_raised
        )
    }
}

//! Relative/absolute variant markers.
//!
//! Every [`Scalar`](crate::Scalar) is tagged with a [`Variant`]:
//!
//! - [`Relative`] values are differences. They form a vector space: they add,
//!   subtract, negate, and scale freely, and convert between units by factor
//!   alone (a 1 °C temperature *difference* is a 1 K difference).
//! - [`Absolute`] values are points on a scale (a position, an instant, an
//!   absolute temperature). They form an affine space: two absolutes differ
//!   by a relative, an absolute plus a relative is another absolute, and
//!   absolute + absolute does not typecheck. Converting an absolute applies
//!   the unit's offset in addition to its factor (0 °C is 273.15 K).

use crate::magnitude::Magnitude;
use core::fmt::Debug;

mod sealed {
    pub trait Sealed {}
    impl Sealed for super::Relative {}
    impl Sealed for super::Absolute {}
}

/// Marker trait distinguishing relative (difference) from absolute (point)
/// scalars. Sealed; implemented only by [`Relative`] and [`Absolute`].
pub trait Variant: Copy + PartialEq + PartialOrd + Debug + 'static + sealed::Sealed {
    /// `true` for [`Absolute`].
    const IS_ABSOLUTE: bool;

    /// Converts a magnitude expressed in a unit with the given constants into
    /// the kind's reference unit.
    fn to_canonical<F: Magnitude>(value: F, factor: f64, offset: f64) -> F;

    /// Inverse of [`to_canonical`](Variant::to_canonical): expresses a
    /// reference-unit magnitude in a unit with the given constants.
    fn from_canonical<F: Magnitude>(value: F, factor: f64, offset: f64) -> F;
}

/// Marker for difference-like scalars (the default).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub enum Relative {}

/// Marker for point-like scalars.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub enum Absolute {}

impl Variant for Relative {
    const IS_ABSOLUTE: bool = false;

    #[inline]
    fn to_canonical<F: Magnitude>(value: F, factor: f64, _offset: f64) -> F {
        value * F::from_f64(factor)
    }

    #[inline]
    fn from_canonical<F: Magnitude>(value: F, factor: f64, _offset: f64) -> F {
        value / F::from_f64(factor)
    }
}

impl Variant for Absolute {
    const IS_ABSOLUTE: bool = true;

    #[inline]
    fn to_canonical<F: Magnitude>(value: F, factor: f64, offset: f64) -> F {
        value * F::from_f64(factor) + F::from_f64(offset)
    }

    #[inline]
    fn from_canonical<F: Magnitude>(value: F, factor: f64, offset: f64) -> F {
        (value - F::from_f64(offset)) / F::from_f64(factor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn relative_ignores_offset() {
        // A 10-degree Celsius difference is a 10-kelvin difference.
        let canonical = Relative::to_canonical(10.0_f64, 1.0, 273.15);
        assert_abs_diff_eq!(canonical, 10.0, epsilon = 1e-12);
    }

    #[test]
    fn absolute_applies_offset() {
        // 0 degrees Celsius is 273.15 K.
        let canonical = Absolute::to_canonical(0.0_f64, 1.0, 273.15);
        assert_abs_diff_eq!(canonical, 273.15, epsilon = 1e-12);
    }

    #[test]
    fn absolute_roundtrip() {
        let canonical = Absolute::to_canonical(32.0_f64, 5.0 / 9.0, 459.67 * 5.0 / 9.0);
        assert_abs_diff_eq!(canonical, 273.15, epsilon = 1e-9);
        let back = Absolute::from_canonical(canonical, 5.0 / 9.0, 459.67 * 5.0 / 9.0);
        assert_abs_diff_eq!(back, 32.0, epsilon = 1e-9);
    }
}

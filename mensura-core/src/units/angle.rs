//! Angle units.
//!
//! The reference unit is [`Radian`]. A relative angle is a rotation; the
//! absolute flavor, [`Direction`], is a bearing on a circle. No wrapping is
//! applied; directions beyond a full turn keep their magnitude.

use crate::{Abs, Kind, Rel, Unit, UnitInfo};
use core::f64::consts::PI;
use mensura_derive::Unit;

/// Kind tag for plane angle.
pub enum Angle {}
impl Kind for Angle {
    type Reference = Radian;
    const NAME: &'static str = "angle";
    const UNITS: &'static [UnitInfo] = &[
        UnitInfo::of::<Radian>(),
        UnitInfo::of::<Degree>(),
        UnitInfo::of::<Arcminute>(),
        UnitInfo::of::<Arcsecond>(),
        UnitInfo::of::<Gradian>(),
    ];
}

/// Marker trait for any [`Unit`] whose kind is [`Angle`].
pub trait AngleUnit: Unit<Kind = Angle> {}
impl<T: Unit<Kind = Angle>> AngleUnit for T {}

/// Radian (the reference unit for angle).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "rad", kind = Angle, factor = 1.0)]
pub struct Radian;
/// A rotation measured in radians.
pub type Radians = Rel<Radian>;
/// One radian.
pub const RAD: Radians = Radians::new(1.0);

/// Degree (`π/180 rad`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "deg", kind = Angle, factor = PI / 180.0)]
pub struct Degree;
/// A rotation measured in degrees.
pub type Degrees = Rel<Degree>;
/// One degree.
pub const DEG: Degrees = Degrees::new(1.0);

/// Minute of arc (`1/60` degree).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "arcmin", kind = Angle, factor = PI / 10_800.0)]
pub struct Arcminute;
/// A rotation measured in arcminutes.
pub type Arcminutes = Rel<Arcminute>;

/// Second of arc (`1/3600` degree).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "arcsec", kind = Angle, factor = PI / 648_000.0)]
pub struct Arcsecond;
/// A rotation measured in arcseconds.
pub type Arcseconds = Rel<Arcsecond>;

/// Gradian (`π/200 rad`; 400 gradians per full turn).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "grad", kind = Angle, factor = PI / 200.0)]
pub struct Gradian;
/// A rotation measured in gradians.
pub type Gradians = Rel<Gradian>;

/// An absolute bearing, in radians.
pub type Direction = Abs<Radian>;

crate::impl_unit_conversions!(Radian, Degree, Arcminute, Arcsecond, Gradian);

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn degree_to_radian() {
        let half_turn = Degrees::new(180.0);
        assert_relative_eq!(half_turn.to::<Radian>().value(), PI, max_relative = 1e-15);
    }

    #[test]
    fn arcminute_ladder() {
        let one_deg = Degrees::new(1.0);
        assert_relative_eq!(one_deg.to::<Arcminute>().value(), 60.0, max_relative = 1e-12);
        assert_relative_eq!(one_deg.to::<Arcsecond>().value(), 3600.0, max_relative = 1e-12);
    }

    #[test]
    fn gradian_full_turn() {
        let turn = Gradians::new(400.0);
        assert_relative_eq!(turn.to::<Radian>().value(), 2.0 * PI, max_relative = 1e-15);
    }

    #[test]
    fn trig_applies_to_magnitude_in_current_unit() {
        // sin() reads the raw magnitude as radians.
        let a = Radians::new(PI / 6.0);
        assert_relative_eq!(a.sin().value(), 0.5, max_relative = 1e-12);
    }

    #[test]
    fn direction_turns_by_rotation() {
        let north: Direction = Radians::new(0.0).to_abs();
        let east = north + Degrees::new(90.0).to::<Radian>();
        assert_relative_eq!(east.value(), PI / 2.0, max_relative = 1e-15);
    }
}

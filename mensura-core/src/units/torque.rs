//! Torque units.
//!
//! Torque is dimensionally a force times a length, but it is a distinct
//! kind from [`Energy`](crate::units::energy::Energy): `Force × Length`
//! yields energy, and torque only enters the derived-operation table via
//! its own quotients.

use crate::units::force::Force;
use crate::units::length::Length;
use crate::{Kind, Rel, Unit, UnitInfo};
use mensura_derive::Unit;

/// Kind tag for torque.
pub enum Torque {}
impl Kind for Torque {
    type Reference = NewtonMeter;
    const NAME: &'static str = "torque";
    const UNITS: &'static [UnitInfo] = &[
        UnitInfo::of::<NewtonMeter>(),
        UnitInfo::of::<PoundFoot>(),
        UnitInfo::of::<KilogramForceMeter>(),
    ];
}

/// Marker trait for any [`Unit`] whose kind is [`Torque`].
pub trait TorqueUnit: Unit<Kind = Torque> {}
impl<T: Unit<Kind = Torque>> TorqueUnit for T {}

/// Newton-metre (the reference unit for torque).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "N.m", kind = Torque, factor = 1.0)]
pub struct NewtonMeter;
/// A torque measured in newton-metres.
pub type NewtonMeters = Rel<NewtonMeter>;

/// Pound-foot (`lbf · ft`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "lbf.ft", kind = Torque, factor = 1.355_817_948_331_400_4)]
pub struct PoundFoot;
/// A torque measured in pound-feet.
pub type PoundFeet = Rel<PoundFoot>;

/// Kilogram-force metre (`9.80665 N·m`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "kgf.m", kind = Torque, factor = 9.806_65)]
pub struct KilogramForceMeter;
/// A torque measured in kilogram-force metres.
pub type KilogramForceMeters = Rel<KilogramForceMeter>;

crate::derived_div! {
    (Torque, Force) => Length,
    (Torque, Length) => Force,
}

crate::impl_unit_conversions!(NewtonMeter, PoundFoot, KilogramForceMeter);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::force::Newtons;
    use crate::units::length::Meters;
    use approx::assert_relative_eq;

    #[test]
    fn pound_foot_to_newton_meters() {
        let t = PoundFeet::new(1.0);
        assert_relative_eq!(
            t.to::<NewtonMeter>().value(),
            4.4482216152605 * 0.3048,
            max_relative = 1e-12
        );
    }

    #[test]
    fn torque_over_length_is_force() {
        let f: Newtons = NewtonMeters::new(12.0) / Meters::new(3.0);
        assert_eq!(f.value(), 4.0);
    }

    #[test]
    fn torque_over_force_is_lever_arm() {
        let r: Meters = NewtonMeters::new(12.0) / Newtons::new(4.0);
        assert_eq!(r.value(), 3.0);
    }
}

//! Force units.

use crate::units::acceleration::Acceleration;
use crate::units::area::Area;
use crate::units::energy::Energy;
use crate::units::length::Length;
use crate::units::mass::Mass;
use crate::units::power::Power;
use crate::units::pressure::Pressure;
use crate::units::speed::Speed;
use crate::{Kind, Rel, Unit, UnitInfo};
use mensura_derive::Unit;

/// Kind tag for force.
pub enum Force {}
impl Kind for Force {
    type Reference = Newton;
    const NAME: &'static str = "force";
    const UNITS: &'static [UnitInfo] = &[
        UnitInfo::of::<Newton>(),
        UnitInfo::of::<Kilonewton>(),
        UnitInfo::of::<PoundForce>(),
        UnitInfo::of::<Dyne>(),
        UnitInfo::of::<KilogramForce>(),
    ];
}

/// Marker trait for any [`Unit`] whose kind is [`Force`].
pub trait ForceUnit: Unit<Kind = Force> {}
impl<T: Unit<Kind = Force>> ForceUnit for T {}

/// Newton (the reference unit for force).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "N", kind = Force, factor = 1.0)]
pub struct Newton;
/// A force measured in newtons.
pub type Newtons = Rel<Newton>;

/// Kilonewton (`1000 N`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "kN", kind = Force, factor = 1_000.0)]
pub struct Kilonewton;
/// A force measured in kilonewtons.
pub type Kilonewtons = Rel<Kilonewton>;

/// Pound-force (`4.4482216152605 N` exactly).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "lbf", kind = Force, factor = 4.448_221_615_260_5)]
pub struct PoundForce;
/// A force measured in pounds-force.
pub type PoundsForce = Rel<PoundForce>;

/// Dyne (`1e-5 N`; the CGS unit of force).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "dyn", kind = Force, factor = 1e-5)]
pub struct Dyne;
/// A force measured in dynes.
pub type Dynes = Rel<Dyne>;

/// Kilogram-force (`9.80665 N` by definition).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "kgf", kind = Force, factor = 9.806_65)]
pub struct KilogramForce;
/// A force measured in kilograms-force.
pub type KilogramsForce = Rel<KilogramForce>;

crate::derived_mul! {
    (Force, Length) => Energy,
    (Force, Speed) => Power,
}

crate::derived_div! {
    (Force, Mass) => Acceleration,
    (Force, Acceleration) => Mass,
    (Force, Area) => Pressure,
    (Force, Pressure) => Area,
}

crate::impl_unit_conversions!(Newton, Kilonewton, PoundForce, Dyne, KilogramForce);

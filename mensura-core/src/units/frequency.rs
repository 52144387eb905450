//! Frequency units.
//!
//! "Hertz" is its own plural, so this module has no pluralized scalar
//! aliases for the SI units; write `Rel<Hertz>` (or `Rel<Kilohertz>`, …)
//! for the scalar type.

use crate::units::acceleration::Acceleration;
use crate::units::dimensionless::Dimensionless;
use crate::units::duration::Duration;
use crate::units::energy::Energy;
use crate::units::length::Length;
use crate::units::power::Power;
use crate::units::speed::Speed;
use crate::{Kind, Rel, Unit, UnitInfo};
use mensura_derive::Unit;

/// Kind tag for frequency.
pub enum Frequency {}
impl Kind for Frequency {
    type Reference = Hertz;
    const NAME: &'static str = "frequency";
    const UNITS: &'static [UnitInfo] = &[
        UnitInfo::of::<Hertz>(),
        UnitInfo::of::<Kilohertz>(),
        UnitInfo::of::<Megahertz>(),
        UnitInfo::of::<Gigahertz>(),
        UnitInfo::of::<RevolutionPerMinute>(),
    ];
}

/// Marker trait for any [`Unit`] whose kind is [`Frequency`].
pub trait FrequencyUnit: Unit<Kind = Frequency> {}
impl<T: Unit<Kind = Frequency>> FrequencyUnit for T {}

/// Hertz (the reference unit for frequency).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "Hz", kind = Frequency, factor = 1.0)]
pub struct Hertz;

/// Kilohertz (`1e3 Hz`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "kHz", kind = Frequency, factor = 1e3)]
pub struct Kilohertz;

/// Megahertz (`1e6 Hz`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "MHz", kind = Frequency, factor = 1e6)]
pub struct Megahertz;

/// Gigahertz (`1e9 Hz`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "GHz", kind = Frequency, factor = 1e9)]
pub struct Gigahertz;

/// Revolution per minute (`1/60 Hz`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "rpm", kind = Frequency, factor = 1.0 / 60.0)]
pub struct RevolutionPerMinute;
/// A rotation rate measured in revolutions per minute.
pub type RevolutionsPerMinute = Rel<RevolutionPerMinute>;

crate::derived_mul! {
    (Frequency, Duration) => Dimensionless,
    (Frequency, Length) => Speed,
    (Frequency, Speed) => Acceleration,
    (Frequency, Energy) => Power,
}

crate::impl_unit_conversions!(Hertz, Kilohertz, Megahertz, Gigahertz, RevolutionPerMinute);

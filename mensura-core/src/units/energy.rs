//! Energy units.
//!
//! Energy is the output of several derived rules (`Force × Length`,
//! `Power × Duration`, `Pressure × Volume`), so this module mostly declares
//! the inverse quotients.

use crate::units::duration::Duration;
use crate::units::force::Force;
use crate::units::length::Length;
use crate::units::power::Power;
use crate::units::pressure::Pressure;
use crate::units::volume::Volume;
use crate::{Kind, Rel, Unit, UnitInfo};
use mensura_derive::Unit;

/// Kind tag for energy.
pub enum Energy {}
impl Kind for Energy {
    type Reference = Joule;
    const NAME: &'static str = "energy";
    const UNITS: &'static [UnitInfo] = &[
        UnitInfo::of::<Joule>(),
        UnitInfo::of::<Kilojoule>(),
        UnitInfo::of::<Megajoule>(),
        UnitInfo::of::<WattHour>(),
        UnitInfo::of::<KilowattHour>(),
        UnitInfo::of::<Calorie>(),
        UnitInfo::of::<Kilocalorie>(),
        UnitInfo::of::<Electronvolt>(),
        UnitInfo::of::<BritishThermalUnit>(),
    ];
}

/// Marker trait for any [`Unit`] whose kind is [`Energy`].
pub trait EnergyUnit: Unit<Kind = Energy> {}
impl<T: Unit<Kind = Energy>> EnergyUnit for T {}

/// Joule (the reference unit for energy).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "J", kind = Energy, factor = 1.0)]
pub struct Joule;
/// An energy measured in joules.
pub type Joules = Rel<Joule>;

/// Kilojoule (`1000 J`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "kJ", kind = Energy, factor = 1_000.0)]
pub struct Kilojoule;
/// An energy measured in kilojoules.
pub type Kilojoules = Rel<Kilojoule>;

/// Megajoule (`1e6 J`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "MJ", kind = Energy, factor = 1e6)]
pub struct Megajoule;
/// An energy measured in megajoules.
pub type Megajoules = Rel<Megajoule>;

/// Watt-hour (`3600 J`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "Wh", kind = Energy, factor = 3_600.0)]
pub struct WattHour;
/// An energy measured in watt-hours.
pub type WattHours = Rel<WattHour>;

/// Kilowatt-hour (`3.6e6 J`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "kWh", kind = Energy, factor = 3.6e6)]
pub struct KilowattHour;
/// An energy measured in kilowatt-hours.
pub type KilowattHours = Rel<KilowattHour>;

/// International Table calorie (`4.1868 J`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "cal", kind = Energy, factor = 4.186_8)]
pub struct Calorie;
/// An energy measured in calories.
pub type Calories = Rel<Calorie>;

/// Kilocalorie (`4186.8 J`; the dietary "Calorie").
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "kcal", kind = Energy, factor = 4_186.8)]
pub struct Kilocalorie;
/// An energy measured in kilocalories.
pub type Kilocalories = Rel<Kilocalorie>;

/// Electronvolt (`1.602176634e-19 J` exactly, per the 2019 SI).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "eV", kind = Energy, factor = 1.602_176_634e-19)]
pub struct Electronvolt;
/// An energy measured in electronvolts.
pub type Electronvolts = Rel<Electronvolt>;

/// British thermal unit, IT definition (`1055.05585262 J`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "BTU", kind = Energy, factor = 1_055.055_852_62)]
pub struct BritishThermalUnit;
/// An energy measured in British thermal units.
pub type BritishThermalUnits = Rel<BritishThermalUnit>;

crate::derived_div! {
    (Energy, Force) => Length,
    (Energy, Length) => Force,
    (Energy, Duration) => Power,
    (Energy, Power) => Duration,
    (Energy, Volume) => Pressure,
    (Energy, Pressure) => Volume,
}

crate::impl_unit_conversions!(
    Joule,
    Kilojoule,
    Megajoule,
    WattHour,
    KilowattHour,
    Calorie,
    Kilocalorie,
    Electronvolt,
    BritishThermalUnit
);

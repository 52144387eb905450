//! Speed units.

use crate::units::acceleration::Acceleration;
use crate::units::duration::Duration;
use crate::units::force::Force;
use crate::units::frequency::Frequency;
use crate::units::length::Length;
use crate::units::power::Power;
use crate::{Kind, Rel, Unit, UnitInfo};
use mensura_derive::Unit;

/// Kind tag for speed.
pub enum Speed {}
impl Kind for Speed {
    type Reference = MeterPerSecond;
    const NAME: &'static str = "speed";
    const UNITS: &'static [UnitInfo] = &[
        UnitInfo::of::<MeterPerSecond>(),
        UnitInfo::of::<KilometerPerHour>(),
        UnitInfo::of::<MilePerHour>(),
        UnitInfo::of::<Knot>(),
        UnitInfo::of::<FootPerSecond>(),
    ];
}

/// Marker trait for any [`Unit`] whose kind is [`Speed`].
pub trait SpeedUnit: Unit<Kind = Speed> {}
impl<T: Unit<Kind = Speed>> SpeedUnit for T {}

/// Metre per second (the reference unit for speed).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "m/s", kind = Speed, factor = 1.0)]
pub struct MeterPerSecond;
/// A speed measured in metres per second.
pub type MetersPerSecond = Rel<MeterPerSecond>;

/// Kilometre per hour (`1/3.6 m/s`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "km/h", kind = Speed, factor = 1.0 / 3.6)]
pub struct KilometerPerHour;
/// A speed measured in kilometres per hour.
pub type KilometersPerHour = Rel<KilometerPerHour>;

/// Mile per hour (`0.44704 m/s` exactly).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "mi/h", kind = Speed, factor = 0.447_04)]
pub struct MilePerHour;
/// A speed measured in miles per hour.
pub type MilesPerHour = Rel<MilePerHour>;

/// Knot (one nautical mile per hour, `1852/3600 m/s`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "kt", kind = Speed, factor = 1_852.0 / 3_600.0)]
pub struct Knot;
/// A speed measured in knots.
pub type Knots = Rel<Knot>;

/// Foot per second (`0.3048 m/s` exactly).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "ft/s", kind = Speed, factor = 0.304_8)]
pub struct FootPerSecond;
/// A speed measured in feet per second.
pub type FeetPerSecond = Rel<FootPerSecond>;

crate::derived_mul! {
    (Speed, Duration) => Length,
    (Speed, Force) => Power,
}

crate::derived_div! {
    (Speed, Duration) => Acceleration,
    (Speed, Acceleration) => Duration,
    (Speed, Length) => Frequency,
    (Speed, Frequency) => Length,
}

crate::impl_unit_conversions!(
    MeterPerSecond,
    KilometerPerHour,
    MilePerHour,
    Knot,
    FootPerSecond
);

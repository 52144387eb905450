//! Duration units.
//!
//! The reference unit is [`Second`]. A relative duration (e.g. [`Seconds`])
//! is a time span; the absolute flavor, [`TimePoint`], is an instant on a
//! time line. Instants differ by spans; instants do not add.

use crate::units::acceleration::Acceleration;
use crate::units::dimensionless::Dimensionless;
use crate::units::electrical::{Charge, Current};
use crate::units::energy::Energy;
use crate::units::frequency::Frequency;
use crate::units::length::Length;
use crate::units::power::Power;
use crate::units::speed::Speed;
use crate::{Abs, Kind, Rel, Unit, UnitInfo};
use mensura_derive::Unit;

/// Kind tag for duration.
pub enum Duration {}
impl Kind for Duration {
    type Reference = Second;
    const NAME: &'static str = "duration";
    const UNITS: &'static [UnitInfo] = &[
        UnitInfo::of::<Second>(),
        UnitInfo::of::<Millisecond>(),
        UnitInfo::of::<Microsecond>(),
        UnitInfo::of::<Minute>(),
        UnitInfo::of::<Hour>(),
        UnitInfo::of::<Day>(),
        UnitInfo::of::<Week>(),
    ];
}

/// Marker trait for any [`Unit`] whose kind is [`Duration`].
pub trait DurationUnit: Unit<Kind = Duration> {}
impl<T: Unit<Kind = Duration>> DurationUnit for T {}

/// Second (SI base unit; the reference unit for duration).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "s", kind = Duration, factor = 1.0)]
pub struct Second;
/// A time span measured in seconds.
pub type Seconds = Rel<Second>;
/// One second.
pub const S: Seconds = Seconds::new(1.0);

/// Millisecond (`1e-3 s`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "ms", kind = Duration, factor = 1e-3)]
pub struct Millisecond;
/// A time span measured in milliseconds.
pub type Milliseconds = Rel<Millisecond>;

/// Microsecond (`1e-6 s`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "us", kind = Duration, factor = 1e-6)]
pub struct Microsecond;
/// A time span measured in microseconds.
pub type Microseconds = Rel<Microsecond>;

/// Minute (`60 s`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "min", kind = Duration, factor = 60.0)]
pub struct Minute;
/// A time span measured in minutes.
pub type Minutes = Rel<Minute>;

/// Hour (`3600 s`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "h", kind = Duration, factor = 3_600.0)]
pub struct Hour;
/// A time span measured in hours.
pub type Hours = Rel<Hour>;
/// One hour.
pub const H: Hours = Hours::new(1.0);

/// Day (`86400 s`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "day", kind = Duration, factor = 86_400.0)]
pub struct Day;
/// A time span measured in days.
pub type Days = Rel<Day>;

/// Week (`7 days`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "wk", kind = Duration, factor = 7.0 * 86_400.0)]
pub struct Week;
/// A time span measured in weeks.
pub type Weeks = Rel<Week>;

/// An instant on a time line, in seconds.
pub type TimePoint = Abs<Second>;

crate::derived_mul! {
    (Duration, Speed) => Length,
    (Duration, Acceleration) => Speed,
    (Duration, Power) => Energy,
    (Duration, Frequency) => Dimensionless,
    (Duration, Current) => Charge,
}

crate::impl_unit_conversions!(Second, Millisecond, Microsecond, Minute, Hour, Day, Week);

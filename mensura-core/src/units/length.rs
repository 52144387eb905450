//! Length units.
//!
//! The reference unit for this kind is [`Meter`] (`Meter::FACTOR == 1.0`).
//! All other length units are expressed as exact ratios to metres:
//!
//! - **SI ladder**: the common metric prefix family for metres.
//! - **Imperial and navigation**: inch, foot, yard, (statute) mile, and the
//!   international nautical mile, all at their current exact definitions
//!   (the international inch is exactly `0.0254 m`).
//!
//! Lengths come in two flavors: a relative length (a distance, e.g.
//! [`Meters`]) and an absolute one (a [`Position`] on a line). Two positions
//! differ by a distance; positions do not add.
//!
//! ```rust
//! use mensura_core::length::{Kilometers, Meter, Meters, Position};
//!
//! let km = Kilometers::new(1.25);
//! assert_eq!(km.to::<Meter>().value(), 1250.0);
//!
//! let here: Position = Meters::new(100.0).to_abs();
//! let there = here + Meters::new(50.0);
//! assert_eq!(there.value(), 150.0);
//! ```

use crate::units::area::Area;
use crate::units::duration::Duration;
use crate::units::energy::Energy;
use crate::units::force::Force;
use crate::units::speed::Speed;
use crate::units::volume::Volume;
use crate::{Abs, Kind, Rel, Unit, UnitInfo};
use mensura_derive::Unit;

/// Kind tag for length.
pub enum Length {}
impl Kind for Length {
    type Reference = Meter;
    const NAME: &'static str = "length";
    const UNITS: &'static [UnitInfo] = &[
        UnitInfo::of::<Meter>(),
        UnitInfo::of::<Kilometer>(),
        UnitInfo::of::<Hectometer>(),
        UnitInfo::of::<Decameter>(),
        UnitInfo::of::<Decimeter>(),
        UnitInfo::of::<Centimeter>(),
        UnitInfo::of::<Millimeter>(),
        UnitInfo::of::<Micrometer>(),
        UnitInfo::of::<Nanometer>(),
        UnitInfo::of::<Inch>(),
        UnitInfo::of::<Foot>(),
        UnitInfo::of::<Yard>(),
        UnitInfo::of::<Mile>(),
        UnitInfo::of::<NauticalMile>(),
    ];
}

/// Marker trait for any [`Unit`] whose kind is [`Length`].
pub trait LengthUnit: Unit<Kind = Length> {}
impl<T: Unit<Kind = Length>> LengthUnit for T {}

// ─────────────────────────────────────────────────────────────────────────────
// SI units
// ─────────────────────────────────────────────────────────────────────────────

/// Metre (SI base unit; the reference unit for length).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "m", kind = Length, factor = 1.0)]
pub struct Meter;
/// A distance measured in metres.
pub type Meters = Rel<Meter>;
/// One metre.
pub const M: Meters = Meters::new(1.0);

/// Kilometre (`1000 m`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "km", kind = Length, factor = 1_000.0)]
pub struct Kilometer;
/// A distance measured in kilometres.
pub type Kilometers = Rel<Kilometer>;
/// One kilometre.
pub const KM: Kilometers = Kilometers::new(1.0);

/// Hectometre (`1e2 m`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "hm", kind = Length, factor = 1e2)]
pub struct Hectometer;
/// A distance measured in hectometres.
pub type Hectometers = Rel<Hectometer>;

/// Decametre (`1e1 m`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "dam", kind = Length, factor = 1e1)]
pub struct Decameter;
/// A distance measured in decametres.
pub type Decameters = Rel<Decameter>;

/// Decimetre (`1e-1 m`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "dm", kind = Length, factor = 1e-1)]
pub struct Decimeter;
/// A distance measured in decimetres.
pub type Decimeters = Rel<Decimeter>;

/// Centimetre (`1e-2 m`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "cm", kind = Length, factor = 1e-2)]
pub struct Centimeter;
/// A distance measured in centimetres.
pub type Centimeters = Rel<Centimeter>;
/// One centimetre.
pub const CM: Centimeters = Centimeters::new(1.0);

/// Millimetre (`1e-3 m`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "mm", kind = Length, factor = 1e-3)]
pub struct Millimeter;
/// A distance measured in millimetres.
pub type Millimeters = Rel<Millimeter>;
/// One millimetre.
pub const MM: Millimeters = Millimeters::new(1.0);

/// Micrometre (`1e-6 m`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "um", kind = Length, factor = 1e-6)]
pub struct Micrometer;
/// A distance measured in micrometres.
pub type Micrometers = Rel<Micrometer>;

/// Nanometre (`1e-9 m`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "nm", kind = Length, factor = 1e-9)]
pub struct Nanometer;
/// A distance measured in nanometres.
pub type Nanometers = Rel<Nanometer>;

// ─────────────────────────────────────────────────────────────────────────────
// Imperial and navigation units
// ─────────────────────────────────────────────────────────────────────────────

/// Inch (`0.0254 m` exactly).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "in", kind = Length, factor = 254.0 / 10_000.0)]
pub struct Inch;
/// A distance measured in inches.
pub type Inches = Rel<Inch>;

/// Foot (`0.3048 m` exactly).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "ft", kind = Length, factor = 3_048.0 / 10_000.0)]
pub struct Foot;
/// A distance measured in feet.
pub type Feet = Rel<Foot>;
/// One foot.
pub const FT: Feet = Feet::new(1.0);

/// Yard (`0.9144 m` exactly).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "yd", kind = Length, factor = 9_144.0 / 10_000.0)]
pub struct Yard;
/// A distance measured in yards.
pub type Yards = Rel<Yard>;

/// (Statute) mile (`1609.344 m` exactly).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "mi", kind = Length, factor = 1_609_344.0 / 1_000.0)]
pub struct Mile;
/// A distance measured in miles.
pub type Miles = Rel<Mile>;
/// One mile.
pub const MI: Miles = Miles::new(1.0);

/// Nautical mile (`1852 m` exactly).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "NM", kind = Length, factor = 1_852.0)]
pub struct NauticalMile;
/// A distance measured in nautical miles.
pub type NauticalMiles = Rel<NauticalMile>;

/// An absolute position on a line, in metres.
pub type Position = Abs<Meter>;

// ─────────────────────────────────────────────────────────────────────────────
// Derived-operation rows (length as left operand)
// ─────────────────────────────────────────────────────────────────────────────

crate::derived_mul! {
    (Length, Length) => Area,
    (Length, Area) => Volume,
    (Length, Force) => Energy,
}

crate::derived_div! {
    (Length, Duration) => Speed,
    (Length, Speed) => Duration,
}

crate::impl_unit_conversions!(
    Meter,
    Kilometer,
    Hectometer,
    Decameter,
    Decimeter,
    Centimeter,
    Millimeter,
    Micrometer,
    Nanometer,
    Inch,
    Foot,
    Yard,
    Mile,
    NauticalMile
);

//! Area units.

use crate::units::force::Force;
use crate::units::length::Length;
use crate::units::pressure::Pressure;
use crate::units::volume::Volume;
use crate::{Kind, Rel, Unit, UnitInfo};
use mensura_derive::Unit;

/// Kind tag for area.
pub enum Area {}
impl Kind for Area {
    type Reference = SquareMeter;
    const NAME: &'static str = "area";
    const UNITS: &'static [UnitInfo] = &[
        UnitInfo::of::<SquareMeter>(),
        UnitInfo::of::<SquareKilometer>(),
        UnitInfo::of::<SquareCentimeter>(),
        UnitInfo::of::<SquareMillimeter>(),
        UnitInfo::of::<Hectare>(),
        UnitInfo::of::<SquareFoot>(),
        UnitInfo::of::<SquareInch>(),
        UnitInfo::of::<Acre>(),
    ];
}

/// Marker trait for any [`Unit`] whose kind is [`Area`].
pub trait AreaUnit: Unit<Kind = Area> {}
impl<T: Unit<Kind = Area>> AreaUnit for T {}

/// Square metre (the reference unit for area).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "m^2", kind = Area, factor = 1.0)]
pub struct SquareMeter;
/// An area measured in square metres.
pub type SquareMeters = Rel<SquareMeter>;

/// Square kilometre (`1e6 m^2`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "km^2", kind = Area, factor = 1e6)]
pub struct SquareKilometer;
/// An area measured in square kilometres.
pub type SquareKilometers = Rel<SquareKilometer>;

/// Square centimetre (`1e-4 m^2`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "cm^2", kind = Area, factor = 1e-4)]
pub struct SquareCentimeter;
/// An area measured in square centimetres.
pub type SquareCentimeters = Rel<SquareCentimeter>;

/// Square millimetre (`1e-6 m^2`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "mm^2", kind = Area, factor = 1e-6)]
pub struct SquareMillimeter;
/// An area measured in square millimetres.
pub type SquareMillimeters = Rel<SquareMillimeter>;

/// Hectare (`1e4 m^2`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "ha", kind = Area, factor = 1e4)]
pub struct Hectare;
/// An area measured in hectares.
pub type Hectares = Rel<Hectare>;

/// Square foot (`0.3048^2 m^2` exactly).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "ft^2", kind = Area, factor = 0.092_903_04)]
pub struct SquareFoot;
/// An area measured in square feet.
pub type SquareFeet = Rel<SquareFoot>;

/// Square inch (`0.0254^2 m^2` exactly).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "in^2", kind = Area, factor = 0.000_645_16)]
pub struct SquareInch;
/// An area measured in square inches.
pub type SquareInches = Rel<SquareInch>;

/// Acre (`4046.8564224 m^2` exactly; 1/640 square mile).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "ac", kind = Area, factor = 4_046.856_422_4)]
pub struct Acre;
/// An area measured in acres.
pub type Acres = Rel<Acre>;

crate::derived_mul! {
    (Area, Length) => Volume,
    (Area, Pressure) => Force,
}

crate::derived_div! {
    (Area, Length) => Length,
}

crate::impl_unit_conversions!(
    SquareMeter,
    SquareKilometer,
    SquareCentimeter,
    SquareMillimeter,
    Hectare,
    SquareFoot,
    SquareInch,
    Acre
);

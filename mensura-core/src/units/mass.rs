//! Mass units.
//!
//! The reference unit is [`Kilogram`] (the SI base unit, prefix included).

use crate::units::acceleration::Acceleration;
use crate::units::density::Density;
use crate::units::force::Force;
use crate::units::volume::Volume;
use crate::{Kind, Rel, Unit, UnitInfo};
use mensura_derive::Unit;

/// Kind tag for mass.
pub enum Mass {}
impl Kind for Mass {
    type Reference = Kilogram;
    const NAME: &'static str = "mass";
    const UNITS: &'static [UnitInfo] = &[
        UnitInfo::of::<Kilogram>(),
        UnitInfo::of::<Gram>(),
        UnitInfo::of::<Milligram>(),
        UnitInfo::of::<Microgram>(),
        UnitInfo::of::<Tonne>(),
        UnitInfo::of::<Pound>(),
        UnitInfo::of::<Ounce>(),
    ];
}

/// Marker trait for any [`Unit`] whose kind is [`Mass`].
pub trait MassUnit: Unit<Kind = Mass> {}
impl<T: Unit<Kind = Mass>> MassUnit for T {}

/// Kilogram (SI base unit; the reference unit for mass).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "kg", kind = Mass, factor = 1.0)]
pub struct Kilogram;
/// A mass measured in kilograms.
pub type Kilograms = Rel<Kilogram>;
/// One kilogram.
pub const KG: Kilograms = Kilograms::new(1.0);

/// Gram (`1e-3 kg`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "g", kind = Mass, factor = 1e-3)]
pub struct Gram;
/// A mass measured in grams.
pub type Grams = Rel<Gram>;

/// Milligram (`1e-6 kg`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "mg", kind = Mass, factor = 1e-6)]
pub struct Milligram;
/// A mass measured in milligrams.
pub type Milligrams = Rel<Milligram>;

/// Microgram (`1e-9 kg`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "ug", kind = Mass, factor = 1e-9)]
pub struct Microgram;
/// A mass measured in micrograms.
pub type Micrograms = Rel<Microgram>;

/// Tonne (`1000 kg`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "t", kind = Mass, factor = 1_000.0)]
pub struct Tonne;
/// A mass measured in tonnes.
pub type Tonnes = Rel<Tonne>;

/// Avoirdupois pound (`0.45359237 kg` exactly).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "lb", kind = Mass, factor = 0.453_592_37)]
pub struct Pound;
/// A mass measured in pounds.
pub type Pounds = Rel<Pound>;

/// Avoirdupois ounce (`1/16 lb`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "oz", kind = Mass, factor = 0.453_592_37 / 16.0)]
pub struct Ounce;
/// A mass measured in ounces.
pub type Ounces = Rel<Ounce>;

crate::derived_mul! {
    (Mass, Acceleration) => Force,
}

crate::derived_div! {
    (Mass, Volume) => Density,
    (Mass, Density) => Volume,
}

crate::impl_unit_conversions!(Kilogram, Gram, Milligram, Microgram, Tonne, Pound, Ounce);

//! Volume units.

use crate::units::area::Area;
use crate::units::density::Density;
use crate::units::energy::Energy;
use crate::units::length::Length;
use crate::units::mass::Mass;
use crate::units::pressure::Pressure;
use crate::{Kind, Rel, Unit, UnitInfo};
use mensura_derive::Unit;

/// Kind tag for volume.
pub enum Volume {}
impl Kind for Volume {
    type Reference = CubicMeter;
    const NAME: &'static str = "volume";
    const UNITS: &'static [UnitInfo] = &[
        UnitInfo::of::<CubicMeter>(),
        UnitInfo::of::<Liter>(),
        UnitInfo::of::<Milliliter>(),
        UnitInfo::of::<CubicCentimeter>(),
        UnitInfo::of::<CubicKilometer>(),
        UnitInfo::of::<CubicFoot>(),
        UnitInfo::of::<UsGallon>(),
    ];
}

/// Marker trait for any [`Unit`] whose kind is [`Volume`].
pub trait VolumeUnit: Unit<Kind = Volume> {}
impl<T: Unit<Kind = Volume>> VolumeUnit for T {}

/// Cubic metre (the reference unit for volume).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "m^3", kind = Volume, factor = 1.0)]
pub struct CubicMeter;
/// A volume measured in cubic metres.
pub type CubicMeters = Rel<CubicMeter>;

/// Litre (`1e-3 m^3`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "L", kind = Volume, factor = 1e-3)]
pub struct Liter;
/// A volume measured in litres.
pub type Liters = Rel<Liter>;

/// Millilitre (`1e-6 m^3`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "mL", kind = Volume, factor = 1e-6)]
pub struct Milliliter;
/// A volume measured in millilitres.
pub type Milliliters = Rel<Milliliter>;

/// Cubic centimetre (`1e-6 m^3`; same size as a millilitre).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "cm^3", kind = Volume, factor = 1e-6)]
pub struct CubicCentimeter;
/// A volume measured in cubic centimetres.
pub type CubicCentimeters = Rel<CubicCentimeter>;

/// Cubic kilometre (`1e9 m^3`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "km^3", kind = Volume, factor = 1e9)]
pub struct CubicKilometer;
/// A volume measured in cubic kilometres.
pub type CubicKilometers = Rel<CubicKilometer>;

/// Cubic foot (`0.3048^3 m^3` exactly).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "ft^3", kind = Volume, factor = 0.028_316_846_592)]
pub struct CubicFoot;
/// A volume measured in cubic feet.
pub type CubicFeet = Rel<CubicFoot>;

/// US liquid gallon (`231 in^3`, i.e. `3.785411784e-3 m^3` exactly).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "gal", kind = Volume, factor = 0.003_785_411_784)]
pub struct UsGallon;
/// A volume measured in US gallons.
pub type UsGallons = Rel<UsGallon>;

crate::derived_mul! {
    (Volume, Density) => Mass,
    (Volume, Pressure) => Energy,
}

crate::derived_div! {
    (Volume, Length) => Area,
    (Volume, Area) => Length,
}

crate::impl_unit_conversions!(
    CubicMeter,
    Liter,
    Milliliter,
    CubicCentimeter,
    CubicKilometer,
    CubicFoot,
    UsGallon
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::area::SquareMeters;
    use crate::units::length::Meters;
    use crate::units::mass::Kilograms;
    use crate::units::density::KilogramsPerCubicMeter;
    use approx::assert_relative_eq;

    #[test]
    fn liter_ladder() {
        let l = Liters::new(1.0);
        assert_relative_eq!(l.to::<Milliliter>().value(), 1000.0, max_relative = 1e-12);
        assert_relative_eq!(l.to::<CubicCentimeter>().value(), 1000.0, max_relative = 1e-12);
    }

    #[test]
    fn gallon_to_liters() {
        let gal = UsGallons::new(1.0);
        assert_relative_eq!(gal.to::<Liter>().value(), 3.785411784, max_relative = 1e-12);
    }

    #[test]
    fn volume_over_area_is_length() {
        let h: Meters = CubicMeters::new(12.0) / SquareMeters::new(4.0);
        assert_eq!(h.value(), 3.0);
    }

    #[test]
    fn volume_times_density_is_mass() {
        let m: Kilograms = CubicMeters::new(2.0) * KilogramsPerCubicMeter::new(1000.0);
        assert_eq!(m.value(), 2000.0);
    }
}

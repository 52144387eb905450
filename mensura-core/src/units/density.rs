//! Density units.

use crate::units::mass::Mass;
use crate::units::volume::Volume;
use crate::{Kind, Rel, Unit, UnitInfo};
use mensura_derive::Unit;

/// Kind tag for mass density.
pub enum Density {}
impl Kind for Density {
    type Reference = KilogramPerCubicMeter;
    const NAME: &'static str = "density";
    const UNITS: &'static [UnitInfo] = &[
        UnitInfo::of::<KilogramPerCubicMeter>(),
        UnitInfo::of::<GramPerCubicCentimeter>(),
    ];
}

/// Marker trait for any [`Unit`] whose kind is [`Density`].
pub trait DensityUnit: Unit<Kind = Density> {}
impl<T: Unit<Kind = Density>> DensityUnit for T {}

/// Kilogram per cubic metre (the reference unit for density).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "kg/m^3", kind = Density, factor = 1.0)]
pub struct KilogramPerCubicMeter;
/// A density measured in kilograms per cubic metre.
pub type KilogramsPerCubicMeter = Rel<KilogramPerCubicMeter>;

/// Gram per cubic centimetre (`1000 kg/m^3`; the density of water is ~1).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "g/cm^3", kind = Density, factor = 1_000.0)]
pub struct GramPerCubicCentimeter;
/// A density measured in grams per cubic centimetre.
pub type GramsPerCubicCentimeter = Rel<GramPerCubicCentimeter>;

crate::derived_mul! {
    (Density, Volume) => Mass,
}

crate::impl_unit_conversions!(KilogramPerCubicMeter, GramPerCubicCentimeter);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::mass::Kilograms;
    use crate::units::volume::Liters;
    use approx::assert_relative_eq;

    #[test]
    fn water_density_across_units() {
        let rho = GramsPerCubicCentimeter::new(1.0);
        assert_relative_eq!(
            rho.to::<KilogramPerCubicMeter>().value(),
            1_000.0,
            max_relative = 1e-12
        );
    }

    #[test]
    fn density_times_volume_is_mass() {
        let m: Kilograms = KilogramsPerCubicMeter::new(1_000.0) * Liters::new(2.0);
        assert_relative_eq!(m.value(), 2.0, max_relative = 1e-12);
    }
}

//! Pressure units.

use crate::units::area::Area;
use crate::units::energy::Energy;
use crate::units::force::Force;
use crate::units::volume::Volume;
use crate::{Kind, Rel, Unit, UnitInfo};
use mensura_derive::Unit;

/// Kind tag for pressure.
pub enum Pressure {}
impl Kind for Pressure {
    type Reference = Pascal;
    const NAME: &'static str = "pressure";
    const UNITS: &'static [UnitInfo] = &[
        UnitInfo::of::<Pascal>(),
        UnitInfo::of::<Kilopascal>(),
        UnitInfo::of::<Bar>(),
        UnitInfo::of::<Millibar>(),
        UnitInfo::of::<Atmosphere>(),
        UnitInfo::of::<PoundPerSquareInch>(),
        UnitInfo::of::<MillimeterOfMercury>(),
    ];
}

/// Marker trait for any [`Unit`] whose kind is [`Pressure`].
pub trait PressureUnit: Unit<Kind = Pressure> {}
impl<T: Unit<Kind = Pressure>> PressureUnit for T {}

/// Pascal (the reference unit for pressure).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "Pa", kind = Pressure, factor = 1.0)]
pub struct Pascal;
/// A pressure measured in pascals.
pub type Pascals = Rel<Pascal>;

/// Kilopascal (`1000 Pa`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "kPa", kind = Pressure, factor = 1_000.0)]
pub struct Kilopascal;
/// A pressure measured in kilopascals.
pub type Kilopascals = Rel<Kilopascal>;

/// Bar (`1e5 Pa`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "bar", kind = Pressure, factor = 1e5)]
pub struct Bar;
/// A pressure measured in bars.
pub type Bars = Rel<Bar>;

/// Millibar (`100 Pa`; equal to the hectopascal).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "mbar", kind = Pressure, factor = 100.0)]
pub struct Millibar;
/// A pressure measured in millibars.
pub type Millibars = Rel<Millibar>;

/// Standard atmosphere (`101325 Pa` by definition).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "atm", kind = Pressure, factor = 101_325.0)]
pub struct Atmosphere;
/// A pressure measured in standard atmospheres.
pub type Atmospheres = Rel<Atmosphere>;

/// Pound-force per square inch (`lbf / in^2`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "psi", kind = Pressure, factor = 6_894.757_293_168_361)]
pub struct PoundPerSquareInch;
/// A pressure measured in pounds per square inch.
pub type PoundsPerSquareInch = Rel<PoundPerSquareInch>;

/// Millimetre of mercury (`133.322387415 Pa`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "mmHg", kind = Pressure, factor = 133.322_387_415)]
pub struct MillimeterOfMercury;
/// A pressure measured in millimetres of mercury.
pub type MillimetersOfMercury = Rel<MillimeterOfMercury>;

crate::derived_mul! {
    (Pressure, Area) => Force,
    (Pressure, Volume) => Energy,
}

crate::impl_unit_conversions!(
    Pascal,
    Kilopascal,
    Bar,
    Millibar,
    Atmosphere,
    PoundPerSquareInch,
    MillimeterOfMercury
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::area::SquareMeters;
    use crate::units::energy::Joules;
    use crate::units::force::Newtons;
    use crate::units::volume::CubicMeters;
    use approx::assert_relative_eq;

    #[test]
    fn atmosphere_to_millibars() {
        let p = Atmospheres::new(1.0);
        assert_relative_eq!(p.to::<Millibar>().value(), 1_013.25, max_relative = 1e-12);
    }

    #[test]
    fn psi_is_pound_force_over_square_inch() {
        let p = PoundsPerSquareInch::new(1.0);
        assert_relative_eq!(
            p.to::<Pascal>().value(),
            4.4482216152605 / 0.00064516,
            max_relative = 1e-12
        );
    }

    #[test]
    fn pressure_times_area_is_force() {
        let f: Newtons = Pascals::new(50.0) * SquareMeters::new(2.0);
        assert_eq!(f.value(), 100.0);
    }

    #[test]
    fn pressure_times_volume_is_energy() {
        let e: Joules = Pascals::new(100.0) * CubicMeters::new(0.5);
        assert_eq!(e.value(), 50.0);
    }
}

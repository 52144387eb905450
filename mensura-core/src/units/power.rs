//! Power units.

use crate::units::duration::Duration;
use crate::units::electrical::{Current, ElectricalPotential};
use crate::units::energy::Energy;
use crate::units::force::Force;
use crate::units::speed::Speed;
use crate::{Kind, Rel, Unit, UnitInfo};
use mensura_derive::Unit;

/// Kind tag for power.
pub enum Power {}
impl Kind for Power {
    type Reference = Watt;
    const NAME: &'static str = "power";
    const UNITS: &'static [UnitInfo] = &[
        UnitInfo::of::<Watt>(),
        UnitInfo::of::<Kilowatt>(),
        UnitInfo::of::<Megawatt>(),
        UnitInfo::of::<Horsepower>(),
    ];
}

/// Marker trait for any [`Unit`] whose kind is [`Power`].
pub trait PowerUnit: Unit<Kind = Power> {}
impl<T: Unit<Kind = Power>> PowerUnit for T {}

/// Watt (the reference unit for power).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "W", kind = Power, factor = 1.0)]
pub struct Watt;
/// A power measured in watts.
pub type Watts = Rel<Watt>;

/// Kilowatt (`1000 W`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "kW", kind = Power, factor = 1_000.0)]
pub struct Kilowatt;
/// A power measured in kilowatts.
pub type Kilowatts = Rel<Kilowatt>;

/// Megawatt (`1e6 W`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "MW", kind = Power, factor = 1e6)]
pub struct Megawatt;
/// A power measured in megawatts.
pub type Megawatts = Rel<Megawatt>;

/// Metric horsepower (`735.49875 W` exactly).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "hp", kind = Power, factor = 735.498_75)]
pub struct Horsepower;
/// A power measured in metric horsepower.
pub type Horsepowers = Rel<Horsepower>;

crate::derived_mul! {
    (Power, Duration) => Energy,
}

crate::derived_div! {
    (Power, Speed) => Force,
    (Power, Force) => Speed,
    (Power, ElectricalPotential) => Current,
    (Power, Current) => ElectricalPotential,
}

crate::impl_unit_conversions!(Watt, Kilowatt, Megawatt, Horsepower);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::duration::Hours;
    use crate::units::electrical::{Amperes, Volts};
    use crate::units::energy::KilowattHour;
    use crate::units::force::Newtons;
    use crate::units::speed::MetersPerSecond;
    use approx::assert_relative_eq;

    #[test]
    fn horsepower_to_watts() {
        let p = Horsepowers::new(1.0);
        assert_relative_eq!(p.to::<Watt>().value(), 735.49875, max_relative = 1e-15);
    }

    #[test]
    fn power_times_duration_is_energy() {
        let e = (Kilowatts::new(2.0) * Hours::new(3.0)).to::<KilowattHour>();
        assert_relative_eq!(e.value(), 6.0, max_relative = 1e-12);
    }

    #[test]
    fn power_over_speed_is_force() {
        let f: Newtons = Watts::new(30.0) / MetersPerSecond::new(3.0);
        assert_eq!(f.value(), 10.0);
    }

    #[test]
    fn power_over_voltage_is_current() {
        let i: Amperes = Watts::new(60.0) / Volts::new(12.0);
        assert_eq!(i.value(), 5.0);
    }
}

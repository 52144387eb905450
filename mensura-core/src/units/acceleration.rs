//! Acceleration units.

use crate::units::duration::Duration;
use crate::units::force::Force;
use crate::units::mass::Mass;
use crate::units::speed::Speed;
use crate::{Kind, Rel, Unit, UnitInfo};
use mensura_derive::Unit;

/// Kind tag for acceleration.
pub enum Acceleration {}
impl Kind for Acceleration {
    type Reference = MeterPerSecondSquared;
    const NAME: &'static str = "acceleration";
    const UNITS: &'static [UnitInfo] = &[
        UnitInfo::of::<MeterPerSecondSquared>(),
        UnitInfo::of::<StandardGravity>(),
        UnitInfo::of::<FootPerSecondSquared>(),
    ];
}

/// Marker trait for any [`Unit`] whose kind is [`Acceleration`].
pub trait AccelerationUnit: Unit<Kind = Acceleration> {}
impl<T: Unit<Kind = Acceleration>> AccelerationUnit for T {}

/// Metre per second squared (the reference unit for acceleration).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "m/s^2", kind = Acceleration, factor = 1.0)]
pub struct MeterPerSecondSquared;
/// An acceleration measured in metres per second squared.
pub type MetersPerSecondSquared = Rel<MeterPerSecondSquared>;

/// Standard gravity (`9.80665 m/s^2` by definition).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "g", kind = Acceleration, factor = 9.806_65)]
pub struct StandardGravity;
/// An acceleration measured in multiples of standard gravity.
pub type StandardGravities = Rel<StandardGravity>;

/// Foot per second squared (`0.3048 m/s^2` exactly).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "ft/s^2", kind = Acceleration, factor = 0.304_8)]
pub struct FootPerSecondSquared;
/// An acceleration measured in feet per second squared.
pub type FeetPerSecondSquared = Rel<FootPerSecondSquared>;

crate::derived_mul! {
    (Acceleration, Mass) => Force,
    (Acceleration, Duration) => Speed,
}

crate::impl_unit_conversions!(MeterPerSecondSquared, StandardGravity, FootPerSecondSquared);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::duration::Seconds;
    use crate::units::speed::MetersPerSecond;
    use approx::assert_relative_eq;

    #[test]
    fn standard_gravity_value() {
        let g = StandardGravities::new(1.0);
        assert_relative_eq!(
            g.to::<MeterPerSecondSquared>().value(),
            9.80665,
            max_relative = 1e-15
        );
    }

    #[test]
    fn acceleration_times_duration_is_speed() {
        let v: MetersPerSecond = MetersPerSecondSquared::new(2.0) * Seconds::new(3.0);
        assert_eq!(v.value(), 6.0);
    }
}

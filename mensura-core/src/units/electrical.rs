//! Electrical units: current, potential, resistance, and charge.
//!
//! The four electrical kinds live together in one module because their
//! derived rules form a closed loop (Ohm's law plus the power law):
//! `V = I·R`, `P = V·I`, and `Q = I·t`.

use crate::units::duration::Duration;
use crate::units::power::Power;
use crate::{Kind, Rel, Unit, UnitInfo};
use mensura_derive::Unit;

// ─── Current ────────────────────────────────────────────────────────────────

/// Kind tag for electric current.
pub enum Current {}
impl Kind for Current {
    type Reference = Ampere;
    const NAME: &'static str = "current";
    const UNITS: &'static [UnitInfo] =
        &[UnitInfo::of::<Ampere>(), UnitInfo::of::<Milliampere>()];
}

/// Marker trait for any [`Unit`] whose kind is [`Current`].
pub trait CurrentUnit: Unit<Kind = Current> {}
impl<T: Unit<Kind = Current>> CurrentUnit for T {}

/// Ampere (SI base unit; the reference unit for current).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "A", kind = Current, factor = 1.0)]
pub struct Ampere;
/// A current measured in amperes.
pub type Amperes = Rel<Ampere>;

/// Milliampere (`1e-3 A`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "mA", kind = Current, factor = 1e-3)]
pub struct Milliampere;
/// A current measured in milliamperes.
pub type Milliamperes = Rel<Milliampere>;

// ─── Potential ──────────────────────────────────────────────────────────────

/// Kind tag for electrical potential.
pub enum ElectricalPotential {}
impl Kind for ElectricalPotential {
    type Reference = Volt;
    const NAME: &'static str = "electrical potential";
    const UNITS: &'static [UnitInfo] = &[
        UnitInfo::of::<Volt>(),
        UnitInfo::of::<Millivolt>(),
        UnitInfo::of::<Kilovolt>(),
    ];
}

/// Marker trait for any [`Unit`] whose kind is [`ElectricalPotential`].
pub trait ElectricalPotentialUnit: Unit<Kind = ElectricalPotential> {}
impl<T: Unit<Kind = ElectricalPotential>> ElectricalPotentialUnit for T {}

/// Volt (the reference unit for electrical potential).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "V", kind = ElectricalPotential, factor = 1.0)]
pub struct Volt;
/// A potential measured in volts.
pub type Volts = Rel<Volt>;

/// Millivolt (`1e-3 V`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "mV", kind = ElectricalPotential, factor = 1e-3)]
pub struct Millivolt;
/// A potential measured in millivolts.
pub type Millivolts = Rel<Millivolt>;

/// Kilovolt (`1000 V`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "kV", kind = ElectricalPotential, factor = 1_000.0)]
pub struct Kilovolt;
/// A potential measured in kilovolts.
pub type Kilovolts = Rel<Kilovolt>;

// ─── Resistance ─────────────────────────────────────────────────────────────

/// Kind tag for electrical resistance.
pub enum Resistance {}
impl Kind for Resistance {
    type Reference = Ohm;
    const NAME: &'static str = "resistance";
    const UNITS: &'static [UnitInfo] = &[
        UnitInfo::of::<Ohm>(),
        UnitInfo::of::<Kiloohm>(),
        UnitInfo::of::<Milliohm>(),
    ];
}

/// Marker trait for any [`Unit`] whose kind is [`Resistance`].
pub trait ResistanceUnit: Unit<Kind = Resistance> {}
impl<T: Unit<Kind = Resistance>> ResistanceUnit for T {}

/// Ohm (the reference unit for resistance).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "Ω", kind = Resistance, factor = 1.0)]
pub struct Ohm;
/// A resistance measured in ohms.
pub type Ohms = Rel<Ohm>;

/// Kiloohm (`1000 Ω`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "kΩ", kind = Resistance, factor = 1_000.0)]
pub struct Kiloohm;
/// A resistance measured in kiloohms.
pub type Kiloohms = Rel<Kiloohm>;

/// Milliohm (`1e-3 Ω`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "mΩ", kind = Resistance, factor = 1e-3)]
pub struct Milliohm;
/// A resistance measured in milliohms.
pub type Milliohms = Rel<Milliohm>;

// ─── Charge ─────────────────────────────────────────────────────────────────

/// Kind tag for electric charge.
pub enum Charge {}
impl Kind for Charge {
    type Reference = Coulomb;
    const NAME: &'static str = "charge";
    const UNITS: &'static [UnitInfo] = &[
        UnitInfo::of::<Coulomb>(),
        UnitInfo::of::<AmpereHour>(),
        UnitInfo::of::<MilliampereHour>(),
    ];
}

/// Marker trait for any [`Unit`] whose kind is [`Charge`].
pub trait ChargeUnit: Unit<Kind = Charge> {}
impl<T: Unit<Kind = Charge>> ChargeUnit for T {}

/// Coulomb (the reference unit for charge; one ampere-second).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "C", kind = Charge, factor = 1.0)]
pub struct Coulomb;
/// A charge measured in coulombs.
pub type Coulombs = Rel<Coulomb>;

/// Ampere-hour (`3600 C`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "Ah", kind = Charge, factor = 3_600.0)]
pub struct AmpereHour;
/// A charge measured in ampere-hours.
pub type AmpereHours = Rel<AmpereHour>;

/// Milliampere-hour (`3.6 C`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "mAh", kind = Charge, factor = 3.6)]
pub struct MilliampereHour;
/// A charge measured in milliampere-hours.
pub type MilliampereHours = Rel<MilliampereHour>;

// ─── Derived rules ──────────────────────────────────────────────────────────

crate::derived_mul! {
    (Current, Resistance) => ElectricalPotential,
    (Current, ElectricalPotential) => Power,
    (Current, Duration) => Charge,
    (ElectricalPotential, Current) => Power,
}

crate::derived_div! {
    (ElectricalPotential, Resistance) => Current,
    (ElectricalPotential, Current) => Resistance,
    (Charge, Duration) => Current,
    (Charge, Current) => Duration,
}

crate::impl_unit_conversions!(Ampere, Milliampere);
crate::impl_unit_conversions!(Volt, Millivolt, Kilovolt);
crate::impl_unit_conversions!(Ohm, Kiloohm, Milliohm);
crate::impl_unit_conversions!(Coulomb, AmpereHour, MilliampereHour);

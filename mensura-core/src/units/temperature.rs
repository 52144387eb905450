//! Temperature units.
//!
//! Temperature is where the relative/absolute split earns its keep. The
//! reference unit is [`Kelvin`]; [`Celsius`] and [`Fahrenheit`] carry
//! offsets that apply **only** to absolute temperatures:
//!
//! - the *point* 0 °C is 273.15 K,
//! - a *difference* of 1 °C is exactly 1 K (offsets cancel between two
//!   points on the same scale).
//!
//! ```rust
//! use mensura_core::temperature::{Celsius, Kelvin};
//! use mensura_core::Abs;
//!
//! let boiling: Abs<Celsius> = Abs::new(100.0);
//! assert!((boiling.to::<Kelvin>().value() - 373.15).abs() < 1e-9);
//!
//! let warming = mensura_core::Rel::<Celsius>::new(2.5);
//! assert_eq!(warming.to::<Kelvin>().value(), 2.5);
//! ```

use crate::{Abs, Kind, Rel, Unit, UnitInfo};
use mensura_derive::Unit;

/// Kind tag for temperature.
pub enum Temperature {}
impl Kind for Temperature {
    type Reference = Kelvin;
    const NAME: &'static str = "temperature";
    const UNITS: &'static [UnitInfo] = &[
        UnitInfo::of::<Kelvin>(),
        UnitInfo::of::<Celsius>(),
        UnitInfo::of::<Fahrenheit>(),
        UnitInfo::of::<Rankine>(),
    ];
}

/// Marker trait for any [`Unit`] whose kind is [`Temperature`].
pub trait TemperatureUnit: Unit<Kind = Temperature> {}
impl<T: Unit<Kind = Temperature>> TemperatureUnit for T {}

/// Kelvin (SI base unit; the reference unit for temperature).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "K", kind = Temperature, factor = 1.0)]
pub struct Kelvin;
/// A temperature difference measured in kelvins.
pub type Kelvins = Rel<Kelvin>;

/// Degree Celsius (`K = °C + 273.15` for absolute temperatures).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "°C", kind = Temperature, factor = 1.0, offset = 273.15)]
pub struct Celsius;
/// A temperature difference measured in degrees Celsius.
pub type CelsiusDegrees = Rel<Celsius>;

/// Degree Fahrenheit (`K = (°F + 459.67) * 5/9` for absolute temperatures).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "°F", kind = Temperature, factor = 5.0 / 9.0, offset = 459.67 * 5.0 / 9.0)]
pub struct Fahrenheit;
/// A temperature difference measured in degrees Fahrenheit.
pub type FahrenheitDegrees = Rel<Fahrenheit>;

/// Degree Rankine (`5/9 K`, no offset; absolute zero is 0 °R).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "°R", kind = Temperature, factor = 5.0 / 9.0)]
pub struct Rankine;
/// A temperature difference measured in degrees Rankine.
pub type RankineDegrees = Rel<Rankine>;

/// An absolute temperature, in kelvins.
pub type AbsoluteTemperature = Abs<Kelvin>;

crate::impl_unit_conversions!(Kelvin, Celsius, Fahrenheit, Rankine);

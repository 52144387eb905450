//! Dimensionless quantities.
//!
//! Ratios have a kind of their own so that same-kind division has a typed
//! result instead of decaying to a bare float: `Meters / Meters` yields a
//! [`Ratio`], which still participates in the derived-operation table (e.g.
//! `Ratio / Duration` is a frequency).
//!
//! The reference unit [`One`] has an empty symbol, so dimensionless values
//! parse and print as bare numbers.

use crate::units::duration::Duration;
use crate::units::frequency::Frequency;
use crate::{Kind, Magnitude, Rel, Scalar, Unit, UnitInfo, Variant};
use core::fmt::{Display, Formatter, Result};
use mensura_derive::Unit;

/// Kind tag for dimensionless quantities.
pub enum Dimensionless {}
impl Kind for Dimensionless {
    type Reference = One;
    const NAME: &'static str = "dimensionless";
    const UNITS: &'static [UnitInfo] = &[UnitInfo::of::<One>(), UnitInfo::of::<Percent>()];
}

/// Marker trait for any [`Unit`] whose kind is [`Dimensionless`].
pub trait DimensionlessUnit: Unit<Kind = Dimensionless> {}
impl<T: Unit<Kind = Dimensionless>> DimensionlessUnit for T {}

/// The unit ratio (reference unit; prints as a bare number).
///
/// Implemented by hand rather than derived so that the empty symbol does not
/// leave a trailing space in `Display` output.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct One;

impl Unit for One {
    const FACTOR: f64 = 1.0;
    type Kind = Dimensionless;
    const SYMBOL: &'static str = "";
}

impl<V: Variant, F: Magnitude> Display for Scalar<One, V, F> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{}", self.value())
    }
}

/// A plain ratio.
pub type Ratio = Rel<One>;

/// Percent (`1e-2`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "%", kind = Dimensionless, factor = 1e-2)]
pub struct Percent;
/// A ratio expressed in percent.
pub type Percents = Rel<Percent>;

crate::derived_div! {
    (Dimensionless, Duration) => Frequency,
}

crate::impl_unit_conversions!(One, Percent);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::duration::Seconds;
    use crate::units::frequency::Hertz;
    use approx::assert_abs_diff_eq;

    #[test]
    fn percent_to_ratio() {
        let r = Percents::new(75.0).to::<One>();
        assert_abs_diff_eq!(r.value(), 0.75, epsilon = 1e-12);
    }

    #[test]
    fn ratio_per_duration_is_frequency() {
        let f: Rel<Hertz> = Ratio::new(10.0) / Seconds::new(2.0);
        assert_eq!(f.value(), 5.0);
    }

    #[test]
    fn one_prints_bare() {
        let r = Ratio::new(1.5);
        assert_eq!(format!("{r}"), "1.5");
    }

    #[test]
    fn percent_prints_with_symbol() {
        let p = Percents::new(12.5);
        assert_eq!(format!("{p}"), "12.5 %");
    }
}

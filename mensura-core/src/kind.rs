//! Quantity kinds.

use crate::unit::{Unit, UnitInfo};

/// Trait implemented by every **quantity kind** tag (length, duration, mass, …).
///
/// A kind groups the units that measure the same physical quantity and names
/// the *reference unit* all of them convert through. Kinds are uninhabited
/// marker types; they never exist at runtime.
///
/// # Invariants
///
/// - `Reference::FACTOR == 1.0` and `Reference::OFFSET == 0.0`.
/// - `UNITS` contains the reference unit and every other unit of the kind
///   that should be resolvable by symbol when parsing.
pub trait Kind: 'static {
    /// The unit with factor `1.0` that all units of this kind convert through.
    type Reference: Unit<Kind = Self>;

    /// Human-readable kind name (e.g. `"length"`), used in diagnostics.
    const NAME: &'static str;

    /// Registry of this kind's units, consumed by text parsing.
    const UNITS: &'static [UnitInfo];
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::length::{Length, Meter};

    #[test]
    fn reference_unit_is_identity() {
        assert_eq!(<Length as Kind>::NAME, "length");
        assert_eq!(<Meter as Unit>::FACTOR, 1.0);
        assert_eq!(<Meter as Unit>::OFFSET, 0.0);
    }

    #[test]
    fn registry_contains_reference() {
        let reference = UnitInfo::of::<<Length as Kind>::Reference>();
        assert!(Length::UNITS.iter().any(|info| *info == reference));
    }
}

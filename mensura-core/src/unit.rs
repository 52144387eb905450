//! Unit types and traits.

use crate::kind::Kind;
use core::fmt::Debug;

/// Trait implemented by every **unit** type.
///
/// * `FACTOR` is the conversion factor from this unit to the *reference unit*
///   of the same kind. Example: if metres are the reference
///   (`Meter::FACTOR == 1.0`), then kilometres use `Kilometer::FACTOR == 1000.0`
///   because `1 km = 1000 m`.
///
/// * `OFFSET` is an additive shift applied **only when converting absolute
///   values** to the reference unit (`reference = value * FACTOR + OFFSET`).
///   Relative values (differences) convert by `FACTOR` alone, so offsets
///   cancel the way they do for temperature deltas. Most units have
///   `OFFSET == 0.0`; the derive defaults it.
///
/// * `SYMBOL` is the printable string (e.g. `"m"` or `"km"`).
///
/// * `Kind` ties the unit to its quantity [`Kind`] (length, mass, …).
///
/// # Invariants
///
/// - Implementations should be zero-sized marker types (this crate's built-in
///   units are unit structs with no fields).
/// - `FACTOR` should be finite and non-zero.
/// - The reference unit of a kind has `FACTOR == 1.0` and `OFFSET == 0.0`.
pub trait Unit: Copy + PartialEq + Debug + 'static {
    /// Unit-to-reference conversion factor.
    const FACTOR: f64;

    /// Additive offset to the reference unit, applied to absolute values only.
    const OFFSET: f64 = 0.0;

    /// Quantity kind to which this unit belongs.
    type Kind: Kind;

    /// Printable symbol, shown by [`core::fmt::Display`].
    const SYMBOL: &'static str;

    /// Runtime description of this unit, used by the per-kind unit registry
    /// and by text parsing.
    const INFO: UnitInfo = UnitInfo {
        symbol: Self::SYMBOL,
        factor: Self::FACTOR,
        offset: Self::OFFSET,
    };
}

/// Runtime description of a unit: its symbol and conversion constants.
///
/// `UnitInfo` is the erased form of a [`Unit`] marker type. Each [`Kind`]
/// publishes a static slice of these (`Kind::UNITS`) so that text parsing can
/// resolve a symbol to conversion constants without knowing the marker type.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct UnitInfo {
    /// Printable unit symbol, as in [`Unit::SYMBOL`].
    pub symbol: &'static str,
    /// Unit-to-reference conversion factor, as in [`Unit::FACTOR`].
    pub factor: f64,
    /// Absolute-value offset, as in [`Unit::OFFSET`].
    pub offset: f64,
}

impl UnitInfo {
    /// Erases a [`Unit`] marker type into its runtime description.
    pub const fn of<U: Unit>() -> Self {
        U::INFO
    }
}

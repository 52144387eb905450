//! Derived-operation dispatch between quantity kinds.
//!
//! Multiplying or dividing scalars of two kinds is only meaningful for pairs
//! that have a declared physical product or quotient (force × length = energy,
//! length / duration = speed, …). Those pairs are declared as impls of
//! [`KindMul`] and [`KindDiv`] on kind tuples, normally via the
//! [`derived_mul!`](crate::derived_mul) and [`derived_div!`](crate::derived_div)
//! macros in each kind's unit module.
//!
//! A single generic `Mul`/`Div` engine consumes the table: both operands are
//! converted to their reference units, the raw magnitudes are combined, and
//! the result is tagged with the output kind's reference unit. A pair with no
//! declared impl simply does not typecheck; there is no runtime fallback.
//!
//! Dividing two scalars of the *same* kind is always allowed and yields a
//! dimensionless result, via a blanket `KindDiv` impl.

use crate::kind::Kind;
use crate::magnitude::Magnitude;
use crate::scalar::Scalar;
use crate::unit::Unit;
use crate::units::dimensionless::Dimensionless;
use crate::variant::Relative;
use core::ops::{Div, Mul};

/// Declares that multiplying kind `A` by kind `B` yields kind `Output`.
///
/// Implemented on tuples `(A, B)`. Declarations are one-directional: if both
/// `A × B` and `B × A` should work, both tuples must be declared (the unit
/// modules do this for every built-in rule).
pub trait KindMul {
    /// The kind of the product.
    type Output: Kind;
}

/// Declares that dividing kind `A` by kind `B` yields kind `Output`.
///
/// Implemented on tuples `(A, B)`. Same-kind division is covered by a blanket
/// impl yielding [`Dimensionless`]; do not declare `(K, K)` pairs.
pub trait KindDiv {
    /// The kind of the quotient.
    type Output: Kind;
}

// x / y for two scalars of one kind is a plain ratio.
impl<K: Kind> KindDiv for (K, K) {
    type Output = Dimensionless;
}

/// Product scalar of two units, per the [`KindMul`] table.
pub type Product<UA, UB, F> = Scalar<
    <<(<UA as Unit>::Kind, <UB as Unit>::Kind) as KindMul>::Output as Kind>::Reference,
    Relative,
    F,
>;

/// Quotient scalar of two units, per the [`KindDiv`] table.
pub type Quotient<UA, UB, F> = Scalar<
    <<(<UA as Unit>::Kind, <UB as Unit>::Kind) as KindDiv>::Output as Kind>::Reference,
    Relative,
    F,
>;

impl<UA, UB, F> Mul<Scalar<UB, Relative, F>> for Scalar<UA, Relative, F>
where
    UA: Unit,
    UB: Unit,
    F: Magnitude,
    (UA::Kind, UB::Kind): KindMul,
{
    type Output = Product<UA, UB, F>;

    #[inline]
    fn mul(self, rhs: Scalar<UB, Relative, F>) -> Self::Output {
        Scalar::new(self.reference_value() * rhs.reference_value())
    }
}

impl<UA, UB, F> Div<Scalar<UB, Relative, F>> for Scalar<UA, Relative, F>
where
    UA: Unit,
    UB: Unit,
    F: Magnitude,
    (UA::Kind, UB::Kind): KindDiv,
{
    type Output = Quotient<UA, UB, F>;

    #[inline]
    fn div(self, rhs: Scalar<UB, Relative, F>) -> Self::Output {
        Scalar::new(self.reference_value() / rhs.reference_value())
    }
}

#[cfg(test)]
mod tests {
    use crate::units::dimensionless::Ratio;
    use crate::units::energy::Joules;
    use crate::units::force::Newtons;
    use crate::units::length::{Kilometers, Meters};

    #[test]
    fn declared_product_lands_in_reference_unit() {
        let w: Joules = Newtons::new(10.0) * Meters::new(2.0);
        assert_eq!(w.value(), 20.0);
    }

    #[test]
    fn operands_are_normalized_before_combining() {
        // 1 km * 10 N must equal 1000 m * 10 N.
        let w: Joules = Kilometers::new(1.0) * Newtons::new(10.0);
        assert_eq!(w.value(), 10_000.0);
    }

    #[test]
    fn same_kind_division_is_dimensionless() {
        let ratio: Ratio = Kilometers::new(1.0) / Meters::new(500.0);
        assert_eq!(ratio.value(), 2.0);
    }

    #[test]
    fn division_by_zero_follows_ieee() {
        let ratio: Ratio = Meters::new(1.0) / Meters::new(0.0);
        assert!(ratio.value().is_infinite());
        assert!(ratio.value() > 0.0);
    }
}

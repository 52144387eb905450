//! Scalar type and its implementations.

use crate::kind::Kind;
use crate::magnitude::Magnitude;
use crate::unit::Unit;
use crate::variant::{Absolute, Relative, Variant};
use core::any::TypeId;
use core::marker::PhantomData;
use core::ops::*;

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A scalar with a specific unit and variant.
///
/// `Scalar<U, V, F>` wraps a magnitude `F` (default `f64`) together with
/// phantom type information about its unit `U` and its [`Variant`] `V`
/// (default [`Relative`]). This enables compile-time checking of unit kinds
/// and of the relative/absolute distinction while maintaining zero runtime
/// cost.
///
/// # Examples
///
/// ```rust
/// use mensura_core::length::Meters;
///
/// let x = Meters::new(5.0);
/// let y = Meters::new(3.0);
/// let sum = x + y;
/// assert_eq!(sum.value(), 8.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct Scalar<U: Unit, V: Variant = Relative, F: Magnitude = f64>(F, PhantomData<(U, V)>);

/// A relative (difference-like) scalar.
pub type Rel<U, F = f64> = Scalar<U, Relative, F>;

/// An absolute (point-like) scalar.
pub type Abs<U, F = f64> = Scalar<U, Absolute, F>;

impl<U: Unit, V: Variant, F: Magnitude> Scalar<U, V, F> {
    /// A constant representing NaN for this scalar type.
    ///
    /// ```rust
    /// use mensura_core::length::Meters;
    /// assert!(Meters::NAN.value().is_nan());
    /// ```
    pub const NAN: Self = Self::new(F::NAN);

    /// Positive infinity.
    pub const POSITIVE_INFINITY: Self = Self::new(F::INFINITY);

    /// Negative infinity.
    pub const NEGATIVE_INFINITY: Self = Self::new(F::NEG_INFINITY);

    /// Creates a new scalar with the given magnitude, expressed in `U`.
    ///
    /// The magnitude is stored verbatim; no conversion happens here.
    ///
    /// ```rust
    /// use mensura_core::length::Meters;
    /// let d = Meters::new(3.0);
    /// assert_eq!(d.value(), 3.0);
    /// ```
    #[inline]
    pub const fn new(value: F) -> Self {
        Self(value, PhantomData)
    }

    /// Returns the raw magnitude, in this scalar's own unit.
    ///
    /// ```rust
    /// use mensura_core::duration::Seconds;
    /// let t = Seconds::new(2.5);
    /// assert_eq!(t.value(), 2.5);
    /// ```
    #[inline]
    pub fn value(self) -> F {
        self.0
    }

    /// Converts this scalar to another unit of the same kind.
    ///
    /// Relative values convert by factor alone; absolute values also apply
    /// the units' offsets. Converting to the scalar's own unit returns the
    /// magnitude bit-for-bit.
    ///
    /// ```rust
    /// use mensura_core::length::{Kilometers, Meter};
    ///
    /// let km = Kilometers::new(1.25);
    /// let m = km.to::<Meter>();
    /// assert!((m.value() - 1250.0).abs() < 1e-9);
    /// ```
    #[inline]
    pub fn to<T: Unit<Kind = U::Kind>>(self) -> Scalar<T, V, F> {
        // Identity conversions must be exact, not a multiply-divide round trip.
        if TypeId::of::<T>() == TypeId::of::<U>() {
            return Scalar::new(self.0);
        }
        let canonical = V::to_canonical(self.0, U::FACTOR, U::OFFSET);
        Scalar::new(V::from_canonical(canonical, T::FACTOR, T::OFFSET))
    }

    /// Returns the magnitude expressed in another unit of the same kind.
    ///
    /// ```rust
    /// use mensura_core::length::{Centimeter, Meters};
    /// let d = Meters::new(0.5);
    /// assert_eq!(d.value_in::<Centimeter>(), 50.0);
    /// ```
    #[inline]
    pub fn value_in<T: Unit<Kind = U::Kind>>(self) -> F {
        self.to::<T>().value()
    }

    /// Converts this scalar to the reference unit of its kind.
    #[inline]
    pub fn to_reference(self) -> Scalar<<U::Kind as Kind>::Reference, V, F> {
        self.to()
    }

    /// Returns the magnitude expressed in the reference unit of its kind.
    #[inline]
    pub fn reference_value(self) -> F {
        self.to_reference().value()
    }

    /// Equality against any unit of the same kind, compared in the reference
    /// unit with exact float equality.
    ///
    /// ```rust
    /// use mensura_core::length::{Kilometers, Meters};
    /// assert!(Meters::new(1500.0).eq(Kilometers::new(1.5)));
    /// ```
    #[inline]
    pub fn eq<T: Unit<Kind = U::Kind>>(self, other: Scalar<T, V, F>) -> bool {
        self.reference_value() == other.reference_value()
    }

    /// Inequality against any unit of the same kind.
    #[inline]
    pub fn ne<T: Unit<Kind = U::Kind>>(self, other: Scalar<T, V, F>) -> bool {
        !self.eq(other)
    }

    /// `self < other`, compared in the reference unit.
    #[inline]
    pub fn lt<T: Unit<Kind = U::Kind>>(self, other: Scalar<T, V, F>) -> bool {
        self.reference_value() < other.reference_value()
    }

    /// `self <= other`, compared in the reference unit.
    #[inline]
    pub fn le<T: Unit<Kind = U::Kind>>(self, other: Scalar<T, V, F>) -> bool {
        self.reference_value() <= other.reference_value()
    }

    /// `self > other`, compared in the reference unit.
    #[inline]
    pub fn gt<T: Unit<Kind = U::Kind>>(self, other: Scalar<T, V, F>) -> bool {
        self.reference_value() > other.reference_value()
    }

    /// `self >= other`, compared in the reference unit.
    #[inline]
    pub fn ge<T: Unit<Kind = U::Kind>>(self, other: Scalar<T, V, F>) -> bool {
        self.reference_value() >= other.reference_value()
    }

    /// Returns the minimum of this scalar and another of the same unit.
    ///
    /// ```rust
    /// use mensura_core::length::Meters;
    /// let a = Meters::new(3.0);
    /// let b = Meters::new(5.0);
    /// assert_eq!(a.min(b).value(), 3.0);
    /// ```
    #[inline]
    pub fn min(self, other: Self) -> Self {
        Self::new(self.0.min(other.0))
    }

    /// Returns the maximum of this scalar and another of the same unit.
    #[inline]
    pub fn max(self, other: Self) -> Self {
        Self::new(self.0.max(other.0))
    }

    /// Linear interpolation between `zero` (at ratio `0`) and `one` (at
    /// ratio `1`). The result is expressed in `zero`'s unit; the ratio is
    /// not clamped, so values outside `[0, 1]` extrapolate.
    ///
    /// ```rust
    /// use mensura_core::length::Meters;
    /// let mid = Meters::interpolate(Meters::new(0.0), Meters::new(10.0), 0.5);
    /// assert_eq!(mid.value(), 5.0);
    /// ```
    #[inline]
    pub fn interpolate<T: Unit<Kind = U::Kind>>(zero: Self, one: Scalar<T, V, F>, ratio: F) -> Self {
        Self::new(zero.0 * (F::ONE - ratio) + one.value_in::<U>() * ratio)
    }

    /// `true` when the magnitude is NaN.
    #[inline]
    pub fn is_nan(self) -> bool {
        self.0.is_nan()
    }

    /// `true` when the magnitude is neither NaN nor infinite.
    #[inline]
    pub fn is_finite(self) -> bool {
        self.0.is_finite()
    }

    /// Multiplies the magnitude by a plain number.
    #[inline]
    pub fn scale_by(self, factor: F) -> Self {
        Self::new(self.0 * factor)
    }

    /// Divides the magnitude by a plain number.
    #[inline]
    pub fn div_by(self, divisor: F) -> Self {
        Self::new(self.0 / divisor)
    }

    /// Returns the absolute value.
    ///
    /// ```rust
    /// use mensura_core::angle::Degrees;
    /// let a = Degrees::new(-10.0);
    /// assert_eq!(a.abs().value(), 10.0);
    /// ```
    #[inline]
    pub fn abs(self) -> Self {
        Self::new(self.0.abs())
    }

    /// Square root of the magnitude, in the current unit.
    #[inline]
    pub fn sqrt(self) -> Self {
        Self::new(self.0.sqrt())
    }

    /// Cube root of the magnitude, in the current unit.
    #[inline]
    pub fn cbrt(self) -> Self {
        Self::new(self.0.cbrt())
    }

    /// Sine of the magnitude (treated as radians).
    #[inline]
    pub fn sin(self) -> Self {
        Self::new(self.0.sin())
    }

    /// Cosine of the magnitude (treated as radians).
    #[inline]
    pub fn cos(self) -> Self {
        Self::new(self.0.cos())
    }

    /// Tangent of the magnitude (treated as radians).
    #[inline]
    pub fn tan(self) -> Self {
        Self::new(self.0.tan())
    }

    /// Arc sine of the magnitude. Out-of-domain inputs yield NaN.
    #[inline]
    pub fn asin(self) -> Self {
        Self::new(self.0.asin())
    }

    /// Arc cosine of the magnitude. Out-of-domain inputs yield NaN.
    #[inline]
    pub fn acos(self) -> Self {
        Self::new(self.0.acos())
    }

    /// Arc tangent of the magnitude.
    #[inline]
    pub fn atan(self) -> Self {
        Self::new(self.0.atan())
    }

    /// Hyperbolic sine of the magnitude.
    #[inline]
    pub fn sinh(self) -> Self {
        Self::new(self.0.sinh())
    }

    /// Hyperbolic cosine of the magnitude.
    #[inline]
    pub fn cosh(self) -> Self {
        Self::new(self.0.cosh())
    }

    /// Hyperbolic tangent of the magnitude.
    #[inline]
    pub fn tanh(self) -> Self {
        Self::new(self.0.tanh())
    }

    /// Exponential of the magnitude.
    #[inline]
    pub fn exp(self) -> Self {
        Self::new(self.0.exp())
    }

    /// Natural logarithm of the magnitude. Non-positive inputs follow
    /// IEEE-754 (`ln(0) == -inf`, `ln(x < 0)` is NaN).
    #[inline]
    pub fn ln(self) -> Self {
        Self::new(self.0.ln())
    }

    /// Base-10 logarithm of the magnitude.
    #[inline]
    pub fn log10(self) -> Self {
        Self::new(self.0.log10())
    }

    /// `ln(1 + x)` of the magnitude, accurate near zero.
    #[inline]
    pub fn ln_1p(self) -> Self {
        Self::new(self.0.ln_1p())
    }

    /// `e^x - 1` of the magnitude, accurate near zero.
    #[inline]
    pub fn exp_m1(self) -> Self {
        Self::new(self.0.exp_m1())
    }

    /// Rounds the magnitude up to the nearest integer.
    #[inline]
    pub fn ceil(self) -> Self {
        Self::new(self.0.ceil())
    }

    /// Rounds the magnitude down to the nearest integer.
    #[inline]
    pub fn floor(self) -> Self {
        Self::new(self.0.floor())
    }

    /// Rounds the magnitude to the nearest integer, half away from zero.
    #[inline]
    pub fn round(self) -> Self {
        Self::new(self.0.round())
    }

    /// Rounds the magnitude to the nearest integer, half to even.
    #[inline]
    pub fn round_ties_even(self) -> Self {
        Self::new(self.0.round_ties_even())
    }

    /// Sign of the magnitude (`±1`, or NaN for NaN).
    #[inline]
    pub fn signum(self) -> Self {
        Self::new(self.0.signum())
    }

    /// Multiplicative inverse of the magnitude, in the current unit.
    #[inline]
    pub fn recip(self) -> Self {
        Self::new(self.0.recip())
    }

    /// Raises the magnitude to a floating-point power.
    #[inline]
    pub fn powf(self, n: F) -> Self {
        Self::new(self.0.powf(n))
    }

    /// Raises the magnitude to an integer power.
    #[inline]
    pub fn powi(self, n: i32) -> Self {
        Self::new(self.0.powi(n))
    }

    /// Interprets the magnitude as radians and converts it to degrees.
    #[inline]
    pub fn to_degrees(self) -> Self {
        Self::new(self.0.to_degrees())
    }

    /// Interprets the magnitude as degrees and converts it to radians.
    #[inline]
    pub fn to_radians(self) -> Self {
        Self::new(self.0.to_radians())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Relative-only API: vector-space constants, mixed-unit arithmetic
// ─────────────────────────────────────────────────────────────────────────────

impl<U: Unit, F: Magnitude> Scalar<U, Relative, F> {
    /// The additive identity. Only relative scalars have a meaningful zero.
    pub const ZERO: Self = Self::new(F::ZERO);

    /// The unit quantity (magnitude `1` in `U`).
    pub const ONE: Self = Self::new(F::ONE);

    /// Reinterprets this difference as a point on the scale, keeping the
    /// magnitude and unit unchanged. Never applied implicitly.
    ///
    /// ```rust
    /// use mensura_core::length::{Meters, Position};
    /// let p: Position = Meters::new(3.0).to_abs();
    /// assert_eq!(p.value(), 3.0);
    /// ```
    #[inline]
    pub fn to_abs(self) -> Scalar<U, Absolute, F> {
        Scalar::new(self.0)
    }

    /// Adds a scalar of the same kind in any unit; the result is expressed
    /// in the reference unit and keeps the right-hand operand's variant, so
    /// adding a difference to a point yields a point.
    ///
    /// The `+` operator is the same-unit fast path; `plus` is the mixed-unit
    /// form.
    ///
    /// ```rust
    /// use mensura_core::length::{Kilometers, Meters};
    /// let total = Meters::new(500.0).plus(Kilometers::new(1.0));
    /// assert_eq!(total.value(), 1500.0);
    /// ```
    #[inline]
    pub fn plus<T: Unit<Kind = U::Kind>, W: Variant>(
        self,
        rhs: Scalar<T, W, F>,
    ) -> Scalar<<U::Kind as Kind>::Reference, W, F> {
        Scalar::new(self.reference_value() + rhs.reference_value())
    }

    /// Subtracts a scalar of the same kind in any unit; the result is
    /// expressed in the reference unit.
    #[inline]
    pub fn minus<T: Unit<Kind = U::Kind>>(
        self,
        rhs: Scalar<T, Relative, F>,
    ) -> Scalar<<U::Kind as Kind>::Reference, Relative, F> {
        Scalar::new(self.reference_value() - rhs.reference_value())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Absolute-only API: affine combinations
// ─────────────────────────────────────────────────────────────────────────────

impl<U: Unit, F: Magnitude> Scalar<U, Absolute, F> {
    /// Reinterprets this point as a difference from the scale's origin,
    /// keeping the magnitude and unit unchanged. Never applied implicitly.
    #[inline]
    pub fn to_rel(self) -> Scalar<U, Relative, F> {
        Scalar::new(self.0)
    }

    /// Adds a relative scalar of the same kind in any unit; the result is
    /// an absolute expressed in the reference unit.
    ///
    /// ```rust
    /// use mensura_core::duration::{Minutes, TimePoint, Seconds};
    /// let t: TimePoint = Seconds::new(30.0).to_abs();
    /// let later = t.plus(Minutes::new(1.0));
    /// assert_eq!(later.value(), 90.0);
    /// ```
    #[inline]
    pub fn plus<T: Unit<Kind = U::Kind>>(
        self,
        rhs: Scalar<T, Relative, F>,
    ) -> Scalar<<U::Kind as Kind>::Reference, Absolute, F> {
        Scalar::new(self.reference_value() + rhs.reference_value())
    }

    /// Subtracts a relative scalar of the same kind in any unit; the result
    /// is an absolute expressed in the reference unit.
    #[inline]
    pub fn minus<T: Unit<Kind = U::Kind>>(
        self,
        rhs: Scalar<T, Relative, F>,
    ) -> Scalar<<U::Kind as Kind>::Reference, Absolute, F> {
        Scalar::new(self.reference_value() - rhs.reference_value())
    }

    /// The difference between two points of the same kind, in any units;
    /// the result is a relative expressed in the reference unit.
    #[inline]
    pub fn delta<T: Unit<Kind = U::Kind>>(
        self,
        rhs: Scalar<T, Absolute, F>,
    ) -> Scalar<<U::Kind as Kind>::Reference, Relative, F> {
        Scalar::new(self.reference_value() - rhs.reference_value())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Operator implementations (same-unit fast path; no conversion)
// ─────────────────────────────────────────────────────────────────────────────

impl<U: Unit, F: Magnitude> Add for Scalar<U, Relative, F> {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.0 + rhs.0)
    }
}

impl<U: Unit, F: Magnitude> AddAssign for Scalar<U, Relative, F> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl<U: Unit, F: Magnitude> Sub for Scalar<U, Relative, F> {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.0 - rhs.0)
    }
}

impl<U: Unit, F: Magnitude> SubAssign for Scalar<U, Relative, F> {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        self.0 -= rhs.0;
    }
}

impl<U: Unit, F: Magnitude> Neg for Scalar<U, Relative, F> {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.0)
    }
}

// Absolute + Relative -> Absolute; there is deliberately no Add for two
// absolutes (points do not add).

impl<U: Unit, F: Magnitude> Add<Scalar<U, Relative, F>> for Scalar<U, Absolute, F> {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Scalar<U, Relative, F>) -> Self {
        Self::new(self.0 + rhs.0)
    }
}

impl<U: Unit, F: Magnitude> Add<Scalar<U, Absolute, F>> for Scalar<U, Relative, F> {
    type Output = Scalar<U, Absolute, F>;
    #[inline]
    fn add(self, rhs: Scalar<U, Absolute, F>) -> Self::Output {
        Scalar::new(self.0 + rhs.value())
    }
}

impl<U: Unit, F: Magnitude> AddAssign<Scalar<U, Relative, F>> for Scalar<U, Absolute, F> {
    #[inline]
    fn add_assign(&mut self, rhs: Scalar<U, Relative, F>) {
        self.0 += rhs.0;
    }
}

impl<U: Unit, F: Magnitude> Sub<Scalar<U, Relative, F>> for Scalar<U, Absolute, F> {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Scalar<U, Relative, F>) -> Self {
        Self::new(self.0 - rhs.0)
    }
}

impl<U: Unit, F: Magnitude> SubAssign<Scalar<U, Relative, F>> for Scalar<U, Absolute, F> {
    #[inline]
    fn sub_assign(&mut self, rhs: Scalar<U, Relative, F>) {
        self.0 -= rhs.0;
    }
}

impl<U: Unit, F: Magnitude> Sub for Scalar<U, Absolute, F> {
    type Output = Scalar<U, Relative, F>;
    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        Scalar::new(self.0 - rhs.0)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Scaling by plain numbers
// ─────────────────────────────────────────────────────────────────────────────

impl<U: Unit, V: Variant, F: Magnitude> Mul<F> for Scalar<U, V, F> {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: F) -> Self {
        Self::new(self.0 * rhs)
    }
}

impl<U: Unit, V: Variant> Mul<Scalar<U, V, f64>> for f64 {
    type Output = Scalar<U, V, f64>;
    #[inline]
    fn mul(self, rhs: Scalar<U, V, f64>) -> Self::Output {
        rhs * self
    }
}

impl<U: Unit, V: Variant> Mul<Scalar<U, V, f32>> for f32 {
    type Output = Scalar<U, V, f32>;
    #[inline]
    fn mul(self, rhs: Scalar<U, V, f32>) -> Self::Output {
        rhs * self
    }
}

impl<U: Unit, V: Variant, F: Magnitude> Div<F> for Scalar<U, V, F> {
    type Output = Self;
    #[inline]
    fn div(self, rhs: F) -> Self {
        Self::new(self.0 / rhs)
    }
}

impl<U: Unit, V: Variant, F: Magnitude> MulAssign<F> for Scalar<U, V, F> {
    #[inline]
    fn mul_assign(&mut self, rhs: F) {
        self.0 *= rhs;
    }
}

impl<U: Unit, V: Variant, F: Magnitude> DivAssign<F> for Scalar<U, V, F> {
    #[inline]
    fn div_assign(&mut self, rhs: F) {
        self.0 /= rhs;
    }
}

impl<U: Unit, V: Variant, F: Magnitude> Rem<F> for Scalar<U, V, F> {
    type Output = Self;
    #[inline]
    fn rem(self, rhs: F) -> Self {
        Self::new(self.0 % rhs)
    }
}

impl<U: Unit, V: Variant, F: Magnitude> PartialEq<F> for Scalar<U, V, F> {
    #[inline]
    fn eq(&self, other: &F) -> bool {
        self.0 == *other
    }
}

impl<U: Unit, V: Variant, F: Magnitude> From<F> for Scalar<U, V, F> {
    #[inline]
    fn from(value: F) -> Self {
        Self::new(value)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Serde support
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(feature = "serde")]
impl<U: Unit, V: Variant, F: Magnitude + Serialize> Serialize for Scalar<U, V, F> {
    fn serialize<S>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, U: Unit, V: Variant, F: Magnitude + Deserialize<'de>> Deserialize<'de>
    for Scalar<U, V, F>
{
    fn deserialize<D>(deserializer: D) -> core::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = F::deserialize(deserializer)?;
        Ok(Scalar::new(value))
    }
}

/// Serde helper module for serializing scalars with unit information.
///
/// Use this with the `#[serde(with = "...")]` attribute to preserve unit
/// symbols in serialized data. This is useful for external APIs, configuration
/// files, or self-documenting data formats.
///
/// # Examples
///
/// ```rust
/// use mensura_core::length::Meters;
/// use serde::{Serialize, Deserialize};
///
/// #[derive(Serialize, Deserialize)]
/// struct Config {
///     #[serde(with = "mensura_core::serde_with_unit")]
///     max_distance: Meters,  // Serializes as {"value": 100.0, "unit": "m"}
///
///     min_distance: Meters,  // Serializes as 50.0 (default, compact)
/// }
/// ```
#[cfg(feature = "serde")]
pub mod serde_with_unit {
    use super::*;
    use serde::de::{self, Deserializer, MapAccess, Visitor};
    use serde::ser::{SerializeStruct, Serializer};

    /// Serializes a `Scalar<U, V, F>` as a struct with `value` and `unit` fields.
    ///
    /// # Example JSON Output
    /// ```json
    /// {"value": 42.5, "unit": "m"}
    /// ```
    pub fn serialize<U, V, F, S>(
        scalar: &Scalar<U, V, F>,
        serializer: S,
    ) -> Result<S::Ok, S::Error>
    where
        U: Unit,
        V: Variant,
        F: Magnitude + Serialize,
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("Scalar", 2)?;
        state.serialize_field("value", &scalar.value())?;
        state.serialize_field("unit", U::SYMBOL)?;
        state.end()
    }

    /// Deserializes a `Scalar<U, V, F>` from a struct with `value` and
    /// optionally `unit` fields.
    ///
    /// The `unit` field is validated if present but not required for
    /// backwards compatibility.
    pub fn deserialize<'de, U, V, F, D>(deserializer: D) -> Result<Scalar<U, V, F>, D::Error>
    where
        U: Unit,
        V: Variant,
        F: Magnitude + Deserialize<'de>,
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(field_identifier, rename_all = "lowercase")]
        enum Field {
            Value,
            Unit,
        }

        struct ScalarVisitor<U, V, F>(core::marker::PhantomData<(U, V, F)>);

        impl<'de, U: Unit, V: Variant, F: Magnitude + Deserialize<'de>> Visitor<'de>
            for ScalarVisitor<U, V, F>
        {
            type Value = Scalar<U, V, F>;

            fn expecting(&self, formatter: &mut core::fmt::Formatter) -> core::fmt::Result {
                formatter.write_str("struct Scalar with value and unit fields")
            }

            fn visit_map<M>(self, mut map: M) -> Result<Scalar<U, V, F>, M::Error>
            where
                M: MapAccess<'de>,
            {
                let mut value: Option<F> = None;
                let mut unit: Option<String> = None;

                while let Some(key) = map.next_key()? {
                    match key {
                        Field::Value => {
                            if value.is_some() {
                                return Err(de::Error::duplicate_field("value"));
                            }
                            value = Some(map.next_value()?);
                        }
                        Field::Unit => {
                            if unit.is_some() {
                                return Err(de::Error::duplicate_field("unit"));
                            }
                            unit = Some(map.next_value()?);
                        }
                    }
                }

                let value = value.ok_or_else(|| de::Error::missing_field("value"))?;

                // Validate unit if provided (optional for backwards compatibility)
                if let Some(ref unit_str) = unit {
                    if unit_str != U::SYMBOL {
                        return Err(de::Error::custom(format!(
                            "unit mismatch: expected '{}', found '{}'",
                            U::SYMBOL,
                            unit_str
                        )));
                    }
                }

                Ok(Scalar::new(value))
            }
        }

        deserializer.deserialize_struct(
            "Scalar",
            &["value", "unit"],
            ScalarVisitor(core::marker::PhantomData),
        )
    }
}

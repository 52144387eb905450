//! Numeric precision abstraction for scalar magnitudes.
//!
//! A [`Scalar`](crate::Scalar) stores its magnitude as some [`Magnitude`] type,
//! which is implemented for `f32` and `f64` only (the trait is sealed). This is
//! what lets the whole engine exist once instead of once per precision.
//!
//! When the `std` feature is disabled, floating-point math that is not
//! available in `core` is provided via `libm`, as with the rest of this crate.

use core::fmt::{Debug, Display};
use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Rem, Sub, SubAssign};

mod sealed {
    pub trait Sealed {}
    impl Sealed for f32 {}
    impl Sealed for f64 {}
}

/// Selects the `std` intrinsic or the `libm` fallback for a float operation.
macro_rules! math {
    ($std_expr:expr, $libm_expr:expr) => {{
        #[cfg(feature = "std")]
        {
            $std_expr
        }
        #[cfg(not(feature = "std"))]
        {
            $libm_expr
        }
    }};
}

/// Raw numeric type usable as a scalar magnitude.
///
/// Implemented for `f32` and `f64`; sealed against further implementations.
/// Every unary operation follows IEEE-754 semantics: out-of-domain inputs
/// produce `NaN`/`±∞` rather than errors.
pub trait Magnitude:
    Copy
    + PartialEq
    + PartialOrd
    + Debug
    + Display
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Rem<Output = Self>
    + Neg<Output = Self>
    + AddAssign
    + SubAssign
    + MulAssign
    + DivAssign
    + sealed::Sealed
    + 'static
{
    /// Not-a-number.
    const NAN: Self;
    /// Additive identity.
    const ZERO: Self;
    /// Multiplicative identity.
    const ONE: Self;
    /// Positive infinity.
    const INFINITY: Self;
    /// Negative infinity.
    const NEG_INFINITY: Self;

    /// Widens (or passes through) to `f64`. Conversion factors are stored as
    /// `f64`, so all unit conversions route through this.
    fn to_f64(self) -> f64;
    /// Narrows (or passes through) from `f64`.
    fn from_f64(value: f64) -> Self;

    /// `true` when the value is NaN.
    fn is_nan(self) -> bool;
    /// `true` when the value is neither NaN nor infinite.
    fn is_finite(self) -> bool;

    /// Absolute value.
    fn abs(self) -> Self;
    /// Square root.
    fn sqrt(self) -> Self;
    /// Cube root.
    fn cbrt(self) -> Self;
    /// Sine (input treated as radians).
    fn sin(self) -> Self;
    /// Cosine (input treated as radians).
    fn cos(self) -> Self;
    /// Tangent (input treated as radians).
    fn tan(self) -> Self;
    /// Arc sine.
    fn asin(self) -> Self;
    /// Arc cosine.
    fn acos(self) -> Self;
    /// Arc tangent.
    fn atan(self) -> Self;
    /// Hyperbolic sine.
    fn sinh(self) -> Self;
    /// Hyperbolic cosine.
    fn cosh(self) -> Self;
    /// Hyperbolic tangent.
    fn tanh(self) -> Self;
    /// Exponential, `e^x`.
    fn exp(self) -> Self;
    /// Natural logarithm.
    fn ln(self) -> Self;
    /// Base-10 logarithm.
    fn log10(self) -> Self;
    /// `ln(1 + x)`, accurate near zero.
    fn ln_1p(self) -> Self;
    /// `e^x - 1`, accurate near zero.
    fn exp_m1(self) -> Self;
    /// Smallest integer ≥ self.
    fn ceil(self) -> Self;
    /// Largest integer ≤ self.
    fn floor(self) -> Self;
    /// Round half away from zero.
    fn round(self) -> Self;
    /// Round half to even (IEEE `rint` with default rounding).
    fn round_ties_even(self) -> Self;
    /// Sign of the value (`±1.0`, or NaN for NaN).
    fn signum(self) -> Self;
    /// Multiplicative inverse, `1 / x`.
    fn recip(self) -> Self;
    /// Raise to a floating-point power.
    fn powf(self, n: Self) -> Self;
    /// Raise to an integer power.
    fn powi(self, n: i32) -> Self;
    /// Interpret as radians and convert to degrees.
    fn to_degrees(self) -> Self;
    /// Interpret as degrees and convert to radians.
    fn to_radians(self) -> Self;
    /// Minimum of two values (NaN-ignoring, as the float intrinsics).
    fn min(self, other: Self) -> Self;
    /// Maximum of two values (NaN-ignoring, as the float intrinsics).
    fn max(self, other: Self) -> Self;
}

impl Magnitude for f64 {
    const NAN: Self = f64::NAN;
    const ZERO: Self = 0.0;
    const ONE: Self = 1.0;
    const INFINITY: Self = f64::INFINITY;
    const NEG_INFINITY: Self = f64::NEG_INFINITY;

    #[inline]
    fn to_f64(self) -> f64 {
        self
    }
    #[inline]
    fn from_f64(value: f64) -> Self {
        value
    }
    #[inline]
    fn is_nan(self) -> bool {
        f64::is_nan(self)
    }
    #[inline]
    fn is_finite(self) -> bool {
        f64::is_finite(self)
    }
    #[inline]
    fn abs(self) -> Self {
        math!(f64::abs(self), libm::fabs(self))
    }
    #[inline]
    fn sqrt(self) -> Self {
        math!(f64::sqrt(self), libm::sqrt(self))
    }
    #[inline]
    fn cbrt(self) -> Self {
        math!(f64::cbrt(self), libm::cbrt(self))
    }
    #[inline]
    fn sin(self) -> Self {
        math!(f64::sin(self), libm::sin(self))
    }
    #[inline]
    fn cos(self) -> Self {
        math!(f64::cos(self), libm::cos(self))
    }
    #[inline]
    fn tan(self) -> Self {
        math!(f64::tan(self), libm::tan(self))
    }
    #[inline]
    fn asin(self) -> Self {
        math!(f64::asin(self), libm::asin(self))
    }
    #[inline]
    fn acos(self) -> Self {
        math!(f64::acos(self), libm::acos(self))
    }
    #[inline]
    fn atan(self) -> Self {
        math!(f64::atan(self), libm::atan(self))
    }
    #[inline]
    fn sinh(self) -> Self {
        math!(f64::sinh(self), libm::sinh(self))
    }
    #[inline]
    fn cosh(self) -> Self {
        math!(f64::cosh(self), libm::cosh(self))
    }
    #[inline]
    fn tanh(self) -> Self {
        math!(f64::tanh(self), libm::tanh(self))
    }
    #[inline]
    fn exp(self) -> Self {
        math!(f64::exp(self), libm::exp(self))
    }
    #[inline]
    fn ln(self) -> Self {
        math!(f64::ln(self), libm::log(self))
    }
    #[inline]
    fn log10(self) -> Self {
        math!(f64::log10(self), libm::log10(self))
    }
    #[inline]
    fn ln_1p(self) -> Self {
        math!(f64::ln_1p(self), libm::log1p(self))
    }
    #[inline]
    fn exp_m1(self) -> Self {
        math!(f64::exp_m1(self), libm::expm1(self))
    }
    #[inline]
    fn ceil(self) -> Self {
        math!(f64::ceil(self), libm::ceil(self))
    }
    #[inline]
    fn floor(self) -> Self {
        math!(f64::floor(self), libm::floor(self))
    }
    #[inline]
    fn round(self) -> Self {
        math!(f64::round(self), libm::round(self))
    }
    #[inline]
    fn round_ties_even(self) -> Self {
        math!(f64::round_ties_even(self), libm::rint(self))
    }
    #[inline]
    fn signum(self) -> Self {
        math!(f64::signum(self), {
            if f64::is_nan(self) {
                f64::NAN
            } else {
                libm::copysign(1.0, self)
            }
        })
    }
    #[inline]
    fn recip(self) -> Self {
        f64::recip(self)
    }
    #[inline]
    fn powf(self, n: Self) -> Self {
        math!(f64::powf(self, n), libm::pow(self, n))
    }
    #[inline]
    fn powi(self, n: i32) -> Self {
        math!(f64::powi(self, n), libm::pow(self, n as f64))
    }
    #[inline]
    fn to_degrees(self) -> Self {
        f64::to_degrees(self)
    }
    #[inline]
    fn to_radians(self) -> Self {
        f64::to_radians(self)
    }
    #[inline]
    fn min(self, other: Self) -> Self {
        f64::min(self, other)
    }
    #[inline]
    fn max(self, other: Self) -> Self {
        f64::max(self, other)
    }
}

impl Magnitude for f32 {
    const NAN: Self = f32::NAN;
    const ZERO: Self = 0.0;
    const ONE: Self = 1.0;
    const INFINITY: Self = f32::INFINITY;
    const NEG_INFINITY: Self = f32::NEG_INFINITY;

    #[inline]
    fn to_f64(self) -> f64 {
        f64::from(self)
    }
    #[inline]
    #[allow(clippy::cast_possible_truncation)]
    fn from_f64(value: f64) -> Self {
        value as f32
    }
    #[inline]
    fn is_nan(self) -> bool {
        f32::is_nan(self)
    }
    #[inline]
    fn is_finite(self) -> bool {
        f32::is_finite(self)
    }
    #[inline]
    fn abs(self) -> Self {
        math!(f32::abs(self), libm::fabsf(self))
    }
    #[inline]
    fn sqrt(self) -> Self {
        math!(f32::sqrt(self), libm::sqrtf(self))
    }
    #[inline]
    fn cbrt(self) -> Self {
        math!(f32::cbrt(self), libm::cbrtf(self))
    }
    #[inline]
    fn sin(self) -> Self {
        math!(f32::sin(self), libm::sinf(self))
    }
    #[inline]
    fn cos(self) -> Self {
        math!(f32::cos(self), libm::cosf(self))
    }
    #[inline]
    fn tan(self) -> Self {
        math!(f32::tan(self), libm::tanf(self))
    }
    #[inline]
    fn asin(self) -> Self {
        math!(f32::asin(self), libm::asinf(self))
    }
    #[inline]
    fn acos(self) -> Self {
        math!(f32::acos(self), libm::acosf(self))
    }
    #[inline]
    fn atan(self) -> Self {
        math!(f32::atan(self), libm::atanf(self))
    }
    #[inline]
    fn sinh(self) -> Self {
        math!(f32::sinh(self), libm::sinhf(self))
    }
    #[inline]
    fn cosh(self) -> Self {
        math!(f32::cosh(self), libm::coshf(self))
    }
    #[inline]
    fn tanh(self) -> Self {
        math!(f32::tanh(self), libm::tanhf(self))
    }
    #[inline]
    fn exp(self) -> Self {
        math!(f32::exp(self), libm::expf(self))
    }
    #[inline]
    fn ln(self) -> Self {
        math!(f32::ln(self), libm::logf(self))
    }
    #[inline]
    fn log10(self) -> Self {
        math!(f32::log10(self), libm::log10f(self))
    }
    #[inline]
    fn ln_1p(self) -> Self {
        math!(f32::ln_1p(self), libm::log1pf(self))
    }
    #[inline]
    fn exp_m1(self) -> Self {
        math!(f32::exp_m1(self), libm::expm1f(self))
    }
    #[inline]
    fn ceil(self) -> Self {
        math!(f32::ceil(self), libm::ceilf(self))
    }
    #[inline]
    fn floor(self) -> Self {
        math!(f32::floor(self), libm::floorf(self))
    }
    #[inline]
    fn round(self) -> Self {
        math!(f32::round(self), libm::roundf(self))
    }
    #[inline]
    fn round_ties_even(self) -> Self {
        math!(f32::round_ties_even(self), libm::rintf(self))
    }
    #[inline]
    fn signum(self) -> Self {
        math!(f32::signum(self), {
            if f32::is_nan(self) {
                f32::NAN
            } else {
                libm::copysignf(1.0, self)
            }
        })
    }
    #[inline]
    fn recip(self) -> Self {
        f32::recip(self)
    }
    #[inline]
    fn powf(self, n: Self) -> Self {
        math!(f32::powf(self, n), libm::powf(self, n))
    }
    #[inline]
    fn powi(self, n: i32) -> Self {
        math!(f32::powi(self, n), libm::powf(self, n as f32))
    }
    #[inline]
    fn to_degrees(self) -> Self {
        f32::to_degrees(self)
    }
    #[inline]
    fn to_radians(self) -> Self {
        f32::to_radians(self)
    }
    #[inline]
    fn min(self, other: Self) -> Self {
        f32::min(self, other)
    }
    #[inline]
    fn max(self, other: Self) -> Self {
        f32::max(self, other)
    }
}

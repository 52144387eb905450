//! Core type system for strongly typed physical quantities.
//!
//! `mensura-core` provides a zero-cost model of physical quantities with an
//! explicit relative/absolute distinction:
//!
//! - A *unit* is a zero-sized marker type implementing [`Unit`], grouped into
//!   quantity [`Kind`]s (length, duration, temperature, …) with one
//!   *reference unit* each.
//! - A value tagged with a unit is a [`Scalar<U, V, F>`], backed by `f64` (or
//!   `f32`) and tagged [`Relative`] (a difference) or [`Absolute`] (a point
//!   on a scale). The aliases [`Rel`] and [`Abs`] name the two halves.
//! - Conversion is an explicit, type-checked scaling via [`Scalar::to`];
//!   absolute conversions also apply unit offsets (°C/°F).
//! - Derived operations (force × length = energy, length / duration = speed)
//!   are declared pairwise as [`KindMul`]/[`KindDiv`] impls and consumed by a
//!   single generic `Mul`/`Div` engine; an undeclared pair does not compile.
//!
//! Most users should depend on `mensura` (the facade crate) unless they need
//! direct access to these primitives.
//!
//! # What this crate solves
//!
//! - Compile-time separation of quantity kinds (length vs duration vs angle, …).
//! - Compile-time separation of points from differences: positions, instants,
//!   and absolute temperatures cannot be added to each other.
//! - Zero runtime overhead for unit tags (phantom types only).
//! - A declarative table of physically meaningful products and quotients.
//!
//! # What this crate does not try to solve
//!
//! - Exact arithmetic (magnitudes are IEEE-754 floats).
//! - General symbolic dimensional analysis with exponent tracking (`m^2`,
//!   `s^-1`, …); only the pairs declared in the kind table are modeled.
//! - Nonlinear unit scales (only `value * factor + offset` conversions).
//!
//! # Quick start
//!
//! Convert between predefined units:
//!
//! ```rust
//! use mensura_core::length::{Kilometers, Meter};
//!
//! let km = Kilometers::new(1.25);
//! let m = km.to::<Meter>();
//! assert!((m.value() - 1250.0).abs() < 1e-12);
//! ```
//!
//! Compose derived quantities with `*` and `/`:
//!
//! ```rust
//! use mensura_core::force::Newtons;
//! use mensura_core::length::Meters;
//! use mensura_core::speed::MetersPerSecond;
//! use mensura_core::duration::Seconds;
//!
//! let v: MetersPerSecond = Meters::new(100.0) / Seconds::new(20.0);
//! assert!((v.value() - 5.0).abs() < 1e-12);
//!
//! let work = Newtons::new(10.0) * Meters::new(2.0);
//! assert_eq!(work.value(), 20.0); // joules
//! ```
//!
//! Keep points and differences apart:
//!
//! ```rust
//! use mensura_core::temperature::{Celsius, Kelvin};
//! use mensura_core::Abs;
//!
//! let freezing: Abs<Celsius> = Abs::new(0.0);
//! let in_kelvin = freezing.to::<Kelvin>();
//! assert!((in_kelvin.value() - 273.15).abs() < 1e-12);
//!
//! // A 5 °C *difference* is a 5 K difference; no offset applies.
//! let delta = mensura_core::Rel::<Celsius>::new(5.0);
//! assert!((delta.to::<Kelvin>().value() - 5.0).abs() < 1e-12);
//! ```
//!
//! # `no_std`
//!
//! Disable default features to build `mensura-core` without `std`:
//!
//! ```toml
//! [dependencies]
//! mensura-core = { version = "0.1.0", default-features = false }
//! ```
//!
//! When `std` is disabled, floating-point math that isn't available in `core`
//! is provided via `libm`. Text parsing requires `std`.
//!
//! # Feature flags
//!
//! - `std` (default): enables `std` support and text parsing.
//! - `serde`: enables `serde` support for `Scalar` (implies `std`);
//!   serialization is the raw magnitude only unless [`serde_with_unit`] is
//!   used.
//!
//! # Panics and errors
//!
//! Arithmetic and conversion never return `Result` and never panic on their
//! own; they follow IEEE-754 behavior (NaN and infinities propagate through
//! every operation, division by zero yields ±∞). The only fallible surface
//! is text parsing, which returns [`ParseError`].
//!
//! # SemVer and stability
//!
//! This crate is currently `0.x`. Expect breaking changes between minor
//! versions until `1.0`.

#![deny(missing_docs)]
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

#[cfg(not(feature = "std"))]
extern crate libm;

// ─────────────────────────────────────────────────────────────────────────────
// Core modules
// ─────────────────────────────────────────────────────────────────────────────

mod kind;
mod macros;
mod magnitude;
mod ops;
#[cfg(feature = "std")]
mod parse;
mod scalar;
mod unit;
mod variant;

// ─────────────────────────────────────────────────────────────────────────────
// Public re-exports of core types
// ─────────────────────────────────────────────────────────────────────────────

pub use kind::Kind;
pub use magnitude::Magnitude;
pub use ops::{KindDiv, KindMul, Product, Quotient};
pub use scalar::{Abs, Rel, Scalar};
pub use unit::{Unit, UnitInfo};
pub use variant::{Absolute, Relative, Variant};

#[cfg(feature = "std")]
pub use parse::{parse, parse_absolute, ParseError};

#[cfg(feature = "serde")]
pub use scalar::serde_with_unit;

// ─────────────────────────────────────────────────────────────────────────────
// Predefined unit modules (grouped by kind)
// ─────────────────────────────────────────────────────────────────────────────

/// Predefined unit modules (grouped by quantity kind).
///
/// These are defined in `mensura-core` so they can implement formatting and
/// helper traits without running into Rust's orphan rules.
pub mod units;

pub use units::acceleration;
pub use units::angle;
pub use units::area;
pub use units::density;
pub use units::dimensionless;
pub use units::duration;
pub use units::electrical;
pub use units::energy;
pub use units::force;
pub use units::frequency;
pub use units::length;
pub use units::mass;
pub use units::power;
pub use units::pressure;
pub use units::speed;
pub use units::temperature;
pub use units::torque;
pub use units::volume;

#[cfg(test)]
mod tests {
    use super::*;

    // ─────────────────────────────────────────────────────────────────────────
    // Test kind and units for lib.rs tests
    // ─────────────────────────────────────────────────────────────────────────
    pub enum TestKind {}
    impl Kind for TestKind {
        type Reference = TestUnit;
        const NAME: &'static str = "test";
        const UNITS: &'static [UnitInfo] = &[
            UnitInfo::of::<TestUnit>(),
            UnitInfo::of::<DoubleTestUnit>(),
            UnitInfo::of::<ShiftedTestUnit>(),
        ];
    }

    #[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
    pub enum TestUnit {}
    impl Unit for TestUnit {
        const FACTOR: f64 = 1.0;
        type Kind = TestKind;
        const SYMBOL: &'static str = "tu";
    }

    #[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
    pub enum DoubleTestUnit {}
    impl Unit for DoubleTestUnit {
        const FACTOR: f64 = 2.0;
        type Kind = TestKind;
        const SYMBOL: &'static str = "dtu";
    }

    // A unit with an offset, shaped like Celsius: ref = value + 10.
    #[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
    pub enum ShiftedTestUnit {}
    impl Unit for ShiftedTestUnit {
        const FACTOR: f64 = 1.0;
        const OFFSET: f64 = 10.0;
        type Kind = TestKind;
        const SYMBOL: &'static str = "stu";
    }

    type Tu = Rel<TestUnit>;
    type Dtu = Rel<DoubleTestUnit>;
    type AbsTu = Abs<TestUnit>;
    type AbsStu = Abs<ShiftedTestUnit>;

    // ─────────────────────────────────────────────────────────────────────────
    // Scalar core behavior
    // ─────────────────────────────────────────────────────────────────────────

    #[test]
    fn scalar_new_and_value() {
        let q = Tu::new(42.0);
        assert_eq!(q.value(), 42.0);
    }

    #[test]
    fn scalar_constants() {
        assert!(Tu::NAN.value().is_nan());
        assert_eq!(Tu::ZERO.value(), 0.0);
        assert_eq!(Tu::ONE.value(), 1.0);
        assert!(Tu::POSITIVE_INFINITY.value().is_infinite());
        assert!(Tu::NEGATIVE_INFINITY.value() < 0.0);
    }

    #[test]
    fn scalar_from_f64() {
        let q: Tu = 123.456.into();
        assert_eq!(q.value(), 123.456);
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Conversion via `to`
    // ─────────────────────────────────────────────────────────────────────────

    #[test]
    fn conversion_to_same_unit_is_exact() {
        let q = Tu::new(0.1 + 0.2);
        assert_eq!(q.to::<TestUnit>().value(), q.value());
    }

    #[test]
    fn conversion_to_different_unit() {
        // 1 dtu = 2 tu, so 10 tu -> 5 dtu.
        let q = Tu::new(10.0);
        let converted = q.to::<DoubleTestUnit>();
        assert!((converted.value() - 5.0).abs() < 1e-12);
    }

    #[test]
    fn conversion_roundtrip() {
        let original = Tu::new(100.0);
        let back = original.to::<DoubleTestUnit>().to::<TestUnit>();
        assert!((back.value() - original.value()).abs() < 1e-12);
    }

    #[test]
    fn relative_conversion_ignores_offset() {
        let delta = Rel::<ShiftedTestUnit>::new(5.0);
        assert_eq!(delta.to::<TestUnit>().value(), 5.0);
    }

    #[test]
    fn absolute_conversion_applies_offset() {
        let point = AbsStu::new(5.0);
        assert_eq!(point.to::<TestUnit>().value(), 15.0);
        let back = point.to::<TestUnit>().to::<ShiftedTestUnit>();
        assert_eq!(back.value(), 5.0);
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Relative operators (same-unit fast path)
    // ─────────────────────────────────────────────────────────────────────────

    #[test]
    fn operator_add_sub_neg() {
        let a = Tu::new(3.0);
        let b = Tu::new(7.0);
        assert_eq!((a + b).value(), 10.0);
        assert_eq!((a - b).value(), -4.0);
        assert_eq!((-a).value(), -3.0);
    }

    #[test]
    fn operator_assign_family() {
        let mut q = Tu::new(5.0);
        q += Tu::new(3.0);
        assert_eq!(q.value(), 8.0);
        q -= Tu::new(1.0);
        assert_eq!(q.value(), 7.0);
        q *= 2.0;
        assert_eq!(q.value(), 14.0);
        q /= 7.0;
        assert_eq!(q.value(), 2.0);
    }

    #[test]
    fn operator_scale_by_plain_number() {
        let q = Tu::new(5.0);
        assert_eq!((q * 3.0).value(), 15.0);
        assert_eq!((3.0 * q).value(), 15.0);
        assert_eq!((q / 2.0).value(), 2.5);
        assert_eq!((q % 3.0).value(), 2.0);
    }

    #[test]
    fn partial_eq_against_magnitude() {
        let q = Tu::new(5.0);
        assert!(q == 5.0);
        assert!(!(q == 4.0));
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Mixed-unit named arithmetic
    // ─────────────────────────────────────────────────────────────────────────

    #[test]
    fn plus_normalizes_to_reference() {
        let total = Tu::new(1.0).plus(Dtu::new(2.0));
        assert_eq!(total.value(), 5.0); // 1 tu + 4 tu
    }

    #[test]
    fn minus_normalizes_to_reference() {
        let diff = Dtu::new(2.0).minus(Tu::new(1.0));
        assert_eq!(diff.value(), 3.0);
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Absolute/relative pair
    // ─────────────────────────────────────────────────────────────────────────

    #[test]
    fn absolute_plus_relative() {
        let p = AbsTu::new(10.0);
        let d = Tu::new(3.0);
        assert_eq!((p + d).value(), 13.0);
        assert_eq!((d + p).value(), 13.0);
        assert_eq!((p - d).value(), 7.0);
    }

    #[test]
    fn absolute_minus_absolute_is_relative() {
        let a = AbsTu::new(10.0);
        let b = AbsTu::new(4.0);
        let d: Tu = a - b;
        assert_eq!(d.value(), 6.0);
    }

    #[test]
    fn absolute_assign_ops() {
        let mut p = AbsTu::new(10.0);
        p += Tu::new(5.0);
        assert_eq!(p.value(), 15.0);
        p -= Tu::new(3.0);
        assert_eq!(p.value(), 12.0);
    }

    #[test]
    fn relative_plus_absolute_is_a_point() {
        // 1 tu + (5 stu = 15 tu) = 16 tu, as a point.
        let p: AbsTu = Tu::new(1.0).plus(AbsStu::new(5.0));
        assert_eq!(p.value(), 16.0);
    }

    #[test]
    fn delta_crosses_offset_units() {
        // 5 stu is 15 tu on the reference scale.
        let d = AbsStu::new(5.0).delta(AbsTu::new(10.0));
        assert_eq!(d.value(), 5.0);
    }

    #[test]
    fn reinterpret_round_trip() {
        let d = Tu::new(3.5);
        assert_eq!(d.to_abs().to_rel().value(), 3.5);
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Comparison helpers
    // ─────────────────────────────────────────────────────────────────────────

    #[test]
    fn comparisons_use_reference_unit() {
        let a = Tu::new(4.0);
        let b = Dtu::new(2.0);
        assert!(a.eq(b));
        assert!(!a.ne(b));
        assert!(Tu::new(3.0).lt(b));
        assert!(a.le(b));
        assert!(Tu::new(5.0).gt(b));
        assert!(a.ge(b));
    }

    #[test]
    fn min_max() {
        let a = Tu::new(5.0);
        let b = Tu::new(3.0);
        assert_eq!(a.min(b).value(), 3.0);
        assert_eq!(a.max(b).value(), 5.0);
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Interpolation
    // ─────────────────────────────────────────────────────────────────────────

    #[test]
    fn interpolate_boundaries_and_midpoint() {
        let zero = Tu::new(10.0);
        let one = Tu::new(20.0);
        assert_eq!(Tu::interpolate(zero, one, 0.0).value(), 10.0);
        assert_eq!(Tu::interpolate(zero, one, 1.0).value(), 20.0);
        assert_eq!(Tu::interpolate(zero, one, 0.5).value(), 15.0);
    }

    #[test]
    fn interpolate_extrapolates_unclamped() {
        let zero = Tu::new(10.0);
        let one = Tu::new(20.0);
        assert_eq!(Tu::interpolate(zero, one, 2.0).value(), 30.0);
        assert_eq!(Tu::interpolate(zero, one, -1.0).value(), 0.0);
    }

    #[test]
    fn interpolate_converts_into_zeros_unit() {
        let zero = Tu::new(0.0);
        let one = Dtu::new(5.0); // 10 tu
        assert_eq!(Tu::interpolate(zero, one, 0.5).value(), 5.0);
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Math functions
    // ─────────────────────────────────────────────────────────────────────────

    #[test]
    fn math_family_applies_in_current_unit() {
        assert_eq!(Tu::new(-5.0).abs().value(), 5.0);
        assert_eq!(Tu::new(9.0).sqrt().value(), 3.0);
        assert_eq!(Tu::new(27.0).cbrt().value(), 3.0);
        assert_eq!(Tu::new(2.0).powi(10).value(), 1024.0);
        assert_eq!(Tu::new(0.25).recip().value(), 4.0);
        assert_eq!(Tu::new(-1.5).signum().value(), -1.0);
        assert_eq!(Tu::new(1.5).floor().value(), 1.0);
        assert_eq!(Tu::new(1.5).ceil().value(), 2.0);
        assert_eq!(Tu::new(2.5).round().value(), 3.0);
        assert_eq!(Tu::new(2.5).round_ties_even().value(), 2.0);
    }

    #[test]
    fn math_family_propagates_nan() {
        assert!(Tu::new(-1.0).sqrt().is_nan());
        assert!(Tu::new(2.0).asin().is_nan());
        assert!(Tu::new(-1.0).ln().is_nan());
    }

    #[test]
    fn math_family_works_on_absolute_scalars() {
        let p = AbsTu::new(1.9);
        assert_eq!(p.floor().value(), 1.0);
        assert_eq!(p.ceil().value(), 2.0);
        assert_eq!(p.round().value(), 2.0);
        assert_eq!(AbsTu::new(-3.0).abs().value(), 3.0);
        assert_eq!(AbsTu::new(-3.0).signum().value(), -1.0);
        assert_eq!(p.scale_by(2.0).value(), 3.8);
        assert_eq!(AbsTu::new(5.0).div_by(2.0).value(), 2.5);
    }

    #[test]
    fn absolute_scalars_scale_with_plain_numbers() {
        let p = AbsTu::new(2.0);
        assert_eq!((p * 3.0).value(), 6.0);
        assert_eq!((3.0 * p).value(), 6.0);
        assert_eq!((p / 4.0).value(), 0.5);
        let mut q = AbsTu::new(10.0);
        q *= 2.0;
        q /= 5.0;
        assert_eq!(q.value(), 4.0);
    }

    #[test]
    fn hyperbolic_identities() {
        let x = Tu::new(0.75);
        let lhs = x.cosh().value().powi(2) - x.sinh().value().powi(2);
        assert!((lhs - 1.0).abs() < 1e-12);
        assert!((x.tanh().value() - x.sinh().value() / x.cosh().value()).abs() < 1e-12);
        assert_eq!(Tu::new(0.0).sinh().value(), 0.0);
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Edge cases
    // ─────────────────────────────────────────────────────────────────────────

    #[test]
    fn edge_case_infinity_propagates() {
        let inf = Tu::POSITIVE_INFINITY;
        assert!((inf + Tu::new(1.0)).value().is_infinite());
        assert!((inf - inf).is_nan());
    }

    #[test]
    fn edge_case_large_values() {
        let large = Tu::new(1e100);
        assert_eq!(large.to::<DoubleTestUnit>().value(), 5e99);
    }

    // ─────────────────────────────────────────────────────────────────────────
    // f32 magnitudes
    // ─────────────────────────────────────────────────────────────────────────

    #[test]
    fn f32_scalars_share_the_engine() {
        let q = Rel::<TestUnit, f32>::new(10.0);
        let converted = q.to::<DoubleTestUnit>();
        assert!((converted.value() - 5.0).abs() < 1e-6);
        let sum = q + Rel::<TestUnit, f32>::new(2.5);
        assert_eq!(sum.value(), 12.5);
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Serde tests
    // ─────────────────────────────────────────────────────────────────────────

    #[cfg(feature = "serde")]
    mod serde_tests {
        use super::*;
        use serde::{Deserialize, Serialize};

        // The derive-generated Display is absent for hand-rolled test units,
        // so serde_with_unit is exercised through its functions directly.
        #[derive(Serialize, Deserialize, Debug)]
        struct TestStruct {
            #[serde(with = "crate::serde_with_unit")]
            distance: Tu,
        }

        #[test]
        fn serialize_scalar_as_raw_magnitude() {
            let q = Tu::new(42.5);
            let json = serde_json::to_string(&q).unwrap();
            assert_eq!(json, "42.5");
        }

        #[test]
        fn deserialize_scalar_from_raw_magnitude() {
            let q: Tu = serde_json::from_str("42.5").unwrap();
            assert_eq!(q.value(), 42.5);
        }

        #[test]
        fn serde_roundtrip() {
            let original = Tu::new(123.456);
            let json = serde_json::to_string(&original).unwrap();
            let restored: Tu = serde_json::from_str(&json).unwrap();
            assert!((restored.value() - original.value()).abs() < 1e-12);
        }

        #[test]
        fn serde_with_unit_serialize() {
            let data = TestStruct {
                distance: Tu::new(42.5),
            };
            let json = serde_json::to_string(&data).unwrap();
            assert!(json.contains("\"value\""));
            assert!(json.contains("\"unit\""));
            assert!(json.contains("\"tu\""));
        }

        #[test]
        fn serde_with_unit_deserialize() {
            let json = r#"{"distance":{"value":42.5,"unit":"tu"}}"#;
            let data: TestStruct = serde_json::from_str(json).unwrap();
            assert_eq!(data.distance.value(), 42.5);
        }

        #[test]
        fn serde_with_unit_deserialize_no_unit_field() {
            let json = r#"{"distance":{"value":42.5}}"#;
            let data: TestStruct = serde_json::from_str(json).unwrap();
            assert_eq!(data.distance.value(), 42.5);
        }

        #[test]
        fn serde_with_unit_deserialize_wrong_unit() {
            let json = r#"{"distance":{"value":42.5,"unit":"wrong"}}"#;
            let result: Result<TestStruct, _> = serde_json::from_str(json);
            assert!(result.is_err());
            let err_msg = result.unwrap_err().to_string();
            assert!(err_msg.contains("unit mismatch") || err_msg.contains("expected"));
        }

        #[test]
        fn serde_with_unit_deserialize_missing_value() {
            let json = r#"{"distance":{"unit":"tu"}}"#;
            let result: Result<TestStruct, _> = serde_json::from_str(json);
            assert!(result.is_err());
        }

        #[test]
        fn serde_with_unit_roundtrip() {
            let original = TestStruct {
                distance: Tu::new(123.456),
            };
            let json = serde_json::to_string(&original).unwrap();
            let restored: TestStruct = serde_json::from_str(&json).unwrap();
            assert!((restored.distance.value() - original.distance.value()).abs() < 1e-12);
        }
    }
}

//! Strongly typed physical quantities, units, and conversions.
//!
//! `mensura` is the user-facing crate in this workspace. It re-exports the
//! full API from `mensura-core` plus the predefined unit catalog (length,
//! duration, temperature, electrical units, …).
//!
//! The core idea: a value is always a `Scalar<U, V>`, where `U` is a
//! zero-sized type naming the unit and `V` says whether the value is a
//! *difference* ([`Rel`]) or a *point on a scale* ([`Abs`]). Both tags live
//! at compile time; at runtime a scalar is exactly one `f64` (or `f32`).
//!
//! # What this crate solves
//!
//! - Prevents mixing incompatible kinds (you can't add metres to seconds).
//! - Prevents nonsense affine arithmetic (you can't add two absolute
//!   temperatures, but you can subtract them to get a difference).
//! - Makes unit conversion explicit and type-checked (`to::<TargetUnit>()`),
//!   including offset scales like °C and °F.
//! - Models physically meaningful products and quotients (`Force × Length`
//!   is energy; an undeclared pair is a compile error).
//!
//! # What this crate does not try to solve
//!
//! - Arbitrary symbolic unit algebra or automatic simplification; only the
//!   declared kind pairs are available.
//! - Exact arithmetic: magnitudes are IEEE-754 floats.
//! - A full SI-prefix system; only the units defined in the catalog are
//!   available out of the box (downstream crates can add more with the
//!   derive macro).
//!
//! # Quick start
//!
//! Convert kilometres to metres:
//!
//! ```rust
//! use mensura::{Kilometers, Meter};
//!
//! let d = Kilometers::new(1.25);
//! let m = d.to::<Meter>();
//! assert!((m.value() - 1250.0).abs() < 1e-12);
//! ```
//!
//! Compose derived quantities with `*` and `/`:
//!
//! ```rust
//! use mensura::{Joules, Meters, MetersPerSecond, Newtons, Seconds};
//!
//! let v: MetersPerSecond = Meters::new(100.0) / Seconds::new(20.0);
//! assert_eq!(v.value(), 5.0);
//!
//! let work: Joules = Newtons::new(10.0) * Meters::new(2.0);
//! assert_eq!(work.value(), 20.0);
//! ```
//!
//! Keep points and differences apart:
//!
//! ```rust
//! use mensura::{Abs, Celsius, CelsiusDegrees, Kelvin};
//!
//! let morning: Abs<Celsius> = Abs::new(10.0);
//! let warmed = morning + CelsiusDegrees::new(5.0);
//! assert_eq!(warmed.value(), 15.0);
//! assert!((warmed.to::<Kelvin>().value() - 288.15).abs() < 1e-9);
//! ```
//!
//! # Incorrect usage (type errors)
//!
//! Adding two absolute values is rejected:
//!
//! ```compile_fail
//! use mensura::{Abs, Celsius};
//!
//! let a: Abs<Celsius> = Abs::new(20.0);
//! let b: Abs<Celsius> = Abs::new(30.0);
//! let _ = a + b; // points cannot be added
//! ```
//!
//! So is a product with no declared physical meaning:
//!
//! ```compile_fail
//! use mensura::Kilograms;
//!
//! let m = Kilograms::new(2.0);
//! let _ = m * m; // Mass × Mass is not a declared kind product
//! ```
//!
//! # Modules
//!
//! Units are grouped by kind under modules (also re-exported at the crate
//! root for convenience): [`length`], [`duration`], [`angle`],
//! [`temperature`], [`mass`], [`area`], [`volume`], [`speed`],
//! [`acceleration`], [`force`], [`energy`], [`power`], [`pressure`],
//! [`frequency`], [`torque`], [`density`], [`electrical`], and
//! [`dimensionless`] (not glob-re-exported; `dimensionless::One` is too
//! generic a name for the root).
//!
//! # Feature flags
//!
//! - `std` (default): enables `std` support and text parsing in
//!   `mensura-core`.
//! - `serde`: enables `serde` support for scalars (implies `std`).
//!
//! Disable default features for `no_std`:
//!
//! ```toml
//! [dependencies]
//! mensura = { version = "0.1.0", default-features = false }
//! ```
//!
//! # Panics and errors
//!
//! Arithmetic and conversion never panic and never return `Result`; they
//! follow IEEE-754 behavior (NaN and infinities propagate, division by zero
//! yields ±∞). The only fallible surface is text parsing, which returns
//! [`ParseError`].
//!
//! # SemVer and stability
//!
//! This workspace is currently `0.x`. Expect breaking changes between minor
//! versions until `1.0`.
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

pub use mensura_core::*;

/// Derive macro used by `mensura-core` to define unit marker types.
///
/// The expansion refers to `crate::Unit` and `crate::Scalar`, so it is
/// intended for use inside `mensura-core` or crates exposing the same
/// crate-root API. Most users should not need this directly.
pub use mensura_derive::Unit;

pub use mensura_core::units::acceleration;
pub use mensura_core::units::angle;
pub use mensura_core::units::area;
pub use mensura_core::units::density;
pub use mensura_core::units::dimensionless;
pub use mensura_core::units::duration;
pub use mensura_core::units::electrical;
pub use mensura_core::units::energy;
pub use mensura_core::units::force;
pub use mensura_core::units::frequency;
pub use mensura_core::units::length;
pub use mensura_core::units::mass;
pub use mensura_core::units::power;
pub use mensura_core::units::pressure;
pub use mensura_core::units::speed;
pub use mensura_core::units::temperature;
pub use mensura_core::units::torque;
pub use mensura_core::units::volume;

pub use mensura_core::units::acceleration::*;
pub use mensura_core::units::angle::*;
pub use mensura_core::units::area::*;
pub use mensura_core::units::density::*;
pub use mensura_core::units::duration::*;
pub use mensura_core::units::electrical::*;
pub use mensura_core::units::energy::*;
pub use mensura_core::units::force::*;
pub use mensura_core::units::frequency::*;
pub use mensura_core::units::length::*;
pub use mensura_core::units::mass::*;
pub use mensura_core::units::power::*;
pub use mensura_core::units::pressure::*;
pub use mensura_core::units::speed::*;
pub use mensura_core::units::temperature::*;
pub use mensura_core::units::torque::*;
pub use mensura_core::units::volume::*;

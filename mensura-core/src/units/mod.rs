//! Predefined unit modules grouped by quantity kind.
//!
//! `mensura-core` ships a catalog of built-in kinds and units so that
//! conversions, formatting, and the derived-operation table work out of the
//! box without downstream crates having to fight Rust's orphan rules.
//!
//! ## Modules
//!
//! - [`dimensionless`]: plain ratios and percentages.
//! - [`length`]: length units (metre is the reference unit); absolute alias
//!   [`length::Position`].
//! - [`duration`]: time spans (second is the reference unit); absolute alias
//!   [`duration::TimePoint`].
//! - [`angle`]: plane angles (radian is the reference unit); absolute alias
//!   [`angle::Direction`].
//! - [`temperature`]: temperatures, with offset units °C and °F; absolute
//!   alias [`temperature::AbsoluteTemperature`].
//! - [`mass`], [`area`], [`volume`], [`speed`], [`acceleration`], [`force`],
//!   [`energy`], [`power`], [`pressure`], [`frequency`], [`torque`],
//!   [`density`], [`electrical`]: the derived and electrical kinds.
//!
//! Each module declares its kind's rows of the derived-operation table
//! (with the module's kind as the left operand), so e.g. `Length / Duration`
//! is declared in [`length`] and `Duration * Speed` in [`duration`].

pub mod acceleration;
pub mod angle;
pub mod area;
pub mod density;
pub mod dimensionless;
pub mod duration;
pub mod electrical;
pub mod energy;
pub mod force;
pub mod frequency;
pub mod length;
pub mod mass;
pub mod power;
pub mod pressure;
pub mod speed;
pub mod temperature;
pub mod torque;
pub mod volume;

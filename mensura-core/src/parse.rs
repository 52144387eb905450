//! Text parsing for scalars.
//!
//! A scalar is written as a numeric literal followed by an optional unit
//! symbol, e.g. `"12.5 km"`, `"-3e2 N"`, or `"0.5"` (the latter only for
//! kinds that have a symbol-less unit, such as dimensionless). Parsing
//! resolves the symbol through the kind's static unit registry
//! ([`Kind::UNITS`]) and normalizes the value into the kind's reference unit.

use crate::kind::Kind;
use crate::magnitude::Magnitude;
use crate::scalar::{Abs, Rel, Scalar};
use crate::unit::{Unit, UnitInfo};
use crate::variant::{Absolute, Relative, Variant};
use core::str::FromStr;
use thiserror::Error;

/// Error produced when a scalar cannot be parsed from text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The input was empty or all whitespace.
    #[error("empty input")]
    Empty,

    /// The input did not start with a numeric literal.
    #[error("no numeric value in `{0}`")]
    MissingNumber(String),

    /// The numeric prefix was not a valid floating-point literal.
    #[error("invalid numeric value `{0}`")]
    InvalidNumber(String),

    /// The input carried no unit symbol and the kind has no symbol-less unit.
    #[error("no unit symbol in `{text}` ({kind} requires one)")]
    MissingUnit {
        /// The offending input.
        text: String,
        /// Name of the kind being parsed.
        kind: &'static str,
    },

    /// The unit symbol is not in the kind's registry.
    #[error("unknown {kind} unit `{unit}`")]
    UnknownUnit {
        /// The unrecognized symbol.
        unit: String,
        /// Name of the kind being parsed.
        kind: &'static str,
    },
}

/// Splits `text` into its leading numeric literal and the trailing unit
/// symbol (whitespace between the two is discarded).
fn split_number(text: &str) -> (&str, &str) {
    let bytes = text.as_bytes();
    let mut end = 0;
    let mut seen_digit = false;
    while end < bytes.len() {
        let b = bytes[end];
        let accept = match b {
            b'0'..=b'9' | b'.' => true,
            // Sign is valid at the start and right after an exponent marker.
            b'+' | b'-' => end == 0 || matches!(bytes[end - 1], b'e' | b'E'),
            b'e' | b'E' => seen_digit,
            _ => false,
        };
        if !accept {
            break;
        }
        if b.is_ascii_digit() {
            seen_digit = true;
        }
        end += 1;
    }
    (&text[..end], text[end..].trim_start())
}

fn lookup(
    units: &'static [UnitInfo],
    kind: &'static str,
    symbol: &str,
) -> Result<UnitInfo, ParseError> {
    units
        .iter()
        .find(|info| info.symbol == symbol)
        .copied()
        .ok_or_else(|| ParseError::UnknownUnit {
            unit: symbol.to_owned(),
            kind,
        })
}

fn parse_with<K: Kind, V: Variant, F: Magnitude>(
    text: &str,
) -> Result<Scalar<K::Reference, V, F>, ParseError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(ParseError::Empty);
    }
    let (number, symbol) = split_number(trimmed);
    if number.is_empty() {
        return Err(ParseError::MissingNumber(trimmed.to_owned()));
    }
    let value: f64 = number
        .parse()
        .map_err(|_| ParseError::InvalidNumber(number.to_owned()))?;

    let info = if symbol.is_empty() {
        K::UNITS
            .iter()
            .find(|info| info.symbol.is_empty())
            .copied()
            .ok_or_else(|| ParseError::MissingUnit {
                text: trimmed.to_owned(),
                kind: K::NAME,
            })?
    } else {
        lookup(K::UNITS, K::NAME, symbol)?
    };

    // The reference unit has factor 1 and offset 0, so the canonical value
    // is already the result's magnitude.
    Ok(Scalar::new(V::to_canonical(
        F::from_f64(value),
        info.factor,
        info.offset,
    )))
}

/// Parses a relative scalar of kind `K`, normalized to the reference unit.
///
/// ```rust
/// use mensura_core::length::{Length, Meters};
///
/// let d: Meters = mensura_core::parse::<Length, f64>("1.5 km").unwrap();
/// assert_eq!(d.value(), 1500.0);
/// ```
pub fn parse<K: Kind, F: Magnitude>(text: &str) -> Result<Rel<K::Reference, F>, ParseError> {
    parse_with::<K, Relative, F>(text)
}

/// Parses an absolute scalar of kind `K`, normalized to the reference unit
/// (unit offsets apply).
///
/// ```rust
/// use mensura_core::temperature::{Temperature, AbsoluteTemperature};
///
/// let t: AbsoluteTemperature = mensura_core::parse_absolute::<Temperature, f64>("0 °C").unwrap();
/// assert!((t.value() - 273.15).abs() < 1e-12);
/// ```
pub fn parse_absolute<K: Kind, F: Magnitude>(
    text: &str,
) -> Result<Abs<K::Reference, F>, ParseError> {
    parse_with::<K, Absolute, F>(text)
}

impl<U: Unit, V: Variant, F: Magnitude> FromStr for Scalar<U, V, F> {
    type Err = ParseError;

    /// Parses `"<number>"` or `"<number> <symbol>"`, where the symbol may be
    /// any unit of `U`'s kind; the value is converted into `U`. A bare
    /// number is taken to already be in `U`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ParseError::Empty);
        }
        let (number, symbol) = split_number(trimmed);
        if number.is_empty() {
            return Err(ParseError::MissingNumber(trimmed.to_owned()));
        }
        let value: f64 = number
            .parse()
            .map_err(|_| ParseError::InvalidNumber(number.to_owned()))?;

        if symbol.is_empty() || symbol == U::SYMBOL {
            return Ok(Scalar::new(F::from_f64(value)));
        }

        let info = lookup(<U::Kind as Kind>::UNITS, <U::Kind as Kind>::NAME, symbol)?;
        let canonical = V::to_canonical(F::from_f64(value), info.factor, info.offset);
        Ok(Scalar::new(V::from_canonical(
            canonical,
            U::FACTOR,
            U::OFFSET,
        )))
    }
}

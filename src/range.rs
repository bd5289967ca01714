//! Balance-range validation and the yocto amount type.
//!
//! Yocto amounts travel as decimal strings on the wire (they exceed every
//! JSON-safe number width) but are compared as unsigned 128-bit integers,
//! never as strings or floats.

use std::fmt;
use std::str::FromStr;

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::error::ValidationError;

/// A non-negative amount of yocto (10^-24 of the native token), strictly
/// below 2^128. Canonical decimal string on the wire: no leading zeros
/// except the literal `"0"`, no sign, no separators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct YoctoAmount(u128);

impl YoctoAmount {
    pub const fn as_u128(self) -> u128 {
        self.0
    }
}

impl From<u128> for YoctoAmount {
    fn from(raw: u128) -> Self {
        YoctoAmount(raw)
    }
}

impl fmt::Display for YoctoAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for YoctoAmount {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ValidationError::InvalidFormat { value: s.to_string() });
        }
        // Canonical form: `^0$|^[1-9][0-9]*$`.
        if s.len() > 1 && s.starts_with('0') {
            return Err(ValidationError::InvalidFormat { value: s.to_string() });
        }
        // All digits and canonical, so parse can only fail on overflow.
        s.parse::<u128>()
            .map(YoctoAmount)
            .map_err(|_| ValidationError::OutOfRange {
                value: s.to_string(),
                expected: "less than 2^128",
            })
    }
}

impl Serialize for YoctoAmount {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for YoctoAmount {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(de::Error::custom)
    }
}

/// Validate percentage bounds: integers in 0..=100, at least one present,
/// `from <= to` when both are.
pub fn validate_percent_range(from: Option<u8>, to: Option<u8>) -> Result<(), ValidationError> {
    for bound in [from, to].into_iter().flatten() {
        if bound > 100 {
            return Err(ValidationError::OutOfRange {
                value: bound.to_string(),
                expected: "0..=100",
            });
        }
    }
    check_bounds(from, to)
}

/// Validate already-parsed yocto bounds: at least one present, `from <= to`
/// when both are. Magnitude and format are enforced by [`YoctoAmount`].
pub fn validate_yocto_bounds(
    from: Option<YoctoAmount>,
    to: Option<YoctoAmount>,
) -> Result<(), ValidationError> {
    check_bounds(from, to)
}

/// Parse and validate an absolute yocto range from its wire strings.
pub fn validate_yocto_range(
    from: Option<&str>,
    to: Option<&str>,
) -> Result<(Option<YoctoAmount>, Option<YoctoAmount>), ValidationError> {
    let from = from.map(YoctoAmount::from_str).transpose()?;
    let to = to.map(YoctoAmount::from_str).transpose()?;
    check_bounds(from, to)?;
    Ok((from, to))
}

fn check_bounds<T>(from: Option<T>, to: Option<T>) -> Result<(), ValidationError>
where
    T: Copy + Ord + fmt::Display,
{
    match (from, to) {
        (None, None) => Err(ValidationError::MissingBound),
        (Some(f), Some(t)) if f > t => Err(ValidationError::RangeInverted {
            from: f.to_string(),
            to: t.to_string(),
        }),
        _ => Ok(()),
    }
}

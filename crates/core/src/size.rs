//! Human-friendly byte sizes (`512`, `64K`, `10Gb`, `2T`)

use serde::Deserialize;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors from parsing a size string
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SizeParseError {
    #[error("empty size")]
    Empty,

    #[error("invalid size '{input}': expected digits optionally followed by K, M, G or T")]
    MissingDigits { input: String },

    #[error("invalid size '{input}': unknown unit '{unit}' (expected K, M, G or T)")]
    UnknownUnit { input: String, unit: String },

    #[error("size '{input}' does not fit in 64 bits")]
    Overflow { input: String },
}

/// Parse a size into bytes. Units are powers of 1024, case-insensitive,
/// and may carry a trailing `b`/`B` (`10G`, `10gb` and `10Gb` agree).
pub fn parse_size(input: &str) -> Result<u64, SizeParseError> {
    let text = input.trim();
    if text.is_empty() {
        return Err(SizeParseError::Empty);
    }

    let digits_end = text
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(text.len());
    let (digits, unit) = text.split_at(digits_end);
    if digits.is_empty() {
        return Err(SizeParseError::MissingDigits {
            input: input.to_string(),
        });
    }

    let exponent = unit_exponent(unit).ok_or_else(|| SizeParseError::UnknownUnit {
        input: input.to_string(),
        unit: unit.to_string(),
    })?;

    let overflow = || SizeParseError::Overflow {
        input: input.to_string(),
    };
    let value: u64 = digits.parse().map_err(|_| overflow())?;
    1024u64
        .checked_pow(exponent)
        .and_then(|multiplier| value.checked_mul(multiplier))
        .ok_or_else(overflow)
}

fn unit_exponent(unit: &str) -> Option<u32> {
    let unit = unit.to_ascii_uppercase();
    let unit = match unit.as_str() {
        "B" => "",
        other => other.strip_suffix('B').unwrap_or(other),
    };
    match unit {
        "" => Some(0),
        "K" => Some(1),
        "M" => Some(2),
        "G" => Some(3),
        "T" => Some(4),
        _ => None,
    }
}

/// A byte count that remembers the text it was parsed from
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "SizeRepr")]
pub struct Size {
    bytes: u64,
    origin: Option<String>,
}

impl Size {
    /// Number of bytes
    pub fn bytes(&self) -> u64 {
        self.bytes
    }
}

impl From<u64> for Size {
    fn from(bytes: u64) -> Self {
        Self { bytes, origin: None }
    }
}

impl FromStr for Size {
    type Err = SizeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = parse_size(s)?;
        Ok(Self {
            bytes,
            origin: Some(s.trim().to_string()),
        })
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.origin {
            Some(origin) if *origin != self.bytes.to_string() => {
                write!(f, "{}[{}]", origin, self.bytes)
            }
            _ => write!(f, "{}", self.bytes),
        }
    }
}

/// Config files may give a size as a bare integer or as a string
#[derive(Deserialize)]
#[serde(untagged)]
enum SizeRepr {
    Bytes(u64),
    Text(String),
}

impl TryFrom<SizeRepr> for Size {
    type Error = SizeParseError;

    fn try_from(repr: SizeRepr) -> Result<Self, Self::Error> {
        match repr {
            SizeRepr::Bytes(bytes) => Ok(Size::from(bytes)),
            SizeRepr::Text(text) => text.parse(),
        }
    }
}

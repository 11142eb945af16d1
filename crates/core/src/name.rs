//! Snapshot identifiers and their time value

use chrono::{DateTime, NaiveDateTime, Utc};
use std::cmp::Ordering;
use std::fmt;
use std::path::Path;

/// Date format used for snapshot directory names (always UTC)
pub const DATE_FORMAT: &str = "%Y%m%d-%H%M%S";

/// Divisor applied to the instant before exponentiation.
///
/// `ceil(2^32 / ln(2^32))`: any instant below `2^32` seconds keeps
/// `exp(instant / TIME_SCALE)` below `2^32`. Past roughly the year 6325 the
/// value overflows `f64`, and such names are not snapshots.
pub const TIME_SCALE: f64 = 193_635_251.0;

/// Length of a formatted name, e.g. `20101201-000000`
const NAME_LEN: usize = 15;

/// A snapshot identifier that parsed as a timestamp
///
/// Keeps the identifier exactly as it was listed (it may carry a
/// directory prefix); only the final path component is parsed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SnapshotName {
    identifier: String,
    /// Seconds since the Unix epoch
    instant: i64,
}

impl SnapshotName {
    /// Parse an identifier, returning `None` if it is not a managed snapshot
    pub fn parse(identifier: &str) -> Option<Self> {
        let base = Path::new(identifier).file_name()?.to_str()?;
        let instant = parse_instant(base)?;
        if !value_at(instant).is_finite() {
            return None;
        }
        Some(Self {
            identifier: identifier.to_string(),
            instant,
        })
    }

    /// Name a snapshot taken at the given instant, or `None` if the instant
    /// has no valid name
    pub fn at(instant: DateTime<Utc>) -> Option<Self> {
        Self::parse(&instant.format(DATE_FORMAT).to_string())
    }

    /// Name a snapshot taken now
    pub fn now() -> Option<Self> {
        Self::at(Utc::now())
    }

    /// The identifier as listed by the backend
    pub fn as_str(&self) -> &str {
        &self.identifier
    }

    /// Consume into the identifier string
    pub fn into_string(self) -> String {
        self.identifier
    }

    /// Seconds since the Unix epoch
    pub fn instant(&self) -> i64 {
        self.instant
    }

    /// Exponential time value, strictly increasing in the instant
    pub fn value(&self) -> f64 {
        value_at(self.instant)
    }
}

impl Ord for SnapshotName {
    fn cmp(&self, other: &Self) -> Ordering {
        self.instant
            .cmp(&other.instant)
            .then_with(|| self.identifier.cmp(&other.identifier))
    }
}

impl PartialOrd for SnapshotName {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for SnapshotName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.identifier)
    }
}

/// Time value of an identifier, or `None` if it is not a snapshot name
pub fn time_value(identifier: &str) -> Option<f64> {
    SnapshotName::parse(identifier).map(|name| name.value())
}

fn value_at(instant: i64) -> f64 {
    (instant as f64 / TIME_SCALE).exp()
}

/// Parse `YYYYMMDD-HHMMSS` into Unix seconds.
///
/// The shape is checked up front because chrono accepts single-digit
/// fields and signed years.
fn parse_instant(base: &str) -> Option<i64> {
    let bytes = base.as_bytes();
    if bytes.len() != NAME_LEN {
        return None;
    }
    let shape_ok = bytes.iter().enumerate().all(|(i, b)| match i {
        8 => *b == b'-',
        _ => b.is_ascii_digit(),
    });
    if !shape_ok {
        return None;
    }

    NaiveDateTime::parse_from_str(base, DATE_FORMAT)
        .ok()
        .map(|naive| naive.and_utc().timestamp())
}

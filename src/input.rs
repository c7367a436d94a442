//! Reading points from a JSON document.
//!
//! The document carries the sample counts under `keys` and one entry per point,
//! keyed by the point's x:
//!
//! ```json
//! {
//!     "keys": { "n": 4, "k": 3 },
//!     "1": { "base": "10", "value": "4" },
//!     "2": { "base": "2", "value": "100" },
//!     "3": { "base": "10", "value": "6" },
//!     "6": { "base": "4", "value": "213" }
//! }
//! ```

use std::collections::BTreeMap;
use std::io::Read;

use num_bigint::BigUint;
use num_traits::Num;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::error::{InterpolationError, Result};
use crate::interpolator::Point;

pub const MIN_BASE: u32 = 2;
pub const MAX_BASE: u32 = 36;

#[derive(Debug, Deserialize)]
struct Keys {
    n: Option<i64>,
    k: i64,
}

// Bases show up both quoted and bare in practice.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawBase {
    Text(String),
    Number(i64),
}

#[derive(Debug, Deserialize)]
struct RawEntry {
    base: RawBase,
    value: String,
}

#[derive(Debug, Deserialize)]
struct RawDocument {
    keys: Option<Keys>,
    #[serde(flatten)]
    entries: BTreeMap<String, RawEntry>,
}

/// Points and sample counts decoded from an input document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputDocument {
    /// Declared number of points (`keys.n`), informational only.
    pub declared_count: Option<i64>,
    /// Required sample count (`keys.k`), validated by the interpolator.
    pub sample_count: i64,
    /// Decoded points, ascending by x.
    pub points: Vec<Point>,
}

impl InputDocument {
    pub fn from_json(text: &str) -> Result<Self> {
        let raw: RawDocument = serde_json::from_str(text)?;
        Self::from_raw(raw)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let raw: RawDocument = serde_json::from_reader(reader)?;
        Self::from_raw(raw)
    }

    fn from_raw(raw: RawDocument) -> Result<Self> {
        let keys = raw.keys.ok_or(InterpolationError::MissingKeys)?;

        let mut points = raw
            .entries
            .into_iter()
            .map(|(key, entry)| decode_entry(&key, entry))
            .collect::<Result<Vec<_>>>()?;
        points.sort_by_key(|p| p.x);

        if let Some(n) = keys.n {
            if usize::try_from(n).ok() != Some(points.len()) {
                warn!(declared = n, decoded = points.len(), "point count differs from keys.n");
            }
        }
        debug!(points = points.len(), k = keys.k, "decoded input document");

        Ok(Self {
            declared_count: keys.n,
            sample_count: keys.k,
            points,
        })
    }
}

fn decode_entry(key: &str, entry: RawEntry) -> Result<Point> {
    let x = key
        .parse::<i64>()
        .map_err(|e| InterpolationError::InvalidKey {
            key: key.to_string(),
            message: e.to_string(),
        })?;
    // "01" and "1" would otherwise name the same x.
    if x.to_string() != key {
        return Err(InterpolationError::InvalidKey {
            key: key.to_string(),
            message: "not a canonical integer".to_string(),
        });
    }

    let base = parse_base(x, &entry.base)?;
    let y = decode_digits(&entry.value, base).ok_or_else(|| InterpolationError::InvalidDigits {
        x,
        base,
        digits: entry.value.clone(),
    })?;

    Ok(Point { x, y })
}

fn parse_base(x: i64, raw: &RawBase) -> Result<u32> {
    let unsupported = || InterpolationError::UnsupportedBase {
        x,
        base: match raw {
            RawBase::Text(s) => s.clone(),
            RawBase::Number(n) => n.to_string(),
        },
    };

    let base = match raw {
        RawBase::Text(s) => s.trim().parse::<u32>().map_err(|_| unsupported())?,
        RawBase::Number(n) => u32::try_from(*n).map_err(|_| unsupported())?,
    };

    if !(MIN_BASE..=MAX_BASE).contains(&base) {
        return Err(unsupported());
    }
    Ok(base)
}

/// Decodes a digit string in `base` (2..=36), case-insensitively.
///
/// Returns `None` for an empty string or any character that is not a digit of
/// the base; signs and separators are rejected.
pub fn decode_digits(digits: &str, base: u32) -> Option<BigUint> {
    if !(MIN_BASE..=MAX_BASE).contains(&base) {
        return None;
    }
    if digits.is_empty() || !digits.chars().all(|c| c.is_digit(base)) {
        return None;
    }
    BigUint::from_str_radix(digits, base).ok()
}

//! ISO 8601 duration parsing and duration bucketing.
//!
//! The provider encodes video length as an ISO 8601 duration such as
//! `PT4M13S`, `PT1H2M`, or `P1DT3H` (`P0D` for live streams). Calendar units
//! (years, months) never appear in practice and are rejected because their
//! length in seconds is ambiguous.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::ParseError;

/// Videos shorter than this many seconds are [`DurationCategory::Short`].
pub const SHORT_MAX_EXCLUSIVE_SECS: u64 = 4 * 60;

/// Videos longer than this many seconds are [`DurationCategory::Long`].
pub const MEDIUM_MAX_INCLUSIVE_SECS: u64 = 20 * 60;

/// Length bucket for a video.
///
/// | Bucket    | Seconds            |
/// |-----------|--------------------|
/// | `short`   | `< 240`            |
/// | `medium`  | `240 ..= 1200`     |
/// | `long`    | `> 1200`           |
/// | `unknown` | duration missing or malformed |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DurationCategory {
    Short,
    Medium,
    Long,
    Unknown,
}

impl DurationCategory {
    /// Buckets an optional duration; `None` is [`DurationCategory::Unknown`].
    #[must_use]
    pub fn from_seconds(seconds: Option<u64>) -> Self {
        seconds.map_or(Self::Unknown, bucket_duration)
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Short => "short",
            Self::Medium => "medium",
            Self::Long => "long",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for DurationCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Maps a parsed duration to its bucket. Total over `u64`.
#[must_use]
pub fn bucket_duration(seconds: u64) -> DurationCategory {
    if seconds < SHORT_MAX_EXCLUSIVE_SECS {
        DurationCategory::Short
    } else if seconds <= MEDIUM_MAX_INCLUSIVE_SECS {
        DurationCategory::Medium
    } else {
        DurationCategory::Long
    }
}

/// Parses an ISO 8601 duration (`PnWnDTnHnMnS`) into whole seconds.
///
/// Designators must appear in canonical order and each at most once. The
/// time designators `H`, `M`, `S` are only valid after `T`.
///
/// # Errors
///
/// Returns [`ParseError::Duration`] when the string does not follow that
/// grammar, uses year/month units, contains no components, or overflows.
pub fn parse_iso8601_duration(raw: &str) -> Result<u64, ParseError> {
    let fail = |reason: &'static str| ParseError::Duration {
        raw: raw.to_string(),
        reason,
    };

    let s = raw.trim();
    let rest = s.strip_prefix('P').ok_or_else(|| fail("missing P prefix"))?;
    if rest.is_empty() {
        return Err(fail("no components"));
    }

    let (date_part, time_part) = match rest.split_once('T') {
        Some((d, t)) => {
            if t.is_empty() {
                return Err(fail("T without time components"));
            }
            (d, Some(t))
        }
        None => (rest, None),
    };

    let mut total: u64 = 0;
    let mut components = 0usize;

    // Date section: W then D.
    let mut rank = 0u8;
    for (value, unit) in scan_components(date_part).map_err(fail)? {
        let (unit_rank, multiplier) = match unit {
            b'W' => (1, 7 * 86_400),
            b'D' => (2, 86_400),
            b'Y' | b'M' => return Err(fail("calendar units are not supported")),
            _ => return Err(fail("unexpected designator")),
        };
        if unit_rank <= rank {
            return Err(fail("designators out of order"));
        }
        rank = unit_rank;
        total = accumulate(total, value, multiplier).ok_or_else(|| fail("overflow"))?;
        components += 1;
    }

    if let Some(time_part) = time_part {
        let mut rank = 0u8;
        for (value, unit) in scan_components(time_part).map_err(fail)? {
            let (unit_rank, multiplier) = match unit {
                b'H' => (1, 3_600),
                b'M' => (2, 60),
                b'S' => (3, 1),
                _ => return Err(fail("unexpected designator")),
            };
            if unit_rank <= rank {
                return Err(fail("designators out of order"));
            }
            rank = unit_rank;
            total = accumulate(total, value, multiplier).ok_or_else(|| fail("overflow"))?;
            components += 1;
        }
    }

    if components == 0 {
        return Err(fail("no components"));
    }
    Ok(total)
}

/// Splits `"4M13S"` into `[(4, b'M'), (13, b'S')]`.
fn scan_components(section: &str) -> Result<Vec<(u64, u8)>, &'static str> {
    let mut out = Vec::new();
    let mut value: Option<u64> = None;

    for b in section.bytes() {
        if b.is_ascii_digit() {
            let digit = u64::from(b - b'0');
            let next = value
                .unwrap_or(0)
                .checked_mul(10)
                .and_then(|v| v.checked_add(digit))
                .ok_or("overflow")?;
            value = Some(next);
        } else if b.is_ascii_uppercase() {
            let v = value.take().ok_or("designator without a number")?;
            out.push((v, b));
        } else {
            return Err("unexpected character");
        }
    }

    if value.is_some() {
        return Err("number without a designator");
    }
    Ok(out)
}

fn accumulate(total: u64, value: u64, multiplier: u64) -> Option<u64> {
    value.checked_mul(multiplier).and_then(|v| total.checked_add(v))
}

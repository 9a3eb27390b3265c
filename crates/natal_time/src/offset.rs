//! Whole-hour UTC offsets written as `UTC±N`.
//!
//! Two parsers are provided. [`UtcOffset::parse_lenient`] keeps the
//! long-standing behavior of falling back to UTC+0 on anything it cannot
//! read, but reports the fallback through [`OffsetSource::Defaulted`] and a
//! `tracing` warning. The strict [`FromStr`] impl rejects such input.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use tracing::warn;

use crate::error::TimeError;

/// A signed whole-hour offset from UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct UtcOffset {
    hours: i32,
}

/// How a leniently parsed offset was obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OffsetSource {
    /// Digits were found and parsed.
    Parsed,
    /// Nothing numeric was found; the offset fell back to UTC+0.
    Defaulted,
}

impl UtcOffset {
    /// UTC+0.
    pub const UTC: Self = Self { hours: 0 };

    /// Offset of `hours` hours east of Greenwich.
    pub const fn from_hours(hours: i32) -> Self {
        Self { hours }
    }

    /// Signed hour count.
    pub const fn hours(self) -> i32 {
        self.hours
    }

    /// Parse an offset string, defaulting to UTC+0 when no integer is found.
    ///
    /// The first literal `UTC` is removed, then the remainder is read as a
    /// leading integer: surrounding whitespace, an optional sign, and a run
    /// of ASCII digits. Anything after the digits is ignored, so `UTC+5:30`
    /// reads as +5.
    pub fn parse_lenient(s: &str) -> (Self, OffsetSource) {
        let stripped = s.replacen("UTC", "", 1);
        match leading_integer(&stripped) {
            Some(hours) => (Self { hours }, OffsetSource::Parsed),
            None => {
                warn!(timezone = s, "unparseable UTC offset, using UTC+0");
                (Self::UTC, OffsetSource::Defaulted)
            }
        }
    }
}

/// Leading-integer read: `[ws][+|-]digits...`. `None` when there are no
/// digits. A value too large for an `i32` saturates at its bounds.
fn leading_integer(s: &str) -> Option<i32> {
    let s = s.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits_len == 0 {
        return None;
    }
    let magnitude = rest[..digits_len].bytes().fold(0i64, |acc, b| {
        acc.saturating_mul(10).saturating_add(i64::from(b - b'0'))
    });
    let value = if negative { -magnitude } else { magnitude };
    Some(value.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32)
}

impl FromStr for UtcOffset {
    type Err = TimeError;

    /// Strict `UTC±N` parser (also accepts bare `UTC` as UTC+0).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || TimeError::InvalidOffset(s.to_string());
        let rest = s.trim().strip_prefix("UTC").ok_or_else(invalid)?;
        if rest.is_empty() {
            return Ok(Self::UTC);
        }
        let (sign, digits) = match rest.as_bytes()[0] {
            b'+' => (1, &rest[1..]),
            b'-' => (-1, &rest[1..]),
            _ => return Err(invalid()),
        };
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        let hours: i32 = digits.parse().map_err(|_| invalid())?;
        Ok(Self { hours: sign * hours })
    }
}

impl Display for UtcOffset {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.hours < 0 {
            write!(f, "UTC{}", self.hours)
        } else {
            write!(f, "UTC+{}", self.hours)
        }
    }
}

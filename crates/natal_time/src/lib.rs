//! Civil time → Julian Day conversion and mean sidereal time.
//!
//! This crate provides:
//! - `YYYY-MM-DD` / `HH:MM` / `UTC±N` input parsing with explicit errors
//! - Gregorian → Julian Day Number and fractional Julian Day
//! - A [`JulianDay`] type for the continuous time axis used downstream
//! - Greenwich and local mean sidereal time in degrees

pub mod angle;
pub mod civil;
pub mod error;
pub mod julian;
pub mod offset;
pub mod sidereal;

pub use angle::{arc_forward, normalize_360};
pub use civil::{CivilDate, ClockTime};
pub use error::TimeError;
pub use julian::{DAYS_PER_CENTURY, J2000_JD, JulianDay, julian_day, julian_day_number};
pub use offset::{OffsetSource, UtcOffset};
pub use sidereal::{gmst_deg, local_sidereal_time_deg};

/// Parse the three civil strings and convert straight to a Julian Day.
///
/// The offset string goes through [`UtcOffset::parse_lenient`]; the
/// returned [`OffsetSource`] says whether it fell back to UTC+0.
pub fn julian_day_from_strings(
    date: &str,
    time: &str,
    timezone: &str,
) -> Result<(JulianDay, OffsetSource), TimeError> {
    let date: CivilDate = date.parse()?;
    let time: ClockTime = time.parse()?;
    let (offset, source) = UtcOffset::parse_lenient(timezone);
    Ok((julian_day(date, time, offset), source))
}

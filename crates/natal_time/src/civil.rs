//! Civil calendar date and wall-clock time as supplied by callers.
//!
//! Parsing is explicit about every numeric component: a component that is
//! not an integer is a [`TimeError::MalformedNumeric`], never a NaN that
//! flows on into the Julian Day arithmetic.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::error::TimeError;

/// Gregorian calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CivilDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

/// Wall-clock time with minute resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ClockTime {
    pub hour: u32,
    pub minute: u32,
}

impl CivilDate {
    pub const fn new(year: i32, month: u32, day: u32) -> Self {
        Self { year, month, day }
    }
}

impl ClockTime {
    pub const fn new(hour: u32, minute: u32) -> Self {
        Self { hour, minute }
    }

    /// Hours as a decimal fraction (`hour + minute / 60`).
    pub fn decimal_hours(self) -> f64 {
        f64::from(self.hour) + f64::from(self.minute) / 60.0
    }
}

fn parse_component<T: FromStr>(field: &'static str, raw: &str) -> Result<T, TimeError> {
    raw.trim().parse().map_err(|_| TimeError::MalformedNumeric {
        field,
        value: raw.to_string(),
    })
}

fn check_range(field: &'static str, value: u32, lo: u32, hi: u32) -> Result<u32, TimeError> {
    if (lo..=hi).contains(&value) {
        Ok(value)
    } else {
        Err(TimeError::OutOfRange {
            field,
            value: i64::from(value),
        })
    }
}

impl FromStr for CivilDate {
    type Err = TimeError;

    /// Parse `YYYY-MM-DD`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.trim().split('-').collect();
        let [year, month, day] = parts.as_slice() else {
            return Err(TimeError::MalformedFormat {
                field: "date",
                expected: "YYYY-MM-DD",
                value: s.to_string(),
            });
        };
        let year: i32 = parse_component("year", year)?;
        let month = check_range("month", parse_component("month", month)?, 1, 12)?;
        let day = check_range("day", parse_component("day", day)?, 1, 31)?;
        Ok(Self { year, month, day })
    }
}

impl FromStr for ClockTime {
    type Err = TimeError;

    /// Parse `HH:MM`. A trailing `:SS` is validated and dropped.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.trim().split(':').collect();
        let (hour, minute) = match parts.as_slice() {
            [h, m] => (h, m),
            [h, m, sec] => {
                check_range("second", parse_component("second", sec)?, 0, 59)?;
                (h, m)
            }
            _ => {
                return Err(TimeError::MalformedFormat {
                    field: "time",
                    expected: "HH:MM",
                    value: s.to_string(),
                });
            }
        };
        let hour = check_range("hour", parse_component("hour", hour)?, 0, 23)?;
        let minute = check_range("minute", parse_component("minute", minute)?, 0, 59)?;
        Ok(Self { hour, minute })
    }
}

impl Display for CivilDate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

impl Display for ClockTime {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_date() {
        let d: CivilDate = "1990-07-14".parse().unwrap();
        assert_eq!(d, CivilDate::new(1990, 7, 14));
        assert_eq!(d.to_string(), "1990-07-14");
    }

    #[test]
    fn parse_date_rejects_wrong_shape() {
        assert!(matches!(
            "1990-07".parse::<CivilDate>(),
            Err(TimeError::MalformedFormat { field: "date", .. })
        ));
        assert!(matches!(
            "1990/07/14".parse::<CivilDate>(),
            Err(TimeError::MalformedFormat { .. })
        ));
    }

    #[test]
    fn parse_date_rejects_non_numeric() {
        assert_eq!(
            "1990-ab-14".parse::<CivilDate>(),
            Err(TimeError::MalformedNumeric {
                field: "month",
                value: "ab".into()
            })
        );
        assert!(matches!(
            "1990--14".parse::<CivilDate>(),
            Err(TimeError::MalformedNumeric { field: "month", .. })
        ));
    }

    #[test]
    fn parse_date_rejects_out_of_range() {
        assert_eq!(
            "1990-13-01".parse::<CivilDate>(),
            Err(TimeError::OutOfRange {
                field: "month",
                value: 13
            })
        );
        assert!("1990-01-00".parse::<CivilDate>().is_err());
    }

    #[test]
    fn parse_time() {
        let t: ClockTime = "07:05".parse().unwrap();
        assert_eq!(t, ClockTime::new(7, 5));
        assert_eq!(t.to_string(), "07:05");
        assert!((t.decimal_hours() - (7.0 + 5.0 / 60.0)).abs() < 1e-12);
    }

    #[test]
    fn parse_time_drops_seconds() {
        let t: ClockTime = "23:59:30".parse().unwrap();
        assert_eq!(t, ClockTime::new(23, 59));
    }

    #[test]
    fn parse_time_rejects_bad_input() {
        assert!(matches!(
            "12".parse::<ClockTime>(),
            Err(TimeError::MalformedFormat { field: "time", .. })
        ));
        assert!(matches!(
            "1x:00".parse::<ClockTime>(),
            Err(TimeError::MalformedNumeric { field: "hour", .. })
        ));
        assert!(matches!(
            "24:00".parse::<ClockTime>(),
            Err(TimeError::OutOfRange { field: "hour", .. })
        ));
        assert!(matches!(
            "12:60".parse::<ClockTime>(),
            Err(TimeError::OutOfRange { field: "minute", .. })
        ));
    }
}

//! Civil calendar date/time as plain integer fields.

use std::fmt::{Display, Formatter};
use std::str::FromStr;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::error::TimeError;
use crate::julian::{
    CalendarFields, calendar_to_jd, day_of_year, decimal_day, jd_to_calendar,
    unix_seconds_to_jd,
};

/// Calendar date and time of day.
///
/// Fields are signed and unchecked: an hour of 50 is carried through the
/// arithmetic as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CalendarDateTime {
    pub year: i32,
    pub month: i32,
    pub day: i32,
    pub hour: i32,
    pub minute: i32,
    pub second: i32,
}

impl CalendarDateTime {
    pub fn new(year: i32, month: i32, day: i32, hour: i32, minute: i32, second: i32) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        }
    }

    /// Day of month plus the fractional time of day.
    pub fn decimal_day(&self) -> f64 {
        decimal_day(self.day, self.hour, self.minute, self.second)
    }

    /// Julian Day (Gregorian reading, see [`calendar_to_jd`]).
    pub fn to_julian_day(&self) -> f64 {
        calendar_to_jd(self.year, self.month, self.decimal_day())
    }

    /// Calendar fields for a Julian Day (see [`jd_to_calendar`]).
    pub fn from_julian_day(jd: f64) -> Self {
        jd_to_calendar(jd).into()
    }

    /// 1-based ordinal day of the year.
    pub fn day_of_year(&self) -> i32 {
        day_of_year(self.year, self.month, self.day)
    }

    /// Current UTC date/time from the system clock, to the nearest second.
    pub fn now_utc() -> Result<Self, TimeError> {
        let since_epoch = SystemTime::now().duration_since(UNIX_EPOCH)?;
        let jd = unix_seconds_to_jd(since_epoch.as_secs() as f64);
        Ok(Self::from_julian_day(jd))
    }
}

impl From<CalendarFields> for CalendarDateTime {
    fn from(c: CalendarFields) -> Self {
        Self::new(c.year, c.month, c.day, c.hour, c.minute, c.second)
    }
}

impl Display for CalendarDateTime {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}Z",
            self.year, self.month, self.day, self.hour, self.minute, self.second
        )
    }
}

/// Parses `YYYY-MM-DD`, optionally followed by `Thh:mm` or `Thh:mm:ss`
/// (a space may replace the `T`) and a trailing `Z`. A leading `-` marks
/// a negative year. Only the syntax is checked, not the ranges.
impl FromStr for CalendarDateTime {
    type Err = TimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || TimeError::InvalidFormat(s.to_string());
        let trimmed = s.trim();
        let body = trimmed.strip_suffix('Z').unwrap_or(trimmed);

        let (date_part, time_part) = match body.split_once(['T', ' ']) {
            Some((d, t)) => (d, Some(t)),
            None => (body, None),
        };

        let (negative, date_part) = match date_part.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, date_part),
        };
        let date: Vec<&str> = date_part.split('-').collect();
        if date.len() != 3 {
            return Err(invalid());
        }
        let year = parse_field("year", date[0])?;
        let year = if negative { -year } else { year };
        let month = parse_field("month", date[1])?;
        let day = parse_field("day", date[2])?;

        let (hour, minute, second) = match time_part {
            None => (0, 0, 0),
            Some(t) => {
                let hms: Vec<&str> = t.split(':').collect();
                match hms.as_slice() {
                    [h, m] => (parse_field("hour", h)?, parse_field("minute", m)?, 0),
                    [h, m, sec] => (
                        parse_field("hour", h)?,
                        parse_field("minute", m)?,
                        parse_field("second", sec)?,
                    ),
                    _ => return Err(invalid()),
                }
            }
        };

        Ok(Self::new(year, month, day, hour, minute, second))
    }
}

fn parse_field(field: &'static str, value: &str) -> Result<i32, TimeError> {
    value.parse().map_err(|_| TimeError::InvalidField {
        field,
        value: value.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::julian::J2000_JD;

    #[test]
    fn j2000_from_fields() {
        let t = CalendarDateTime::new(2000, 1, 1, 12, 0, 0);
        assert_eq!(t.to_julian_day(), J2000_JD);
    }

    #[test]
    fn display_pads_fields() {
        let t = CalendarDateTime::new(2014, 3, 22, 3, 11, 0);
        assert_eq!(t.to_string(), "2014-03-22T03:11:00Z");
    }

    #[test]
    fn parse_full() {
        let t: CalendarDateTime = "2014-03-22T03:11:00Z".parse().unwrap();
        assert_eq!(t, CalendarDateTime::new(2014, 3, 22, 3, 11, 0));
    }

    #[test]
    fn parse_variants() {
        let a: CalendarDateTime = "2014-03-22 03:11".parse().unwrap();
        assert_eq!(a, CalendarDateTime::new(2014, 3, 22, 3, 11, 0));
        let b: CalendarDateTime = "1997-03-22".parse().unwrap();
        assert_eq!(b, CalendarDateTime::new(1997, 3, 22, 0, 0, 0));
        let c: CalendarDateTime = "-0500-03-01T00:00:00Z".parse().unwrap();
        assert_eq!(c.year, -500);
    }

    #[test]
    fn parse_keeps_out_of_range_fields() {
        let t: CalendarDateTime = "2024-13-40T50:61:61".parse().unwrap();
        assert_eq!((t.month, t.day, t.hour), (13, 40, 50));
    }

    #[test]
    fn parse_rejects_bad_syntax() {
        assert!(matches!(
            "2024/01/01".parse::<CalendarDateTime>(),
            Err(TimeError::InvalidFormat(_))
        ));
        assert!(matches!(
            "2024-01-xx".parse::<CalendarDateTime>(),
            Err(TimeError::InvalidField { field: "day", .. })
        ));
        assert!(matches!(
            "2024-01-01T10".parse::<CalendarDateTime>(),
            Err(TimeError::InvalidFormat(_))
        ));
    }

    #[test]
    fn display_parse_roundtrip() {
        let t = CalendarDateTime::new(1582, 10, 15, 23, 59, 59);
        let back: CalendarDateTime = t.to_string().parse().unwrap();
        assert_eq!(back, t);
    }

    #[test]
    fn now_is_after_2020() {
        let now = CalendarDateTime::now_utc().unwrap();
        assert!(now.year >= 2020, "now = {now}");
    }
}

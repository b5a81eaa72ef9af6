//! Julian Day and civil calendar conversions.
//!
//! This crate provides:
//! - Calendar date ⇄ Julian Day (Meeus ch. 7), including the
//!   Julian → Gregorian cutover on the inverse path
//! - Decimal day and day-of-year helpers
//! - A `CalendarDateTime` value type with text parsing

pub mod calendar;
pub mod error;
pub mod julian;

pub use calendar::CalendarDateTime;
pub use error::TimeError;
pub use julian::{
    CalendarFields, GREGORIAN_CUTOVER_JDN, J2000_JD, SECONDS_PER_DAY, UNIX_EPOCH_JD,
    calendar_to_jd, day_of_year, decimal_day, historical_to_jd, is_leap_year, jd_to_calendar,
    unix_seconds_to_jd,
};

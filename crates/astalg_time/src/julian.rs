//! Julian Day ⇄ calendar conversions.
//!
//! Source: Meeus, *Astronomical Algorithms* (2nd ed.), Chapter 7.
//!
//! Every `⌊⌋` in the published formulas is a truncating cast here
//! (`as i64`), not `floor`. For the positive Julian Days these routines
//! are meant for the two agree; for negative inputs the truncation is
//! what the reference tables were produced with.

/// Julian Day of the J2000.0 epoch (2000-01-01 12:00).
pub const J2000_JD: f64 = 2_451_545.0;

/// Julian Day of the Unix epoch (1970-01-01 00:00 UTC).
pub const UNIX_EPOCH_JD: f64 = 2_440_587.5;

/// Seconds in one day.
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// First Julian Day number (`z`) counted in the Gregorian calendar
/// by [`jd_to_calendar`]: 1582-10-15.
pub const GREGORIAN_CUTOVER_JDN: i64 = 2_299_161;

/// Day-of-month scale factor. 30.6 would occasionally truncate to a
/// "day 0" of the following month.
const MONTH_DAYS: f64 = 30.6001;

/// Calendar fields produced by [`jd_to_calendar`].
///
/// Day, hour and minute are truncated; the second is rounded to the
/// nearest integer (and may therefore read `60`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarFields {
    pub year: i32,
    pub month: i32,
    pub day: i32,
    pub hour: i32,
    pub minute: i32,
    pub second: i32,
}

/// Decimal day of month: `day + hour/24 + minute/1440 + second/86400`.
///
/// Arguments are not checked, so `decimal_day(31, 25, 61, 61)` is simply
/// the arithmetic result.
pub fn decimal_day(day: i32, hour: i32, minute: i32, second: i32) -> f64 {
    day as f64 + hour as f64 / 24.0 + minute as f64 / 1440.0 + second as f64 / SECONDS_PER_DAY
}

/// Calendar date to Julian Day, always applying the Gregorian
/// leap-century correction.
///
/// `year` is the full signed year, `day` the decimal day of month
/// (see [`decimal_day`]). Dates before 1582-10-15 are therefore read as
/// proleptic Gregorian; use [`historical_to_jd`] for Julian-calendar dates.
pub fn calendar_to_jd(year: i32, month: i32, day: f64) -> f64 {
    let (y, m) = shift_jan_feb(year, month);
    let a = y / 100;
    let b = 2 - a + a / 4;
    jd_from_parts(y, m, day, b)
}

/// Calendar date to Julian Day, honouring the Julian → Gregorian cutover.
///
/// Dates on or after 1582-10-15 get the Gregorian correction; earlier
/// dates are read in the Julian calendar. This is the exact inverse of
/// [`jd_to_calendar`] on both sides of the cutover.
pub fn historical_to_jd(year: i32, month: i32, day: f64) -> f64 {
    let gregorian = (year, month, day) >= (1582, 10, 15.0);
    if gregorian {
        return calendar_to_jd(year, month, day);
    }
    let (y, m) = shift_jan_feb(year, month);
    jd_from_parts(y, m, day, 0)
}

// January and February count as months 13 and 14 of the previous year.
fn shift_jan_feb(year: i32, month: i32) -> (i32, i32) {
    if month <= 2 {
        (year.wrapping_sub(1), month.wrapping_add(12))
    } else {
        (year, month)
    }
}

// Sums are taken in f64 so out-of-range fields cannot overflow.
fn jd_from_parts(year: i32, month: i32, day: f64, b: i32) -> f64 {
    let year_days = (365.25 * (f64::from(year) + 4716.0)) as i64;
    let month_days = (MONTH_DAYS * (f64::from(month) + 1.0)) as i64;
    year_days as f64 + month_days as f64 + day + f64::from(b) - 1524.5
}

/// Julian Day to calendar year, month, day, hour, minute, second.
///
/// Days numbered below [`GREGORIAN_CUTOVER_JDN`] come back in the Julian
/// calendar. Inputs far outside the historical range (or non-finite)
/// produce meaningless fields but never panic: casts saturate and the
/// integer steps wrap.
pub fn jd_to_calendar(jd: f64) -> CalendarFields {
    let jd = jd + 0.5;
    let z = jd as i64;
    let f = jd - z as f64;

    let a = if z < GREGORIAN_CUTOVER_JDN {
        z
    } else {
        let alpha = ((z as f64 - 1_867_216.25) / 36_524.25) as i64;
        z.wrapping_add(1)
            .wrapping_add(alpha)
            .wrapping_sub(alpha / 4)
    };

    let b = a.wrapping_add(1524);
    let c = ((b as f64 - 122.1) / 365.25) as i64;
    let d = (365.25 * c as f64) as i64;
    let b_minus_d = b.wrapping_sub(d);
    let e = (b_minus_d as f64 / MONTH_DAYS) as i64;

    let month = if e < 14 { e.wrapping_sub(1) } else { e.wrapping_sub(13) };
    let year = if month > 2 {
        c.wrapping_sub(4716)
    } else {
        c.wrapping_sub(4715)
    };

    let dday = b_minus_d as f64 - ((MONTH_DAYS * e as f64) as i64) as f64 + f;

    // Truncate day, hour and minute; round the second.
    let day = dday as i32;
    let resid = (dday - f64::from(day)) * 24.0;
    let hour = resid as i32;
    let resid = (resid - f64::from(hour)) * 60.0;
    let minute = resid as i32;
    let resid = (resid - f64::from(minute)) * 60.0;
    let second = (resid + 0.5) as i32;

    CalendarFields {
        year: year as i32,
        month: month as i32,
        day,
        hour,
        minute,
        second,
    }
}

/// Gregorian leap-year rule.
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// 1-based ordinal day within the year (1 = Jan 1).
///
/// Computed as the whole-day distance from "January 0" of the same year,
/// so it inherits the Gregorian reading of [`calendar_to_jd`].
pub fn day_of_year(year: i32, month: i32, day: i32) -> i32 {
    let jd = calendar_to_jd(year, month, f64::from(day));
    let jan0 = calendar_to_jd(year, 1, 0.0);
    (jd - jan0).round() as i32
}

/// Seconds since the Unix epoch to Julian Day.
pub fn unix_seconds_to_jd(seconds: f64) -> f64 {
    UNIX_EPOCH_JD + seconds / SECONDS_PER_DAY
}

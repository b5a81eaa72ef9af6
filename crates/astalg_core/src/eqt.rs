//! Equation of time (Meeus eq. 28.1).

use crate::angle::normalize_deg;
use crate::nutation::Nutation;

/// Minutes in one day.
const MINUTES_PER_DAY: f64 = 1440.0;

/// Equation of time in minutes, apparent minus mean solar time.
///
/// Positive when the true Sun crosses the meridian before the mean Sun.
/// Inputs are the mean solar longitude, the solar right ascension (both
/// degrees), the mean obliquity (degrees) and the nutation corrections.
pub fn equation_of_time_from(
    mean_solar_longitude_deg: f64,
    right_ascension_deg: f64,
    mean_obliquity_deg: f64,
    nutation: Nutation,
) -> f64 {
    let e = mean_solar_longitude_deg - 0.005_718_3 - right_ascension_deg
        + nutation.longitude_deg * (mean_obliquity_deg + nutation.obliquity_deg).to_radians().cos();

    // 4 minutes of time per degree
    let mut minutes = normalize_deg(e) * 4.0;
    if minutes > 20.0 {
        minutes -= MINUTES_PER_DAY;
    }
    if minutes < -20.0 {
        minutes += MINUTES_PER_DAY;
    }
    minutes
}

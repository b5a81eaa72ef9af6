//! Angle normalization and time arguments shared by the models.

use astalg_time::J2000_JD;

/// Days per Julian century.
pub const DAYS_PER_CENTURY: f64 = 36_525.0;

/// Days per Julian millennium.
pub const DAYS_PER_MILLENNIUM: f64 = 365_250.0;

/// Normalize an angle to [0, 360) degrees.
///
/// One remainder followed by at most one period of correction.
pub fn normalize_deg(deg: f64) -> f64 {
    let r = deg % 360.0;
    if r < 0.0 { r + 360.0 } else { r }
}

/// Julian centuries since J2000.0.
pub fn julian_centuries(jd: f64) -> f64 {
    (jd - J2000_JD) / DAYS_PER_CENTURY
}

/// Julian millennia since J2000.0.
pub fn julian_millennia(jd: f64) -> f64 {
    (jd - J2000_JD) / DAYS_PER_MILLENNIUM
}

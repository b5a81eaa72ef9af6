//! Mean lunar longitude and longitude of the Moon's ascending node.

use crate::angle::{julian_centuries, normalize_deg};

/// Mean longitude of the Moon in degrees [0, 360).
pub fn mean_lunar_longitude(jd: f64) -> f64 {
    let t = julian_centuries(jd);
    normalize_deg(218.3165 + 481_267.8813 * t)
}

/// Longitude of the Moon's mean ascending node in degrees [0, 360).
///
/// Ω = 125.04452 − 1934.136261·T + 0.0020708·T² + T³/450000
/// (Meeus, *Astronomical Algorithms*, ch. 22).
pub fn lunar_ascending_node(jd: f64) -> f64 {
    let t = julian_centuries(jd);
    let omega = ((t / 4.50e5 + 2.0708e-3) * t - 1.934_136_261e3) * t + 125.044_52;
    normalize_deg(omega)
}

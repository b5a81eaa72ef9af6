//! Geometric and apparent solar longitude.
//!
//! Source: Meeus, *Astronomical Algorithms* (2nd ed.), ch. 25 (low
//! accuracy method): equation of the center, then the aberration and
//! node correction for the apparent longitude.

use crate::angle::{julian_centuries, normalize_deg};

/// Equation of the center in degrees for mean anomaly `m_deg`.
pub fn equation_of_center(jd: f64, m_deg: f64) -> f64 {
    let t = julian_centuries(jd);
    let m = m_deg.to_radians();
    (1.914_602 - 0.004_817 * t - 0.000_014 * (t * t)) * m.sin()
        + (0.019_993 - 0.000_101 * t) * (2.0 * m).sin()
        + 0.000_289 * (3.0 * m).sin()
}

/// Geometric (true) solar longitude in degrees [0, 360).
pub fn geometric_solar_longitude_from(
    jd: f64,
    mean_longitude_deg: f64,
    mean_anomaly_deg: f64,
) -> f64 {
    normalize_deg(mean_longitude_deg + equation_of_center(jd, mean_anomaly_deg))
}

/// Apparent solar longitude in degrees [0, 360).
///
/// Subtracts the aberration (−0.00569°) and the lunar-node term
/// (−0.00478° sin Ω) from the geometric longitude.
pub fn apparent_solar_longitude_from(geometric_longitude_deg: f64, lunar_node_deg: f64) -> f64 {
    normalize_deg(geometric_longitude_deg - 0.005_69 - 0.004_78 * lunar_node_deg.to_radians().sin())
}

//! Obliquity of the ecliptic.
//!
//! Mean obliquity: Meeus eq. 22.2, with the published
//! 23°26′21.448″ − 46.8150″T − 0.00059″T² + 0.001813″T³ already
//! expressed in decimal degrees.

use crate::angle::julian_centuries;

/// Mean obliquity coefficients in degrees, constant term first.
const MEAN_OBLIQUITY: [f64; 4] = [
    23.439_291_111_111,
    -0.013_004_166_666_7,
    -1.638_888_889e-7,
    5.036_111_111e-7,
];

/// Amplitude of the lunar-node term in the apparent obliquity, degrees.
const NODE_TERM_DEG: f64 = 0.002_56;

/// Mean obliquity of the ecliptic in degrees. Not wrapped.
pub fn mean_obliquity(jd: f64) -> f64 {
    let t = julian_centuries(jd);
    let c = &MEAN_OBLIQUITY;
    ((c[3] * t + c[2]) * t + c[1]) * t + c[0]
}

/// Apparent obliquity from the mean obliquity and the lunar node (degrees).
///
/// This is the short correction used for the Sun's apparent position
/// (Meeus eq. 25.8); it is applied independently of [`crate::nutation`].
pub fn apparent_obliquity_from(mean_obliquity_deg: f64, lunar_node_deg: f64) -> f64 {
    mean_obliquity_deg + NODE_TERM_DEG * lunar_node_deg.to_radians().cos()
}

//! Mean solar elements.
//!
//! Source: Meeus, *Astronomical Algorithms* (2nd ed.), eq. 28.2 (mean
//! longitude, Julian millennia) and eq. 25.3 (mean anomaly, Julian
//! centuries).

use crate::angle::{julian_centuries, julian_millennia, normalize_deg};

/// Mean longitude coefficients, constant term first, in Julian millennia.
const MEAN_LONGITUDE: [f64; 6] = [
    280.466_456_7,
    360_007.698_277_9,
    0.030_320_28,
    2.002_763_814_06e-5,
    -6.535_947_712_42e-5,
    -0.50e-6,
];

/// Mean longitude of the Sun in degrees [0, 360).
pub fn mean_solar_longitude(jd: f64) -> f64 {
    let tau = julian_millennia(jd);
    let sl = MEAN_LONGITUDE
        .iter()
        .rev()
        .fold(0.0, |acc, &c| tau * acc + c);
    normalize_deg(sl)
}

/// Mean anomaly of the Sun in degrees [0, 360).
pub fn mean_solar_anomaly(jd: f64) -> f64 {
    let t = julian_centuries(jd);
    normalize_deg(357.529_113_0 + 35_999.050_29 * t - 0.000_153_7 * (t * t))
}

//! Solar reference snapshot consumed by magnetic-local-time callers.

use crate::angle::normalize_deg;

/// Solar quantities at one Julian Day.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolarReference {
    pub jd: f64,
    /// Mean solar longitude, degrees [0, 360).
    pub mean_solar_longitude: f64,
    /// Apparent solar longitude, degrees [0, 360).
    pub apparent_solar_longitude: f64,
    /// Apparent obliquity of the ecliptic, degrees.
    pub apparent_obliquity: f64,
    /// Right ascension in degrees, (−180, 180].
    pub solar_right_ascension: f64,
    /// Declination, degrees.
    pub solar_declination: f64,
    /// Equation of time, minutes.
    pub equation_of_time: f64,
}

impl SolarReference {
    /// Right ascension in hours, [0, 24).
    pub fn right_ascension_hours(&self) -> f64 {
        normalize_deg(self.solar_right_ascension) / 15.0
    }

    /// Equation of time in seconds.
    pub fn equation_of_time_seconds(&self) -> f64 {
        self.equation_of_time * 60.0
    }
}

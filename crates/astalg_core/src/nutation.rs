//! Four-term nutation in longitude and obliquity.
//!
//! Low-accuracy series from Meeus, *Astronomical Algorithms* (2nd ed.),
//! ch. 22: good to about 0.5″ in Δψ and 0.1″ in Δε.

/// Nutation corrections, in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Nutation {
    /// Δψ, nutation in longitude.
    pub longitude_deg: f64,
    /// Δε, nutation in obliquity.
    pub obliquity_deg: f64,
}

/// Nutation from the mean solar longitude, mean lunar longitude and
/// lunar ascending node (all degrees).
pub fn nutation_from(
    mean_solar_longitude_deg: f64,
    mean_lunar_longitude_deg: f64,
    lunar_node_deg: f64,
) -> Nutation {
    let s = mean_solar_longitude_deg.to_radians();
    let l = mean_lunar_longitude_deg.to_radians();
    let om = lunar_node_deg.to_radians();

    // arcseconds
    let dpsi = -17.20 * om.sin() - 1.32 * (2.0 * s).sin() - 0.23 * (2.0 * l).sin()
        + 0.21 * (2.0 * om).sin();
    let deps = 9.20 * om.cos() + 0.57 * (2.0 * s).cos() + 0.10 * (2.0 * l).cos()
        - 0.09 * (2.0 * om).cos();

    Nutation {
        longitude_deg: dpsi / 3600.0,
        obliquity_deg: deps / 3600.0,
    }
}

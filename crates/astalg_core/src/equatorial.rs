//! Solar right ascension and declination from the apparent longitude
//! and apparent obliquity (Meeus eqs. 25.6 and 25.7).

/// Right ascension in **degrees**, range (−180, 180].
///
/// Not wrapped and not in hours: divide by 15 for hours.
pub fn right_ascension_from(apparent_longitude_deg: f64, apparent_obliquity_deg: f64) -> f64 {
    let lambda = apparent_longitude_deg.to_radians();
    let eps = apparent_obliquity_deg.to_radians();
    (eps.cos() * lambda.sin()).atan2(lambda.cos()).to_degrees()
}

/// Declination in degrees, range [−90, 90].
pub fn declination_from(apparent_longitude_deg: f64, apparent_obliquity_deg: f64) -> f64 {
    let sin_dec =
        apparent_obliquity_deg.to_radians().sin() * apparent_longitude_deg.to_radians().sin();
    sin_dec.asin().to_degrees()
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 23.44;

    #[test]
    fn equinox_and_solstice() {
        assert!(right_ascension_from(0.0, EPS).abs() < 1e-12);
        assert!(declination_from(0.0, EPS).abs() < 1e-12);
        assert!((right_ascension_from(90.0, EPS) - 90.0).abs() < 1e-9);
        assert!((declination_from(90.0, EPS) - EPS).abs() < 1e-9);
        assert!((declination_from(270.0, EPS) + EPS).abs() < 1e-9);
    }

    #[test]
    fn ra_is_signed_degrees() {
        let ra = right_ascension_from(200.0, EPS);
        assert!(ra < 0.0 && ra > -180.0, "ra = {ra}");
    }

    #[test]
    fn meeus_example_25a() {
        // λ = 199.90895°, ε = 23.43999° → α = 198.38083°, δ = −7.78507°
        let ra = right_ascension_from(199.908_95, 23.439_99);
        let dec = declination_from(199.908_95, 23.439_99);
        assert!((ra + 360.0 - 198.380_83).abs() < 1e-4, "ra = {ra}");
        assert!((dec + 7.785_07).abs() < 1e-4, "dec = {dec}");
    }
}

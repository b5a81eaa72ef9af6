//! Range, bound and memoization properties over a multi-century span.

use astalg_core::{ContextConfig, EphemerisContext, Quantity, solar_reference};
use astalg_time::{CalendarDateTime, calendar_to_jd, decimal_day};

const START_1600: f64 = 2_305_447.5;
const END_2400: f64 = 2_597_641.5;

fn span(step: f64) -> impl Iterator<Item = f64> {
    let n = ((END_2400 - START_1600) / step) as usize;
    (0..n).map(move |i| START_1600 + i as f64 * step)
}

#[test]
fn wrapped_angles_stay_in_range() {
    let mut ctx = EphemerisContext::new();
    for jd in span(0.73) {
        let angles = [
            ("L0", ctx.mean_solar_longitude(jd)),
            ("M", ctx.mean_solar_anomaly(jd)),
            ("Lm", ctx.mean_lunar_longitude(jd)),
            ("Omega", ctx.lunar_ascending_node(jd)),
            ("lambda_geo", ctx.geometric_solar_longitude(jd)),
            ("lambda_app", ctx.apparent_solar_longitude(jd)),
        ];
        for (name, value) in angles {
            assert!((0.0..360.0).contains(&value), "{name}({jd}) = {value}");
        }
    }
}

#[test]
fn equation_of_time_within_twenty_minutes() {
    let mut ctx = EphemerisContext::new();
    let (mut lo, mut hi) = (f64::MAX, f64::MIN);
    for jd in span(0.73) {
        let e = ctx.equation_of_time(jd);
        assert!((-20.0..=20.0).contains(&e), "E({jd}) = {e}");
        lo = lo.min(e);
        hi = hi.max(e);
    }
    // The annual extremes are reached somewhere in the span.
    assert!(lo < -14.0 && hi > 16.0, "E range [{lo}, {hi}]");
}

#[test]
fn unwrapped_quantities_stay_physical() {
    let mut ctx = EphemerisContext::new();
    for jd in span(5.3) {
        let eps = ctx.apparent_obliquity(jd);
        let dec = ctx.solar_declination(jd);
        let ra = ctx.solar_right_ascension(jd);
        assert!((23.0..24.0).contains(&eps), "eps({jd}) = {eps}");
        assert!(dec.abs() <= eps + 1e-9, "dec({jd}) = {dec}");
        assert!(ra > -180.0 && ra <= 180.0, "ra({jd}) = {ra}");
    }
}

#[test]
fn meeus_example_25a_full_chain() {
    // 1992-10-13 0h TD
    let jd = calendar_to_jd(1992, 10, 13.0);
    let mut ctx = EphemerisContext::new();
    assert!((ctx.geometric_solar_longitude(jd) - 199.909_88).abs() < 1e-4);
    assert!((ctx.apparent_solar_longitude(jd) - 199.908_95).abs() < 1e-4);
    assert!((ctx.apparent_obliquity(jd) - 23.439_99).abs() < 1e-4);
    assert!((ctx.solar_right_ascension(jd) + 360.0 - 198.380_83).abs() < 1e-4);
    assert!((ctx.solar_declination(jd) + 7.785_07).abs() < 1e-4);
}

#[test]
fn meeus_example_28a() {
    // 1992-10-13 0h TD: E = +13m42.6s with the full theory.
    let jd = calendar_to_jd(1992, 10, 13.0);
    let e = EphemerisContext::new().equation_of_time(jd);
    assert!((e - 13.71).abs() < 0.05, "E = {e} min");
}

#[test]
fn reference_driver_instant() {
    // 2014-03-22 03:11:00, two days after the March equinox.
    let jd = calendar_to_jd(2014, 3, decimal_day(22, 3, 11, 0));
    let r = solar_reference(jd);
    assert!((r.mean_solar_longitude - 359.556_763).abs() < 1e-5);
    assert!((r.apparent_solar_longitude - 1.422_449).abs() < 1e-5);
    assert!((r.apparent_obliquity - 23.435_225).abs() < 1e-5);
    assert!((r.solar_right_ascension - 1.305_154).abs() < 1e-5);
    assert!((r.solar_declination - 0.565_676).abs() < 1e-5);
    assert!((r.equation_of_time + 7.007_598).abs() < 1e-5);
}

#[test]
fn solstice_declinations() {
    let mut ctx = EphemerisContext::new();
    let june = ctx.solar_declination(calendar_to_jd(2024, 6, 21.0));
    let december = ctx.solar_declination(calendar_to_jd(2024, 12, 21.0));
    assert!((june - 23.44).abs() < 0.01, "June dec = {june}");
    assert!((december + 23.44).abs() < 0.01, "December dec = {december}");
}

#[test]
fn memoized_equals_fresh() {
    let jd = CalendarDateTime::new(2004, 3, 22, 3, 11, 0).to_julian_day();
    let mut warm = EphemerisContext::new();
    let first = warm.solar_reference(jd);
    let second = warm.solar_reference(jd);

    let mut cold = EphemerisContext::with_config(ContextConfig { memoize: false });
    let fresh = cold.solar_reference(jd);

    for (a, b) in [(first, second), (first, fresh)] {
        assert_eq!(a.equation_of_time.to_bits(), b.equation_of_time.to_bits());
        assert_eq!(a.solar_declination.to_bits(), b.solar_declination.to_bits());
        assert_eq!(a.solar_right_ascension.to_bits(), b.solar_right_ascension.to_bits());
        assert_eq!(a.apparent_obliquity.to_bits(), b.apparent_obliquity.to_bits());
        assert_eq!(
            a.apparent_solar_longitude.to_bits(),
            b.apparent_solar_longitude.to_bits()
        );
    }
}

#[test]
fn nutation_independent_of_cache_state() {
    let jd = calendar_to_jd(1997, 3, decimal_day(22, 3, 11, 0));
    let other = jd + 10.0;

    let fresh = EphemerisContext::new().nutation(jd);

    // Warm hit.
    let mut ctx = EphemerisContext::new();
    ctx.nutation(jd);
    let hit = ctx.nutation(jd);

    // Slot holding a different instant.
    ctx.nutation(other);
    let after_overwrite = ctx.nutation(jd);

    // Upstream slots already primed, nutation slot empty.
    let mut primed = EphemerisContext::new();
    primed.mean_solar_longitude(jd);
    primed.mean_lunar_longitude(jd);
    primed.lunar_ascending_node(jd);
    let from_primed = primed.nutation(jd);

    for n in [hit, after_overwrite, from_primed] {
        assert_eq!(n, fresh);
    }
}

#[test]
fn entry_points_are_order_independent() {
    // apparent obliquity, apparent longitude and equation of time give the
    // same values whatever was evaluated before them.
    let jd = calendar_to_jd(2014, 3, decimal_day(22, 3, 11, 0));
    let mut a = EphemerisContext::new();
    let eps_a = a.apparent_obliquity(jd);
    let lon_a = a.apparent_solar_longitude(jd);
    let e_a = a.equation_of_time(jd);

    let mut b = EphemerisContext::new();
    let e_b = b.equation_of_time(jd + 0.5);
    let e_b2 = b.equation_of_time(jd);
    let lon_b = b.apparent_solar_longitude(jd);
    let eps_b = b.apparent_obliquity(jd);

    assert_ne!(e_b, e_b2);
    assert_eq!(eps_a, eps_b);
    assert_eq!(lon_a, lon_b);
    assert_eq!(e_a, e_b2);
}

#[test]
fn quantity_names_are_unique() {
    let all = [
        Quantity::MeanSolarLongitude,
        Quantity::MeanSolarAnomaly,
        Quantity::MeanLunarLongitude,
        Quantity::LunarAscendingNode,
        Quantity::MeanObliquity,
        Quantity::ApparentObliquity,
        Quantity::Nutation,
        Quantity::GeometricSolarLongitude,
        Quantity::ApparentSolarLongitude,
        Quantity::SolarRightAscension,
        Quantity::SolarDeclination,
        Quantity::EquationOfTime,
    ];
    let mut names: Vec<&str> = all.iter().map(|q| q.name()).collect();
    names.sort_unstable();
    names.dedup();
    assert_eq!(names.len(), all.len());
}

//! Low-precision solar and lunar ephemeris after Meeus.
//!
//! Closed-form formulas for the Sun's mean elements, the lunar mean
//! longitude and node, nutation, obliquity, apparent longitude, right
//! ascension, declination and the equation of time, all as functions of
//! a Julian Day.
//!
//! The model modules are pure functions that take their upstream inputs
//! explicitly. [`EphemerisContext`] wires them into a dependency graph
//! and memoizes each node by Julian Day.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use astalg_core::EphemerisContext;
//! use astalg_time::CalendarDateTime;
//!
//! let jd = CalendarDateTime::new(2014, 3, 22, 3, 11, 0).to_julian_day();
//! let mut ctx = EphemerisContext::new();
//! let reference = ctx.solar_reference(jd);
//! println!("EoT {:.3} min, dec {:.4}°", reference.equation_of_time, reference.solar_declination);
//! ```

pub mod angle;
pub mod apparent;
pub mod clock;
pub mod context;
pub mod eqt;
pub mod equatorial;
pub mod lunar;
pub mod nutation;
pub mod obliquity;
pub mod reference;
pub mod solar;

pub use angle::{julian_centuries, julian_millennia, normalize_deg};
pub use clock::{ClockState, SimulationClock};
pub use context::{CacheStats, ContextConfig, EphemerisContext, Quantity};
pub use lunar::{lunar_ascending_node, mean_lunar_longitude};
pub use nutation::Nutation;
pub use obliquity::mean_obliquity;
pub use reference::SolarReference;
pub use solar::{mean_solar_anomaly, mean_solar_longitude};

/// One-shot solar reference through a fresh context.
pub fn solar_reference(jd: f64) -> SolarReference {
    EphemerisContext::new().solar_reference(jd)
}

/// One-shot equation of time in minutes through a fresh context.
pub fn equation_of_time(jd: f64) -> f64 {
    EphemerisContext::new().equation_of_time(jd)
}

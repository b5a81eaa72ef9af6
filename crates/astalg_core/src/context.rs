//! Memoizing evaluation context for the ephemeris dependency graph.
//!
//! Each quantity owns one single-slot cache keyed by `jd.to_bits()`: a
//! hit requires a bit-identical Julian Day, a miss overwrites the slot.
//! The context is an ordinary owned value (`&mut self` everywhere), so a
//! caller decides its lifetime and no slot is ever shared between
//! threads.
//!
//! Dependency graph (each node memoized independently):
//!
//! ```text
//! mean_solar_longitude ─┬─────────────────────────────┬─ nutation ──────┐
//! mean_lunar_longitude ─┘                             │                 │
//! lunar_ascending_node ─┬─ apparent_obliquity ─┬──────┘                 │
//! mean_obliquity ───────┘                      ├─ right_ascension ──────┤
//! mean_solar_anomaly ── geometric_longitude ── apparent_longitude ──┬───┤
//!                                              └─ declination ──────┘   │
//!                                                          equation_of_time
//! ```

use tracing::trace;

use crate::angle::normalize_deg;
use crate::apparent::{apparent_solar_longitude_from, geometric_solar_longitude_from};
use crate::equatorial::{declination_from, right_ascension_from};
use crate::eqt::equation_of_time_from;
use crate::lunar;
use crate::nutation::{Nutation, nutation_from};
use crate::obliquity::{self, apparent_obliquity_from};
use crate::reference::SolarReference;
use crate::solar;

/// Context construction options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContextConfig {
    /// Keep the last value per quantity. When `false` every call
    /// recomputes its whole dependency chain.
    pub memoize: bool,
}

impl Default for ContextConfig {
    fn default() -> Self {
        Self { memoize: true }
    }
}

/// Evaluation counters accumulated since construction or [`EphemerisContext::clear`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CacheStats {
    /// Saturates at `u64::MAX`.
    pub evaluations: u64,
    /// Saturates at `u64::MAX`.
    pub cache_hits: u64,
}

/// Every memoized quantity, in dependency order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Quantity {
    MeanSolarLongitude,
    MeanSolarAnomaly,
    MeanLunarLongitude,
    LunarAscendingNode,
    MeanObliquity,
    ApparentObliquity,
    Nutation,
    GeometricSolarLongitude,
    ApparentSolarLongitude,
    SolarRightAscension,
    SolarDeclination,
    EquationOfTime,
}

impl Quantity {
    pub const fn name(self) -> &'static str {
        match self {
            Self::MeanSolarLongitude => "mean_solar_longitude",
            Self::MeanSolarAnomaly => "mean_solar_anomaly",
            Self::MeanLunarLongitude => "mean_lunar_longitude",
            Self::LunarAscendingNode => "lunar_ascending_node",
            Self::MeanObliquity => "mean_obliquity",
            Self::ApparentObliquity => "apparent_obliquity",
            Self::Nutation => "nutation",
            Self::GeometricSolarLongitude => "geometric_solar_longitude",
            Self::ApparentSolarLongitude => "apparent_solar_longitude",
            Self::SolarRightAscension => "solar_right_ascension",
            Self::SolarDeclination => "solar_declination",
            Self::EquationOfTime => "equation_of_time",
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
struct Slot<T> {
    key: Option<u64>,
    value: T,
}

impl<T: Copy> Slot<T> {
    fn get(&self, key: u64) -> Option<T> {
        (self.key == Some(key)).then_some(self.value)
    }

    fn store(&mut self, key: u64, value: T) {
        self.key = Some(key);
        self.value = value;
    }
}

#[derive(Debug, Clone, Default)]
struct Slots {
    mean_solar_longitude: Slot<f64>,
    mean_solar_anomaly: Slot<f64>,
    mean_lunar_longitude: Slot<f64>,
    lunar_ascending_node: Slot<f64>,
    mean_obliquity: Slot<f64>,
    apparent_obliquity: Slot<f64>,
    nutation: Slot<Nutation>,
    geometric_solar_longitude: Slot<f64>,
    apparent_solar_longitude: Slot<f64>,
    solar_right_ascension: Slot<f64>,
    solar_declination: Slot<f64>,
    equation_of_time: Slot<f64>,
}

/// Memoizing evaluator for every solar and lunar quantity.
///
/// ```rust,ignore
/// let mut ctx = EphemerisContext::new();
/// let jd = astalg_time::calendar_to_jd(2014, 3, 22.132_638_9);
/// let eqt_minutes = ctx.equation_of_time(jd);
/// let ra_hours = ctx.solar_right_ascension(jd) / 15.0;
/// ```
#[derive(Debug, Clone, Default)]
pub struct EphemerisContext {
    config: ContextConfig,
    slots: Slots,
    stats: CacheStats,
}

impl EphemerisContext {
    /// A memoizing context with empty caches.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: ContextConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn config(&self) -> ContextConfig {
        self.config
    }

    pub fn stats(&self) -> CacheStats {
        self.stats
    }

    /// Forget all cached values and reset the counters.
    pub fn clear(&mut self) {
        self.slots = Slots::default();
        self.stats = CacheStats::default();
    }

    fn memo<T: Copy>(
        &mut self,
        quantity: Quantity,
        jd: f64,
        slot: fn(&mut Slots) -> &mut Slot<T>,
        compute: impl FnOnce(&mut Self) -> T,
    ) -> T {
        let key = jd.to_bits();
        if self.config.memoize {
            if let Some(value) = slot(&mut self.slots).get(key) {
                self.stats.cache_hits = self.stats.cache_hits.saturating_add(1);
                return value;
            }
        }

        let value = compute(self);
        self.stats.evaluations = self.stats.evaluations.saturating_add(1);
        trace!(quantity = quantity.name(), jd, "evaluated");

        if self.config.memoize {
            slot(&mut self.slots).store(key, value);
        }
        value
    }

    /// Mean solar longitude, degrees [0, 360).
    pub fn mean_solar_longitude(&mut self, jd: f64) -> f64 {
        self.memo(
            Quantity::MeanSolarLongitude,
            jd,
            |s| &mut s.mean_solar_longitude,
            |_| solar::mean_solar_longitude(jd),
        )
    }

    /// Mean solar anomaly, degrees [0, 360).
    pub fn mean_solar_anomaly(&mut self, jd: f64) -> f64 {
        self.memo(
            Quantity::MeanSolarAnomaly,
            jd,
            |s| &mut s.mean_solar_anomaly,
            |_| solar::mean_solar_anomaly(jd),
        )
    }

    /// Mean lunar longitude, degrees [0, 360).
    pub fn mean_lunar_longitude(&mut self, jd: f64) -> f64 {
        self.memo(
            Quantity::MeanLunarLongitude,
            jd,
            |s| &mut s.mean_lunar_longitude,
            |_| lunar::mean_lunar_longitude(jd),
        )
    }

    /// Longitude of the lunar ascending node, degrees [0, 360).
    pub fn lunar_ascending_node(&mut self, jd: f64) -> f64 {
        self.memo(
            Quantity::LunarAscendingNode,
            jd,
            |s| &mut s.lunar_ascending_node,
            |_| lunar::lunar_ascending_node(jd),
        )
    }

    /// Mean obliquity of the ecliptic, degrees (not wrapped).
    pub fn mean_obliquity(&mut self, jd: f64) -> f64 {
        self.memo(
            Quantity::MeanObliquity,
            jd,
            |s| &mut s.mean_obliquity,
            |_| obliquity::mean_obliquity(jd),
        )
    }

    /// Apparent obliquity (mean obliquity + lunar-node term), degrees.
    pub fn apparent_obliquity(&mut self, jd: f64) -> f64 {
        self.memo(
            Quantity::ApparentObliquity,
            jd,
            |s| &mut s.apparent_obliquity,
            |ctx| {
                let eps0 = ctx.mean_obliquity(jd);
                let node = ctx.lunar_ascending_node(jd);
                apparent_obliquity_from(eps0, node)
            },
        )
    }

    /// Nutation in longitude and obliquity, degrees.
    pub fn nutation(&mut self, jd: f64) -> Nutation {
        self.memo(
            Quantity::Nutation,
            jd,
            |s| &mut s.nutation,
            |ctx| {
                let sun = ctx.mean_solar_longitude(jd);
                let moon = ctx.mean_lunar_longitude(jd);
                let node = ctx.lunar_ascending_node(jd);
                nutation_from(sun, moon, node)
            },
        )
    }

    /// Geometric solar longitude, degrees [0, 360).
    pub fn geometric_solar_longitude(&mut self, jd: f64) -> f64 {
        self.memo(
            Quantity::GeometricSolarLongitude,
            jd,
            |s| &mut s.geometric_solar_longitude,
            |ctx| {
                let l0 = ctx.mean_solar_longitude(jd);
                let m = ctx.mean_solar_anomaly(jd);
                geometric_solar_longitude_from(jd, l0, m)
            },
        )
    }

    /// Apparent solar longitude, degrees [0, 360).
    pub fn apparent_solar_longitude(&mut self, jd: f64) -> f64 {
        self.memo(
            Quantity::ApparentSolarLongitude,
            jd,
            |s| &mut s.apparent_solar_longitude,
            |ctx| {
                let lon = ctx.geometric_solar_longitude(jd);
                let node = ctx.lunar_ascending_node(jd);
                apparent_solar_longitude_from(lon, node)
            },
        )
    }

    /// Solar right ascension in **degrees**, (−180, 180]. Divide by 15 for hours.
    pub fn solar_right_ascension(&mut self, jd: f64) -> f64 {
        self.memo(
            Quantity::SolarRightAscension,
            jd,
            |s| &mut s.solar_right_ascension,
            |ctx| {
                let lon = ctx.apparent_solar_longitude(jd);
                let eps = ctx.apparent_obliquity(jd);
                right_ascension_from(lon, eps)
            },
        )
    }

    /// Solar declination, degrees.
    pub fn solar_declination(&mut self, jd: f64) -> f64 {
        self.memo(
            Quantity::SolarDeclination,
            jd,
            |s| &mut s.solar_declination,
            |ctx| {
                let lon = ctx.apparent_solar_longitude(jd);
                let eps = ctx.apparent_obliquity(jd);
                declination_from(lon, eps)
            },
        )
    }

    /// Equation of time, minutes.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn equation_of_time(&mut self, jd: f64) -> f64 {
        self.memo(
            Quantity::EquationOfTime,
            jd,
            |s| &mut s.equation_of_time,
            |ctx| {
                let l0 = ctx.mean_solar_longitude(jd);
                let ra = ctx.solar_right_ascension(jd);
                let eps0 = ctx.mean_obliquity(jd);
                let nutation = ctx.nutation(jd);
                equation_of_time_from(l0, ra, eps0, nutation)
            },
        )
    }

    /// All solar reference quantities for one instant.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn solar_reference(&mut self, jd: f64) -> SolarReference {
        SolarReference {
            jd,
            mean_solar_longitude: self.mean_solar_longitude(jd),
            apparent_solar_longitude: self.apparent_solar_longitude(jd),
            apparent_obliquity: self.apparent_obliquity(jd),
            solar_right_ascension: self.solar_right_ascension(jd),
            solar_declination: self.solar_declination(jd),
            equation_of_time: self.equation_of_time(jd),
        }
    }

    /// Right ascension converted to hours [0, 24).
    pub fn solar_right_ascension_hours(&mut self, jd: f64) -> f64 {
        normalize_deg(self.solar_right_ascension(jd)) / 15.0
    }
}

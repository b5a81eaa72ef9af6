//! Settable simulation clock.
//!
//! Holds the "current" date/time that MLT-style consumers compute
//! against, together with its Julian Day and day of year.

use astalg_time::{CalendarDateTime, TimeError};
use tracing::debug;

use crate::context::EphemerisContext;
use crate::reference::SolarReference;

/// The instant last passed to [`SimulationClock::set_date_time`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClockState {
    pub date_time: CalendarDateTime,
    pub jd: f64,
    pub day_of_year: i32,
}

/// Current simulation time plus the context used to evaluate it.
#[derive(Debug, Clone, Default)]
pub struct SimulationClock {
    state: Option<ClockState>,
    context: EphemerisContext,
}

impl SimulationClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clock evaluating through a caller-configured context.
    pub fn with_context(context: EphemerisContext) -> Self {
        Self {
            state: None,
            context,
        }
    }

    /// Set the current time. Fields are not validated.
    pub fn set_date_time(
        &mut self,
        year: i32,
        month: i32,
        day: i32,
        hour: i32,
        minute: i32,
        second: i32,
    ) -> ClockState {
        self.set(CalendarDateTime::new(year, month, day, hour, minute, second))
    }

    /// Set the current time from a calendar value.
    pub fn set(&mut self, date_time: CalendarDateTime) -> ClockState {
        let state = ClockState {
            date_time,
            jd: date_time.to_julian_day(),
            day_of_year: date_time.day_of_year(),
        };
        debug!(%date_time, jd = state.jd, "simulation time set");
        self.state = Some(state);
        state
    }

    /// Set the current time from the system clock (UTC).
    pub fn set_now(&mut self) -> Result<ClockState, TimeError> {
        let now = CalendarDateTime::now_utc()?;
        Ok(self.set(now))
    }

    /// The current time, if one has been set.
    pub fn state(&self) -> Option<ClockState> {
        self.state
    }

    /// Solar reference quantities at the current time.
    pub fn solar_reference(&mut self) -> Option<SolarReference> {
        let jd = self.state?.jd;
        Some(self.context.solar_reference(jd))
    }

    pub fn context_mut(&mut self) -> &mut EphemerisContext {
        &mut self.context
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_clock_has_no_reference() {
        let mut clock = SimulationClock::new();
        assert!(clock.state().is_none());
        assert!(clock.solar_reference().is_none());
    }

    #[test]
    fn set_records_jd_and_day_of_year() {
        let mut clock = SimulationClock::new();
        let state = clock.set_date_time(2014, 3, 22, 3, 11, 0);
        assert_eq!(state.day_of_year, 81);
        assert!((state.jd - 2_456_738.632_638_889).abs() < 1e-8, "jd = {}", state.jd);
        assert_eq!(clock.state(), Some(state));
    }

    #[test]
    fn reference_follows_clock() {
        let mut clock = SimulationClock::new();
        clock.set_date_time(2014, 3, 22, 3, 11, 0);
        let a = clock.solar_reference().unwrap();
        clock.set_date_time(2014, 9, 22, 3, 11, 0);
        let b = clock.solar_reference().unwrap();
        assert!(a.solar_declination > 0.0 && a.solar_declination < 1.0);
        assert!(b.solar_declination.abs() < 1.0);
        assert_ne!(a.jd, b.jd);
    }

    #[test]
    fn set_now_succeeds() {
        let mut clock = SimulationClock::new();
        let state = clock.set_now().unwrap();
        assert!(state.date_time.year >= 2020);
    }
}

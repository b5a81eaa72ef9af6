//! C-facing adapter for `astalg_core`.
//!
//! Scalar quantities are plain `extern "C"` functions of the Julian Day.
//! Multi-value results are written through out-pointers and report a
//! [`AstalgStatus`].
//!
//! Memoization and the simulation clock live in thread-local state: each
//! calling thread gets its own caches and its own "current time".

use std::cell::RefCell;

use astalg_core::{ClockState, SimulationClock, SolarReference};
use astalg_time::{CalendarDateTime, TimeError, calendar_to_jd, decimal_day, jd_to_calendar};

/// ABI version for downstream bindings.
pub const ASTALG_API_VERSION: u32 = 1;

/// C-facing status codes.
#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AstalgStatus {
    Ok = 0,
    TimeNotSet = 1,
    Clock = 2,
    NullPointer = 7,
    Internal = 255,
}

impl From<&TimeError> for AstalgStatus {
    fn from(value: &TimeError) -> Self {
        match value {
            TimeError::Clock(_) => Self::Clock,
            _ => Self::Internal,
        }
    }
}

/// C-compatible calendar fields.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AstalgCalendar {
    pub year: i32,
    pub month: i32,
    pub day: i32,
    pub hour: i32,
    pub minute: i32,
    pub second: i32,
}

impl From<CalendarDateTime> for AstalgCalendar {
    fn from(c: CalendarDateTime) -> Self {
        Self {
            year: c.year,
            month: c.month,
            day: c.day,
            hour: c.hour,
            minute: c.minute,
            second: c.second,
        }
    }
}

/// C-compatible solar reference snapshot.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AstalgSolarReference {
    pub jd: f64,
    pub mean_solar_longitude_deg: f64,
    pub apparent_solar_longitude_deg: f64,
    pub apparent_obliquity_deg: f64,
    /// Degrees, not hours.
    pub solar_right_ascension_deg: f64,
    pub solar_declination_deg: f64,
    pub equation_of_time_min: f64,
}

impl From<SolarReference> for AstalgSolarReference {
    fn from(r: SolarReference) -> Self {
        Self {
            jd: r.jd,
            mean_solar_longitude_deg: r.mean_solar_longitude,
            apparent_solar_longitude_deg: r.apparent_solar_longitude,
            apparent_obliquity_deg: r.apparent_obliquity,
            solar_right_ascension_deg: r.solar_right_ascension,
            solar_declination_deg: r.solar_declination,
            equation_of_time_min: r.equation_of_time,
        }
    }
}

thread_local! {
    static CLOCK: RefCell<SimulationClock> = RefCell::new(SimulationClock::new());
}

fn with_clock<R>(f: impl FnOnce(&mut SimulationClock) -> R) -> R {
    CLOCK.with(|clock| f(&mut clock.borrow_mut()))
}

/// Return ABI version of the exported C API.
#[unsafe(no_mangle)]
pub extern "C" fn astalg_api_version() -> u32 {
    ASTALG_API_VERSION
}

/// Calendar date (decimal day) to Julian Day.
#[unsafe(no_mangle)]
pub extern "C" fn astalg_jde(year: i32, month: i32, day: f64) -> f64 {
    ffi_value(|| calendar_to_jd(year, month, day))
}

/// Decimal day of month. Arguments are not validated.
#[unsafe(no_mangle)]
pub extern "C" fn astalg_dday(day: i32, hour: i32, minute: i32, second: i32) -> f64 {
    ffi_value(|| decimal_day(day, hour, minute, second))
}

/// Julian Day to calendar fields.
///
/// # Safety
/// `out` must be a valid, non-null pointer.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn astalg_jde2calendar(jd: f64, out: *mut AstalgCalendar) -> AstalgStatus {
    ffi_boundary(|| {
        if out.is_null() {
            return AstalgStatus::NullPointer;
        }
        let fields = CalendarDateTime::from(jd_to_calendar(jd));
        // SAFETY: Pointer is checked for null and written once.
        unsafe { *out = fields.into() };
        AstalgStatus::Ok
    })
}

#[unsafe(no_mangle)]
pub extern "C" fn astalg_mean_solar_longitude(jd: f64) -> f64 {
    ffi_value(|| with_clock(|c| c.context_mut().mean_solar_longitude(jd)))
}

#[unsafe(no_mangle)]
pub extern "C" fn astalg_mean_solar_anomaly(jd: f64) -> f64 {
    ffi_value(|| with_clock(|c| c.context_mut().mean_solar_anomaly(jd)))
}

#[unsafe(no_mangle)]
pub extern "C" fn astalg_mean_lunar_longitude(jd: f64) -> f64 {
    ffi_value(|| with_clock(|c| c.context_mut().mean_lunar_longitude(jd)))
}

#[unsafe(no_mangle)]
pub extern "C" fn astalg_lunar_ascending_node(jd: f64) -> f64 {
    ffi_value(|| with_clock(|c| c.context_mut().lunar_ascending_node(jd)))
}

#[unsafe(no_mangle)]
pub extern "C" fn astalg_mean_obliquity(jd: f64) -> f64 {
    ffi_value(|| with_clock(|c| c.context_mut().mean_obliquity(jd)))
}

#[unsafe(no_mangle)]
pub extern "C" fn astalg_apparent_obliquity(jd: f64) -> f64 {
    ffi_value(|| with_clock(|c| c.context_mut().apparent_obliquity(jd)))
}

#[unsafe(no_mangle)]
pub extern "C" fn astalg_geometric_solar_longitude(jd: f64) -> f64 {
    ffi_value(|| with_clock(|c| c.context_mut().geometric_solar_longitude(jd)))
}

#[unsafe(no_mangle)]
pub extern "C" fn astalg_apparent_solar_longitude(jd: f64) -> f64 {
    ffi_value(|| with_clock(|c| c.context_mut().apparent_solar_longitude(jd)))
}

/// Solar right ascension in degrees. Divide by 15 for hours.
#[unsafe(no_mangle)]
pub extern "C" fn astalg_solar_right_ascension(jd: f64) -> f64 {
    ffi_value(|| with_clock(|c| c.context_mut().solar_right_ascension(jd)))
}

#[unsafe(no_mangle)]
pub extern "C" fn astalg_solar_declination(jd: f64) -> f64 {
    ffi_value(|| with_clock(|c| c.context_mut().solar_declination(jd)))
}

/// Equation of time in minutes.
#[unsafe(no_mangle)]
pub extern "C" fn astalg_equation_of_time(jd: f64) -> f64 {
    ffi_value(|| with_clock(|c| c.context_mut().equation_of_time(jd)))
}

/// Nutation corrections to longitude and obliquity, in degrees.
///
/// # Safety
/// `out_longitude` and `out_obliquity` must be valid, non-null pointers.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn astalg_nutation_corr(
    jd: f64,
    out_longitude: *mut f64,
    out_obliquity: *mut f64,
) -> AstalgStatus {
    ffi_boundary(|| {
        if out_longitude.is_null() || out_obliquity.is_null() {
            return AstalgStatus::NullPointer;
        }
        let n = with_clock(|c| c.context_mut().nutation(jd));
        // SAFETY: Pointers are checked for null and each written once.
        unsafe {
            *out_longitude = n.longitude_deg;
            *out_obliquity = n.obliquity_deg;
        }
        AstalgStatus::Ok
    })
}

/// Set this thread's simulation time. Fields are not validated.
#[unsafe(no_mangle)]
pub extern "C" fn astalg_set_date_time(
    year: i32,
    month: i32,
    day: i32,
    hour: i32,
    minute: i32,
    second: i32,
) -> AstalgStatus {
    ffi_boundary(|| {
        with_clock(|c| c.set_date_time(year, month, day, hour, minute, second));
        AstalgStatus::Ok
    })
}

/// Set this thread's simulation time to the current UTC time.
#[unsafe(no_mangle)]
pub extern "C" fn astalg_set_now() -> AstalgStatus {
    ffi_boundary(|| match with_clock(SimulationClock::set_now) {
        Ok(_) => AstalgStatus::Ok,
        Err(err) => AstalgStatus::from(&err),
    })
}

/// Read back this thread's simulation time and its day of year.
///
/// # Safety
/// `out` and `out_day_of_year` must be valid, non-null pointers.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn astalg_get_date_time(
    out: *mut AstalgCalendar,
    out_day_of_year: *mut i32,
) -> AstalgStatus {
    ffi_boundary(|| {
        if out.is_null() || out_day_of_year.is_null() {
            return AstalgStatus::NullPointer;
        }
        let Some(ClockState {
            date_time,
            day_of_year,
            ..
        }) = with_clock(|c| c.state())
        else {
            return AstalgStatus::TimeNotSet;
        };
        // SAFETY: Pointers are checked for null and each written once.
        unsafe {
            *out = date_time.into();
            *out_day_of_year = day_of_year;
        }
        AstalgStatus::Ok
    })
}

/// Solar reference quantities at this thread's simulation time.
///
/// # Safety
/// `out` must be a valid, non-null pointer.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn astalg_solar_reference(out: *mut AstalgSolarReference) -> AstalgStatus {
    ffi_boundary(|| {
        if out.is_null() {
            return AstalgStatus::NullPointer;
        }
        let Some(reference) = with_clock(SimulationClock::solar_reference) else {
            return AstalgStatus::TimeNotSet;
        };
        // SAFETY: Pointer is checked for null and written once.
        unsafe { *out = reference.into() };
        AstalgStatus::Ok
    })
}

fn ffi_boundary(f: impl FnOnce() -> AstalgStatus) -> AstalgStatus {
    match std::panic::catch_unwind(std::panic::AssertUnwindSafe(f)) {
        Ok(status) => status,
        Err(_) => AstalgStatus::Internal,
    }
}

/// Scalar exports have no status slot; a panic reads as NaN.
fn ffi_value(f: impl FnOnce() -> f64) -> f64 {
    std::panic::catch_unwind(std::panic::AssertUnwindSafe(f)).unwrap_or(f64::NAN)
}

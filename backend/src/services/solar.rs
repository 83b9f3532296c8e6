//! Sun position translation: calendar date in, ecliptic position out.

use serde::Serialize;

use crate::ephemeris::{Body, CalcFlags, Calendar, Ephemeris, EphemerisResult};
use crate::models::DateSpec;

/// Flags used for every Sun computation: include speed, prefer the high
/// precision ephemeris.
pub const SUN_FLAGS: CalcFlags = CalcFlags::SPEED.union(CalcFlags::SWIEPH);

/// Sun position as returned to API callers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SunPosition {
    /// Apparent ecliptic longitude, degrees.
    pub longitude: f64,
    /// Ecliptic latitude, degrees.
    pub latitude: f64,
    /// Daily motion in longitude, degrees/day.
    pub speed: f64,
}

/// Compute the Sun's position for a civil (Gregorian, UT) date.
///
/// Any collaborator failure is returned unchanged; there is no retry, as
/// ephemeris errors are deterministic for a given input.
pub fn compute_sun_position(ephemeris: &dyn Ephemeris, date: &DateSpec) -> EphemerisResult<SunPosition> {
    let jd = ephemeris.date_to_julian_day(date.year, date.month, date.day, date.hour, Calendar::Gregorian)?;
    let position = ephemeris.compute_body_position(jd, Body::Sun, SUN_FLAGS)?;

    Ok(SunPosition {
        longitude: position.longitude,
        latitude: position.latitude,
        speed: position.speed,
    })
}

//! Analytical ephemeris backed by the `astro` crate.
//!
//! Positions come from the VSOP87 planetary theory as packaged by `astro`,
//! corrected for nutation in longitude and annual aberration to give the
//! apparent geocentric longitude of date. Input instants are UT and are
//! shifted to Terrestrial Time with the crate's ΔT model before evaluating
//! the series. The series need no data files;
//! the configured data directory is recorded and reported, and its absence
//! is only a startup warning.

use std::path::Path;

use astro::time::{CalType, Date};
use tracing::{info, warn};

use super::{
    Body, BodyPosition, CalcFlags, Calendar, Ephemeris, EphemerisConfig, EphemerisError,
    EphemerisResult,
};
use crate::models::JulianDay;

/// First supported instant: -3000-01-01 00:00 UT (proleptic Gregorian).
pub const MIN_JULIAN_DAY: f64 = 625_332.5;
/// Last supported instant: 3000-01-01 00:00 UT.
pub const MAX_JULIAN_DAY: f64 = 2_816_787.5;

/// Annual aberration constant, arcseconds.
const ABERRATION_ARCSEC: f64 = 20.4898;

/// Half-width of the central difference used for speeds, days.
const SPEED_STEP_DAYS: f64 = 0.5;

/// VSOP87-based ephemeris.
#[derive(Debug, Clone)]
pub struct AnalyticalEphemeris {
    config: EphemerisConfig,
}

impl AnalyticalEphemeris {
    pub fn new(config: EphemerisConfig) -> Self {
        if config.data_files_present() {
            info!(path = %config.data_path.display(), "Ephemeris data directory found");
        } else {
            warn!(
                path = %config.data_path.display(),
                "Ephemeris data directory missing or empty, using built-in analytical series"
            );
        }
        Self { config }
    }

    /// Apparent geocentric ecliptic longitude/latitude (degrees) and distance (AU) of the Sun.
    fn apparent_sun(jd: f64) -> (f64, f64, f64) {
        let (ecliptic, distance) = astro::sun::geocent_ecl_pos(jd);
        let (nutation_in_longitude, _) = astro::nutation::nutation(jd);
        let aberration = -(ABERRATION_ARCSEC / 3600.0).to_radians() / distance;

        let longitude = (ecliptic.long + nutation_in_longitude + aberration)
            .to_degrees()
            .rem_euclid(360.0);
        let latitude = ecliptic.lat.to_degrees();
        (longitude, latitude, distance)
    }
}

impl Ephemeris for AnalyticalEphemeris {
    fn name(&self) -> &'static str {
        "vsop87"
    }

    fn data_path(&self) -> &Path {
        &self.config.data_path
    }

    fn date_to_julian_day(
        &self,
        year: i64,
        month: i64,
        day: i64,
        hour: f64,
        calendar: Calendar,
    ) -> EphemerisResult<JulianDay> {
        if !hour.is_finite() {
            return Err(EphemerisError::InvalidDate(format!("hour {} is not finite", hour)));
        }

        // Months outside 1..=12 roll over into neighbouring years, as the
        // Julian Day arithmetic would do anyway.
        let months = year
            .checked_mul(12)
            .and_then(|m| m.checked_add(month.checked_sub(1)?))
            .ok_or_else(|| EphemerisError::InvalidDate(format!("year {} out of range", year)))?;
        let norm_year = months.div_euclid(12);
        let norm_month = months.rem_euclid(12) + 1;

        let year = i16::try_from(norm_year)
            .ok()
            .filter(|y| *y > i16::MIN)
            .ok_or_else(|| EphemerisError::InvalidDate(format!("year {} out of range", norm_year)))?;

        let date = Date {
            year,
            month: norm_month as u8,
            decimal_day: day as f64 + hour / 24.0,
            cal_type: match calendar {
                Calendar::Gregorian => CalType::Gregorian,
                Calendar::Julian => CalType::Julian,
            },
        };

        Ok(JulianDay::new(astro::time::julian_day(&date)))
    }

    fn compute_body_position(
        &self,
        jd: JulianDay,
        body: Body,
        flags: CalcFlags,
    ) -> EphemerisResult<BodyPosition> {
        if !jd.is_finite() {
            return Err(EphemerisError::InvalidTime(jd.value()));
        }
        if !(MIN_JULIAN_DAY..=MAX_JULIAN_DAY).contains(&jd.value()) {
            return Err(EphemerisError::OutOfRange {
                jd: jd.value(),
                min: MIN_JULIAN_DAY,
                max: MAX_JULIAN_DAY,
            });
        }

        let jde = ephemeris_day(jd);

        match body {
            Body::Sun => {
                let (longitude, latitude, distance) = Self::apparent_sun(jde.value());
                let speed = if flags.contains(CalcFlags::SPEED) {
                    let (before, _, _) = Self::apparent_sun(jde.add_days(-SPEED_STEP_DAYS).value());
                    let (after, _, _) = Self::apparent_sun(jde.add_days(SPEED_STEP_DAYS).value());
                    wrap_degrees(after - before) / (2.0 * SPEED_STEP_DAYS)
                } else {
                    0.0
                };

                Ok(BodyPosition {
                    longitude,
                    latitude,
                    distance,
                    speed,
                })
            }
        }
    }
}

/// Convert a UT Julian Day to a Julian Ephemeris Day (TT) using the
/// ΔT model of the `astro` crate.
fn ephemeris_day(jd: JulianDay) -> JulianDay {
    let decimal_year = 2000.0 + (jd.value() - JulianDay::J2000.value()) / 365.25;
    let year = decimal_year.floor();
    let month = (((decimal_year - year) * 12.0).floor() as u8 + 1).clamp(1, 12);
    let delta_t = astro::time::delta_t(year as i32, month);
    JulianDay::new(astro::time::julian_ephemeris_day(jd.value(), delta_t))
}

/// Wrap an angular difference into `(-180, 180]`.
fn wrap_degrees(delta: f64) -> f64 {
    let wrapped = delta.rem_euclid(360.0);
    if wrapped > 180.0 {
        wrapped - 360.0
    } else {
        wrapped
    }
}

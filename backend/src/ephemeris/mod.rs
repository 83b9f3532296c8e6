//! Ephemeris collaborator interface.
//!
//! The service never computes positions itself. It talks to an [`Ephemeris`]
//! backend through two operations, mirroring the classic Swiss Ephemeris
//! entry points:
//!
//! - [`Ephemeris::date_to_julian_day`] (`swe_julday`)
//! - [`Ephemeris::compute_body_position`] (`swe_calc_ut`)
//!
//! Backends are configured once at construction through [`EphemerisConfig`]
//! and are immutable afterwards, so a single instance is shared across all
//! requests behind an `Arc`.

pub mod analytical;
pub mod error;

use std::path::{Path, PathBuf};

use bitflags::bitflags;
use serde::Serialize;

use crate::models::JulianDay;

pub use analytical::AnalyticalEphemeris;
pub use error::{EphemerisError, EphemerisResult};

/// Calendar used to interpret a civil date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Calendar {
    Gregorian,
    Julian,
}

/// Celestial body selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Body {
    Sun,
}

bitflags! {
    /// Computation flags, bit-compatible with the Swiss Ephemeris `SEFLG_*` values.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct CalcFlags: u32 {
        /// Use the high precision ephemeris data files (`SEFLG_SWIEPH`).
        const SWIEPH = 1 << 1;
        /// Include daily motion in the result (`SEFLG_SPEED`).
        const SPEED = 1 << 8;
    }
}

/// Geocentric ecliptic position of a body.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BodyPosition {
    /// Ecliptic longitude in degrees, `[0, 360)`.
    pub longitude: f64,
    /// Ecliptic latitude in degrees.
    pub latitude: f64,
    /// Distance in astronomical units.
    pub distance: f64,
    /// Speed in longitude, degrees per day. Zero unless [`CalcFlags::SPEED`] was requested.
    pub speed: f64,
}

/// Startup configuration for an ephemeris backend.
#[derive(Debug, Clone, PartialEq)]
pub struct EphemerisConfig {
    /// Directory holding ephemeris data files.
    pub data_path: PathBuf,
}

impl EphemerisConfig {
    pub fn new(data_path: impl Into<PathBuf>) -> Self {
        Self {
            data_path: data_path.into(),
        }
    }

    /// Whether the data directory exists and contains at least one entry.
    pub fn data_files_present(&self) -> bool {
        std::fs::read_dir(&self.data_path)
            .map(|mut entries| entries.next().is_some())
            .unwrap_or(false)
    }
}

/// An ephemeris backend.
pub trait Ephemeris: Send + Sync {
    /// Short identifier of the backend, reported by the health endpoint.
    fn name(&self) -> &'static str;

    /// Data directory this backend was configured with.
    fn data_path(&self) -> &Path;

    /// Convert a civil date and fractional hour (UT) to a Julian Day.
    fn date_to_julian_day(
        &self,
        year: i64,
        month: i64,
        day: i64,
        hour: f64,
        calendar: Calendar,
    ) -> EphemerisResult<JulianDay>;

    /// Compute the position of `body` at `jd` (UT).
    fn compute_body_position(
        &self,
        jd: JulianDay,
        body: Body,
        flags: CalcFlags,
    ) -> EphemerisResult<BodyPosition>;
}

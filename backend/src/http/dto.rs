//! Data Transfer Objects for the HTTP API.

use serde::Serialize;

pub use crate::models::DateSpec;
pub use crate::services::SunPosition;

/// Response for `POST /calculate-sun`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CalculateSunResponse {
    /// Date as requested, with `hour` defaulted to 0
    pub date: DateSpec,
    /// Computed position of the Sun
    pub sun: SunPosition,
}

/// Health check response.
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Status of the service
    pub status: String,
    /// Crate version
    pub version: String,
    /// Ephemeris backend details
    pub ephemeris: EphemerisStatus,
}

/// Ephemeris backend section of the health response.
#[derive(Debug, Clone, Serialize)]
pub struct EphemerisStatus {
    /// Backend identifier
    pub backend: String,
    /// Configured data directory
    pub data_path: String,
    /// Whether the data directory holds any files
    pub data_files_present: bool,
}

//! Errors reported by an ephemeris backend.

use thiserror::Error;

/// Result type for ephemeris operations.
pub type EphemerisResult<T> = Result<T, EphemerisError>;

/// Failure signalled by the ephemeris collaborator.
///
/// The `Display` text is what callers see after the
/// "Swiss Ephemeris calculation failed: " prefix.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EphemerisError {
    #[error("jd {jd:.6} outside of ephemeris range {min:.2} .. {max:.2};")]
    OutOfRange { jd: f64, min: f64, max: f64 },

    #[error("invalid Julian day {0}")]
    InvalidTime(f64),

    #[error("invalid date: {0}")]
    InvalidDate(String),
}

//! Service layer between the HTTP handlers and the ephemeris backend.

pub mod solar;

pub use solar::{compute_sun_position, SunPosition, SUN_FLAGS};

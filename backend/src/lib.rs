//! # Sunpos API
//!
//! HTTP service returning the apparent position of the Sun for a calendar date.
//!
//! A request carries a civil date (`year`, `month`, `day`, optional fractional
//! `hour` in UT). The service converts it to a Julian Day and asks an
//! ephemeris backend for the Sun's ecliptic longitude, latitude and daily
//! speed. The astronomy itself lives behind the [`ephemeris::Ephemeris`]
//! trait; the default backend delegates to the `astro` crate.
//!
//! ## Architecture
//!
//! - [`config`]: Server configuration (defaults, TOML file, environment)
//! - [`models`]: Request-scoped value types (`DateSpec`, `JulianDay`)
//! - [`ephemeris`]: Ephemeris backend interface and the analytical backend
//! - [`services`]: Date → position translation
//! - [`http`]: Axum-based HTTP server and request handlers

pub mod config;
pub mod ephemeris;
pub mod models;
pub mod services;

#[cfg(feature = "http-server")]
pub mod http;

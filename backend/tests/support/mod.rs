#![allow(dead_code)]

use std::collections::HashSet;
use std::path::Path;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use serde_json::Value;
use tower::ServiceExt;

use sunpos_api::ephemeris::{
    AnalyticalEphemeris, Body as CelestialBody, BodyPosition, CalcFlags, Calendar, Ephemeris,
    EphemerisConfig, EphemerisError, EphemerisResult,
};
use sunpos_api::http::{create_router, AppState};
use sunpos_api::models::JulianDay;

static ENV_LOCK: Mutex<()> = Mutex::new(());

/// Runs `f` with environment variables temporarily modified.
///
/// Restores the previous values on unwind and serializes access to the
/// process environment across parallel tests.
///
/// `changes` is a list of `(key, value)` pairs:
/// - `Some(v)` sets the variable to `v`
/// - `None` removes the variable
pub fn with_scoped_env<F, R>(changes: &[(&str, Option<&str>)], f: F) -> R
where
    F: FnOnce() -> R,
{
    let _lock = ENV_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
    let _guard = ScopedEnv::apply(changes);
    f()
}

struct ScopedEnv {
    saved: Vec<(String, Option<String>)>,
}

impl ScopedEnv {
    fn apply(changes: &[(&str, Option<&str>)]) -> Self {
        let keys: HashSet<&str> = changes.iter().map(|(k, _)| *k).collect();
        let saved = keys
            .into_iter()
            .map(|k| (k.to_string(), std::env::var(k).ok()))
            .collect();

        for (k, v) in changes {
            match v {
                Some(val) => std::env::set_var(k, val),
                None => std::env::remove_var(k),
            }
        }

        Self { saved }
    }
}

impl Drop for ScopedEnv {
    fn drop(&mut self) {
        for (k, v) in self.saved.drain(..) {
            match v {
                Some(val) => std::env::set_var(&k, val),
                None => std::env::remove_var(&k),
            }
        }
    }
}

/// Router backed by the real analytical ephemeris.
pub fn analytical_app() -> Router {
    app_with(Arc::new(AnalyticalEphemeris::new(EphemerisConfig::new("ephe"))))
}

pub fn app_with(ephemeris: Arc<dyn Ephemeris>) -> Router {
    create_router(AppState::new(ephemeris))
}

/// Issue a request and return the status with the raw body.
pub async fn send(app: Router, request: Request<Body>) -> (StatusCode, Vec<u8>) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, bytes.to_vec())
}

/// POST a raw JSON body to `/calculate-sun` and decode the JSON reply.
pub async fn calculate_sun(app: Router, body: &str) -> (StatusCode, Value) {
    calculate_sun_as(app, Some("application/json"), body).await
}

/// POST to `/calculate-sun` with an arbitrary (or no) content type.
pub async fn calculate_sun_as(app: Router, content_type: Option<&str>, body: &str) -> (StatusCode, Value) {
    let mut builder = Request::builder().method("POST").uri("/calculate-sun");
    if let Some(content_type) = content_type {
        builder = builder.header(header::CONTENT_TYPE, content_type);
    }
    let request = builder.body(Body::from(body.to_string())).unwrap();
    let (status, bytes) = send(app, request).await;
    (status, serde_json::from_slice(&bytes).unwrap())
}

/// Converts dates normally but fails every position computation.
pub struct FailingEphemeris {
    pub message: String,
}

impl Ephemeris for FailingEphemeris {
    fn name(&self) -> &'static str {
        "failing"
    }

    fn data_path(&self) -> &Path {
        Path::new("missing-ephe")
    }

    fn date_to_julian_day(&self, _: i64, _: i64, _: i64, _: f64, _: Calendar) -> EphemerisResult<JulianDay> {
        Ok(JulianDay::J2000)
    }

    fn compute_body_position(&self, _: JulianDay, _: CelestialBody, _: CalcFlags) -> EphemerisResult<BodyPosition> {
        Err(EphemerisError::InvalidDate(self.message.clone()))
    }
}

/// Panics inside the computation.
pub struct PanickingEphemeris;

impl Ephemeris for PanickingEphemeris {
    fn name(&self) -> &'static str {
        "panicking"
    }

    fn data_path(&self) -> &Path {
        Path::new("ephe")
    }

    fn date_to_julian_day(&self, _: i64, _: i64, _: i64, _: f64, _: Calendar) -> EphemerisResult<JulianDay> {
        panic!("corrupted ephemeris table");
    }

    fn compute_body_position(&self, _: JulianDay, _: CelestialBody, _: CalcFlags) -> EphemerisResult<BodyPosition> {
        panic!("corrupted ephemeris table");
    }
}

/// Sleeps before answering, to exercise the computation timeout.
pub struct SlowEphemeris {
    pub delay: Duration,
}

impl Ephemeris for SlowEphemeris {
    fn name(&self) -> &'static str {
        "slow"
    }

    fn data_path(&self) -> &Path {
        Path::new("ephe")
    }

    fn date_to_julian_day(&self, _: i64, _: i64, _: i64, _: f64, _: Calendar) -> EphemerisResult<JulianDay> {
        std::thread::sleep(self.delay);
        Ok(JulianDay::J2000)
    }

    fn compute_body_position(&self, _: JulianDay, _: CelestialBody, _: CalcFlags) -> EphemerisResult<BodyPosition> {
        Ok(BodyPosition {
            longitude: 280.0,
            latitude: 0.0,
            distance: 1.0,
            speed: 1.0,
        })
    }
}

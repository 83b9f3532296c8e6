//! Calendar date specification accepted by the solar position endpoint.
//!
//! Request bodies are decoded leniently: a required field counts as missing
//! when it is absent or holds a "falsy" JSON value (`null`, `false`, `0`,
//! `""`). Present values must still be well-typed numbers.

use serde::{Serialize, Serializer};
use serde_json::{Map, Value};
use thiserror::Error;

/// Message returned when any of `year`, `month` or `day` is missing.
pub const MISSING_DATE_PARAMETERS: &str = "Missing required date parameters (year, month, day).";

/// Rejection reasons for a date specification.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DateSpecError {
    #[error("{}", MISSING_DATE_PARAMETERS)]
    Missing,

    #[error("Invalid date parameter '{0}': expected an integer.")]
    NotAnInteger(&'static str),

    #[error("Invalid date parameter '{0}': expected a number.")]
    NotANumber(&'static str),
}

/// Civil calendar date and fractional hour (13.5 = 13:30).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DateSpec {
    pub year: i64,
    pub month: i64,
    pub day: i64,
    #[serde(serialize_with = "serialize_compact_f64")]
    pub hour: f64,
}

impl DateSpec {
    pub fn new(year: i64, month: i64, day: i64, hour: f64) -> Self {
        Self {
            year,
            month,
            day,
            hour,
        }
    }

    /// Extract a date specification from a decoded JSON request body.
    ///
    /// Non-object bodies are treated as an empty object.
    pub fn from_json(body: &Value) -> Result<Self, DateSpecError> {
        let empty = Map::new();
        let fields = body.as_object().unwrap_or(&empty);

        let year = fields.get("year");
        let month = fields.get("month");
        let day = fields.get("day");

        if [year, month, day].iter().any(|v| !is_truthy(*v)) {
            return Err(DateSpecError::Missing);
        }

        let hour = match fields.get("hour") {
            Some(v) if is_truthy(Some(v)) => v.as_f64().ok_or(DateSpecError::NotANumber("hour"))?,
            _ => 0.0,
        };

        Ok(Self {
            year: integer_field("year", year)?,
            month: integer_field("month", month)?,
            day: integer_field("day", day)?,
            hour,
        })
    }
}

fn is_truthy(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_f64().map_or(true, |f| f != 0.0),
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Array(_)) | Some(Value::Object(_)) => true,
    }
}

fn integer_field(name: &'static str, value: Option<&Value>) -> Result<i64, DateSpecError> {
    let value = value.ok_or(DateSpecError::Missing)?;
    if let Some(i) = value.as_i64() {
        return Ok(i);
    }
    match value.as_f64() {
        Some(f) if f.fract() == 0.0 && f.abs() < i64::MAX as f64 => Ok(f as i64),
        _ => Err(DateSpecError::NotAnInteger(name)),
    }
}

/// Serialize integral floats as JSON integers, so an hour of `12.0` echoes as `12`.
pub fn serialize_compact_f64<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < i64::MAX as f64 {
        serializer.serialize_i64(*value as i64)
    } else {
        serializer.serialize_f64(*value)
    }
}

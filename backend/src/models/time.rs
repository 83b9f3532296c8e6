use serde::{Deserialize, Serialize};

/// Julian Day number in Universal Time.
/// JD 2451545.0 = 2000-01-01 12:00:00 UT (J2000.0)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct JulianDay(f64);

impl JulianDay {
    /// Julian Day of the J2000.0 epoch.
    pub const J2000: JulianDay = JulianDay(2_451_545.0);

    /// Create a new JD value.
    pub fn new(v: f64) -> Self {
        Self(v)
    }

    /// Raw JD value as f64.
    pub fn value(&self) -> f64 {
        self.0
    }

    /// Shift by a (possibly fractional) number of days.
    pub fn add_days(&self, days: f64) -> Self {
        Self(self.0 + days)
    }

    pub fn is_finite(&self) -> bool {
        self.0.is_finite()
    }
}

impl From<f64> for JulianDay {
    fn from(v: f64) -> Self {
        JulianDay::new(v)
    }
}

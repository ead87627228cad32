//! # Unit Types
//!
//! Type-safe wrappers for the units a workout is measured in. These provide
//! compile-time safety against unit confusion while remaining lightweight
//! (just f64 wrappers).
//!
//! ## Design Philosophy
//!
//! We use simple newtype wrappers rather than a full units library because:
//! - Workouts use a small, fixed set of units
//! - We want JSON serialization to be clean (just numbers)
//! - Minimal runtime overhead
//!
//! ## Metric Units
//!
//! - Time: hours (h), minutes (min)
//! - Length: kilometres (km), metres (m), centimetres (cm)
//! - Mass: kilograms (kg)
//! - Speed: kilometres per hour (km/h)
//!
//! Conversions divide or multiply by the plain factor (`/ 1000`, `/ 100`,
//! `* 60`) so results match the formulas written out by hand bit for bit.
//!
//! ## Example
//!
//! ```rust
//! use fit_core::units::{Hours, Kilometers, Meters, Minutes};
//!
//! let duration = Hours(1.5);
//! let minutes: Minutes = duration.into();
//! assert_eq!(minutes.0, 90.0);
//!
//! let km: Kilometers = Meters(9750.0).into();
//! assert_eq!(km.0, 9.75);
//! ```

use serde::{Deserialize, Serialize};
use std::ops::{Div, Mul};

/// Metres in a kilometre
pub const M_IN_KM: f64 = 1000.0;

/// Centimetres in a metre
pub const CM_IN_M: f64 = 100.0;

/// Minutes in an hour
pub const MINUTES_IN_HOUR: f64 = 60.0;

// ============================================================================
// Time Units
// ============================================================================

/// Duration in hours
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Hours(pub f64);

/// Duration in minutes
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Minutes(pub f64);

impl From<Hours> for Minutes {
    fn from(h: Hours) -> Self {
        Minutes(h.0 * MINUTES_IN_HOUR)
    }
}

// ============================================================================
// Length Units
// ============================================================================

/// Length in kilometres
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Kilometers(pub f64);

/// Length in metres
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Meters(pub f64);

/// Length in centimetres
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Centimeters(pub f64);

impl From<Meters> for Kilometers {
    fn from(m: Meters) -> Self {
        Kilometers(m.0 / M_IN_KM)
    }
}

impl From<Centimeters> for Meters {
    fn from(cm: Centimeters) -> Self {
        Meters(cm.0 / CM_IN_M)
    }
}

// ============================================================================
// Mass Units
// ============================================================================

/// Body weight in kilograms
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Kilograms(pub f64);

// ============================================================================
// Speed Units
// ============================================================================

/// Speed in kilometres per hour
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KmPerHour(pub f64);

impl Div<Hours> for Kilometers {
    type Output = KmPerHour;
    fn div(self, rhs: Hours) -> Self::Output {
        KmPerHour(self.0 / rhs.0)
    }
}

impl Mul<f64> for Meters {
    type Output = Self;
    fn mul(self, rhs: f64) -> Self::Output {
        Meters(self.0 * rhs)
    }
}

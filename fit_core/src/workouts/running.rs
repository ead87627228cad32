//! # Running
//!
//! Running workouts are measured in steps. Calories follow a linear model of
//! mean speed, scaled by body weight and duration in minutes.
//!
//! ## Example
//!
//! ```rust
//! use fit_core::workouts::Running;
//!
//! let run = Running::new(15000, 1.0, 75.0).unwrap();
//! assert!((run.distance_km() - 9.75).abs() < 1e-9);
//! assert!((run.spent_calories() - 797.805).abs() < 1e-9);
//! ```

use serde::{Deserialize, Serialize};

use super::{WorkoutBase, WorkoutKind, LEN_STEP};
use crate::errors::{FitError, FitResult};
use crate::units::{Minutes, M_IN_KM};

/// Calories per km/h of mean speed
pub const CALORIES_MEAN_SPEED_MULTIPLIER: f64 = 18.0;

/// Constant calorie offset added to the speed term
pub const CALORIES_MEAN_SPEED_SHIFT: f64 = 1.79;

/// A running session.
///
/// ## JSON Example
///
/// ```json
/// {
///   "base": { "action": 15000, "duration_h": 1.0, "weight_kg": 75.0 }
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RunningReadings")]
pub struct Running {
    pub base: WorkoutBase,
}

/// Unvalidated JSON form of [`Running`]
#[derive(Deserialize)]
struct RunningReadings {
    base: WorkoutBase,
}

impl TryFrom<RunningReadings> for Running {
    type Error = FitError;

    fn try_from(readings: RunningReadings) -> FitResult<Self> {
        let running = Running { base: readings.base };
        running.validate()?;
        Ok(running)
    }
}

impl Running {
    /// Build a validated running session.
    pub fn new(action: u32, duration_h: f64, weight_kg: f64) -> FitResult<Self> {
        let running = Running {
            base: WorkoutBase::new(action, duration_h, weight_kg),
        };
        running.validate()?;
        Ok(running)
    }

    /// Validate input parameters.
    pub fn validate(&self) -> FitResult<()> {
        self.base.validate(WorkoutKind::Running)
    }

    /// Distance in kilometres
    pub fn distance_km(&self) -> f64 {
        self.base.distance(LEN_STEP).0
    }

    /// Mean speed in km/h
    pub fn mean_speed_kmh(&self) -> f64 {
        self.base.mean_speed(LEN_STEP).0
    }

    /// Calories burned:
    /// `(18 * speed + 1.79) * weight / M_IN_KM * duration_min`
    pub fn spent_calories(&self) -> f64 {
        let minutes: Minutes = self.base.duration_h.into();
        (CALORIES_MEAN_SPEED_MULTIPLIER * self.mean_speed_kmh() + CALORIES_MEAN_SPEED_SHIFT)
            * self.base.weight_kg.0
            / M_IN_KM
            * minutes.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_run() -> Running {
        Running::new(15000, 1.0, 75.0).unwrap()
    }

    #[test]
    fn test_distance_and_speed() {
        let run = test_run();
        // 15000 steps * 0.65 m = 9750 m
        assert!((run.distance_km() - 9.75).abs() < 1e-12);
        assert!((run.mean_speed_kmh() - 9.75).abs() < 1e-12);
    }

    #[test]
    fn test_calories() {
        let run = test_run();
        // (18 * 9.75 + 1.79) * 75 / 1000 * 60 = 797.805
        assert!((run.spent_calories() - 797.805).abs() < 1e-9);
    }

    #[test]
    fn test_half_hour_run() {
        let run = Running::new(6000, 0.5, 70.0).unwrap();
        // 3.9 km in 0.5 h = 7.8 km/h
        assert!((run.mean_speed_kmh() - 7.8).abs() < 1e-12);
        // (18 * 7.8 + 1.79) * 70 / 1000 * 30
        let expected = (18.0 * 7.8 + 1.79) * 70.0 / 1000.0 * 30.0;
        assert!((run.spent_calories() - expected).abs() < 1e-9);
    }

    #[test]
    fn test_invalid_duration() {
        assert!(Running::new(15000, 0.0, 75.0).is_err());
        assert!(Running::new(15000, -1.0, 75.0).is_err());
    }

    #[test]
    fn test_serialization() {
        let run = test_run();
        let json = serde_json::to_string_pretty(&run).unwrap();
        let roundtrip: Running = serde_json::from_str(&json).unwrap();
        assert_eq!(run, roundtrip);
    }

    #[test]
    fn test_deserialize_rejects_zero_duration() {
        let json = r#"{"base":{"action":15000,"duration_h":0.0,"weight_kg":75.0}}"#;
        let err = serde_json::from_str::<Running>(json).unwrap_err();
        assert!(err.to_string().contains("duration must be a positive number"));
    }
}

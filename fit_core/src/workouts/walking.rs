//! # Sports Walking
//!
//! Walking workouts are measured in steps. The calorie model combines a
//! weight term with a speed-squared-over-height term, so the walker's height
//! is part of the reading.

use serde::{Deserialize, Serialize};

use super::{require_positive, WorkoutBase, WorkoutKind, LEN_STEP};
use crate::errors::{FitError, FitResult};
use crate::units::{Centimeters, Meters, Minutes};

/// Weight coefficient of the resting term
pub const CALORIES_WEIGHT_MULTIPLIER: f64 = 0.035;

/// Weight coefficient of the speed/height term
pub const CALORIES_SPEED_HEIGHT_MULTIPLIER: f64 = 0.029;

/// km/h to m/s
pub const KMH_IN_MSEC: f64 = 0.278;

/// A sports walking session.
///
/// ## JSON Example
///
/// ```json
/// {
///   "base": { "action": 9000, "duration_h": 1.0, "weight_kg": 75.0 },
///   "height_cm": 180.0
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "SportsWalkingReadings")]
pub struct SportsWalking {
    pub base: WorkoutBase,

    /// Walker height in centimetres
    pub height_cm: Centimeters,
}

/// Unvalidated JSON form of [`SportsWalking`]
#[derive(Deserialize)]
struct SportsWalkingReadings {
    base: WorkoutBase,
    height_cm: Centimeters,
}

impl TryFrom<SportsWalkingReadings> for SportsWalking {
    type Error = FitError;

    fn try_from(readings: SportsWalkingReadings) -> FitResult<Self> {
        let walking = SportsWalking {
            base: readings.base,
            height_cm: readings.height_cm,
        };
        walking.validate()?;
        Ok(walking)
    }
}

impl SportsWalking {
    /// Build a validated walking session.
    pub fn new(action: u32, duration_h: f64, weight_kg: f64, height_cm: f64) -> FitResult<Self> {
        let walking = SportsWalking {
            base: WorkoutBase::new(action, duration_h, weight_kg),
            height_cm: Centimeters(height_cm),
        };
        walking.validate()?;
        Ok(walking)
    }

    /// Validate input parameters.
    pub fn validate(&self) -> FitResult<()> {
        self.base.validate(WorkoutKind::SportsWalking)?;
        require_positive(WorkoutKind::SportsWalking, "height", self.height_cm.0)
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
    /// `(0.035 * weight + ((speed * 0.278)^2 / height_m) * 0.029 * weight) * duration_min`
    pub fn spent_calories(&self) -> f64 {
        let weight = self.base.weight_kg.0;
        let height: Meters = self.height_cm.into();
        let minutes: Minutes = self.base.duration_h.into();
        let speed_msec = self.mean_speed_kmh() * KMH_IN_MSEC;

        (CALORIES_WEIGHT_MULTIPLIER * weight
            + (speed_msec.powi(2) / height.0) * CALORIES_SPEED_HEIGHT_MULTIPLIER * weight)
            * minutes.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_walk() -> SportsWalking {
        SportsWalking::new(9000, 1.0, 75.0, 180.0).unwrap()
    }

    #[test]
    fn test_distance_and_speed() {
        let walk = test_walk();
        assert!((walk.distance_km() - 5.85).abs() < 1e-12);
        assert!((walk.mean_speed_kmh() - 5.85).abs() < 1e-12);
    }

    #[test]
    fn test_calories() {
        let walk = test_walk();
        // (0.035 * 75 + ((5.85 * 0.278)^2 / 1.8) * 0.029 * 75) * 60
        let speed: f64 = 5.85 * 0.278;
        let expected = (0.035 * 75.0 + (speed * speed / 1.8) * 0.029 * 75.0) * 60.0;
        assert!((walk.spent_calories() - expected).abs() < 1e-9);
        assert!((walk.spent_calories() - 349.2517475).abs() < 1e-6);
    }

    #[test]
    fn test_taller_walker_burns_less() {
        let short = SportsWalking::new(9000, 1.0, 75.0, 160.0).unwrap();
        let tall = SportsWalking::new(9000, 1.0, 75.0, 200.0).unwrap();
        assert!(tall.spent_calories() < short.spent_calories());
    }

    #[test]
    fn test_invalid_height() {
        assert!(SportsWalking::new(9000, 1.0, 75.0, 0.0).is_err());
        assert!(SportsWalking::new(9000, 1.0, 75.0, f64::INFINITY).is_err());
    }

    #[test]
    fn test_deserialize_validates() {
        let walk = test_walk();
        let json = serde_json::to_string(&walk).unwrap();
        assert_eq!(serde_json::from_str::<SportsWalking>(&json).unwrap(), walk);

        let json = r#"{"base":{"action":9000,"duration_h":1.0,"weight_kg":75.0},"height_cm":0.0}"#;
        let err = serde_json::from_str::<SportsWalking>(json).unwrap_err();
        assert!(err.to_string().contains("height"));
    }
}

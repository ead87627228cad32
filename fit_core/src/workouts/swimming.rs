//! # Swimming
//!
//! Swimming workouts count strokes, but mean speed comes from the pool:
//! pool length times laps swum, over duration. Distance still uses the
//! stroke count, so the two can disagree.

use serde::{Deserialize, Serialize};

use super::{require_positive, WorkoutBase, WorkoutKind, SWIM_LEN_STEP};
use crate::errors::{FitError, FitResult};
use crate::units::{Kilometers, Meters};

/// Speed offset of the calorie model
pub const CALORIES_SPEED_SHIFT: f64 = 1.1;

/// Weight multiplier of the calorie model
pub const CALORIES_WEIGHT_MULTIPLIER: f64 = 2.0;

/// A pool swimming session.
///
/// ## JSON Example
///
/// ```json
/// {
///   "base": { "action": 720, "duration_h": 1.0, "weight_kg": 80.0 },
///   "length_pool_m": 25.0,
///   "count_pool": 40
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "SwimmingReadings")]
pub struct Swimming {
    pub base: WorkoutBase,

    /// Pool length in metres
    pub length_pool_m: Meters,

    /// Number of pool lengths swum
    pub count_pool: u32,
}

/// Unvalidated JSON form of [`Swimming`]
#[derive(Deserialize)]
struct SwimmingReadings {
    base: WorkoutBase,
    length_pool_m: Meters,
    count_pool: u32,
}

impl TryFrom<SwimmingReadings> for Swimming {
    type Error = FitError;

    fn try_from(readings: SwimmingReadings) -> FitResult<Self> {
        let swimming = Swimming {
            base: readings.base,
            length_pool_m: readings.length_pool_m,
            count_pool: readings.count_pool,
        };
        swimming.validate()?;
        Ok(swimming)
    }
}

impl Swimming {
    /// Build a validated swimming session.
    pub fn new(
        action: u32,
        duration_h: f64,
        weight_kg: f64,
        length_pool_m: f64,
        count_pool: u32,
    ) -> FitResult<Self> {
        let swimming = Swimming {
            base: WorkoutBase::new(action, duration_h, weight_kg),
            length_pool_m: Meters(length_pool_m),
            count_pool,
        };
        swimming.validate()?;
        Ok(swimming)
    }

    /// Validate input parameters.
    pub fn validate(&self) -> FitResult<()> {
        self.base.validate(WorkoutKind::Swimming)?;
        require_positive(WorkoutKind::Swimming, "length_pool", self.length_pool_m.0)
    }

    /// Distance in kilometres, from the stroke count
    pub fn distance_km(&self) -> f64 {
        self.base.distance(SWIM_LEN_STEP).0
    }

    /// Mean speed in km/h: `length_pool * count_pool / M_IN_KM / duration`
    pub fn mean_speed_kmh(&self) -> f64 {
        let swum: Kilometers = (self.length_pool_m * self.count_pool as f64).into();
        (swum / self.base.duration_h).0
    }

    /// Calories burned: `(speed + 1.1) * 2 * weight * duration`
    pub fn spent_calories(&self) -> f64 {
        (self.mean_speed_kmh() + CALORIES_SPEED_SHIFT)
            * CALORIES_WEIGHT_MULTIPLIER
            * self.base.weight_kg.0
            * self.base.duration_h.0
    }
}

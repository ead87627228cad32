//! # Workout Summary
//!
//! The read-only result of a workout and its one-line text rendering.
//!
//! ## Example
//!
//! ```rust
//! use fit_core::summary::WorkoutSummary;
//!
//! let summary = WorkoutSummary {
//!     kind: "Running".to_string(),
//!     duration_h: 1.0,
//!     distance_km: 9.75,
//!     speed_kmh: 9.75,
//!     calories: 797.805,
//! };
//! assert_eq!(
//!     summary.message(),
//!     "Workout type: Running; Duration: 1.000 h.; Distance: 9.750 km; \
//!      Avg. speed: 9.750 km/h; Calories burned: 797.805."
//! );
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

/// Derived values of one workout.
///
/// ## JSON Example
///
/// ```json
/// {
///   "kind": "Swimming",
///   "duration_h": 1.0,
///   "distance_km": 0.9936,
///   "speed_kmh": 1.0,
///   "calories": 336.0
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutSummary {
    /// Workout label (e.g., "Running", "SportsWalking")
    pub kind: String,

    /// Duration in hours
    pub duration_h: f64,

    /// Distance in kilometres
    pub distance_km: f64,

    /// Mean speed in km/h
    pub speed_kmh: f64,

    /// Calories burned (kcal)
    pub calories: f64,
}

impl WorkoutSummary {
    /// Render the summary line. Every number has exactly three decimals.
    pub fn message(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for WorkoutSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Workout type: {}; Duration: {:.3} h.; Distance: {:.3} km; \
             Avg. speed: {:.3} km/h; Calories burned: {:.3}.",
            self.kind, self.duration_h, self.distance_km, self.speed_kmh, self.calories
        )
    }
}

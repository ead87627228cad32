//! # Workouts
//!
//! The workout model and its formula engine. Each workout follows the
//! pattern:
//!
//! - a struct holding the sensor readings (JSON-serializable)
//! - `validate()` rejecting readings no formula can use
//! - `distance_km()`, `mean_speed_kmh()`, `spent_calories()` as pure functions
//!
//! [`Workout`] wraps the variants in a single tagged enum, so a batch of
//! mixed workouts can be stored and summarised uniformly.
//!
//! ## Available Workouts
//!
//! - [`running`] - Running, measured in steps
//! - [`walking`] - Sports walking, measured in steps plus the walker's height
//! - [`swimming`] - Pool swimming, measured in strokes plus pool geometry
//!
//! ## Example
//!
//! ```rust
//! use fit_core::workouts::{Running, Workout};
//!
//! let workout = Workout::Running(Running::new(15000, 1.0, 75.0).unwrap());
//! let summary = workout.show_training_info();
//! assert_eq!(summary.kind, "Running");
//! assert!((summary.distance_km - 9.75).abs() < 1e-9);
//! ```

pub mod running;
pub mod swimming;
pub mod walking;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::{FitError, FitResult};
use crate::summary::WorkoutSummary;
use crate::units::{Hours, Kilograms, Kilometers, KmPerHour, Meters};

pub use running::Running;
pub use swimming::Swimming;
pub use walking::SportsWalking;

/// Metres covered by one running or walking step
pub const LEN_STEP: f64 = 0.65;

/// Metres covered by one swimming stroke
pub const SWIM_LEN_STEP: f64 = 1.38;

/// The kinds of workout a sensor package can describe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WorkoutKind {
    Running,
    SportsWalking,
    Swimming,
}

impl WorkoutKind {
    /// Look up a kind by its sensor code (`"RUN"`, `"WLK"`, `"SWM"`).
    ///
    /// Codes are matched exactly.
    pub fn from_code(code: &str) -> FitResult<Self> {
        match code {
            "RUN" => Ok(WorkoutKind::Running),
            "WLK" => Ok(WorkoutKind::SportsWalking),
            "SWM" => Ok(WorkoutKind::Swimming),
            other => Err(FitError::invalid_workout_type(other)),
        }
    }

    /// Sensor code for this kind
    pub fn code(self) -> &'static str {
        match self {
            WorkoutKind::Running => "RUN",
            WorkoutKind::SportsWalking => "WLK",
            WorkoutKind::Swimming => "SWM",
        }
    }

    /// Label printed in the workout summary
    pub fn label(self) -> &'static str {
        match self {
            WorkoutKind::Running => "Running",
            WorkoutKind::SportsWalking => "SportsWalking",
            WorkoutKind::Swimming => "Swimming",
        }
    }

    /// Positional argument names, in sensor order
    pub fn argument_names(self) -> &'static [&'static str] {
        match self {
            WorkoutKind::Running => &["action", "duration", "weight"],
            WorkoutKind::SportsWalking => &["action", "duration", "weight", "height"],
            WorkoutKind::Swimming => &["action", "duration", "weight", "length_pool", "count_pool"],
        }
    }

    /// Number of positional arguments a package of this kind carries
    pub fn arity(self) -> usize {
        self.argument_names().len()
    }
}

impl std::fmt::Display for WorkoutKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Readings shared by every workout.
///
/// ## JSON Example
///
/// ```json
/// {
///   "action": 15000,
///   "duration_h": 1.0,
///   "weight_kg": 75.0
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WorkoutBase {
    /// Steps or strokes counted by the sensor
    pub action: u32,

    /// Workout duration in hours
    pub duration_h: Hours,

    /// Athlete body weight in kilograms
    pub weight_kg: Kilograms,
}

impl WorkoutBase {
    pub fn new(action: u32, duration_h: f64, weight_kg: f64) -> Self {
        WorkoutBase {
            action,
            duration_h: Hours(duration_h),
            weight_kg: Kilograms(weight_kg),
        }
    }

    /// Validate the shared readings for a workout of `kind`.
    pub fn validate(&self, kind: WorkoutKind) -> FitResult<()> {
        require_positive(kind, "duration", self.duration_h.0)?;
        require_positive(kind, "weight", self.weight_kg.0)?;
        Ok(())
    }

    /// Distance covered: `action * len_step / M_IN_KM`
    pub fn distance(&self, len_step: f64) -> Kilometers {
        Meters(self.action as f64 * len_step).into()
    }

    /// Default mean speed: distance over duration
    pub fn mean_speed(&self, len_step: f64) -> KmPerHour {
        self.distance(len_step) / self.duration_h
    }
}

/// Reject values that are not finite and strictly positive.
pub(crate) fn require_positive(kind: WorkoutKind, field: &str, value: f64) -> FitResult<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(FitError::invalid_arguments(
            kind.code(),
            format!("{} must be a positive number, got {}", field, value),
        ));
    }
    Ok(())
}

/// A single workout session.
///
/// Serialized with a `"type"` tag so heterogeneous batches stay readable.
/// Deserializing runs the same validation as the constructors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Workout {
    Running(Running),
    SportsWalking(SportsWalking),
    Swimming(Swimming),
}

impl Workout {
    /// Kind of this workout
    pub fn kind(&self) -> WorkoutKind {
        match self {
            Workout::Running(_) => WorkoutKind::Running,
            Workout::SportsWalking(_) => WorkoutKind::SportsWalking,
            Workout::Swimming(_) => WorkoutKind::Swimming,
        }
    }

    /// Readings shared by every variant
    pub fn base(&self) -> &WorkoutBase {
        match self {
            Workout::Running(w) => &w.base,
            Workout::SportsWalking(w) => &w.base,
            Workout::Swimming(w) => &w.base,
        }
    }

    /// Validate all readings.
    pub fn validate(&self) -> FitResult<()> {
        match self {
            Workout::Running(w) => w.validate(),
            Workout::SportsWalking(w) => w.validate(),
            Workout::Swimming(w) => w.validate(),
        }
    }

    /// Distance covered in kilometres
    pub fn distance_km(&self) -> f64 {
        match self {
            Workout::Running(w) => w.distance_km(),
            Workout::SportsWalking(w) => w.distance_km(),
            Workout::Swimming(w) => w.distance_km(),
        }
    }

    /// Mean speed in km/h
    pub fn mean_speed_kmh(&self) -> f64 {
        match self {
            Workout::Running(w) => w.mean_speed_kmh(),
            Workout::SportsWalking(w) => w.mean_speed_kmh(),
            Workout::Swimming(w) => w.mean_speed_kmh(),
        }
    }

    /// Calories burned (kcal)
    pub fn spent_calories(&self) -> f64 {
        match self {
            Workout::Running(w) => w.spent_calories(),
            Workout::SportsWalking(w) => w.spent_calories(),
            Workout::Swimming(w) => w.spent_calories(),
        }
    }

    /// Collect every derived value into a summary.
    pub fn show_training_info(&self) -> WorkoutSummary {
        let summary = WorkoutSummary {
            kind: self.kind().label().to_string(),
            duration_h: self.base().duration_h.0,
            distance_km: self.distance_km(),
            speed_kmh: self.mean_speed_kmh(),
            calories: self.spent_calories(),
        };
        debug!(
            kind = %self.kind(),
            distance_km = summary.distance_km,
            calories = summary.calories,
            "computed workout summary"
        );
        summary
    }
}

impl From<&Workout> for WorkoutSummary {
    fn from(workout: &Workout) -> Self {
        workout.show_training_info()
    }
}

impl From<Running> for Workout {
    fn from(w: Running) -> Self {
        Workout::Running(w)
    }
}

impl From<SportsWalking> for Workout {
    fn from(w: SportsWalking) -> Self {
        Workout::SportsWalking(w)
    }
}

impl From<Swimming> for Workout {
    fn from(w: Swimming) -> Self {
        Workout::Swimming(w)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_codes() {
        for kind in [WorkoutKind::Running, WorkoutKind::SportsWalking, WorkoutKind::Swimming] {
            assert_eq!(WorkoutKind::from_code(kind.code()).unwrap(), kind);
        }
        assert_eq!(WorkoutKind::Running.arity(), 3);
        assert_eq!(WorkoutKind::SportsWalking.arity(), 4);
        assert_eq!(WorkoutKind::Swimming.arity(), 5);
    }

    #[test]
    fn test_unknown_code() {
        let err = WorkoutKind::from_code("XYZ").unwrap_err();
        assert_eq!(err, FitError::invalid_workout_type("XYZ"));

        // Codes are case sensitive
        assert!(WorkoutKind::from_code("run").is_err());
    }

    #[test]
    fn test_base_distance_and_speed() {
        let base = WorkoutBase::new(15000, 2.0, 75.0);
        assert!((base.distance(LEN_STEP).0 - 9.75).abs() < 1e-12);
        assert!((base.mean_speed(LEN_STEP).0 - 4.875).abs() < 1e-12);
    }

    #[test]
    fn test_base_validation() {
        assert!(WorkoutBase::new(0, 1.0, 75.0).validate(WorkoutKind::Running).is_ok());
        assert!(WorkoutBase::new(100, 0.0, 75.0).validate(WorkoutKind::Running).is_err());
        assert!(WorkoutBase::new(100, 1.0, -1.0).validate(WorkoutKind::Running).is_err());
        assert!(WorkoutBase::new(100, f64::NAN, 75.0).validate(WorkoutKind::Running).is_err());
    }

    #[test]
    fn test_summary_labels() {
        let workouts: Vec<Workout> = vec![
            Running::new(15000, 1.0, 75.0).unwrap().into(),
            SportsWalking::new(9000, 1.0, 75.0, 180.0).unwrap().into(),
            Swimming::new(720, 1.0, 80.0, 25.0, 40).unwrap().into(),
        ];
        let labels: Vec<String> = workouts
            .iter()
            .map(|w| WorkoutSummary::from(w).kind)
            .collect();
        assert_eq!(labels, vec!["Running", "SportsWalking", "Swimming"]);
    }

    #[test]
    fn test_non_negative_results() {
        let workouts: Vec<Workout> = vec![
            Running::new(0, 0.5, 60.0).unwrap().into(),
            SportsWalking::new(1, 3.0, 50.0, 150.0).unwrap().into(),
            Swimming::new(0, 0.25, 90.0, 50.0, 0).unwrap().into(),
        ];
        for workout in &workouts {
            assert!(workout.distance_km() >= 0.0);
            assert!(workout.mean_speed_kmh() >= 0.0);
            assert!(workout.spent_calories() >= 0.0);
        }
    }

    #[test]
    fn test_serialization() {
        let workout: Workout = Swimming::new(720, 1.0, 80.0, 25.0, 40).unwrap().into();
        let json = serde_json::to_string(&workout).unwrap();
        assert!(json.contains(r#""type":"Swimming""#));

        let roundtrip: Workout = serde_json::from_str(&json).unwrap();
        assert_eq!(workout, roundtrip);
    }

    #[test]
    fn test_deserialize_rejects_invalid_readings() {
        let json = r#"{"type":"Running","base":{"action":100,"duration_h":0.0,"weight_kg":70.0}}"#;
        let err = serde_json::from_str::<Workout>(json).unwrap_err();
        assert!(err.to_string().contains("duration"));

        let json = r#"{"type":"Running","base":{"action":100,"duration_h":0.5,"weight_kg":70.0}}"#;
        let workout: Workout = serde_json::from_str(json).unwrap();
        assert!(workout.validate().is_ok());
        assert!(workout.mean_speed_kmh().is_finite());
    }
}

//! # Sensor Packages
//!
//! A sensor package is a workout code plus positional readings. This module
//! turns packages into [`Workout`]s and runs whole batches.
//!
//! | code  | arguments                                        |
//! |-------|--------------------------------------------------|
//! | `RUN` | action, duration, weight                         |
//! | `WLK` | action, duration, weight, height                 |
//! | `SWM` | action, duration, weight, length_pool, count_pool |
//!
//! ## Example
//!
//! ```rust
//! use fit_core::packages::{process_packages, read_package, SensorPackage};
//!
//! let workout = read_package("RUN", &[15000.0, 1.0, 75.0]).unwrap();
//! assert_eq!(workout.kind().label(), "Running");
//!
//! let results = process_packages(&[
//!     SensorPackage::new("XYZ", vec![1.0]),
//!     SensorPackage::new("SWM", vec![720.0, 1.0, 80.0, 25.0, 40.0]),
//! ]);
//! assert!(results[0].is_err());
//! assert!(results[1].is_ok());
//! ```

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::errors::{FitError, FitResult};
use crate::summary::WorkoutSummary;
use crate::workouts::{Running, SportsWalking, Swimming, Workout, WorkoutKind};

/// One `(code, readings)` pair as delivered by a sensor.
///
/// ## JSON Example
///
/// ```json
/// { "workout_type": "WLK", "data": [9000, 1, 75, 180] }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensorPackage {
    /// Workout code (`RUN`, `WLK`, `SWM`)
    pub workout_type: String,

    /// Positional readings, layout depends on the code
    pub data: Vec<f64>,
}

impl SensorPackage {
    pub fn new(workout_type: impl Into<String>, data: Vec<f64>) -> Self {
        SensorPackage {
            workout_type: workout_type.into(),
            data,
        }
    }

    /// Build the workout this package describes.
    pub fn read(&self) -> FitResult<Workout> {
        read_package(&self.workout_type, &self.data)
    }
}

/// Build a workout from a code and its positional readings.
///
/// # Returns
///
/// * `Ok(Workout)` - A validated workout
/// * `Err(FitError::InvalidWorkoutType)` - Unknown code
/// * `Err(FitError::InvalidArguments)` - Wrong count, or a reading of the wrong kind
pub fn read_package(code: &str, data: &[f64]) -> FitResult<Workout> {
    let kind = WorkoutKind::from_code(code)?;
    let args = PackageArgs::new(kind, data)?;

    let workout = match kind {
        WorkoutKind::Running => Running::new(args.count(0)?, data[1], data[2])?.into(),
        WorkoutKind::SportsWalking => {
            SportsWalking::new(args.count(0)?, data[1], data[2], data[3])?.into()
        }
        WorkoutKind::Swimming => {
            Swimming::new(args.count(0)?, data[1], data[2], data[3], args.count(4)?)?.into()
        }
    };
    Ok(workout)
}

/// Summarise every package in order.
///
/// Each package gets its own result; a bad package is logged and reported
/// but never stops the ones after it.
pub fn process_packages(packages: &[SensorPackage]) -> Vec<FitResult<WorkoutSummary>> {
    packages
        .iter()
        .enumerate()
        .map(|(index, package)| {
            package.read().map(|w| w.show_training_info()).inspect_err(|e| {
                warn!(
                    index,
                    workout_type = %package.workout_type,
                    code = e.error_code(),
                    "rejected sensor package: {}",
                    e
                );
            })
        })
        .collect()
}

/// Positional readings checked against a kind's arity.
struct PackageArgs<'a> {
    kind: WorkoutKind,
    data: &'a [f64],
}

impl<'a> PackageArgs<'a> {
    fn new(kind: WorkoutKind, data: &'a [f64]) -> FitResult<Self> {
        if data.len() != kind.arity() {
            return Err(FitError::invalid_arguments(
                kind.code(),
                format!(
                    "expected {} arguments ({}), got {}",
                    kind.arity(),
                    kind.argument_names().join(", "),
                    data.len()
                ),
            ));
        }
        Ok(PackageArgs { kind, data })
    }

    /// Reading at `index` as a whole, non-negative count.
    fn count(&self, index: usize) -> FitResult<u32> {
        let value = self.data[index];
        if !value.is_finite() || value < 0.0 || value.fract() != 0.0 || value > u32::MAX as f64 {
            return Err(FitError::invalid_arguments(
                self.kind.code(),
                format!(
                    "{} must be a whole non-negative number, got {}",
                    self.kind.argument_names()[index],
                    value
                ),
            ));
        }
        Ok(value as u32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_each_kind() {
        let run = read_package("RUN", &[15000.0, 1.0, 75.0]).unwrap();
        assert_eq!(run, Workout::Running(Running::new(15000, 1.0, 75.0).unwrap()));

        let walk = read_package("WLK", &[9000.0, 1.0, 75.0, 180.0]).unwrap();
        assert_eq!(walk.kind(), WorkoutKind::SportsWalking);

        let swim = read_package("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0]).unwrap();
        match swim {
            Workout::Swimming(s) => assert_eq!(s.count_pool, 40),
            other => panic!("expected swimming, got {:?}", other),
        }
    }

    #[test]
    fn test_unknown_code() {
        let err = read_package("XYZ", &[1.0, 2.0, 3.0]).unwrap_err();
        assert_eq!(err, FitError::invalid_workout_type("XYZ"));
    }

    #[test]
    fn test_wrong_arity() {
        let err = read_package("RUN", &[15000.0, 1.0]).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_ARGUMENTS");
        assert!(err.to_string().contains("expected 3 arguments"));

        assert!(read_package("WLK", &[9000.0, 1.0, 75.0]).is_err());
        assert!(read_package("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0, 1.0]).is_err());
    }

    #[test]
    fn test_wrong_argument_kind() {
        // Fractional step count
        let err = read_package("RUN", &[150.5, 1.0, 75.0]).unwrap_err();
        assert!(err.to_string().contains("action"));

        // Negative laps
        let err = read_package("SWM", &[720.0, 1.0, 80.0, 25.0, -40.0]).unwrap_err();
        assert!(err.to_string().contains("count_pool"));

        // Zero duration
        assert!(read_package("WLK", &[9000.0, 0.0, 75.0, 180.0]).is_err());
    }

    #[test]
    fn test_batch_continues_after_error() {
        let packages = vec![
            SensorPackage::new("RUN", vec![15000.0, 1.0, 75.0]),
            SensorPackage::new("XYZ", vec![1.0]),
            SensorPackage::new("WLK", vec![9000.0, 1.0]),
            SensorPackage::new("SWM", vec![720.0, 1.0, 80.0, 25.0, 40.0]),
        ];
        let results = process_packages(&packages);
        assert_eq!(results.len(), 4);

        assert_eq!(results[0].as_ref().unwrap().kind, "Running");
        assert!(matches!(results[1], Err(FitError::InvalidWorkoutType { .. })));
        assert!(matches!(results[2], Err(FitError::InvalidArguments { .. })));
        assert_eq!(results[3].as_ref().unwrap().kind, "Swimming");
    }

    #[test]
    fn test_reference_messages() {
        let packages = vec![
            SensorPackage::new("SWM", vec![720.0, 1.0, 80.0, 25.0, 40.0]),
            SensorPackage::new("RUN", vec![15000.0, 1.0, 75.0]),
            SensorPackage::new("WLK", vec![9000.0, 1.0, 75.0, 180.0]),
        ];
        let messages: Vec<String> = process_packages(&packages)
            .into_iter()
            .map(|r| r.unwrap().message())
            .collect();

        assert_eq!(
            messages,
            vec![
                "Workout type: Swimming; Duration: 1.000 h.; Distance: 0.994 km; \
                 Avg. speed: 1.000 km/h; Calories burned: 336.000.",
                "Workout type: Running; Duration: 1.000 h.; Distance: 9.750 km; \
                 Avg. speed: 9.750 km/h; Calories burned: 797.805.",
                "Workout type: SportsWalking; Duration: 1.000 h.; Distance: 5.850 km; \
                 Avg. speed: 5.850 km/h; Calories burned: 349.252.",
            ]
        );
    }

    #[test]
    fn test_package_serialization() {
        let package = SensorPackage::new("WLK", vec![9000.0, 1.0, 75.0, 180.0]);
        let json = serde_json::to_string(&package).unwrap();
        let roundtrip: SensorPackage = serde_json::from_str(&json).unwrap();
        assert_eq!(package, roundtrip);
    }
}

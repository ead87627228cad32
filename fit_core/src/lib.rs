//! # fit_core - Workout Calculation Engine
//!
//! `fit_core` turns raw sensor packages (a workout code plus positional
//! readings) into workout summaries: distance, mean speed and calories
//! burned. All inputs and outputs are JSON-serializable.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **JSON-First**: All types implement Serialize/Deserialize
//! - **Rich Errors**: Structured error types, not just strings
//!
//! ## Quick Start
//!
//! ```rust
//! use fit_core::packages::read_package;
//!
//! let workout = read_package("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0]).unwrap();
//! let summary = workout.show_training_info();
//!
//! assert_eq!(
//!     summary.message(),
//!     "Workout type: Swimming; Duration: 1.000 h.; Distance: 0.994 km; \
//!      Avg. speed: 1.000 km/h; Calories burned: 336.000."
//! );
//! ```
//!
//! ## Modules
//!
//! - [`workouts`] - Workout variants and their formulas
//! - [`packages`] - Sensor package dispatch and batch processing
//! - [`summary`] - Summary values and the text template
//! - [`units`] - Type-safe unit wrappers
//! - [`errors`] - Structured error types
//! - [`file_io`] - Loading package batches from JSON

pub mod errors;
pub mod file_io;
pub mod packages;
pub mod summary;
pub mod units;
pub mod workouts;

// Re-export commonly used types at crate root for convenience
pub use errors::{FitError, FitResult};
pub use file_io::{demo_packages, load_packages, parse_packages};
pub use packages::{process_packages, read_package, SensorPackage};
pub use summary::WorkoutSummary;
pub use workouts::{Workout, WorkoutKind};

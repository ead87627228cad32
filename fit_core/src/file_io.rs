//! # File I/O Module
//!
//! Reads batches of sensor packages from JSON. Nothing is ever written back.
//!
//! ## File Format
//!
//! A JSON array where each entry is either an object or a `[code, data]` pair:
//!
//! ```json
//! [
//!   { "workout_type": "SWM", "data": [720, 1, 80, 25, 40] },
//!   ["RUN", [15000, 1, 75]]
//! ]
//! ```
//!
//! ## Example
//!
//! ```rust
//! use fit_core::file_io::parse_packages;
//!
//! let packages = parse_packages(r#"[["RUN", [15000, 1, 75]]]"#).unwrap();
//! assert_eq!(packages[0].workout_type, "RUN");
//! assert_eq!(packages[0].data, vec![15000.0, 1.0, 75.0]);
//! ```

use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::errors::{FitError, FitResult};
use crate::packages::SensorPackage;

/// Either accepted spelling of a package
#[derive(Deserialize)]
#[serde(untagged)]
enum PackageEntry {
    Object(SensorPackage),
    Pair(String, Vec<f64>),
}

impl From<PackageEntry> for SensorPackage {
    fn from(entry: PackageEntry) -> Self {
        match entry {
            PackageEntry::Object(package) => package,
            PackageEntry::Pair(workout_type, data) => SensorPackage { workout_type, data },
        }
    }
}

/// Parse a JSON array of sensor packages.
pub fn parse_packages(json: &str) -> FitResult<Vec<SensorPackage>> {
    let entries: Vec<PackageEntry> =
        serde_json::from_str(json).map_err(|e| FitError::serialization(e.to_string()))?;
    Ok(entries.into_iter().map(SensorPackage::from).collect())
}

/// Load sensor packages from a JSON file.
///
/// # Returns
///
/// * `Ok(Vec<SensorPackage>)` - Packages in file order
/// * `Err(FitError::FileError)` - The file could not be read
/// * `Err(FitError::SerializationError)` - The contents are not a package array
pub fn load_packages(path: &Path) -> FitResult<Vec<SensorPackage>> {
    let contents = fs::read_to_string(path)
        .map_err(|e| FitError::file_error("read", path.display().to_string(), e.to_string()))?;

    let packages = parse_packages(&contents)?;
    debug!(path = %path.display(), count = packages.len(), "loaded sensor packages");
    Ok(packages)
}

/// The reference batch: one swim, one run, one walk.
pub fn demo_packages() -> Vec<SensorPackage> {
    vec![
        SensorPackage::new("SWM", vec![720.0, 1.0, 80.0, 25.0, 40.0]),
        SensorPackage::new("RUN", vec![15000.0, 1.0, 75.0]),
        SensorPackage::new("WLK", vec![9000.0, 1.0, 75.0, 180.0]),
    ]
}

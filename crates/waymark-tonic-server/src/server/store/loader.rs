//! Loader for the JSON feature database.
//!
//! Reads the `route_guide_db.json` format:
//!
//! ```json
//! {"feature": [{"location": {"latitude": 0, "longitude": 0}, "name": "..."}]}
//! ```
//!
//! Loading happens once at startup. Any failure is fatal: the service must
//! never come up with a partially loaded store.

use serde::Deserialize;
use std::path::Path;
use waymark_tonic_core::proto::{Feature, Point};

/// Startup-fatal errors while reading the feature database.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("failed to read feature database: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed feature database: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Deserialize)]
struct FeatureDatabase {
    #[serde(default)]
    feature: Vec<RawFeature>,
}

#[derive(Deserialize)]
struct RawFeature {
    #[serde(default)]
    name: String,
    location: RawLocation,
}

#[derive(Deserialize)]
struct RawLocation {
    latitude: i32,
    longitude: i32,
}

/// Loads the feature database from `path`, preserving file order.
pub fn load_features(path: &Path) -> Result<Vec<Feature>, LoadError> {
    let raw = std::fs::read_to_string(path)?;
    parse_features(&raw)
}

/// Parses a feature database document, preserving document order.
pub fn parse_features(json: &str) -> Result<Vec<Feature>, LoadError> {
    let database: FeatureDatabase = serde_json::from_str(json)?;
    Ok(database
        .feature
        .into_iter()
        .map(|raw| Feature {
            name: raw.name,
            location: Some(Point {
                latitude: raw.location.latitude,
                longitude: raw.location.longitude,
            }),
        })
        .collect())
}

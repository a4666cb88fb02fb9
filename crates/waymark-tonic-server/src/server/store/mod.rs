//! The immutable feature store and its query surface.
//!
//! The store is built once at startup from the JSON feature database and is
//! never mutated afterwards, so concurrent handlers read it without any
//! synchronization. Dataset order is preserved end to end: it is the order
//! features are listed in, which callers observe.

pub mod loader;
pub mod query;

use crate::server::store::query::Bounds;
use waymark_tonic_core::proto::{Feature, Point};

/// Process-lifetime list of named, located features with exact point lookup.
#[derive(Debug, Default)]
pub struct FeatureStore {
    features: Vec<Feature>,
}

impl FeatureStore {
    pub fn new(features: Vec<Feature>) -> Self {
        Self { features }
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    /// The feature located exactly at `location`.
    ///
    /// A miss is not an error: it answers with the empty-name sentinel
    /// carrying the queried location.
    pub fn lookup(&self, location: &Point) -> Feature {
        self.features
            .iter()
            .find(|feature| feature.location == Some(*location))
            .cloned()
            .unwrap_or_else(|| Feature {
                name: String::new(),
                location: Some(*location),
            })
    }

    /// All features in dataset order, sentinels included.
    pub fn iter(&self) -> impl Iterator<Item = &Feature> {
        self.features.iter()
    }

    /// Named features inside `bounds`, in dataset order. Edges are
    /// inclusive on all four sides.
    pub fn within<'a>(&'a self, bounds: &'a Bounds) -> impl Iterator<Item = &'a Feature> + 'a {
        self.features.iter().filter(move |feature| {
            feature.exists() && bounds.contains(feature.location.unwrap_or_default())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use waymark_tonic_core::proto::Rectangle;

    fn feature(name: &str, latitude: i32, longitude: i32) -> Feature {
        Feature {
            name: name.to_string(),
            location: Some(Point {
                latitude,
                longitude,
            }),
        }
    }

    fn sample_store() -> FeatureStore {
        FeatureStore::new(vec![
            feature("A", 0, 0),
            feature("B", 5, 5),
            feature("", 3, 3), // unnamed sentinel entry in the dataset
            feature("C", -5, -5),
        ])
    }

    #[test]
    fn test_lookup_hit() {
        let store = sample_store();
        let found = store.lookup(&Point {
            latitude: 5,
            longitude: 5,
        });
        assert_eq!(found.name, "B");
        assert!(found.exists());
    }

    #[test]
    fn test_lookup_miss_returns_sentinel_with_queried_location() {
        let store = sample_store();
        let queried = Point {
            latitude: 1,
            longitude: 1,
        };
        let sentinel = store.lookup(&queried);
        assert!(!sentinel.exists());
        assert_eq!(sentinel.location, Some(queried));
    }

    #[test]
    fn test_within_skips_unnamed_and_keeps_order() {
        let store = sample_store();
        let rect = Rectangle {
            lo: Some(Point {
                latitude: -10,
                longitude: -10,
            }),
            hi: Some(Point {
                latitude: 10,
                longitude: 10,
            }),
        };
        let bounds = Bounds::from(&rect);
        let names: Vec<&str> = store.within(&bounds).map(|f| f.name.as_str()).collect();
        assert_eq!(names, ["A", "B", "C"]);
    }

    #[test]
    fn test_within_inclusive_edges() {
        let store = sample_store();
        let rect = Rectangle {
            lo: Some(Point {
                latitude: 5,
                longitude: 5,
            }),
            hi: Some(Point {
                latitude: 0,
                longitude: 0,
            }),
        };
        let bounds = Bounds::from(&rect);
        let names: Vec<&str> = store.within(&bounds).map(|f| f.name.as_str()).collect();
        // Both corners sit exactly on the boundary and still match.
        assert_eq!(names, ["A", "B"]);
    }
}

//! Per-call aggregation for `RecordRoute`.
//!
//! A fresh [`RouteRecorder`] is created for every client-streaming call and
//! owned exclusively by it; there is no locking and no state survives the
//! call. The recorder emits nothing per point. The single `RouteSummary` is
//! produced only when the inbound stream completes normally; a cancelled
//! stream discards the recorder and emits nothing.

use crate::server::store::FeatureStore;
use std::time::Instant;
use tokio_stream::{Stream, StreamExt};
use tonic::Status;
use waymark_tonic_core::{
    Error, geo,
    proto::{Point, RouteSummary},
};

/// Accumulates one traversal: point and feature counts, total distance,
/// and elapsed wall-clock time since construction.
pub struct RouteRecorder<'a> {
    store: &'a FeatureStore,
    point_count: i32,
    feature_count: i32,
    distance: i32,
    previous: Option<Point>,
    started: Instant,
}

impl<'a> RouteRecorder<'a> {
    pub fn new(store: &'a FeatureStore) -> Self {
        Self {
            store,
            point_count: 0,
            feature_count: 0,
            distance: 0,
            previous: None,
            started: Instant::now(),
        }
    }

    /// Folds one point into the traversal. Distance only accrues once a
    /// previous point exists; a single-point route stays at 0 meters.
    pub fn observe(&mut self, point: Point) {
        self.point_count += 1;
        if self.store.lookup(&point).exists() {
            self.feature_count += 1;
        }
        if let Some(previous) = &self.previous {
            self.distance += geo::distance_meters(previous, &point);
        }
        self.previous = Some(point);
    }

    /// Completes the traversal, emitting the one and only summary.
    /// Elapsed time is truncated to whole seconds; this matches the wire
    /// contract of `RouteSummary.elapsed_time`.
    pub fn finish(self) -> RouteSummary {
        RouteSummary {
            point_count: self.point_count,
            feature_count: self.feature_count,
            distance: self.distance,
            elapsed_time: self.started.elapsed().as_secs() as i32,
        }
    }
}

/// Drives a fresh recorder over an inbound point stream.
///
/// An inbound error means the client cancelled or the transport failed:
/// the recorder is dropped without emitting a partial summary and the
/// failure stays local to this call.
pub async fn summarize_route<S>(store: &FeatureStore, mut points: S) -> Result<RouteSummary, Status>
where
    S: Stream<Item = Result<Point, Status>> + Unpin,
{
    let mut recorder = RouteRecorder::new(store);
    while let Some(point) = points.next().await {
        match point {
            Ok(point) => recorder.observe(point),
            Err(status) => {
                tracing::warn!("RecordRoute cancelled: {status}");
                return Err(Error::RequestCancelled.into());
            }
        }
    }
    Ok(recorder.finish())
}

#[cfg(test)]
mod tests {
    use super::*;
    use waymark_tonic_core::proto::Feature;

    fn point(latitude: i32, longitude: i32) -> Point {
        Point {
            latitude,
            longitude,
        }
    }

    fn store_with_feature_at_origin() -> FeatureStore {
        FeatureStore::new(vec![Feature {
            name: "A".into(),
            location: Some(point(0, 0)),
        }])
    }

    #[tokio::test]
    async fn test_empty_route_summary_is_all_zero() {
        let store = FeatureStore::default();
        let summary = summarize_route(&store, tokio_stream::iter(Vec::<Result<Point, Status>>::new()))
            .await
            .unwrap();
        assert_eq!(summary.point_count, 0);
        assert_eq!(summary.feature_count, 0);
        assert_eq!(summary.distance, 0);
    }

    #[tokio::test]
    async fn test_single_point_has_no_distance() {
        let store = FeatureStore::default();
        let summary = summarize_route(&store, tokio_stream::iter(vec![Ok(point(10, 10))]))
            .await
            .unwrap();
        assert_eq!(summary.point_count, 1);
        assert_eq!(summary.distance, 0);
    }

    #[tokio::test]
    async fn test_counts_and_distance_accumulate() {
        let store = store_with_feature_at_origin();
        let hops = [
            point(0, 0),
            point(10_000_000, 0),
            point(10_000_000, 10_000_000),
            point(0, 0),
        ];
        let expected: i32 = hops
            .windows(2)
            .map(|pair| geo::distance_meters(&pair[0], &pair[1]))
            .sum();

        let summary = summarize_route(&store, tokio_stream::iter(hops.map(Ok).to_vec()))
            .await
            .unwrap();
        assert_eq!(summary.point_count, 4);
        // Only the two visits to the origin hit a named feature.
        assert_eq!(summary.feature_count, 2);
        assert_eq!(summary.distance, expected);
        assert!(expected > 0);
    }

    #[tokio::test]
    async fn test_repeated_point_counts_features_but_no_distance() {
        let store = store_with_feature_at_origin();
        let summary = summarize_route(
            &store,
            tokio_stream::iter(vec![Ok(point(0, 0)), Ok(point(0, 0))]),
        )
        .await
        .unwrap();
        assert_eq!(summary.point_count, 2);
        assert_eq!(summary.feature_count, 2);
        assert_eq!(summary.distance, 0);
    }

    #[tokio::test]
    async fn test_cancelled_stream_emits_no_summary() {
        let store = store_with_feature_at_origin();
        let result = summarize_route(
            &store,
            tokio_stream::iter(vec![Ok(point(0, 0)), Err(Status::cancelled("gone"))]),
        )
        .await;
        let status = result.unwrap_err();
        assert_eq!(status.code(), tonic::Code::Cancelled);
    }
}

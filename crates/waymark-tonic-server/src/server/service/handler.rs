//! gRPC service implementation for the route guide.
//!
//! This module defines [`RouteGuideService`], the concrete implementation of
//! the [`RouteGuide`] contract. It performs request validation and wiring
//! only; the behavior lives in the store, query, route, and chat modules.
//!
//! ## Responsibilities
//!
//! - Answer unary lookups from the immutable feature store.
//! - Stream bounding-box query results with backpressure.
//! - Own one route recorder per client-streaming call.
//! - Bind each bidirectional call to the shared chat relay.

use crate::server::{
    config::ServerConfig,
    store::{FeatureStore, query::Bounds},
    streaming::{
        chat::{ChatRelay, relay_notes},
        route::summarize_route,
    },
};
use core::pin::Pin;
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio_stream::{Stream, wrappers::ReceiverStream};
use tonic::{Request, Response, Status, Streaming};
use waymark_tonic_core::{
    Error,
    proto::{
        Feature, Point, Rectangle, RouteNote, RouteSummary, route_guide_server::RouteGuide,
    },
};

/// The route guide service over an in-memory feature dataset.
///
/// The store is read-only and shared without synchronization; the chat
/// relay is the only contended structure and every call otherwise owns its
/// own state, so concurrent calls never block one another.
#[derive(Clone)]
pub struct RouteGuideService {
    config: ServerConfig,
    store: Arc<FeatureStore>,
    relay: Arc<ChatRelay>,
}

impl RouteGuideService {
    pub fn new(config: ServerConfig, store: Arc<FeatureStore>) -> Self {
        Self {
            config,
            store,
            relay: Arc::new(ChatRelay::default()),
        }
    }
}

fn validated(point: &Point) -> Result<(), Status> {
    if point.is_in_range() {
        Ok(())
    } else {
        Err(Error::InvalidRequest {
            reason: format!(
                "coordinates out of range: ({}, {})",
                point.latitude, point.longitude
            ),
        }
        .into())
    }
}

/// Forwards a query result set into the response channel. The full set is
/// always offered; a receiver that goes away simply ends the forwarding.
async fn feed_features(
    features: Vec<Feature>,
    resp_tx: mpsc::Sender<Result<Feature, Status>>,
) -> waymark_tonic_core::Result<()> {
    for feature in features {
        resp_tx.send(Ok(feature)).await.map_err(|e| Error::ChannelError {
            context: format!("failed to forward feature: {e}"),
        })?;
    }
    Ok(())
}

#[tonic::async_trait]
impl RouteGuide for RouteGuideService {
    type ListFeaturesStream = Pin<Box<dyn Stream<Item = Result<Feature, Status>> + Send>>;
    type RouteChatStream = Pin<Box<dyn Stream<Item = Result<RouteNote, Status>> + Send>>;

    #[tracing::instrument(skip_all, fields(latitude = req.get_ref().latitude, longitude = req.get_ref().longitude))]
    async fn get_feature(&self, req: Request<Point>) -> Result<Response<Feature>, Status> {
        let point = req.into_inner();
        validated(&point)?;
        Ok(Response::new(self.store.lookup(&point)))
    }

    #[tracing::instrument(skip_all)]
    async fn list_features(
        &self,
        req: Request<Rectangle>,
    ) -> Result<Response<Self::ListFeaturesStream>, Status> {
        let rect = req.into_inner();
        validated(&rect.lo.unwrap_or_default())?;
        validated(&rect.hi.unwrap_or_default())?;

        let bounds = Bounds::from(&rect);
        // The match set is snapshotted up front in dataset order; delivery
        // runs from its own task so a slow reader never holds the handler.
        let matches: Vec<Feature> = self.store.within(&bounds).cloned().collect();
        tracing::debug!("ListFeatures matched {} features", matches.len());

        let (resp_tx, resp_rx) = mpsc::channel(self.config.stream_buffer_size);
        tokio::spawn(async move {
            if let Err(e) = feed_features(matches, resp_tx).await {
                tracing::debug!("ListFeatures stream ended early: {e}");
            }
        });

        Ok(Response::new(Box::pin(ReceiverStream::new(resp_rx))))
    }

    #[tracing::instrument(skip_all)]
    async fn record_route(
        &self,
        req: Request<Streaming<Point>>,
    ) -> Result<Response<RouteSummary>, Status> {
        let summary = summarize_route(&self.store, req.into_inner()).await?;
        Ok(Response::new(summary))
    }

    #[tracing::instrument(skip_all)]
    async fn route_chat(
        &self,
        req: Request<Streaming<RouteNote>>,
    ) -> Result<Response<Self::RouteChatStream>, Status> {
        let (resp_tx, resp_rx) = mpsc::channel(self.config.stream_buffer_size);
        tokio::spawn(relay_notes(
            Arc::clone(&self.relay),
            req.into_inner(),
            resp_tx,
        ));
        Ok(Response::new(Box::pin(ReceiverStream::new(resp_rx))))
    }
}

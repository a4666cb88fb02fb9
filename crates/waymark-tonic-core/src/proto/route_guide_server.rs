//! Server bindings for the `waymark.RouteGuide` service.
//!
//! Mirrors the output of tonic codegen: a `RouteGuide` trait with one
//! method per call shape, and a `RouteGuideServer` wrapper that routes
//! decoded gRPC requests to a trait implementation. Keeping the glue in
//! the generated shape lets the server crate treat it exactly like
//! `protoc`-generated code.

use super::{Feature, Point, Rectangle, RouteNote, RouteSummary};
use tokio_stream::Stream;
use tonic::codegen::{Arc, BoxFuture, Context, Poll, Service, http};

/// The four call shapes of the route guide service.
///
/// - `get_feature`: unary.
/// - `list_features`: server streaming.
/// - `record_route`: client streaming.
/// - `route_chat`: bidirectional streaming.
#[tonic::async_trait]
pub trait RouteGuide: Send + Sync + 'static {
    /// Obtains the feature at a given position, or the empty-name sentinel
    /// if nothing is known there.
    async fn get_feature(
        &self,
        request: tonic::Request<Point>,
    ) -> Result<tonic::Response<Feature>, tonic::Status>;

    /// Server streaming response type for the `ListFeatures` method.
    type ListFeaturesStream: Stream<Item = Result<Feature, tonic::Status>> + Send + 'static;

    /// Obtains the features available within the given rectangle, streamed
    /// in dataset order.
    async fn list_features(
        &self,
        request: tonic::Request<Rectangle>,
    ) -> Result<tonic::Response<Self::ListFeaturesStream>, tonic::Status>;

    /// Accepts a stream of points on a route being traversed, returning a
    /// single summary when traversal is completed.
    async fn record_route(
        &self,
        request: tonic::Request<tonic::Streaming<Point>>,
    ) -> Result<tonic::Response<RouteSummary>, tonic::Status>;

    /// Server streaming response type for the `RouteChat` method.
    type RouteChatStream: Stream<Item = Result<RouteNote, tonic::Status>> + Send + 'static;

    /// Accepts a stream of route notes while receiving other route notes
    /// previously left at each visited location.
    async fn route_chat(
        &self,
        request: tonic::Request<tonic::Streaming<RouteNote>>,
    ) -> Result<tonic::Response<Self::RouteChatStream>, tonic::Status>;
}

#[derive(Debug)]
pub struct RouteGuideServer<T> {
    inner: Arc<T>,
}

impl<T> RouteGuideServer<T> {
    pub fn new(inner: T) -> Self {
        Self {
            inner: Arc::new(inner),
        }
    }

    pub fn from_arc(inner: Arc<T>) -> Self {
        Self { inner }
    }
}

impl<T> Clone for RouteGuideServer<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T> Service<http::Request<tonic::body::Body>> for RouteGuideServer<T>
where
    T: RouteGuide,
{
    type Response = http::Response<tonic::body::Body>;
    type Error = core::convert::Infallible;
    type Future = BoxFuture<Self::Response, Self::Error>;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, req: http::Request<tonic::body::Body>) -> Self::Future {
        match req.uri().path() {
            "/waymark.RouteGuide/GetFeature" => {
                struct GetFeatureSvc<T>(Arc<T>);
                impl<T: RouteGuide> tonic::server::UnaryService<Point> for GetFeatureSvc<T> {
                    type Response = Feature;
                    type Future = BoxFuture<tonic::Response<Self::Response>, tonic::Status>;
                    fn call(&mut self, request: tonic::Request<Point>) -> Self::Future {
                        let inner = Arc::clone(&self.0);
                        Box::pin(async move { inner.get_feature(request).await })
                    }
                }
                let inner = Arc::clone(&self.inner);
                Box::pin(async move {
                    let method = GetFeatureSvc(inner);
                    let codec = tonic_prost::ProstCodec::default();
                    let mut grpc = tonic::server::Grpc::new(codec);
                    Ok(grpc.unary(method, req).await)
                })
            }
            "/waymark.RouteGuide/ListFeatures" => {
                struct ListFeaturesSvc<T>(Arc<T>);
                impl<T: RouteGuide> tonic::server::ServerStreamingService<Rectangle> for ListFeaturesSvc<T> {
                    type Response = Feature;
                    type ResponseStream = T::ListFeaturesStream;
                    type Future = BoxFuture<tonic::Response<Self::ResponseStream>, tonic::Status>;
                    fn call(&mut self, request: tonic::Request<Rectangle>) -> Self::Future {
                        let inner = Arc::clone(&self.0);
                        Box::pin(async move { inner.list_features(request).await })
                    }
                }
                let inner = Arc::clone(&self.inner);
                Box::pin(async move {
                    let method = ListFeaturesSvc(inner);
                    let codec = tonic_prost::ProstCodec::default();
                    let mut grpc = tonic::server::Grpc::new(codec);
                    Ok(grpc.server_streaming(method, req).await)
                })
            }
            "/waymark.RouteGuide/RecordRoute" => {
                struct RecordRouteSvc<T>(Arc<T>);
                impl<T: RouteGuide> tonic::server::ClientStreamingService<Point> for RecordRouteSvc<T> {
                    type Response = RouteSummary;
                    type Future = BoxFuture<tonic::Response<Self::Response>, tonic::Status>;
                    fn call(
                        &mut self,
                        request: tonic::Request<tonic::Streaming<Point>>,
                    ) -> Self::Future {
                        let inner = Arc::clone(&self.0);
                        Box::pin(async move { inner.record_route(request).await })
                    }
                }
                let inner = Arc::clone(&self.inner);
                Box::pin(async move {
                    let method = RecordRouteSvc(inner);
                    let codec = tonic_prost::ProstCodec::default();
                    let mut grpc = tonic::server::Grpc::new(codec);
                    Ok(grpc.client_streaming(method, req).await)
                })
            }
            "/waymark.RouteGuide/RouteChat" => {
                struct RouteChatSvc<T>(Arc<T>);
                impl<T: RouteGuide> tonic::server::StreamingService<RouteNote> for RouteChatSvc<T> {
                    type Response = RouteNote;
                    type ResponseStream = T::RouteChatStream;
                    type Future = BoxFuture<tonic::Response<Self::ResponseStream>, tonic::Status>;
                    fn call(
                        &mut self,
                        request: tonic::Request<tonic::Streaming<RouteNote>>,
                    ) -> Self::Future {
                        let inner = Arc::clone(&self.0);
                        Box::pin(async move { inner.route_chat(request).await })
                    }
                }
                let inner = Arc::clone(&self.inner);
                Box::pin(async move {
                    let method = RouteChatSvc(inner);
                    let codec = tonic_prost::ProstCodec::default();
                    let mut grpc = tonic::server::Grpc::new(codec);
                    Ok(grpc.streaming(method, req).await)
                })
            }
            _ => Box::pin(async move {
                let mut response = http::Response::new(tonic::body::Body::default());
                let headers = response.headers_mut();
                headers.insert(
                    tonic::Status::GRPC_STATUS,
                    (tonic::Code::Unimplemented as i32).into(),
                );
                headers.insert(
                    http::header::CONTENT_TYPE,
                    tonic::metadata::GRPC_CONTENT_TYPE,
                );
                Ok(response)
            }),
        }
    }
}

impl<T> tonic::server::NamedService for RouteGuideServer<T> {
    const NAME: &'static str = "waymark.RouteGuide";
}

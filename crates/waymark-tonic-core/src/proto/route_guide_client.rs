//! Client bindings for the `waymark.RouteGuide` service.
//!
//! Same shape as tonic codegen output. Used by the integration tests and
//! by external tooling that drives the service.

use super::{Feature, Point, Rectangle, RouteNote, RouteSummary};
use tonic::codegen::{Body, Bytes, StdError, http};

#[derive(Debug, Clone)]
pub struct RouteGuideClient<T> {
    inner: tonic::client::Grpc<T>,
}

impl RouteGuideClient<tonic::transport::Channel> {
    /// Attempt to create a new client by connecting to a given endpoint.
    pub async fn connect<D>(dst: D) -> Result<Self, tonic::transport::Error>
    where
        D: TryInto<tonic::transport::Endpoint>,
        D::Error: Into<StdError>,
    {
        let conn = tonic::transport::Endpoint::new(dst)?.connect().await?;
        Ok(Self::new(conn))
    }
}

impl<T> RouteGuideClient<T>
where
    T: tonic::client::GrpcService<tonic::body::Body>,
    T::Error: Into<StdError>,
    T::ResponseBody: Body<Data = Bytes> + Send + 'static,
    <T::ResponseBody as Body>::Error: Into<StdError> + Send,
{
    pub fn new(inner: T) -> Self {
        Self {
            inner: tonic::client::Grpc::new(inner),
        }
    }

    async fn ready(&mut self) -> Result<(), tonic::Status> {
        self.inner.ready().await.map_err(|e| {
            tonic::Status::unknown(format!("Service was not ready: {}", e.into()))
        })
    }

    pub async fn get_feature(
        &mut self,
        request: impl tonic::IntoRequest<Point>,
    ) -> Result<tonic::Response<Feature>, tonic::Status> {
        self.ready().await?;
        let codec = tonic_prost::ProstCodec::default();
        let path = http::uri::PathAndQuery::from_static("/waymark.RouteGuide/GetFeature");
        self.inner.unary(request.into_request(), path, codec).await
    }

    pub async fn list_features(
        &mut self,
        request: impl tonic::IntoRequest<Rectangle>,
    ) -> Result<tonic::Response<tonic::codec::Streaming<Feature>>, tonic::Status> {
        self.ready().await?;
        let codec = tonic_prost::ProstCodec::default();
        let path = http::uri::PathAndQuery::from_static("/waymark.RouteGuide/ListFeatures");
        self.inner
            .server_streaming(request.into_request(), path, codec)
            .await
    }

    pub async fn record_route(
        &mut self,
        request: impl tonic::IntoStreamingRequest<Message = Point>,
    ) -> Result<tonic::Response<RouteSummary>, tonic::Status> {
        self.ready().await?;
        let codec = tonic_prost::ProstCodec::default();
        let path = http::uri::PathAndQuery::from_static("/waymark.RouteGuide/RecordRoute");
        self.inner
            .client_streaming(request.into_streaming_request(), path, codec)
            .await
    }

    pub async fn route_chat(
        &mut self,
        request: impl tonic::IntoStreamingRequest<Message = RouteNote>,
    ) -> Result<tonic::Response<tonic::codec::Streaming<RouteNote>>, tonic::Status> {
        self.ready().await?;
        let codec = tonic_prost::ProstCodec::default();
        let path = http::uri::PathAndQuery::from_static("/waymark.RouteGuide/RouteChat");
        self.inner
            .streaming(request.into_streaming_request(), path, codec)
            .await
    }
}

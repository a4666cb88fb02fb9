//! End-to-end tests over a real tonic server on an ephemeral TCP port,
//! driven through the client bindings: all four call shapes.

use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio_stream::{StreamExt, wrappers::TcpListenerStream};
use tonic::transport::{Channel, Server};
use waymark_tonic_core::proto::{
    Feature, Point, Rectangle, RouteNote, route_guide_client::RouteGuideClient,
    route_guide_server::RouteGuideServer,
};
use waymark_tonic_server::server::{
    config::ServerConfig, service::handler::RouteGuideService, store::FeatureStore,
};

fn point(latitude: i32, longitude: i32) -> Point {
    Point {
        latitude,
        longitude,
    }
}

fn feature(name: &str, latitude: i32, longitude: i32) -> Feature {
    Feature {
        name: name.to_string(),
        location: Some(point(latitude, longitude)),
    }
}

fn test_config() -> ServerConfig {
    ServerConfig {
        server_addr: "127.0.0.1:0".into(),
        uds: false,
        db_path: "unused".into(),
        stream_buffer_size: 8,
    }
}

async fn spawn_server(features: Vec<Feature>) -> String {
    let store = Arc::new(FeatureStore::new(features));
    let service = RouteGuideService::new(test_config(), store);
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        Server::builder()
            .add_service(RouteGuideServer::new(service))
            .serve_with_incoming(TcpListenerStream::new(listener))
            .await
            .unwrap();
    });

    format!("http://{addr}")
}

async fn connect(endpoint: &str) -> RouteGuideClient<Channel> {
    for _ in 0..40 {
        if let Ok(client) = RouteGuideClient::connect(endpoint.to_string()).await {
            return client;
        }
        tokio::time::sleep(Duration::from_millis(25)).await;
    }
    panic!("server at {endpoint} never became ready");
}

#[tokio::test]
async fn test_get_feature_known_and_unknown() {
    let endpoint = spawn_server(vec![feature("A", 0, 0)]).await;
    let mut client = connect(&endpoint).await;

    let found = client.get_feature(point(0, 0)).await.unwrap().into_inner();
    assert_eq!(found.name, "A");

    let sentinel = client.get_feature(point(1, 1)).await.unwrap().into_inner();
    assert!(!sentinel.exists());
    assert_eq!(sentinel.location, Some(point(1, 1)));
}

#[tokio::test]
async fn test_get_feature_out_of_range_is_invalid_argument() {
    let endpoint = spawn_server(vec![]).await;
    let mut client = connect(&endpoint).await;

    let status = client
        .get_feature(point(0, 1_800_000_001))
        .await
        .unwrap_err();
    assert_eq!(status.code(), tonic::Code::InvalidArgument);
}

#[tokio::test]
async fn test_list_features_within_rectangle() {
    let endpoint = spawn_server(vec![feature("A", 0, 0), feature("far", 50, 50)]).await;
    let mut client = connect(&endpoint).await;

    // Corner order must not matter: lo is the "upper" corner here.
    let resp = client
        .list_features(Rectangle {
            lo: Some(point(1, 1)),
            hi: Some(point(-1, -1)),
        })
        .await
        .unwrap();

    let mut stream = resp.into_inner();
    let mut names = Vec::new();
    while let Some(item) = stream.next().await {
        names.push(item.unwrap().name);
    }
    assert_eq!(names, ["A"]);
}

#[tokio::test]
async fn test_record_route_summary() {
    let endpoint = spawn_server(vec![feature("A", 0, 0)]).await;
    let mut client = connect(&endpoint).await;

    let summary = client
        .record_route(tokio_stream::iter(vec![point(0, 0), point(0, 0)]))
        .await
        .unwrap()
        .into_inner();
    assert_eq!(summary.point_count, 2);
    assert_eq!(summary.feature_count, 2);
    assert_eq!(summary.distance, 0);
}

#[tokio::test]
async fn test_route_chat_replays_prior_notes_only() {
    let endpoint = spawn_server(vec![]).await;
    let mut client = connect(&endpoint).await;

    let notes = vec![
        RouteNote {
            location: Some(point(0, 0)),
            message: "first".into(),
        },
        RouteNote {
            location: Some(point(0, 0)),
            message: "second".into(),
        },
    ];

    let resp = client.route_chat(tokio_stream::iter(notes)).await.unwrap();
    let mut stream = resp.into_inner();
    let mut delivered = Vec::new();
    while let Some(item) = stream.next().await {
        delivered.push(item.unwrap().message);
    }

    // The first note finds no history; the second is answered with the
    // first and never with itself.
    assert_eq!(delivered, ["first"]);
}

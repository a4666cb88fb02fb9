//! Message types and service bindings for `waymark.RouteGuide`.
//!
//! Hand-maintained in the shape tonic codegen emits for the canonical
//! `routeguide` protocol: identical field tags, method paths, and E7
//! coordinate encoding, without requiring `protoc` at build time.

pub mod route_guide_client;
pub mod route_guide_server;

/// Points are represented as latitude-longitude pairs in the E7
/// representation (degrees multiplied by 10**7 and rounded to the nearest
/// integer). Latitudes should be in the range +/- 90 degrees and longitude
/// should be in the range +/- 180 degrees (inclusive).
#[derive(Clone, Copy, PartialEq, Eq, Hash, ::prost::Message)]
pub struct Point {
    #[prost(int32, tag = "1")]
    pub latitude: i32,
    #[prost(int32, tag = "2")]
    pub longitude: i32,
}

/// A latitude-longitude rectangle, represented as two diagonally opposite
/// points `lo` and `hi`. No ordering between the corners is guaranteed.
#[derive(Clone, Copy, PartialEq, ::prost::Message)]
pub struct Rectangle {
    /// One corner of the rectangle.
    #[prost(message, optional, tag = "1")]
    pub lo: ::core::option::Option<Point>,
    /// The other corner of the rectangle.
    #[prost(message, optional, tag = "2")]
    pub hi: ::core::option::Option<Point>,
}

/// A feature names something at a given point.
///
/// If a feature could not be named, the name is empty.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Feature {
    /// The name of the feature.
    #[prost(string, tag = "1")]
    pub name: ::prost::alloc::string::String,
    /// The point where the feature is detected.
    #[prost(message, optional, tag = "2")]
    pub location: ::core::option::Option<Point>,
}

/// A `RouteNote` is a message sent while at a given point.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct RouteNote {
    /// The location from which the message is sent.
    #[prost(message, optional, tag = "1")]
    pub location: ::core::option::Option<Point>,
    /// The message to be sent.
    #[prost(string, tag = "2")]
    pub message: ::prost::alloc::string::String,
}

/// A `RouteSummary` is received in response to a `RecordRoute` rpc.
///
/// It contains the number of individual points received, the number of
/// detected features, and the total distance covered as the cumulative sum
/// of the distance between each point.
#[derive(Clone, Copy, PartialEq, Eq, ::prost::Message)]
pub struct RouteSummary {
    /// The number of points received.
    #[prost(int32, tag = "1")]
    pub point_count: i32,
    /// The number of known features passed while traversing the route.
    #[prost(int32, tag = "2")]
    pub feature_count: i32,
    /// The distance covered in metres.
    #[prost(int32, tag = "3")]
    pub distance: i32,
    /// The duration of the traversal in seconds.
    #[prost(int32, tag = "4")]
    pub elapsed_time: i32,
}

/// Largest valid E7 latitude (+90 degrees).
pub const MAX_LATITUDE_E7: i32 = 900_000_000;
/// Largest valid E7 longitude (+180 degrees).
pub const MAX_LONGITUDE_E7: i32 = 1_800_000_000;

impl Point {
    /// Whether both coordinates fall within the valid E7 ranges
    /// (+/- 90 degrees latitude, +/- 180 degrees longitude, inclusive).
    pub fn is_in_range(&self) -> bool {
        self.latitude.abs() <= MAX_LATITUDE_E7 && self.longitude.abs() <= MAX_LONGITUDE_E7
    }
}

impl Feature {
    /// A feature exists iff it carries a non-empty name. Empty-name features
    /// are sentinels for "nothing known at this point" and are never listed
    /// or counted.
    pub fn exists(&self) -> bool {
        !self.name.is_empty()
    }
}

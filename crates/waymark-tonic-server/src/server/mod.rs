//! Service logic and per-call streaming state for the route guide server.
//!
//! ## Structure
//!
//! - [`config`] - CLI arguments and validated runtime configuration.
//! - [`service`] - gRPC service entry point ([`service::handler::RouteGuideService`]).
//! - [`store`] - immutable feature store, JSON loader, and bounding-box queries.
//! - [`streaming`] - per-call route aggregation and the shared chat relay.
//! - [`telemetry`] - tracing subscriber setup.

pub mod config;
pub mod service;
pub mod store;
pub mod streaming;
pub mod telemetry;

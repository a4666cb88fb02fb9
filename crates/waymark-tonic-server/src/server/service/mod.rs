//! gRPC service implementation.
//!
//! This module contains the client-facing entry point that binds the
//! feature store, query engine, route recorder, and chat relay to the four
//! call shapes of the `RouteGuide` contract.
//!
//! ## Structure
//!
//! - [`handler`] - gRPC service entry point (`RouteGuideService`).

pub mod handler;

//! Per-call streaming state.
//!
//! ## Structure
//!
//! - [`route`] - per-call route aggregation for `RecordRoute`.
//! - [`chat`] - the shared location-keyed note relay behind `RouteChat`.

pub mod chat;
pub mod route;

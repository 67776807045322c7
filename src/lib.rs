//! Route Planner - all-pairs shortest routes over a fixed delivery graph
//!
//! The routing engine precomputes distances and next hops for every ordered
//! node pair once at startup; the HTTP layer only reads from it.

#[cfg(feature = "server")]
pub mod api;
pub mod config;
pub mod core;
pub mod graph;
pub mod services;
pub mod utils;

pub use crate::core::{PlannerError, PlannerResult};
pub use crate::graph::{Graph, GraphDefinition};
pub use crate::services::RouteEngine;

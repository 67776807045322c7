use axum::{extract::State, response::Json};
use serde::Serialize;

use crate::api::server::http::state::AppState;
use crate::graph::GraphDefinition;
use crate::services::Weight;

/// 原样返回图定义
pub async fn get_graph(State(state): State<AppState>) -> Json<GraphDefinition> {
    Json(state.engine.graph().definition().clone())
}

#[derive(Debug, Serialize)]
pub struct GraphStats {
    pub nodes: usize,
    pub edges: usize,
    pub reachable_pairs: usize,
    pub diameter: Option<Weight>,
    pub radius: Option<Weight>,
    pub center: Option<String>,
}

pub async fn stats(State(state): State<AppState>) -> Json<GraphStats> {
    let engine = &state.engine;
    Json(GraphStats {
        nodes: engine.graph().node_count(),
        edges: engine.graph().edge_count(),
        reachable_pairs: engine.reachable_pairs(),
        diameter: engine.diameter(),
        radius: engine.radius(),
        center: engine.center().map(str::to_string),
    })
}

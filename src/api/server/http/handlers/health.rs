use axum::{
    extract::State,
    http::StatusCode,
    response::Json,
};
use serde_json::json;

use crate::api::server::http::state::AppState;

pub async fn index() -> Json<serde_json::Value> {
    Json(json!({
        "message": "Optimal Route Planner API",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "/api/graph": "GET - Get graph structure",
            "/api/shortest-path": "POST - Calculate shortest path",
            "/api/all-paths": "GET - All-pairs shortest paths",
            "/api/stats": "GET - Graph distance statistics",
            "/health": "GET - Health check",
        }
    }))
}

pub async fn check(State(state): State<AppState>) -> (StatusCode, Json<serde_json::Value>) {
    let graph = state.engine.graph();
    (
        StatusCode::OK,
        Json(json!({
            "status": "healthy",
            "algorithm": "Floyd-Warshall",
            "nodes": graph.node_count(),
            "edges": graph.edge_count(),
        })),
    )
}

use axum::{
    routing::{get, post},
    Router,
    http::StatusCode,
    middleware,
};
use http::{header, HeaderValue, Method};
use log::warn;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
    timeout::TimeoutLayer,
};
use std::time::Duration;

use crate::config::{Config, CorsConfig};

use super::{
    error::HttpError,
    state::AppState,
    handlers::{graph, health, route},
    middleware::{logging, error},
};

pub fn create_router(state: AppState, config: &Config) -> Router {
    Router::new()
        .route("/", get(health::index))
        .route("/health", get(health::check))
        .route("/api/graph", get(graph::get_graph))
        .route("/api/stats", get(graph::stats))
        .route("/api/shortest-path", post(route::shortest_path))
        .route("/api/all-paths", get(route::all_paths))
        .fallback(not_found)
        .layer(middleware::from_fn(logging::logging_middleware))
        .layer(middleware::from_fn(error::error_handling_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(&config.cors))
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(config.server.request_timeout_secs),
        ))
        .with_state(state)
}

async fn not_found() -> HttpError {
    HttpError::NotFound("Endpoint not found".to_string())
}

/// 按配置构建跨域层，无法解析的来源会被跳过
fn cors_layer(config: &CorsConfig) -> CorsLayer {
    if config.is_permissive() {
        return CorsLayer::permissive();
    }

    let origins: Vec<HeaderValue> = config
        .allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                warn!("忽略无效的跨域来源: {}", origin);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE])
}

use axum::{
    extract::{rejection::JsonRejection, Json, State},
    response::Json as JsonResponse,
};
use log::debug;
use serde::{Deserialize, Serialize};
use tokio::task;

use crate::api::server::http::{
    error::{HttpError, INVALID_NODE, MISSING_PARAMETERS},
    state::AppState,
};
use crate::services::{AllPairs, Route, Weight};

#[derive(Debug, Default, Deserialize)]
pub struct ShortestPathRequest {
    #[serde(default)]
    pub start: Option<String>,
    #[serde(default)]
    pub end: Option<String>,
}

impl ShortestPathRequest {
    /// 起点和终点都存在且非空时返回二者
    fn endpoints(self) -> Option<(String, String)> {
        match (self.start, self.end) {
            (Some(start), Some(end)) if !start.is_empty() && !end.is_empty() => Some((start, end)),
            _ => None,
        }
    }
}

/// 找到路径时携带 `stops`，不可达时携带 `message`，`path` 与 `distance` 为 null
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShortestPathResponse {
    pub success: bool,
    pub path: Option<Vec<String>>,
    pub distance: Option<Weight>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stops: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ShortestPathResponse {
    pub fn found(route: Route) -> Self {
        Self {
            success: true,
            stops: Some(route.stops()),
            distance: Some(route.distance),
            path: Some(route.path),
            message: None,
        }
    }

    pub fn no_path(start: &str, end: &str) -> Self {
        Self {
            success: false,
            path: None,
            distance: None,
            stops: None,
            message: Some(format!("No path exists between {} and {}", start, end)),
        }
    }
}

pub async fn shortest_path(
    State(state): State<AppState>,
    payload: Result<Json<ShortestPathRequest>, JsonRejection>,
) -> Result<JsonResponse<ShortestPathResponse>, HttpError> {
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => {
            debug!("请求体解析失败: {}", rejection);
            return Err(HttpError::BadRequest(MISSING_PARAMETERS.to_string()));
        }
    };

    let (start, end) = request
        .endpoints()
        .ok_or_else(|| HttpError::BadRequest(MISSING_PARAMETERS.to_string()))?;

    let graph = state.engine.graph();
    if !graph.contains(&start) || !graph.contains(&end) {
        return Err(HttpError::BadRequest(INVALID_NODE.to_string()));
    }

    let response = match state.engine.route(&start, &end)? {
        Some(route) => ShortestPathResponse::found(route),
        None => ShortestPathResponse::no_path(&start, &end),
    };

    Ok(JsonResponse(response))
}

/// 全源导出，计算量为 O(N^3)，放到阻塞线程池中执行
pub async fn all_paths(
    State(state): State<AppState>,
) -> Result<JsonResponse<AllPairs>, HttpError> {
    let engine = state.engine.clone();
    let all = task::spawn_blocking(move || engine.all_pairs())
        .await
        .map_err(|e| HttpError::InternalError(format!("任务执行失败: {}", e)))??;

    Ok(JsonResponse(all))
}

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::core::RouteError;

pub const MISSING_PARAMETERS: &str = "Missing start or end parameters";
pub const INVALID_NODE: &str = "Invalid start or end node";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HttpError {
    BadRequest(String),
    NotFound(String),
    InternalError(String),
}

impl HttpError {
    pub fn status(&self) -> StatusCode {
        match self {
            HttpError::BadRequest(_) => StatusCode::BAD_REQUEST,
            HttpError::NotFound(_) => StatusCode::NOT_FOUND,
            HttpError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match self {
            HttpError::BadRequest(msg) | HttpError::NotFound(msg) | HttpError::InternalError(msg) => {
                msg
            }
        };

        let body = Json(json!({
            "success": false,
            "error": message,
        }));

        (status, body).into_response()
    }
}

impl From<RouteError> for HttpError {
    fn from(err: RouteError) -> Self {
        if err.is_caller_error() {
            HttpError::BadRequest(INVALID_NODE.to_string())
        } else {
            HttpError::InternalError(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_error_mapping() {
        let err: HttpError = RouteError::NodeNotFound("Z".to_string()).into();
        assert_eq!(err, HttpError::BadRequest(INVALID_NODE.to_string()));

        let err: HttpError = RouteError::InconsistentRoutes {
            from: "A".to_string(),
            to: "B".to_string(),
        }
        .into();
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::orchestration::ServiceError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Bad request: {0}")]
    BadRequest(String),
    #[error("Upstream error: {0}")]
    Upstream(String),
}

impl From<ServiceError> for AppError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::PoolNotFound(_) => AppError::NotFound(err.to_string()),
            ServiceError::DataSource(_) => AppError::Upstream(err.to_string()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::Upstream(msg) => (StatusCode::BAD_GATEWAY, msg),
        };

        let body = Json(json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::datasource::DataSourceError;
    use crate::domain::PoolId;

    #[test]
    fn test_service_errors_map_to_status() {
        let not_found: AppError = ServiceError::PoolNotFound(PoolId::new("7".to_string())).into();
        assert_eq!(not_found.into_response().status(), StatusCode::NOT_FOUND);

        let upstream: AppError = ServiceError::DataSource(DataSourceError::RateLimited).into();
        assert_eq!(upstream.into_response().status(), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn test_bad_request_status() {
        let err = AppError::BadRequest("invalid pool id".to_string());
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }
}

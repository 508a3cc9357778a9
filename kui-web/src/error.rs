use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use kui_service::AccessControlError;
use serde_json::json;

/// 访问控制错误的HTTP响应
#[derive(Debug)]
pub struct ApiError(pub AccessControlError);

impl From<AccessControlError> for ApiError {
    fn from(error: AccessControlError) -> Self {
        Self(error)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            AccessControlError::AccessDenied => StatusCode::FORBIDDEN,
            AccessControlError::Invariant(_) | AccessControlError::UserResolution(_) => {
                tracing::error!(error = %self.0, "Access check failed");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        (status, Json(json!({ "message": self.0.to_string() }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kui_domain::rbac::InvariantViolation;

    #[test]
    fn test_status_mapping() {
        let denied = ApiError(AccessControlError::AccessDenied).into_response();
        assert_eq!(denied.status(), StatusCode::FORBIDDEN);

        let invariant = ApiError::from(AccessControlError::from(InvariantViolation::EmptyCluster)).into_response();
        assert_eq!(invariant.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let resolution = ApiError(AccessControlError::UserResolution("redis down".to_string())).into_response();
        assert_eq!(resolution.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}

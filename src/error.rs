// HTTP API Error Types
use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::{json, Value};

use crate::middleware::SessionError;
use crate::resolver::HierarchyError;

/// HTTP-facing error with status codes and client-friendly messages
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    // 400 Bad Request
    BadRequest(String),

    // 401 Unauthorized
    Unauthorized(String),

    // 403 Forbidden
    Forbidden(String),

    // 500 Internal Server Error
    InternalServerError(String),
}

impl ApiError {
    pub fn status_code(&self) -> u16 {
        match self {
            ApiError::BadRequest(_) => 400,
            ApiError::Unauthorized(_) => 401,
            ApiError::Forbidden(_) => 403,
            ApiError::InternalServerError(_) => 500,
        }
    }

    /// Client-safe error message
    pub fn message(&self) -> &str {
        match self {
            ApiError::BadRequest(msg) => msg,
            ApiError::Unauthorized(msg) => msg,
            ApiError::Forbidden(msg) => msg,
            ApiError::InternalServerError(msg) => msg,
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            ApiError::BadRequest(_) => "BAD_REQUEST",
            ApiError::Unauthorized(_) => "UNAUTHORIZED",
            ApiError::Forbidden(_) => "FORBIDDEN",
            ApiError::InternalServerError(_) => "INTERNAL_SERVER_ERROR",
        }
    }

    pub fn to_json(&self) -> Value {
        json!({
            "success": false,
            "message": self.message(),
            "code": self.error_code()
        })
    }
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        ApiError::BadRequest(message.into())
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        ApiError::Unauthorized(message.into())
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        ApiError::Forbidden(message.into())
    }

    pub fn internal_server_error(message: impl Into<String>) -> Self {
        ApiError::InternalServerError(message.into())
    }
}

impl From<HierarchyError> for ApiError {
    fn from(err: HierarchyError) -> Self {
        match err {
            HierarchyError::CannotCreate { .. } => {
                ApiError::forbidden(format!("Access denied: {}", err))
            }
            HierarchyError::ParentSelectionRequired(_)
            | HierarchyError::ParentRoleMismatch { .. }
            | HierarchyError::UnexpectedParentSelection => ApiError::bad_request(err.to_string()),
        }
    }
}

impl From<SessionError> for ApiError {
    fn from(err: SessionError) -> Self {
        match err {
            SessionError::Unavailable(msg) => {
                // Don't expose verifier internals to clients
                tracing::error!("Session verifier unavailable: {}", msg);
                ApiError::internal_server_error("Unable to verify session")
            }
            other => ApiError::unauthorized(other.to_string()),
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for ApiError {}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let status = StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(self.to_json())).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hierarchy::Role;

    #[test]
    fn test_cannot_create_maps_to_forbidden() {
        let err = ApiError::from(HierarchyError::CannotCreate {
            creator: "AGENT".to_string(),
            target: "MASTER".to_string(),
        });
        assert_eq!(err.status_code(), 403);
        assert_eq!(err.error_code(), "FORBIDDEN");
        assert_eq!(
            err.message(),
            "Access denied: Role 'AGENT' cannot create accounts with role 'MASTER'"
        );
    }

    #[test]
    fn test_parent_selection_errors_map_to_bad_request() {
        let err = ApiError::from(HierarchyError::ParentSelectionRequired(Role::Sub));
        assert_eq!(err.status_code(), 400);
        assert_eq!(
            err.to_json(),
            json!({
                "success": false,
                "message": "A parent account with role SUB must be selected",
                "code": "BAD_REQUEST"
            })
        );

        let err = ApiError::from(HierarchyError::ParentRoleMismatch {
            parent_id: "acc-master-1".to_string(),
            expected: Role::Sub,
            actual: "MASTER".to_string(),
        });
        assert_eq!(err.status_code(), 400);
        assert_eq!(err.error_code(), "BAD_REQUEST");
        assert_eq!(err.message(), "Selected parent 'acc-master-1' has role 'MASTER', expected SUB");

        let err = ApiError::from(HierarchyError::UnexpectedParentSelection);
        assert_eq!(err.status_code(), 400);
    }

    #[test]
    fn test_session_errors_map_to_unauthorized_or_internal() {
        let err = ApiError::from(SessionError::MissingHeader);
        assert_eq!(err.status_code(), 401);

        let err = ApiError::from(SessionError::Unavailable("connection refused".to_string()));
        assert_eq!(err.status_code(), 500);
        assert_eq!(err.message(), "Unable to verify session");
    }
}

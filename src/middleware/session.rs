use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::HeaderMap,
    middleware::Next,
    response::Response,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::error::ApiError;

/// Verified caller identity. `role` stays a raw string so an unexpected value
/// from the verifier ranks as least privileged instead of failing the request.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub user_id: String,
    pub role: String,
}

impl Session {
    pub fn new(user_id: impl Into<String>, role: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            role: role.into(),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    #[error("Missing Authorization header")]
    MissingHeader,

    #[error("Authorization header must use Bearer token format")]
    InvalidHeader,

    #[error("Invalid session token: {0}")]
    InvalidToken(String),

    #[error("Session verifier unavailable: {0}")]
    Unavailable(String),
}

/// Turns a bearer token into a session. Token format and signature checks are
/// entirely up to the implementation.
pub trait SessionVerifier: Send + Sync + 'static {
    fn verify(&self, token: &str) -> Result<Session, SessionError>;
}

pub type SharedVerifier = Arc<dyn SessionVerifier>;

/// Session middleware that verifies the bearer token and injects [`Session`]
/// into request extensions for the role guards and handlers behind it
pub async fn session_middleware(
    State(verifier): State<SharedVerifier>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = extract_bearer_token(request.headers())?;
    let session = verifier.verify(&token)?;

    tracing::debug!("Session verified: user '{}' with role '{}'", session.user_id, session.role);

    request.extensions_mut().insert(session);
    Ok(next.run(request).await)
}

/// Extract the bearer token from the Authorization header
pub fn extract_bearer_token(headers: &HeaderMap) -> Result<String, SessionError> {
    let auth_header = headers
        .get(axum::http::header::AUTHORIZATION)
        .ok_or(SessionError::MissingHeader)?;

    let auth_str = auth_header
        .to_str()
        .map_err(|_| SessionError::InvalidHeader)?;

    match auth_str.strip_prefix("Bearer ") {
        Some(token) if !token.trim().is_empty() => Ok(token.trim().to_string()),
        Some(_) => Err(SessionError::InvalidToken("empty token".to_string())),
        None => Err(SessionError::InvalidHeader),
    }
}

//! Role guards run after [`session_middleware`](super::session_middleware).
//!
//! Mount with `axum::middleware::from_fn_with_state(Feature::X, require_feature)`
//! or `axum::middleware::from_fn(require_route)`. A denied request gets a 403
//! before the handler runs.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use crate::config::config;
use crate::error::ApiError;
use crate::policy::{self, Feature};
use crate::resolver::{self, CreationPlan};

use super::session::Session;

fn session_of(request: &Request) -> Result<Session, ApiError> {
    request
        .extensions()
        .get::<Session>()
        .cloned()
        .ok_or_else(|| ApiError::unauthorized("Session required before access checks"))
}

fn denied(session: &Session, what: &str) -> ApiError {
    let authz = &config().authz;
    if authz.log_denials {
        tracing::warn!("Access denied: user '{}' ({}) -> {}", session.user_id, session.role, what);
    }
    denial_error(session, what, authz.denial_detail)
}

fn denial_error(session: &Session, what: &str, detail: bool) -> ApiError {
    if detail {
        ApiError::forbidden(format!("Access denied: role '{}' cannot access {}", session.role, what))
    } else {
        ApiError::forbidden("Access denied: insufficient role")
    }
}

pub async fn require_feature(
    State(feature): State<Feature>,
    request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let session = session_of(&request)?;
    if !policy::can_access_feature(&session.role, feature.key()) {
        return Err(denied(&session, &format!("feature '{}'", feature)));
    }
    Ok(next.run(request).await)
}

/// Checks the request path against the route table. Inside a nested router
/// the path seen here is already stripped of the nest prefix, so mount this
/// on the outer router.
pub async fn require_route(request: Request, next: Next) -> Result<Response, ApiError> {
    let session = session_of(&request)?;
    let path = request.uri().path().to_string();
    if !policy::can_access_route(&session.role, &path) {
        return Err(denied(&session, &format!("route '{}'", path)));
    }
    Ok(next.run(request).await)
}

pub async fn require_restricted(request: Request, next: Next) -> Result<Response, ApiError> {
    let session = session_of(&request)?;
    if !policy::can_access_restricted_sections(&session.role) {
        return Err(denied(&session, "restricted sections"));
    }
    Ok(next.run(request).await)
}

/// Handler-side check before acting on an account holding `target_role`
pub fn authorize_target(session: &Session, target_role: &str) -> Result<(), ApiError> {
    if !policy::can_access_role(&session.role, target_role) {
        return Err(denied(session, &format!("accounts with role '{}'", target_role)));
    }
    Ok(())
}

/// Handler-side start of the create-account flow for the session's user
pub fn authorize_creation(session: &Session, new_user_role: &str) -> Result<CreationPlan, ApiError> {
    let plan = resolver::plan_creation(&session.role, session.user_id.clone(), new_user_role)?;
    Ok(plan)
}

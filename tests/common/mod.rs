#![allow(dead_code)]

use std::sync::Arc;

use anyhow::Result;
use axum::{
    body::Body,
    extract::Path,
    http::{Method, Request},
    middleware::{from_fn, from_fn_with_state},
    response::Response,
    routing::{get, post},
    Extension, Router,
};
use serde_json::Value;

use panel_authz::middleware::{
    authorize_creation, authorize_target, require_feature, require_restricted, require_route,
    session_middleware, ApiResponse, ApiResult, Session, SessionError, SessionVerifier, SharedVerifier,
};
use panel_authz::{filter_accessible_users, AccountRef, CreationPlan, Feature};

/// One account per role plus a few extras, in the order a listing page would
/// receive them from the user store
pub fn roster() -> Vec<AccountRef> {
    vec![
        AccountRef::new("acc-owner", "OWNER"),
        AccountRef::new("acc-subowner", "SUB_OWNER").with_parent("acc-owner"),
        AccountRef::new("acc-superadmin", "SUPER_ADMIN").with_parent("acc-subowner"),
        AccountRef::new("acc-admin", "ADMIN").with_parent("acc-superadmin"),
        AccountRef::new("acc-sub", "SUB").with_parent("acc-admin"),
        AccountRef::new("acc-master-1", "MASTER").with_parent("acc-sub"),
        AccountRef::new("acc-superagent", "SUPER_AGENT").with_parent("acc-master-1"),
        AccountRef::new("acc-agent", "AGENT").with_parent("acc-superagent"),
        AccountRef::new("acc-user-1", "USER").with_parent("acc-agent"),
        AccountRef::new("acc-master-2", "MASTER").with_parent("acc-sub"),
        AccountRef::new("acc-ghost", "GHOST"),
        AccountRef::new("acc-user-2", "USER").with_parent("acc-agent"),
    ]
}

pub fn ids(accounts: &[AccountRef]) -> Vec<&str> {
    accounts.iter().map(|a| a.id.as_str()).collect()
}

/// Accepts `token-<ROLE>` for any role string, `token-down` simulates a
/// verifier outage
pub struct StubVerifier;

impl SessionVerifier for StubVerifier {
    fn verify(&self, token: &str) -> Result<Session, SessionError> {
        match token.strip_prefix("token-") {
            Some("down") => Err(SessionError::Unavailable("session store offline".to_string())),
            Some(role) if !role.is_empty() => Ok(Session::new(format!("user-{}", role.to_lowercase()), role)),
            _ => Err(SessionError::InvalidToken("unknown token".to_string())),
        }
    }
}

async fn ok() -> ApiResult<&'static str> {
    Ok(ApiResponse::success("ok"))
}

async fn whoami(Extension(session): Extension<Session>) -> ApiResult<Session> {
    Ok(ApiResponse::success(session))
}

async fn accounts_by_role(
    Extension(session): Extension<Session>,
    Path(role): Path<String>,
) -> ApiResult<Vec<AccountRef>> {
    authorize_target(&session, &role)?;
    let of_role: Vec<AccountRef> = roster().into_iter().filter(|a| a.role == role).collect();
    Ok(ApiResponse::success(filter_accessible_users(&session.role, &of_role)))
}

async fn create_account(
    Extension(session): Extension<Session>,
    Path(role): Path<String>,
) -> ApiResult<CreationPlan> {
    let plan = authorize_creation(&session, &role)?;
    Ok(ApiResponse::created(plan))
}

/// A router shaped like the panel API: route-table guarded `/api/*`, a
/// feature-guarded decision endpoint, a restricted section and account
/// handlers, all behind the session middleware
pub fn test_router() -> Router {
    let verifier: SharedVerifier = Arc::new(StubVerifier);

    Router::new()
        .route("/api/clients", get(ok))
        .route("/api/clients/:id", get(ok))
        .route("/api/reports/login", get(ok))
        .route("/api/settings/limits", get(ok))
        .route("/api/dashboard", get(ok))
        .route("/api/unmapped", get(ok))
        .route_layer(from_fn(require_route))
        .route(
            "/decisions/casino",
            post(ok).route_layer(from_fn_with_state(Feature::CasinoDecisions, require_feature)),
        )
        .route("/restricted", get(ok).route_layer(from_fn(require_restricted)))
        .route("/whoami", get(whoami))
        .route("/accounts/by-role/:role", get(accounts_by_role))
        .route("/accounts/:role", post(create_account))
        .layer(from_fn_with_state(verifier, session_middleware))
}

pub fn request(method: Method, uri: &str, token: Option<&str>) -> Result<Request<Body>> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {}", token));
    }
    Ok(builder.body(Body::empty())?)
}

pub async fn body_json(response: Response) -> Result<Value> {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await?;
    Ok(serde_json::from_slice(&bytes)?)
}

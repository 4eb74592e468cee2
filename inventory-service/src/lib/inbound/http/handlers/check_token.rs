use axum::extract::State;
use axum::http::header::AUTHORIZATION;
use axum::http::HeaderMap;
use axum::http::StatusCode;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::item::ports::ItemServicePort;
use crate::domain::user::ports::AuthServicePort;
use crate::inbound::http::middleware::rejection_for;
use crate::inbound::http::router::AppState;

/// Report whether the presented bearer token is currently usable.
///
/// An expired token yields `valid: false`; a missing, malformed or
/// forged one is rejected the same way the auth gate rejects it.
pub async fn check_token<AS, IS>(
    State(state): State<AppState<AS, IS>>,
    headers: HeaderMap,
) -> Result<ApiSuccess<CheckTokenResponseData>, ApiError>
where
    AS: AuthServicePort,
    IS: ItemServicePort,
{
    let header = headers
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default();

    state
        .authenticator
        .check_token(header)
        .map_err(|e| rejection_for(&e))
        .map(|valid| ApiSuccess::new(StatusCode::OK, CheckTokenResponseData { valid }))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckTokenResponseData {
    pub valid: bool,
}

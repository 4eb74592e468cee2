use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use super::AccessTokenData;
use super::ApiError;
use super::ApiSuccess;
use crate::domain::item::ports::ItemServicePort;
use crate::domain::user::errors::UserError;
use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::LoginCommand;
use crate::domain::user::ports::AuthServicePort;
use crate::inbound::http::router::AppState;

pub async fn login<AS, IS>(
    State(state): State<AppState<AS, IS>>,
    Json(body): Json<LoginRequest>,
) -> Result<ApiSuccess<AccessTokenData>, ApiError>
where
    AS: AuthServicePort,
    IS: ItemServicePort,
{
    // A malformed email cannot belong to anyone
    let email = EmailAddress::new(body.email)
        .map_err(|_| ApiError::from(UserError::InvalidCredentials))?;

    state
        .auth_service
        .login(LoginCommand::new(email, body.password))
        .await
        .map_err(ApiError::from)
        .map(|token| ApiSuccess::new(StatusCode::OK, token.into()))
}

/// HTTP request body for login (raw JSON)
#[derive(Deserialize)]
pub struct LoginRequest {
    email: String,
    password: String,
}

use std::sync::Arc;

use auth::Authenticator;
use auth::JwtError;
use axum::extract::Request;
use axum::extract::State;
use axum::http::header::AUTHORIZATION;
use axum::http::HeaderValue;
use axum::middleware::Next;
use axum::response::IntoResponse;
use axum::response::Response;

use crate::domain::user::models::UserId;
use crate::inbound::http::handlers::ApiError;

/// Extension type describing the verified caller of a protected route
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedUser {
    /// Present when the token carries a parseable `sub` claim
    pub user_id: Option<UserId>,
    pub expires_at: i64,
}

/// Outcome of inspecting a request's `Authorization` header
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateDecision {
    Forward(AuthenticatedUser),
    Reject(ApiError),
}

/// Map a verification failure to the response the gate sends.
///
/// Missing or malformed credentials are a client error (400); a present
/// but unusable token is an authentication error (401).
pub fn rejection_for(error: &JwtError) -> ApiError {
    match error {
        JwtError::MalformedHeader(_) => ApiError::BadRequest(error.to_string()),
        JwtError::InvalidToken(_) | JwtError::TokenExpired | JwtError::SigningFailed(_) => {
            ApiError::Unauthorized(error.to_string())
        }
    }
}

/// Decide whether a request carrying `header` may reach a protected handler.
pub fn evaluate_authorization(
    authenticator: &Authenticator,
    header: Option<&HeaderValue>,
) -> GateDecision {
    let Some(header) = header else {
        return GateDecision::Reject(ApiError::BadRequest(
            "Missing or malformed JWT: Authorization header is absent".to_string(),
        ));
    };

    let Ok(header) = header.to_str() else {
        return GateDecision::Reject(ApiError::BadRequest(
            "Missing or malformed JWT: Authorization header is not valid text".to_string(),
        ));
    };

    match authenticator.verify_header(header) {
        Ok(claims) => GateDecision::Forward(AuthenticatedUser {
            user_id: claims
                .sub
                .as_deref()
                .and_then(|sub| UserId::from_string(sub).ok()),
            // verify_header only succeeds when exp is present
            expires_at: claims.exp.unwrap_or_default(),
        }),
        Err(e) => GateDecision::Reject(rejection_for(&e)),
    }
}

/// Middleware that rejects requests without a valid bearer token.
///
/// The request is forwarded unchanged apart from an [`AuthenticatedUser`]
/// inserted into its extensions.
pub async fn require_bearer_token(
    State(authenticator): State<Arc<Authenticator>>,
    mut req: Request,
    next: Next,
) -> Response {
    match evaluate_authorization(&authenticator, req.headers().get(AUTHORIZATION)) {
        GateDecision::Forward(caller) => {
            req.extensions_mut().insert(caller);
            next.run(req).await
        }
        GateDecision::Reject(error) => {
            tracing::warn!(
                method = %req.method(),
                uri = %req.uri(),
                status = error.status().as_u16(),
                "Rejected request to protected route"
            );
            error.into_response()
        }
    }
}

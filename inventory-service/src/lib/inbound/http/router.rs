use std::sync::Arc;
use std::time::Duration;

use auth::Authenticator;
use axum::body::Body;
use axum::http::Request;
use axum::http::Response;
use axum::middleware;
use axum::routing::get;
use axum::routing::post;
use axum::routing::put;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::check_token::check_token;
use super::handlers::create_item::create_item;
use super::handlers::delete_item::delete_item;
use super::handlers::get_item::get_item;
use super::handlers::list_items::list_items;
use super::handlers::login::login;
use super::handlers::signup::signup;
use super::handlers::update_item::update_item;
use super::middleware::require_bearer_token;
use crate::domain::item::ports::ItemServicePort;
use crate::domain::user::ports::AuthServicePort;

/// Shared handler state, generic over the domain service ports.
pub struct AppState<AS, IS>
where
    AS: AuthServicePort,
    IS: ItemServicePort,
{
    pub auth_service: Arc<AS>,
    pub item_service: Arc<IS>,
    pub authenticator: Arc<Authenticator>,
}

impl<AS, IS> Clone for AppState<AS, IS>
where
    AS: AuthServicePort,
    IS: ItemServicePort,
{
    fn clone(&self) -> Self {
        Self {
            auth_service: Arc::clone(&self.auth_service),
            item_service: Arc::clone(&self.item_service),
            authenticator: Arc::clone(&self.authenticator),
        }
    }
}

pub fn create_router<AS, IS>(
    auth_service: Arc<AS>,
    item_service: Arc<IS>,
    authenticator: Arc<Authenticator>,
) -> Router
where
    AS: AuthServicePort,
    IS: ItemServicePort,
{
    let state = AppState {
        auth_service,
        item_service,
        authenticator,
    };

    let public_routes: Router<AppState<AS, IS>> = Router::new()
        .route("/api/v1/signup", post(signup::<AS, IS>))
        .route("/api/v1/login", post(login::<AS, IS>))
        .route("/api/v1/token/check", get(check_token::<AS, IS>))
        .route("/api/v1/items", get(list_items::<AS, IS>))
        .route("/api/v1/items/:item_id", get(get_item::<AS, IS>));

    let protected_routes: Router<AppState<AS, IS>> = Router::new()
        .route("/api/v1/items", post(create_item::<AS, IS>))
        .route(
            "/api/v1/items/:item_id",
            put(update_item::<AS, IS>).delete(delete_item::<AS, IS>),
        )
        .route_layer(middleware::from_fn_with_state(
            Arc::clone(&state.authenticator),
            require_bearer_token,
        ));

    // Headers are left out of the span so bearer tokens never reach the logs
    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version(),
            )
        })
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!(
                method = %request.method(),
                uri = %request.uri(),
                "Request started"
            );
        })
        .on_response(
            |response: &Response<Body>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_millis(),
                    "Request completed"
                );
            },
        );

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .layer(trace_layer)
        .layer(CorsLayer::permissive())
        .with_state(state)
}

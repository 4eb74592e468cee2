use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;

use crate::domain::item::errors::ItemError;
use crate::domain::item::models::ItemId;
use crate::domain::item::ports::ItemServicePort;
use crate::domain::user::ports::AuthServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

pub async fn delete_item<AS, IS>(
    State(state): State<AppState<AS, IS>>,
    Path(id): Path<String>,
) -> Result<ApiSuccess<()>, ApiError>
where
    AS: AuthServicePort,
    IS: ItemServicePort,
{
    let item_id = ItemId::from_string(&id).map_err(ItemError::from)?;

    state
        .item_service
        .delete_item(&item_id)
        .await
        .map_err(ApiError::from)
        .map(|_| ApiSuccess::new(StatusCode::OK, ()))
}

use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use super::create_item::ItemRequest;
use super::ApiError;
use super::ApiSuccess;
use super::ItemData;
use crate::domain::item::errors::ItemError;
use crate::domain::item::models::ItemId;
use crate::domain::item::ports::ItemServicePort;
use crate::domain::user::ports::AuthServicePort;
use crate::inbound::http::router::AppState;

pub async fn update_item<AS, IS>(
    State(state): State<AppState<AS, IS>>,
    Path(id): Path<String>,
    Json(body): Json<ItemRequest>,
) -> Result<ApiSuccess<ItemData>, ApiError>
where
    AS: AuthServicePort,
    IS: ItemServicePort,
{
    let item_id = ItemId::from_string(&id).map_err(ItemError::from)?;
    let command = body.try_into_command()?;

    state
        .item_service
        .update_item(&item_id, command)
        .await
        .map_err(ApiError::from)
        .map(|ref item| ApiSuccess::new(StatusCode::OK, item.into()))
}

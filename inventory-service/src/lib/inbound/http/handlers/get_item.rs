use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;

use super::ApiError;
use super::ApiSuccess;
use super::ItemData;
use crate::domain::item::errors::ItemError;
use crate::domain::item::models::ItemId;
use crate::domain::item::ports::ItemServicePort;
use crate::domain::user::ports::AuthServicePort;
use crate::inbound::http::router::AppState;

pub async fn get_item<AS, IS>(
    State(state): State<AppState<AS, IS>>,
    Path(item_id): Path<String>,
) -> Result<ApiSuccess<ItemData>, ApiError>
where
    AS: AuthServicePort,
    IS: ItemServicePort,
{
    let item_id = ItemId::from_string(&item_id).map_err(ItemError::from)?;

    state
        .item_service
        .get_item(&item_id)
        .await
        .map_err(ApiError::from)
        .map(|ref item| ApiSuccess::new(StatusCode::OK, item.into()))
}

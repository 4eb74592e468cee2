use axum::extract::State;
use axum::http::StatusCode;

use super::ApiError;
use super::ApiSuccess;
use super::ItemData;
use crate::domain::item::ports::ItemServicePort;
use crate::domain::user::ports::AuthServicePort;
use crate::inbound::http::router::AppState;

pub async fn list_items<AS, IS>(
    State(state): State<AppState<AS, IS>>,
) -> Result<ApiSuccess<Vec<ItemData>>, ApiError>
where
    AS: AuthServicePort,
    IS: ItemServicePort,
{
    state
        .item_service
        .list_items()
        .await
        .map_err(ApiError::from)
        .map(|items| ApiSuccess::new(StatusCode::OK, items.iter().map(ItemData::from).collect()))
}

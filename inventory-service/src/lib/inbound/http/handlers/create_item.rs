use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;
use serde::Deserialize;

use super::ApiError;
use super::ApiSuccess;
use super::ItemData;
use crate::domain::item::errors::ItemError;
use crate::domain::item::models::ItemCommand;
use crate::domain::item::models::ItemName;
use crate::domain::item::models::Price;
use crate::domain::item::models::Quantity;
use crate::domain::item::ports::ItemServicePort;
use crate::domain::user::ports::AuthServicePort;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

pub async fn create_item<AS, IS>(
    State(state): State<AppState<AS, IS>>,
    Extension(caller): Extension<AuthenticatedUser>,
    Json(body): Json<ItemRequest>,
) -> Result<ApiSuccess<ItemData>, ApiError>
where
    AS: AuthServicePort,
    IS: ItemServicePort,
{
    let command = body.try_into_command()?;

    tracing::debug!(user_id = ?caller.user_id, "Creating item");

    state
        .item_service
        .create_item(command)
        .await
        .map_err(ApiError::from)
        .map(|ref item| ApiSuccess::new(StatusCode::CREATED, item.into()))
}

/// HTTP request body for creating or replacing an item (raw JSON)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ItemRequest {
    name: String,
    price: i64,
    quantity: i64,
}

impl ItemRequest {
    pub(crate) fn try_into_command(self) -> Result<ItemCommand, ItemError> {
        let name = ItemName::new(self.name)?;
        let price = Price::new(self.price)?;
        let quantity = Quantity::new(self.quantity)?;
        Ok(ItemCommand::new(name, price, quantity))
    }
}

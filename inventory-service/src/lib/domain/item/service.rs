use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::item::errors::ItemError;
use crate::domain::item::models::Item;
use crate::domain::item::models::ItemCommand;
use crate::domain::item::models::ItemId;
use crate::domain::item::ports::ItemRepository;
use crate::domain::item::ports::ItemServicePort;

/// Domain service implementation for item operations.
pub struct ItemService<IR>
where
    IR: ItemRepository,
{
    repository: Arc<IR>,
}

impl<IR> ItemService<IR>
where
    IR: ItemRepository,
{
    pub fn new(repository: Arc<IR>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<IR> ItemServicePort for ItemService<IR>
where
    IR: ItemRepository,
{
    async fn list_items(&self) -> Result<Vec<Item>, ItemError> {
        self.repository.list_all().await
    }

    async fn get_item(&self, id: &ItemId) -> Result<Item, ItemError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(ItemError::NotFound(id.to_string()))
    }

    async fn create_item(&self, command: ItemCommand) -> Result<Item, ItemError> {
        let item = self.repository.create(Item::new(command)).await?;
        tracing::info!(item_id = %item.id, name = %item.name.as_str(), "Item created");
        Ok(item)
    }

    async fn update_item(&self, id: &ItemId, command: ItemCommand) -> Result<Item, ItemError> {
        let mut item = self.get_item(id).await?;
        item.apply(command);

        let updated = self.repository.update(item).await?;
        tracing::info!(item_id = %updated.id, "Item updated");
        Ok(updated)
    }

    async fn delete_item(&self, id: &ItemId) -> Result<(), ItemError> {
        self.repository.delete(id).await?;
        tracing::info!(item_id = %id, "Item deleted");
        Ok(())
    }
}

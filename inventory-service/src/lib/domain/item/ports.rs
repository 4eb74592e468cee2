use async_trait::async_trait;

use crate::domain::item::errors::ItemError;
use crate::domain::item::models::Item;
use crate::domain::item::models::ItemCommand;
use crate::domain::item::models::ItemId;

/// Port for item domain service operations.
#[async_trait]
pub trait ItemServicePort: Send + Sync + 'static {
    /// List all items, newest first.
    async fn list_items(&self) -> Result<Vec<Item>, ItemError>;

    /// Retrieve an item.
    ///
    /// # Errors
    /// * `NotFound` - Item does not exist
    /// * `DatabaseError` - Database operation failed
    async fn get_item(&self, id: &ItemId) -> Result<Item, ItemError>;

    /// Create a new item.
    async fn create_item(&self, command: ItemCommand) -> Result<Item, ItemError>;

    /// Replace an existing item's details.
    ///
    /// # Errors
    /// * `NotFound` - Item does not exist
    /// * `DatabaseError` - Database operation failed
    async fn update_item(&self, id: &ItemId, command: ItemCommand) -> Result<Item, ItemError>;

    /// Delete an item.
    ///
    /// # Errors
    /// * `NotFound` - Item does not exist
    /// * `DatabaseError` - Database operation failed
    async fn delete_item(&self, id: &ItemId) -> Result<(), ItemError>;
}

/// Port for item persistence.
#[async_trait]
pub trait ItemRepository: Send + Sync + 'static {
    async fn list_all(&self) -> Result<Vec<Item>, ItemError>;

    async fn find_by_id(&self, id: &ItemId) -> Result<Option<Item>, ItemError>;

    async fn create(&self, item: Item) -> Result<Item, ItemError>;

    /// # Errors
    /// * `NotFound` - No row was updated
    async fn update(&self, item: Item) -> Result<Item, ItemError>;

    /// # Errors
    /// * `NotFound` - No row was deleted
    async fn delete(&self, id: &ItemId) -> Result<(), ItemError>;
}

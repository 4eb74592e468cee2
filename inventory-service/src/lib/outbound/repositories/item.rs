use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;
use sqlx::FromRow;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::item::errors::ItemError;
use crate::domain::item::models::Item;
use crate::domain::item::models::ItemId;
use crate::domain::item::models::ItemName;
use crate::domain::item::models::Price;
use crate::domain::item::models::Quantity;
use crate::domain::item::ports::ItemRepository;

pub struct PostgresItemRepository {
    pool: PgPool,
}

impl PostgresItemRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
struct ItemRow {
    id: Uuid,
    name: String,
    price: i64,
    quantity: i64,
    created_at: DateTime<Utc>,
    updated_at: Option<DateTime<Utc>>,
}

impl TryFrom<ItemRow> for Item {
    type Error = ItemError;

    fn try_from(row: ItemRow) -> Result<Self, Self::Error> {
        Ok(Item {
            id: ItemId(row.id),
            name: ItemName::new(row.name)?,
            price: Price::new(row.price)?,
            quantity: Quantity::new(row.quantity)?,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[async_trait]
impl ItemRepository for PostgresItemRepository {
    async fn list_all(&self) -> Result<Vec<Item>, ItemError> {
        let rows = sqlx::query_as::<_, ItemRow>(
            r#"
            SELECT id, name, price, quantity, created_at, updated_at
            FROM items
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| ItemError::DatabaseError(e.to_string()))?;

        rows.into_iter().map(Item::try_from).collect()
    }

    async fn find_by_id(&self, id: &ItemId) -> Result<Option<Item>, ItemError> {
        let row = sqlx::query_as::<_, ItemRow>(
            r#"
            SELECT id, name, price, quantity, created_at, updated_at
            FROM items
            WHERE id = $1
            "#,
        )
        .bind(id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| ItemError::DatabaseError(e.to_string()))?;

        row.map(Item::try_from).transpose()
    }

    async fn create(&self, item: Item) -> Result<Item, ItemError> {
        sqlx::query(
            r#"
            INSERT INTO items (id, name, price, quantity, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(item.id.0)
        .bind(item.name.as_str())
        .bind(item.price.value())
        .bind(item.quantity.value())
        .bind(item.created_at)
        .bind(item.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| ItemError::DatabaseError(e.to_string()))?;

        Ok(item)
    }

    async fn update(&self, item: Item) -> Result<Item, ItemError> {
        let result = sqlx::query(
            r#"
            UPDATE items
            SET name = $2, price = $3, quantity = $4, updated_at = $5
            WHERE id = $1
            "#,
        )
        .bind(item.id.0)
        .bind(item.name.as_str())
        .bind(item.price.value())
        .bind(item.quantity.value())
        .bind(item.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| ItemError::DatabaseError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(ItemError::NotFound(item.id.to_string()));
        }

        Ok(item)
    }

    async fn delete(&self, id: &ItemId) -> Result<(), ItemError> {
        let result = sqlx::query(
            r#"
            DELETE FROM items
            WHERE id = $1
            "#,
        )
        .bind(id.0)
        .execute(&self.pool)
        .await
        .map_err(|e| ItemError::DatabaseError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(ItemError::NotFound(id.to_string()));
        }

        Ok(())
    }
}

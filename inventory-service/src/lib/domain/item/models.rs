use std::fmt;

use chrono::DateTime;
use chrono::SubsecRound;
use chrono::Utc;
use uuid::Uuid;

use crate::domain::item::errors::ItemIdError;
use crate::domain::item::errors::ItemNameError;
use crate::domain::item::errors::PriceError;
use crate::domain::item::errors::QuantityError;

/// Current time at the microsecond precision `TIMESTAMPTZ` stores.
fn now() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(6)
}

/// Inventory item entity.
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    pub id: ItemId,
    pub name: ItemName,
    pub price: Price,
    pub quantity: Quantity,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl Item {
    /// Build a new item from validated details.
    pub fn new(command: ItemCommand) -> Self {
        Self {
            id: ItemId::new(),
            name: command.name,
            price: command.price,
            quantity: command.quantity,
            created_at: now(),
            updated_at: None,
        }
    }

    /// Replace all mutable fields and stamp the update time.
    pub fn apply(&mut self, command: ItemCommand) {
        self.name = command.name;
        self.price = command.price;
        self.quantity = command.quantity;
        self.updated_at = Some(now());
    }
}

/// Item unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ItemId(pub Uuid);

impl ItemId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse an item ID from string.
    ///
    /// # Errors
    /// * `InvalidFormat` - String is not a valid UUID
    pub fn from_string(s: &str) -> Result<Self, ItemIdError> {
        Uuid::parse_str(s)
            .map(ItemId)
            .map_err(|e| ItemIdError::InvalidFormat(e.to_string()))
    }
}

impl Default for ItemId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Item name value type
///
/// Trimmed, non-empty, at most 255 characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemName(String);

impl ItemName {
    const MAX_LENGTH: usize = 255;

    pub fn new(name: String) -> Result<Self, ItemNameError> {
        let name = name.trim().to_string();
        let length = name.chars().count();

        if length == 0 {
            Err(ItemNameError::Empty)
        } else if length > Self::MAX_LENGTH {
            Err(ItemNameError::TooLong {
                max: Self::MAX_LENGTH,
                actual: length,
            })
        } else {
            Ok(Self(name))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Unit price, strictly positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Price(i64);

impl Price {
    pub fn new(value: i64) -> Result<Self, PriceError> {
        if value > 0 {
            Ok(Self(value))
        } else {
            Err(PriceError::NotPositive(value))
        }
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

/// Units in stock, zero allowed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quantity(i64);

impl Quantity {
    pub fn new(value: i64) -> Result<Self, QuantityError> {
        if value >= 0 {
            Ok(Self(value))
        } else {
            Err(QuantityError::Negative(value))
        }
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

/// Validated item details, used for both create and full update.
#[derive(Debug, Clone)]
pub struct ItemCommand {
    pub name: ItemName,
    pub price: Price,
    pub quantity: Quantity,
}

impl ItemCommand {
    pub fn new(name: ItemName, price: Price, quantity: Quantity) -> Self {
        Self {
            name,
            price,
            quantity,
        }
    }
}

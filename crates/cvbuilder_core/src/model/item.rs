//! Inventory item document model.
//!
//! # Responsibility
//! - Define the document shape handed to the external persistence
//!   collaborator, with its required-field and minimum-bound rules.
//! - Provide the derived `url` accessor computed from the record ID.
//!
//! # Invariants
//! - `name` and `description` are required and non-empty.
//! - `price` is finite and never negative; `stock_quantity` is unsigned.
//! - Decoding re-validates: an invalid document is rejected, not masked.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier for an inventory item record.
pub type ItemId = Uuid;

/// Foreign-key reference to an externally owned Category entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryId(pub Uuid);

/// Validation failures for item documents.
#[derive(Debug, Clone, PartialEq)]
pub enum ItemValidationError {
    /// `name` is required and must be non-empty.
    MissingName,
    /// `description` is required and must be non-empty.
    MissingDescription,
    /// `price` must be finite (rejects NaN and infinities).
    NonFinitePrice,
    /// `price` must be >= 0.
    NegativePrice(f64),
}

impl Display for ItemValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingName => write!(f, "item name is required"),
            Self::MissingDescription => write!(f, "item description is required"),
            Self::NonFinitePrice => write!(f, "item price must be a finite number"),
            Self::NegativePrice(price) => write!(f, "item price ({price}) must be >= 0"),
        }
    }
}

impl Error for ItemValidationError {}

/// Inventory item document.
///
/// Wire field names follow the external document schema
/// (`stockQuantity`, camelCase throughout).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RawItem")]
pub struct Item {
    /// Stable record ID; the derived `url` is computed from it.
    pub id: ItemId,
    pub name: String,
    pub description: String,
    pub price: f64,
    /// References to Category entities owned elsewhere.
    pub category: Vec<CategoryId>,
    pub stock_quantity: u32,
}

/// Decode-side shadow of `Item`, before validation.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawItem {
    id: ItemId,
    name: String,
    description: String,
    price: f64,
    #[serde(default)]
    category: Vec<CategoryId>,
    #[serde(default)]
    stock_quantity: u32,
}

impl TryFrom<RawItem> for Item {
    type Error = ItemValidationError;

    fn try_from(raw: RawItem) -> Result<Self, Self::Error> {
        let item = Item {
            id: raw.id,
            name: raw.name,
            description: raw.description,
            price: raw.price,
            category: raw.category,
            stock_quantity: raw.stock_quantity,
        };
        item.validate()?;
        Ok(item)
    }
}

impl Item {
    /// Creates an item with a generated stable ID and empty category set.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        price: f64,
        stock_quantity: u32,
    ) -> Result<Self, ItemValidationError> {
        Self::with_id(Uuid::new_v4(), name, description, price, stock_quantity)
    }

    /// Creates an item with a caller-provided stable ID.
    ///
    /// Used by import paths where identity already exists externally.
    pub fn with_id(
        id: ItemId,
        name: impl Into<String>,
        description: impl Into<String>,
        price: f64,
        stock_quantity: u32,
    ) -> Result<Self, ItemValidationError> {
        let item = Self {
            id,
            name: name.into(),
            description: description.into(),
            price,
            category: Vec::new(),
            stock_quantity,
        };
        item.validate()?;
        Ok(item)
    }

    /// Checks required-field and minimum-bound rules.
    ///
    /// The external persistence collaborator calls this before any write;
    /// a failure surfaces as a rejected write, never as silent repair.
    pub fn validate(&self) -> Result<(), ItemValidationError> {
        if self.name.trim().is_empty() {
            return Err(ItemValidationError::MissingName);
        }
        if self.description.trim().is_empty() {
            return Err(ItemValidationError::MissingDescription);
        }
        if !self.price.is_finite() {
            return Err(ItemValidationError::NonFinitePrice);
        }
        if self.price < 0.0 {
            return Err(ItemValidationError::NegativePrice(self.price));
        }
        Ok(())
    }

    /// Derived route path for this record.
    pub fn url(&self) -> String {
        format!("/item/{}", self.id)
    }
}

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::dimensions::Dimensions;

/// An item to be packed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Internal identifier (0 when the caller did not supply one)
    pub id: u64,

    /// External business identifier, e.g. a SKU
    pub item_id: String,

    pub dimensions: Dimensions,
}

impl Item {
    pub fn new(id: u64, item_id: impl Into<String>, dimensions: Dimensions) -> Self {
        Self {
            id,
            item_id: item_id.into(),
            dimensions,
        }
    }

    pub fn volume(&self) -> Decimal {
        self.dimensions.volume()
    }
}

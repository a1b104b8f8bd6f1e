use serde::{Deserialize, Serialize};

use super::item::Item;

/// One customer order
///
/// Item order matters only as a tie-break between items of equal volume.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    /// Must be positive to be packed
    pub order_id: i64,
    pub items: Vec<Item>,
}

impl Order {
    pub fn new(order_id: i64, items: Vec<Item>) -> Self {
        Self { order_id, items }
    }
}

/// A batch of orders packed against one catalog snapshot
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BatchRequest {
    pub orders: Vec<Order>,
}

impl BatchRequest {
    pub fn new(orders: Vec<Order>) -> Self {
        Self { orders }
    }
}

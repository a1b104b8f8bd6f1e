use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::box_type::BoxType;
use super::item::Item;

/// One opened box and the items allocated into it, in allocation order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackedBox {
    pub box_type: BoxType,
    pub allocated_items: Vec<Item>,
}

impl PackedBox {
    /// Sum of the allocated items' volumes
    pub fn occupied_volume(&self) -> Decimal {
        self.allocated_items.iter().map(Item::volume).sum()
    }
}

/// Packing outcome for one order; boxes appear in the order they were opened
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackedOrderResult {
    pub order_id: i64,
    pub boxes: Vec<PackedBox>,
}

impl PackedOrderResult {
    pub fn empty(order_id: i64) -> Self {
        Self {
            order_id,
            boxes: Vec::new(),
        }
    }

    pub fn box_count(&self) -> usize {
        self.boxes.len()
    }
}

/// Packing outcome for a whole batch, one entry per order in request order
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BatchResult {
    pub orders: Vec<PackedOrderResult>,
}

impl BatchResult {
    /// Total boxes opened across all orders
    pub fn box_count(&self) -> usize {
        self.orders.iter().map(PackedOrderResult::box_count).sum()
    }
}

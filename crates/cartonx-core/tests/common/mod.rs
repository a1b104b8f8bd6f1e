use cartonx_core::{BatchRequest, BoxType, Dimensions, Item, Order, StaticCatalog};
use rust_decimal::Decimal;

/// Box 1 30x40x80, Box 2 80x50x40, Box 3 50x80x60
#[allow(dead_code)]
pub fn stock_catalog() -> StaticCatalog {
    StaticCatalog::default_boxes()
}

/// Build an item from whole-number edges
#[allow(dead_code)]
pub fn item(item_id: &str, height: i64, width: i64, length: i64) -> Item {
    Item::new(
        0,
        item_id,
        Dimensions::new(
            Decimal::from(height),
            Decimal::from(width),
            Decimal::from(length),
        ),
    )
}

#[allow(dead_code)]
pub fn box_type(id: i64, height: i64, width: i64, length: i64) -> BoxType {
    BoxType::new(
        id,
        format!("Box {}", id),
        Dimensions::new(
            Decimal::from(height),
            Decimal::from(width),
            Decimal::from(length),
        ),
    )
}

#[allow(dead_code)]
pub fn single_order(order_id: i64, items: Vec<Item>) -> BatchRequest {
    BatchRequest::new(vec![Order::new(order_id, items)])
}

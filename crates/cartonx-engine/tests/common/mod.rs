use cartonx_core::transport::{ItemDto, OrderDto, PackRequestDto};
use cartonx_core::Dimensions;
use rusqlite::Connection;
use rust_decimal::Decimal;

pub fn setup_catalog() -> Connection {
    cartonx_store::db::open_catalog_in_memory().expect("Failed to create in-memory catalog")
}

#[allow(dead_code)]
pub fn item_dto(item_id: &str, height: i64, width: i64, length: i64) -> ItemDto {
    ItemDto {
        id: 0,
        item_id: item_id.to_string(),
        dimensions: Dimensions::new(
            Decimal::from(height),
            Decimal::from(width),
            Decimal::from(length),
        ),
    }
}

#[allow(dead_code)]
pub fn request(orders: Vec<(i64, Vec<ItemDto>)>) -> PackRequestDto {
    PackRequestDto {
        orders: orders
            .into_iter()
            .map(|(order_id, items)| OrderDto { order_id, items })
            .collect(),
    }
}

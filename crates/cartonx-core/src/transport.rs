//! JSON wire types
//!
//! Field names follow the public API (`order_id`, `items`, `boxes`,
//! `allocated_items`, ...). Decimal values are accepted as JSON numbers or
//! strings and always written back as strings so no precision is lost.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::ExError;
use crate::model::{
    BatchRequest, BatchResult, BoxType, Dimensions, Item, Order, PackedBox, PackedOrderResult,
};

// ===== Request =====

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PackRequestDto {
    pub orders: Vec<OrderDto>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderDto {
    pub order_id: i64,
    #[serde(default)]
    pub items: Vec<ItemDto>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemDto {
    #[serde(default)]
    pub id: u64,
    pub item_id: String,
    pub dimensions: Dimensions,
}

// ===== Response =====

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PackResponseDto {
    pub orders: Vec<OrderResultDto>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderResultDto {
    pub order_id: i64,
    pub boxes: Vec<PackedBoxDto>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PackedBoxDto {
    #[serde(rename = "box")]
    pub box_type: BoxTypeDto,
    pub allocated_items: Vec<ItemDto>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoxTypeDto {
    pub id: i64,
    /// Display name
    pub box_id: String,
    pub height: Decimal,
    pub width: Decimal,
    pub length: Decimal,
    pub volume: Decimal,
}

// ===== Errors =====

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponseDto {
    pub error: ErrorBodyDto,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorBodyDto {
    pub code: String,
    pub kind: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub order_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub item_id: Option<String>,
    /// Box type id, item catalog id or row id the failure is about
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub entity_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub request_id: Option<String>,
}

// ===== Conversions =====

impl From<ItemDto> for Item {
    fn from(dto: ItemDto) -> Self {
        Item::new(dto.id, dto.item_id, dto.dimensions)
    }
}

impl From<&Item> for ItemDto {
    fn from(item: &Item) -> Self {
        Self {
            id: item.id,
            item_id: item.item_id.clone(),
            dimensions: item.dimensions,
        }
    }
}

impl From<OrderDto> for Order {
    fn from(dto: OrderDto) -> Self {
        Order::new(dto.order_id, dto.items.into_iter().map(Item::from).collect())
    }
}

impl From<PackRequestDto> for BatchRequest {
    fn from(dto: PackRequestDto) -> Self {
        BatchRequest::new(dto.orders.into_iter().map(Order::from).collect())
    }
}

impl From<&BoxType> for BoxTypeDto {
    fn from(box_type: &BoxType) -> Self {
        Self {
            id: box_type.id,
            box_id: box_type.name.clone(),
            height: box_type.dimensions.height,
            width: box_type.dimensions.width,
            length: box_type.dimensions.length,
            volume: box_type.volume(),
        }
    }
}

impl From<&PackedBox> for PackedBoxDto {
    fn from(packed: &PackedBox) -> Self {
        Self {
            box_type: BoxTypeDto::from(&packed.box_type),
            allocated_items: packed.allocated_items.iter().map(ItemDto::from).collect(),
        }
    }
}

impl From<&PackedOrderResult> for OrderResultDto {
    fn from(result: &PackedOrderResult) -> Self {
        Self {
            order_id: result.order_id,
            boxes: result.boxes.iter().map(PackedBoxDto::from).collect(),
        }
    }
}

impl From<&BatchResult> for PackResponseDto {
    fn from(result: &BatchResult) -> Self {
        Self {
            orders: result.orders.iter().map(OrderResultDto::from).collect(),
        }
    }
}

impl From<&ExError> for ErrorResponseDto {
    fn from(err: &ExError) -> Self {
        Self {
            error: ErrorBodyDto {
                code: err.code().to_string(),
                kind: err.kind().name().to_string(),
                message: err.message().to_string(),
                order_id: err.order_id(),
                item_id: err.item_id().map(str::to_string),
                entity_id: err.entity_id().map(str::to_string),
                request_id: err.request_id().map(|id| id.to_string()),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::PackError;
    use rust_decimal_macros::dec;

    #[test]
    fn test_parses_request_with_numeric_and_string_dimensions() {
        let json = r#"{
            "orders": [
                {
                    "order_id": 1,
                    "items": [
                        { "item_id": "PS5", "dimensions": { "height": 40, "width": 10, "length": 25 } },
                        { "item_id": "Volante", "dimensions": { "height": "40.5", "width": 30, "length": 30 } }
                    ]
                },
                { "order_id": 2 }
            ]
        }"#;

        let dto: PackRequestDto = serde_json::from_str(json).unwrap();
        let request = BatchRequest::from(dto);

        assert_eq!(request.orders.len(), 2);
        assert_eq!(request.orders[0].items[0].id, 0);
        assert_eq!(request.orders[0].items[1].dimensions.height, dec!(40.5));
        assert!(request.orders[1].items.is_empty());
    }

    #[test]
    fn test_response_uses_wire_field_names() {
        let box_type = BoxType::new(1, "Box 1", Dimensions::new(dec!(30), dec!(40), dec!(80)));
        let item = Item::new(0, "PS5", Dimensions::new(dec!(40), dec!(10), dec!(25)));
        let result = BatchResult {
            orders: vec![PackedOrderResult {
                order_id: 1,
                boxes: vec![PackedBox {
                    box_type,
                    allocated_items: vec![item],
                }],
            }],
        };

        let value = serde_json::to_value(PackResponseDto::from(&result)).unwrap();
        let packed = &value["orders"][0]["boxes"][0];

        assert_eq!(value["orders"][0]["order_id"], 1);
        assert_eq!(packed["box"]["box_id"], "Box 1");
        assert_eq!(packed["box"]["volume"], "96000");
        assert_eq!(packed["allocated_items"][0]["item_id"], "PS5");
    }

    #[test]
    fn test_error_body_carries_identifiers() {
        let ex: ExError = PackError::InvalidItem {
            order_id: 4,
            item_id: "flat".to_string(),
        }
        .into();

        let value = serde_json::to_value(ErrorResponseDto::from(&ex)).unwrap();
        assert_eq!(value["error"]["code"], "ERR_INVALID_ITEM");
        assert_eq!(value["error"]["kind"], "InvalidItem");
        assert_eq!(value["error"]["order_id"], 4);
        assert_eq!(value["error"]["item_id"], "flat");
        assert!(value["error"].get("entity_id").is_none());
        assert!(value["error"].get("request_id").is_none());
    }

    #[test]
    fn test_error_body_carries_entity_id() {
        let ex: ExError = PackError::NoFittingBox {
            order_id: 2,
            item_id: "crate".to_string(),
            id: 3,
        }
        .into();

        let value = serde_json::to_value(ErrorResponseDto::from(&ex)).unwrap();
        assert_eq!(value["error"]["code"], "ERR_NO_FITTING_BOX");
        assert_eq!(value["error"]["entity_id"], "3");

        let invalid_box: ExError = PackError::InvalidBoxType { box_id: 5 }.into();
        let body = ErrorResponseDto::from(&invalid_box).error;
        assert_eq!(body.entity_id.as_deref(), Some("5"));
    }
}

//! Single-item box suggestion

#![allow(clippy::result_large_err)]

use cartonx_core::transport::{BoxTypeDto, ItemDto};
use cartonx_core::{suggest_box, CatalogProvider, CatalogSnapshot, Item};
use cartonx_store::errors::Result;

use super::observe;

/// Smallest catalog box that can hold the item on its own
///
/// ## Errors
///
/// - `InvalidInput`: non-positive edge
/// - `NoSuitableBox`: no box fits
/// - catalog errors from the provider
pub fn suggest(item: &ItemDto, provider: &dyn CatalogProvider) -> Result<BoxTypeDto> {
    observe("suggest_box", || {
        let item = Item::from(item.clone());
        let snapshot = CatalogSnapshot::fetch(provider)?;
        let box_type = suggest_box(&item, &snapshot)?;
        Ok(BoxTypeDto::from(box_type))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use cartonx_core::{Dimensions, ExErrorKind, StaticCatalog};
    use rust_decimal::Decimal;

    fn item_dto(h: i64, w: i64, l: i64) -> ItemDto {
        ItemDto {
            id: 0,
            item_id: "cube".to_string(),
            dimensions: Dimensions::new(Decimal::from(h), Decimal::from(w), Decimal::from(l)),
        }
    }

    #[test]
    fn test_suggest_returns_box_dto() {
        let dto = suggest(&item_dto(45, 70, 10), &StaticCatalog::default_boxes()).unwrap();
        assert_eq!(dto.box_id, "Box 2");
        assert_eq!(dto.volume, Decimal::from(160_000));
    }

    #[test]
    fn test_suggest_reports_missing_box() {
        let err = suggest(&item_dto(90, 90, 90), &StaticCatalog::default_boxes()).unwrap_err();
        assert_eq!(err.kind(), ExErrorKind::NoSuitableBox);
        assert_eq!(err.item_id(), Some("cube"));
        assert_eq!(err.op(), Some("suggest_box"));
    }
}

use crate::catalog::CatalogSnapshot;
use crate::errors::{PackError, Result};
use crate::model::{BoxType, Item};

/// Smallest catalog box that can hold a single item on its own
///
/// Uses the same selection rule as opening a new box during packing.
///
/// # Errors
///
/// * `InvalidDimensions` - an edge is zero or negative
/// * `NoSuitableBox` - the item is too large for every catalog box
pub fn suggest_box<'s>(item: &Item, snapshot: &'s CatalogSnapshot) -> Result<&'s BoxType> {
    if !item.dimensions.is_valid() {
        return Err(PackError::InvalidDimensions {
            item_id: item.item_id.clone(),
        });
    }

    snapshot
        .smallest_fitting(&item.dimensions)
        .ok_or_else(|| PackError::NoSuitableBox {
            item_id: item.item_id.clone(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::StaticCatalog;
    use crate::model::Dimensions;
    use rust_decimal_macros::dec;

    fn snapshot() -> CatalogSnapshot {
        CatalogSnapshot::fetch(&StaticCatalog::default_boxes()).unwrap()
    }

    #[test]
    fn test_suggests_smallest_box() {
        let item = Item::new(0, "mouse", Dimensions::new(dec!(5), dec!(8), dec!(12)));
        let snapshot = snapshot();
        assert_eq!(suggest_box(&item, &snapshot).unwrap().name, "Box 1");
    }

    #[test]
    fn test_suggests_larger_box_for_tall_item() {
        // Two edges over 40 rule out Box 1; Box 2 has 80 and 50
        let item = Item::new(0, "monitor", Dimensions::new(dec!(50), dec!(60), dec!(10)));
        let snapshot = snapshot();
        assert_eq!(suggest_box(&item, &snapshot).unwrap().name, "Box 2");
    }

    #[test]
    fn test_rejects_invalid_dimensions() {
        let item = Item::new(0, "ghost", Dimensions::new(dec!(0), dec!(8), dec!(12)));
        assert_eq!(
            suggest_box(&item, &snapshot()),
            Err(PackError::InvalidDimensions {
                item_id: "ghost".to_string()
            })
        );
    }

    #[test]
    fn test_reports_no_suitable_box() {
        let item = Item::new(0, "sofa", Dimensions::new(dec!(200), dec!(90), dec!(90)));
        assert_eq!(
            suggest_box(&item, &snapshot()),
            Err(PackError::NoSuitableBox {
                item_id: "sofa".to_string()
            })
        );
    }
}

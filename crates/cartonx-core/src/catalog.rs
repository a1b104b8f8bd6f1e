//! Box catalog: the provider seam and the immutable per-batch snapshot

use rust_decimal::Decimal;

use crate::errors::{PackError, Result};
use crate::model::{BoxType, Dimensions};
use crate::packing::orientation::fits;

/// Source of the current set of box types
///
/// A single call must return a consistent list; the engine takes one
/// snapshot per batch and never calls back mid-batch.
pub trait CatalogProvider {
    /// List every box type currently available
    ///
    /// # Errors
    ///
    /// Returns `PackError::CatalogUnavailable` if the backing store fails.
    fn list_box_types(&self) -> Result<Vec<BoxType>>;
}

/// In-memory catalog
#[derive(Debug, Clone, Default)]
pub struct StaticCatalog {
    box_types: Vec<BoxType>,
}

impl StaticCatalog {
    pub fn new(box_types: Vec<BoxType>) -> Self {
        Self { box_types }
    }

    /// The three stock boxes every fresh catalog is seeded with
    pub fn default_boxes() -> Self {
        let stock = |id: i64, name: &str, h: i64, w: i64, l: i64| {
            BoxType::new(
                id,
                name,
                Dimensions::new(Decimal::from(h), Decimal::from(w), Decimal::from(l)),
            )
        };
        Self::new(vec![
            stock(1, "Box 1", 30, 40, 80),
            stock(2, "Box 2", 80, 50, 40),
            stock(3, "Box 3", 50, 80, 60),
        ])
    }
}

impl CatalogProvider for StaticCatalog {
    fn list_box_types(&self) -> Result<Vec<BoxType>> {
        Ok(self.box_types.clone())
    }
}

/// Immutable, validated view of the catalog for one batch
///
/// Box types are held in ascending volume order. The sort is stable, so
/// boxes of equal volume keep the order the provider returned them in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogSnapshot {
    box_types: Vec<BoxType>,
}

impl CatalogSnapshot {
    /// Validate and sort a fetched catalog
    ///
    /// # Errors
    ///
    /// * `EmptyCatalog` - no box types
    /// * `InvalidBoxType` - a box type with a non-positive edge or a volume
    ///   that is zero or not exactly representable
    pub fn from_box_types(mut box_types: Vec<BoxType>) -> Result<Self> {
        if box_types.is_empty() {
            return Err(PackError::EmptyCatalog);
        }

        if let Some(invalid) = box_types.iter().find(|b| !b.dimensions.is_valid()) {
            return Err(PackError::InvalidBoxType { box_id: invalid.id });
        }

        box_types.sort_by_key(BoxType::volume);

        Ok(Self { box_types })
    }

    /// Fetch once from a provider and build a snapshot
    ///
    /// # Errors
    ///
    /// Propagates provider failures and the validation errors of
    /// [`CatalogSnapshot::from_box_types`].
    pub fn fetch(provider: &dyn CatalogProvider) -> Result<Self> {
        Self::from_box_types(provider.list_box_types()?)
    }

    /// Box types in ascending volume order
    pub fn box_types(&self) -> &[BoxType] {
        &self.box_types
    }

    pub fn len(&self) -> usize {
        self.box_types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.box_types.is_empty()
    }

    /// Smallest box type that can hold the given extent when empty
    ///
    /// On equal volumes the first entry in catalog order wins.
    pub fn smallest_fitting(&self, dimensions: &Dimensions) -> Option<&BoxType> {
        self.box_types
            .iter()
            .find(|box_type| fits(dimensions, &box_type.dimensions))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn box_type(id: i64, h: Decimal, w: Decimal, l: Decimal) -> BoxType {
        BoxType::new(id, format!("Box {}", id), Dimensions::new(h, w, l))
    }

    #[test]
    fn test_snapshot_sorts_ascending_by_volume() {
        let snapshot = CatalogSnapshot::from_box_types(vec![
            box_type(3, dec!(50), dec!(80), dec!(60)),
            box_type(1, dec!(30), dec!(40), dec!(80)),
            box_type(2, dec!(80), dec!(50), dec!(40)),
        ])
        .unwrap();

        let ids: Vec<i64> = snapshot.box_types().iter().map(|b| b.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_snapshot_keeps_catalog_order_on_volume_ties() {
        // 10x20x30 and 30x20x10 share a volume of 6000
        let snapshot = CatalogSnapshot::from_box_types(vec![
            box_type(7, dec!(10), dec!(20), dec!(30)),
            box_type(4, dec!(30), dec!(20), dec!(10)),
        ])
        .unwrap();

        let ids: Vec<i64> = snapshot.box_types().iter().map(|b| b.id).collect();
        assert_eq!(ids, vec![7, 4]);
    }

    #[test]
    fn test_snapshot_rejects_empty_catalog() {
        assert_eq!(
            CatalogSnapshot::from_box_types(Vec::new()),
            Err(PackError::EmptyCatalog)
        );
    }

    #[test]
    fn test_snapshot_rejects_non_positive_box() {
        let result = CatalogSnapshot::from_box_types(vec![
            box_type(1, dec!(30), dec!(40), dec!(80)),
            box_type(2, dec!(0), dec!(50), dec!(40)),
        ]);
        assert_eq!(result, Err(PackError::InvalidBoxType { box_id: 2 }));
    }

    #[test]
    fn test_snapshot_rejects_box_with_rounded_volume() {
        let edge = dec!(1.0000000000001);
        let result = CatalogSnapshot::from_box_types(vec![
            box_type(1, dec!(30), dec!(40), dec!(80)),
            box_type(5, edge, edge, edge),
        ]);
        assert_eq!(result, Err(PackError::InvalidBoxType { box_id: 5 }));
    }

    #[test]
    fn test_smallest_fitting_skips_boxes_too_short_on_any_axis() {
        let snapshot = CatalogSnapshot::fetch(&StaticCatalog::default_boxes()).unwrap();

        // Box 1 (30x40x80) has only one edge longer than 40
        let dims = Dimensions::new(dec!(70), dec!(45), dec!(10));
        let chosen = snapshot.smallest_fitting(&dims).unwrap();
        assert_eq!(chosen.name, "Box 2");

        let too_big = Dimensions::new(dec!(90), dec!(90), dec!(90));
        assert!(snapshot.smallest_fitting(&too_big).is_none());
    }

    #[test]
    fn test_snapshot_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<CatalogSnapshot>();
    }

    #[test]
    fn test_default_boxes() {
        let catalog = StaticCatalog::default_boxes();
        let boxes = catalog.list_box_types().unwrap();
        let volumes: Vec<Decimal> = boxes.iter().map(BoxType::volume).collect();
        assert_eq!(volumes, vec![dec!(96000), dec!(160000), dec!(240000)]);
    }
}

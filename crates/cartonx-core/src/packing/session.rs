use rust_decimal::Decimal;

use super::orientation::fits;
use crate::model::{BoxType, Item, PackedBox};

/// Allocation state of one opened box while a single order is being packed
///
/// Sessions live only inside one `pack_order` call and are consumed into
/// `PackedBox` values when the order is done.
#[derive(Debug, Clone)]
pub struct BoxSession<'a> {
    box_type: &'a BoxType,
    items: Vec<&'a Item>,
    occupied_volume: Decimal,
}

impl<'a> BoxSession<'a> {
    /// Open an empty box of the given type
    pub fn open(box_type: &'a BoxType) -> Self {
        Self {
            box_type,
            items: Vec::new(),
            occupied_volume: Decimal::ZERO,
        }
    }

    /// Try to place an item in this box
    ///
    /// Two gates, both must pass: the item alone must fit the box axes under
    /// some rotation, and the running volume plus the item's volume must not
    /// exceed the box volume. The first gate ignores items already placed.
    /// Returns false without touching the session when either gate fails.
    pub fn try_allocate(&mut self, item: &'a Item) -> bool {
        if !fits(&item.dimensions, &self.box_type.dimensions) {
            return false;
        }

        // A sum that had to be rounded comes back with a lower scale
        let item_volume = item.volume();
        let exact_scale = self.occupied_volume.scale().max(item_volume.scale());
        let occupied = match self.occupied_volume.checked_add(item_volume) {
            Some(total) if total.scale() == exact_scale && total <= self.box_type.volume() => {
                total
            }
            _ => return false,
        };

        self.items.push(item);
        self.occupied_volume = occupied;
        true
    }

    pub fn box_type(&self) -> &'a BoxType {
        self.box_type
    }

    /// Allocated items in allocation order
    pub fn allocated_items(&self) -> &[&'a Item] {
        &self.items
    }

    pub fn occupied_volume(&self) -> Decimal {
        self.occupied_volume
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Freeze into an owned result entry
    pub fn into_packed_box(self) -> PackedBox {
        PackedBox {
            box_type: self.box_type.clone(),
            allocated_items: self.items.into_iter().cloned().collect(),
        }
    }
}

use super::session::BoxSession;
use crate::catalog::CatalogSnapshot;
use crate::errors::{PackError, Result};
use crate::model::{Item, Order, PackedOrderResult};

/// Pack one order with first-fit-decreasing over volumetric bins
///
/// Items are placed largest volume first (stable on ties). Each item goes
/// into the first already-open box that accepts it; only when none does is
/// a new box opened, using the smallest catalog box that can hold the item
/// on its own. Boxes in the result appear in the order they were opened.
///
/// An order without items yields an empty result.
///
/// # Errors
///
/// * `InvalidItem` - the first item, in input order, with a non-positive edge
///   or a volume that is zero or not exactly representable
/// * `NoFittingBox` - an item no catalog box can hold even when empty
pub fn pack_order(order: &Order, snapshot: &CatalogSnapshot) -> Result<PackedOrderResult> {
    if order.items.is_empty() {
        return Ok(PackedOrderResult::empty(order.order_id));
    }

    if let Some(invalid) = order.items.iter().find(|i| !i.dimensions.is_valid()) {
        return Err(PackError::InvalidItem {
            order_id: order.order_id,
            item_id: invalid.item_id.clone(),
        });
    }

    let mut by_volume: Vec<&Item> = order.items.iter().collect();
    by_volume.sort_by(|a, b| b.volume().cmp(&a.volume()));

    let mut sessions: Vec<BoxSession<'_>> = Vec::new();

    for item in by_volume {
        if sessions.iter_mut().any(|session| session.try_allocate(item)) {
            continue;
        }

        let no_fit = || PackError::NoFittingBox {
            order_id: order.order_id,
            item_id: item.item_id.clone(),
            id: item.id,
        };

        let box_type = snapshot.smallest_fitting(&item.dimensions).ok_or_else(no_fit)?;
        let mut session = BoxSession::open(box_type);
        if !session.try_allocate(item) {
            return Err(no_fit());
        }

        tracing::debug!(
            order_id = order.order_id,
            box_id = box_type.id,
            item_id = %item.item_id,
            open_boxes = sessions.len() + 1,
            "opened box"
        );
        sessions.push(session);
    }

    Ok(PackedOrderResult {
        order_id: order.order_id,
        boxes: sessions
            .into_iter()
            .map(BoxSession::into_packed_box)
            .collect(),
    })
}

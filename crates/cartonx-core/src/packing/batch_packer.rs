use std::time::Instant;

use super::order_packer::pack_order;
use crate::catalog::{CatalogProvider, CatalogSnapshot};
use crate::errors::{PackError, Result};
use crate::model::{BatchRequest, BatchResult};
use crate::{log_op_end, log_op_error, log_op_start};

const OP_PACK_BATCH: &str = "pack_batch";

/// Pack every order of a request against one catalog snapshot
///
/// The catalog is fetched exactly once. Orders are packed in request order
/// and the batch is all-or-nothing: the first failing order aborts the
/// whole batch and results for earlier orders are dropped.
///
/// # Errors
///
/// * `EmptyRequest` - no orders
/// * `EmptyCatalog` / `InvalidBoxType` / `CatalogUnavailable` - catalog problems
/// * `InvalidOrderId` - an order id that is zero or negative
/// * any error from [`pack_order`]
pub fn pack_batch(request: &BatchRequest, provider: &dyn CatalogProvider) -> Result<BatchResult> {
    observe(request, || {
        ensure_not_empty(request)?;
        let snapshot = CatalogSnapshot::fetch(provider)?;
        tracing::debug!(catalog_len = snapshot.len(), "catalog snapshot taken");
        pack_orders(request, &snapshot)
    })
}

/// Pack a request against a snapshot the caller already holds
///
/// Same contract as [`pack_batch`] minus the fetch; lets several batches
/// share one snapshot.
///
/// # Errors
///
/// See [`pack_batch`].
pub fn pack_batch_with_snapshot(
    request: &BatchRequest,
    snapshot: &CatalogSnapshot,
) -> Result<BatchResult> {
    observe(request, || {
        ensure_not_empty(request)?;
        pack_orders(request, snapshot)
    })
}

fn ensure_not_empty(request: &BatchRequest) -> Result<()> {
    if request.orders.is_empty() {
        return Err(PackError::EmptyRequest);
    }
    Ok(())
}

fn pack_orders(request: &BatchRequest, snapshot: &CatalogSnapshot) -> Result<BatchResult> {
    let mut orders = Vec::with_capacity(request.orders.len());

    for order in &request.orders {
        if order.order_id <= 0 {
            return Err(PackError::InvalidOrderId {
                order_id: order.order_id,
            });
        }
        orders.push(pack_order(order, snapshot)?);
    }

    Ok(BatchResult { orders })
}

fn observe<F>(request: &BatchRequest, run: F) -> Result<BatchResult>
where
    F: FnOnce() -> Result<BatchResult>,
{
    let start = Instant::now();
    log_op_start!(OP_PACK_BATCH, order_count = request.orders.len());

    let result = run();
    let duration_ms = start.elapsed().as_millis() as u64;

    match &result {
        Ok(batch) => {
            log_op_end!(
                OP_PACK_BATCH,
                duration_ms = duration_ms,
                order_count = batch.orders.len(),
                box_count = batch.box_count()
            );
        }
        Err(err) => {
            log_op_error!(OP_PACK_BATCH, err.clone(), duration_ms = duration_ms);
        }
    }

    result
}

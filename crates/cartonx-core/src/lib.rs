//! CartonX Core - box allocation engine
//!
//! This crate assigns the items of each order to boxes drawn from a catalog,
//! using a first-fit-decreasing heuristic over volumetric bins:
//! - Box, item and order models with exact decimal dimensions
//! - Orientation fit across all six axis permutations
//! - Per-box allocation sessions and the per-order / per-batch packers
//! - Immutable catalog snapshots behind the `CatalogProvider` seam
//! - JSON transport types, the structured error facility and logging
//!
//! Known limitation: capacity is volumetric only. Each item is checked
//! against the box axes on its own, so several items can be reported as
//! sharing a box even when no overlap-free arrangement exists.

pub mod catalog;
pub mod errors;
pub mod logging_facility;
pub mod model;
pub mod packing;
pub mod transport;

// Used by the exported logging macros
#[doc(hidden)]
pub use cartonx_core_types as core_types;
#[doc(hidden)]
pub use tracing;

// Re-export commonly used types
pub use catalog::{CatalogProvider, CatalogSnapshot, StaticCatalog};
pub use errors::{ExError, ExErrorKind, PackError, Result};
pub use model::{
    BatchRequest, BatchResult, BoxType, Dimensions, Item, Order, PackedBox, PackedOrderResult,
};
pub use packing::{fits, pack_batch, pack_batch_with_snapshot, pack_order, suggest_box, BoxSession};

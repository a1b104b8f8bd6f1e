//! First-fit-decreasing allocation of order items into catalog boxes
//!
//! Leaves first: `orientation` (pure fit predicate), `session` (per-box
//! state), `order_packer` (one order), `batch_packer` (a whole request).
//! `suggest` reuses the new-box selection rule for a single item.

pub mod batch_packer;
pub mod order_packer;
pub mod orientation;
pub mod session;
pub mod suggest;

pub use batch_packer::{pack_batch, pack_batch_with_snapshot};
pub use order_packer::pack_order;
pub use orientation::fits;
pub use session::BoxSession;
pub use suggest::suggest_box;

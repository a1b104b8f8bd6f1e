//! Repository layer over the `box_types` and `items` tables

mod box_repo;
mod item_repo;

pub use box_repo::{BoxRepo, NewBoxType};
pub use item_repo::{ItemRepo, NewItem};

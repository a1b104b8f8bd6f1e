//! CartonX Store - SQLite-backed box catalog
//!
//! Provides:
//! - Connection helpers and an embedded, checksummed migration runner
//! - `BoxRepo` CRUD over the `box_types` table
//! - `ItemRepo` CRUD over the `items` table
//! - `SqliteCatalog`, a `CatalogProvider` reading from an open connection
//! - YAML catalog seeds, validated and imported in one transaction

pub mod catalog;
pub mod db;
pub mod errors;
pub mod migrations;
pub mod repo;
pub mod seed;

pub use catalog::SqliteCatalog;
pub use errors::Result;
pub use repo::{BoxRepo, ItemRepo, NewBoxType, NewItem};

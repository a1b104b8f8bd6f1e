//! Catalog provider backed by the `box_types` table

use cartonx_core::{BoxType, CatalogProvider, PackError};
use rusqlite::Connection;

use crate::repo::BoxRepo;

/// Reads the box catalog from an open connection
///
/// Each `list_box_types` call is a single SELECT, so a batch sees one
/// consistent catalog.
pub struct SqliteCatalog<'c> {
    conn: &'c Connection,
}

impl<'c> SqliteCatalog<'c> {
    pub fn new(conn: &'c Connection) -> Self {
        Self { conn }
    }
}

impl CatalogProvider for SqliteCatalog<'_> {
    fn list_box_types(&self) -> cartonx_core::Result<Vec<BoxType>> {
        BoxRepo::list(self.conn).map_err(|e| PackError::CatalogUnavailable {
            message: e.message().to_string(),
        })
    }
}

#![allow(clippy::result_large_err)]

use std::str::FromStr;

use crate::errors::{from_rusqlite, invalid_item, item_not_found, Result};
use cartonx_core::{Dimensions, Item};
use rusqlite::types::Type;
use rusqlite::{Connection, OptionalExtension, Row};
use rust_decimal::Decimal;

/// An item that has not been assigned a catalog id yet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewItem {
    pub item_id: String,
    pub dimensions: Dimensions,
}

impl NewItem {
    pub fn new(item_id: impl Into<String>, dimensions: Dimensions) -> Self {
        Self {
            item_id: item_id.into(),
            dimensions,
        }
    }

    /// Reject blank item ids and dimensions that cannot be packed
    pub fn validate(&self) -> Result<()> {
        if self.item_id.trim().is_empty() {
            return Err(invalid_item("Item id must not be empty"));
        }
        if !self.dimensions.is_valid() {
            return Err(invalid_item(&format!(
                "Item '{}': height, width and length must be greater than zero",
                self.item_id
            )));
        }
        Ok(())
    }
}

/// CRUD for the item catalog
///
/// Catalog ids are SQLite rowids; they surface as `Item::id`.
pub struct ItemRepo;

const SELECT_COLUMNS: &str = "SELECT id, item_id, height, width, length FROM items";

impl ItemRepo {
    /// All items, ordered by id
    pub fn list(conn: &Connection) -> Result<Vec<Item>> {
        let mut stmt = conn
            .prepare(&format!("{} ORDER BY id", SELECT_COLUMNS))
            .map_err(from_rusqlite)?;

        let rows = stmt
            .query_map([], item_from_row)
            .map_err(from_rusqlite)?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(from_rusqlite)?;

        Ok(rows)
    }

    pub fn get(conn: &Connection, id: u64) -> Result<Item> {
        let rowid = to_rowid(id)?;
        conn.query_row(
            &format!("{} WHERE id = ?1", SELECT_COLUMNS),
            [rowid],
            item_from_row,
        )
        .optional()
        .map_err(from_rusqlite)?
        .ok_or_else(|| item_not_found(id))
    }

    /// Insert a new item and return it with its assigned id
    pub fn insert(conn: &Connection, new_item: &NewItem) -> Result<Item> {
        new_item.validate()?;

        let now = chrono::Utc::now().timestamp();
        let dims = &new_item.dimensions;
        conn.execute(
            "INSERT INTO items (item_id, height, width, length, created_at, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?5)",
            rusqlite::params![
                new_item.item_id,
                dims.height.to_string(),
                dims.width.to_string(),
                dims.length.to_string(),
                now,
            ],
        )
        .map_err(from_rusqlite)?;

        let rowid = conn.last_insert_rowid();
        tracing::debug!(id = rowid, item_id = %new_item.item_id, "item inserted");

        let id = u64::try_from(rowid)
            .map_err(|_| from_rusqlite(rusqlite::Error::IntegralValueOutOfRange(0, rowid)))?;
        Ok(Item::new(id, new_item.item_id.clone(), new_item.dimensions))
    }

    /// Replace the item id and dimensions of an existing item
    pub fn update(conn: &Connection, id: u64, changes: &NewItem) -> Result<Item> {
        changes.validate()?;
        let rowid = to_rowid(id)?;

        let now = chrono::Utc::now().timestamp();
        let dims = &changes.dimensions;
        let updated = conn
            .execute(
                "UPDATE items
                 SET item_id = ?1, height = ?2, width = ?3, length = ?4, updated_at = ?5
                 WHERE id = ?6",
                rusqlite::params![
                    changes.item_id,
                    dims.height.to_string(),
                    dims.width.to_string(),
                    dims.length.to_string(),
                    now,
                    rowid,
                ],
            )
            .map_err(from_rusqlite)?;

        if updated == 0 {
            return Err(item_not_found(id));
        }

        Ok(Item::new(id, changes.item_id.clone(), changes.dimensions))
    }

    pub fn delete(conn: &Connection, id: u64) -> Result<()> {
        let rowid = to_rowid(id)?;
        let deleted = conn
            .execute("DELETE FROM items WHERE id = ?1", [rowid])
            .map_err(from_rusqlite)?;

        if deleted == 0 {
            return Err(item_not_found(id));
        }
        Ok(())
    }

    pub fn exists_by_item_id(conn: &Connection, item_id: &str) -> Result<bool> {
        conn.query_row("SELECT 1 FROM items WHERE item_id = ?1", [item_id], |_| {
            Ok(true)
        })
        .optional()
        .map_err(from_rusqlite)
        .map(|found| found.unwrap_or(false))
    }
}

/// Ids beyond the rowid range can never be stored
fn to_rowid(id: u64) -> Result<i64> {
    i64::try_from(id).map_err(|_| item_not_found(id))
}

fn item_from_row(row: &Row<'_>) -> rusqlite::Result<Item> {
    let rowid: i64 = row.get(0)?;
    let id = u64::try_from(rowid)
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(0, Type::Integer, Box::new(e)))?;

    Ok(Item::new(
        id,
        row.get::<_, String>(1)?,
        Dimensions::new(
            decimal_column(row, 2)?,
            decimal_column(row, 3)?,
            decimal_column(row, 4)?,
        ),
    ))
}

fn decimal_column(row: &Row<'_>, idx: usize) -> rusqlite::Result<Decimal> {
    let text: String = row.get(idx)?;
    Decimal::from_str(&text)
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(e)))
}

#![allow(clippy::result_large_err)]

use std::str::FromStr;

use crate::errors::{box_not_found, from_rusqlite, invalid_box, Result};
use cartonx_core::{BoxType, Dimensions};
use rusqlite::types::Type;
use rusqlite::{Connection, OptionalExtension, Row};
use rust_decimal::Decimal;

/// A box type that has not been assigned an id yet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBoxType {
    pub name: String,
    pub dimensions: Dimensions,
}

impl NewBoxType {
    pub fn new(name: impl Into<String>, dimensions: Dimensions) -> Self {
        Self {
            name: name.into(),
            dimensions,
        }
    }

    /// Reject blank names and non-positive edges
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(invalid_box("Box name must not be empty"));
        }
        if !self.dimensions.is_valid() {
            return Err(invalid_box(&format!(
                "Box '{}': height, width and length must be greater than zero",
                self.name
            )));
        }
        Ok(())
    }
}

/// CRUD for box types
///
/// Every method takes a plain `&Connection`, so the same calls work inside
/// a transaction through deref.
pub struct BoxRepo;

const SELECT_COLUMNS: &str = "SELECT id, name, height, width, length FROM box_types";

impl BoxRepo {
    /// All box types, ordered by id
    pub fn list(conn: &Connection) -> Result<Vec<BoxType>> {
        let mut stmt = conn
            .prepare(&format!("{} ORDER BY id", SELECT_COLUMNS))
            .map_err(from_rusqlite)?;

        let rows = stmt
            .query_map([], box_type_from_row)
            .map_err(from_rusqlite)?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(from_rusqlite)?;

        Ok(rows)
    }

    pub fn get(conn: &Connection, id: i64) -> Result<BoxType> {
        conn.query_row(
            &format!("{} WHERE id = ?1", SELECT_COLUMNS),
            [id],
            box_type_from_row,
        )
        .optional()
        .map_err(from_rusqlite)?
        .ok_or_else(|| box_not_found(id))
    }

    /// Insert a new box type and return it with its assigned id
    pub fn insert(conn: &Connection, new_box: &NewBoxType) -> Result<BoxType> {
        new_box.validate()?;

        let now = chrono::Utc::now().timestamp();
        let dims = &new_box.dimensions;
        conn.execute(
            "INSERT INTO box_types (name, height, width, length, created_at, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?5)",
            rusqlite::params![
                new_box.name,
                dims.height.to_string(),
                dims.width.to_string(),
                dims.length.to_string(),
                now,
            ],
        )
        .map_err(from_rusqlite)?;

        let id = conn.last_insert_rowid();
        tracing::debug!(box_id = id, name = %new_box.name, "box type inserted");

        Ok(BoxType::new(id, new_box.name.clone(), new_box.dimensions))
    }

    /// Replace the name and dimensions of an existing box type
    pub fn update(conn: &Connection, id: i64, changes: &NewBoxType) -> Result<BoxType> {
        changes.validate()?;

        let now = chrono::Utc::now().timestamp();
        let dims = &changes.dimensions;
        let updated = conn
            .execute(
                "UPDATE box_types
                 SET name = ?1, height = ?2, width = ?3, length = ?4, updated_at = ?5
                 WHERE id = ?6",
                rusqlite::params![
                    changes.name,
                    dims.height.to_string(),
                    dims.width.to_string(),
                    dims.length.to_string(),
                    now,
                    id,
                ],
            )
            .map_err(from_rusqlite)?;

        if updated == 0 {
            return Err(box_not_found(id));
        }

        Ok(BoxType::new(id, changes.name.clone(), changes.dimensions))
    }

    pub fn delete(conn: &Connection, id: i64) -> Result<()> {
        let deleted = conn
            .execute("DELETE FROM box_types WHERE id = ?1", [id])
            .map_err(from_rusqlite)?;

        if deleted == 0 {
            return Err(box_not_found(id));
        }
        Ok(())
    }

    pub fn exists_by_name(conn: &Connection, name: &str) -> Result<bool> {
        conn.query_row("SELECT 1 FROM box_types WHERE name = ?1", [name], |_| {
            Ok(true)
        })
        .optional()
        .map_err(from_rusqlite)
        .map(|found| found.unwrap_or(false))
    }
}

fn box_type_from_row(row: &Row<'_>) -> rusqlite::Result<BoxType> {
    Ok(BoxType::new(
        row.get(0)?,
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

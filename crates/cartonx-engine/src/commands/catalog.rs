//! Box catalog command handlers with boundary logging

#![allow(clippy::result_large_err)]

use std::path::Path;

use cartonx_core::transport::BoxTypeDto;
use cartonx_store::errors::Result;
use cartonx_store::seed::{import_seed, ImportReport};
use cartonx_store::{BoxRepo, NewBoxType};
use rusqlite::Connection;

use super::observe;

pub fn list_boxes(conn: &Connection) -> Result<Vec<BoxTypeDto>> {
    observe("list_boxes", || {
        let boxes = BoxRepo::list(conn)?;
        Ok(boxes.iter().map(BoxTypeDto::from).collect())
    })
}

pub fn get_box(conn: &Connection, id: i64) -> Result<BoxTypeDto> {
    observe("get_box", || {
        BoxRepo::get(conn, id).map(|b| BoxTypeDto::from(&b))
    })
}

/// ## Errors
///
/// - `InvalidInput`: blank name or non-positive edge
/// - `ConstraintViolation`: the name is already taken
pub fn add_box(conn: &Connection, new_box: &NewBoxType) -> Result<BoxTypeDto> {
    observe("add_box", || {
        BoxRepo::insert(conn, new_box).map(|b| BoxTypeDto::from(&b))
    })
}

pub fn update_box(conn: &Connection, id: i64, changes: &NewBoxType) -> Result<BoxTypeDto> {
    observe("update_box", || {
        BoxRepo::update(conn, id, changes).map(|b| BoxTypeDto::from(&b))
    })
}

pub fn remove_box(conn: &Connection, id: i64) -> Result<()> {
    observe("remove_box", || BoxRepo::delete(conn, id))
}

/// Import a YAML catalog seed; all boxes or none are added
pub fn import_catalog(conn: &mut Connection, path: &Path) -> Result<ImportReport> {
    observe("import_catalog", || import_seed(path, conn))
}

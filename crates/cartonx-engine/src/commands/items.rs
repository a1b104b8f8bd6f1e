//! Item catalog command handlers with boundary logging

#![allow(clippy::result_large_err)]

use cartonx_core::transport::ItemDto;
use cartonx_store::errors::Result;
use cartonx_store::{ItemRepo, NewItem};
use rusqlite::Connection;

use super::observe;

pub fn list_items(conn: &Connection) -> Result<Vec<ItemDto>> {
    observe("list_items", || {
        let items = ItemRepo::list(conn)?;
        Ok(items.iter().map(ItemDto::from).collect())
    })
}

pub fn get_item(conn: &Connection, id: u64) -> Result<ItemDto> {
    observe("get_item", || {
        ItemRepo::get(conn, id).map(|i| ItemDto::from(&i))
    })
}

/// ## Errors
///
/// - `InvalidInput`: blank item id or dimensions that cannot be packed
/// - `ConstraintViolation`: the item id is already taken
pub fn add_item(conn: &Connection, new_item: &NewItem) -> Result<ItemDto> {
    observe("add_item", || {
        ItemRepo::insert(conn, new_item).map(|i| ItemDto::from(&i))
    })
}

pub fn update_item(conn: &Connection, id: u64, changes: &NewItem) -> Result<ItemDto> {
    observe("update_item", || {
        ItemRepo::update(conn, id, changes).map(|i| ItemDto::from(&i))
    })
}

pub fn remove_item(conn: &Connection, id: u64) -> Result<()> {
    observe("remove_item", || ItemRepo::delete(conn, id))
}

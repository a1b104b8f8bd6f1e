//! Engine-level commands that touch the catalog database

#![allow(clippy::result_large_err)]

use std::path::PathBuf;

use cartonx_core::transport::{BoxTypeDto, ItemDto, PackRequestDto, PackResponseDto};
use cartonx_store::errors::Result;
use cartonx_store::seed::ImportReport;
use cartonx_store::{NewBoxType, NewItem, SqliteCatalog};
use rusqlite::Connection;

use crate::commands::{catalog, items, pack, suggest};

#[derive(Debug, Clone)]
pub enum EngineCommand {
    /// Pack a batch against the stored catalog
    PackBatch { request: PackRequestDto },
    SuggestBox { item: ItemDto },
    ListBoxes,
    GetBox { id: i64 },
    AddBox { new_box: NewBoxType },
    UpdateBox { id: i64, changes: NewBoxType },
    RemoveBox { id: i64 },
    /// Import a YAML catalog seed from disk
    ImportCatalog { path: PathBuf },
    ListItems,
    GetItem { id: u64 },
    AddItem { new_item: NewItem },
    UpdateItem { id: u64, changes: NewItem },
    RemoveItem { id: u64 },
}

impl EngineCommand {
    /// Short name used in logs
    pub fn name(&self) -> &'static str {
        match self {
            EngineCommand::PackBatch { .. } => "pack_batch",
            EngineCommand::SuggestBox { .. } => "suggest_box",
            EngineCommand::ListBoxes => "list_boxes",
            EngineCommand::GetBox { .. } => "get_box",
            EngineCommand::AddBox { .. } => "add_box",
            EngineCommand::UpdateBox { .. } => "update_box",
            EngineCommand::RemoveBox { .. } => "remove_box",
            EngineCommand::ImportCatalog { .. } => "import_catalog",
            EngineCommand::ListItems => "list_items",
            EngineCommand::GetItem { .. } => "get_item",
            EngineCommand::AddItem { .. } => "add_item",
            EngineCommand::UpdateItem { .. } => "update_item",
            EngineCommand::RemoveItem { .. } => "remove_item",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum EngineCommandResult {
    Packed(PackResponseDto),
    Suggested(BoxTypeDto),
    Boxes(Vec<BoxTypeDto>),
    Box(BoxTypeDto),
    Removed { id: i64 },
    Imported(ImportReport),
    Items(Vec<ItemDto>),
    Item(ItemDto),
    ItemRemoved { id: u64 },
}

/// Apply an engine command against an open catalog connection
pub fn apply_engine_command(
    cmd: EngineCommand,
    conn: &mut Connection,
) -> Result<EngineCommandResult> {
    tracing::debug!(command = cmd.name(), "applying engine command");

    match cmd {
        EngineCommand::PackBatch { request } => {
            pack::pack_request(&request, &SqliteCatalog::new(conn)).map(EngineCommandResult::Packed)
        }
        EngineCommand::SuggestBox { item } => {
            suggest::suggest(&item, &SqliteCatalog::new(conn)).map(EngineCommandResult::Suggested)
        }
        EngineCommand::ListBoxes => catalog::list_boxes(conn).map(EngineCommandResult::Boxes),
        EngineCommand::GetBox { id } => catalog::get_box(conn, id).map(EngineCommandResult::Box),
        EngineCommand::AddBox { new_box } => {
            catalog::add_box(conn, &new_box).map(EngineCommandResult::Box)
        }
        EngineCommand::UpdateBox { id, changes } => {
            catalog::update_box(conn, id, &changes).map(EngineCommandResult::Box)
        }
        EngineCommand::RemoveBox { id } => {
            catalog::remove_box(conn, id).map(|()| EngineCommandResult::Removed { id })
        }
        EngineCommand::ImportCatalog { path } => {
            catalog::import_catalog(conn, &path).map(EngineCommandResult::Imported)
        }
        EngineCommand::ListItems => items::list_items(conn).map(EngineCommandResult::Items),
        EngineCommand::GetItem { id } => items::get_item(conn, id).map(EngineCommandResult::Item),
        EngineCommand::AddItem { new_item } => {
            items::add_item(conn, &new_item).map(EngineCommandResult::Item)
        }
        EngineCommand::UpdateItem { id, changes } => {
            items::update_item(conn, id, &changes).map(EngineCommandResult::Item)
        }
        EngineCommand::RemoveItem { id } => {
            items::remove_item(conn, id).map(|()| EngineCommandResult::ItemRemoved { id })
        }
    }
}

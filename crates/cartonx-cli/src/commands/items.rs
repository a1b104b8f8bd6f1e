//! Item catalog commands
//!
//! Usage: cartonx items <list|show|add|update|remove>

use clap::{Args, Subcommand};
use rust_decimal::Decimal;
use std::path::Path;

use cartonx_core::transport::ItemDto;
use cartonx_core::Dimensions;
use cartonx_engine::{apply_engine_command, EngineCommand, EngineCommandResult};
use cartonx_store::NewItem;

#[derive(Debug, Args)]
pub struct ItemsArgs {
    #[command(subcommand)]
    pub command: ItemsCommand,
}

#[derive(Debug, Subcommand)]
pub enum ItemsCommand {
    /// List every stored item
    List,
    /// Show one item as JSON
    Show { id: u64 },
    /// Add an item
    Add(ItemSpec),
    /// Replace the item id and dimensions of an item
    Update {
        id: u64,
        #[command(flatten)]
        spec: ItemSpec,
    },
    /// Remove an item
    Remove { id: u64 },
}

#[derive(Debug, Args)]
pub struct ItemSpec {
    #[arg(long)]
    pub item_id: String,
    #[arg(long)]
    pub height: Decimal,
    #[arg(long)]
    pub width: Decimal,
    #[arg(long)]
    pub length: Decimal,
}

impl From<ItemSpec> for NewItem {
    fn from(spec: ItemSpec) -> Self {
        NewItem::new(
            spec.item_id,
            Dimensions::new(spec.height, spec.width, spec.length),
        )
    }
}

pub fn execute(args: ItemsArgs, db: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let mut conn = cartonx_store::db::open_catalog(db)?;

    let cmd = match args.command {
        ItemsCommand::List => EngineCommand::ListItems,
        ItemsCommand::Show { id } => EngineCommand::GetItem { id },
        ItemsCommand::Add(spec) => EngineCommand::AddItem {
            new_item: spec.into(),
        },
        ItemsCommand::Update { id, spec } => EngineCommand::UpdateItem {
            id,
            changes: spec.into(),
        },
        ItemsCommand::Remove { id } => EngineCommand::RemoveItem { id },
    };

    match apply_engine_command(cmd, &mut conn)? {
        EngineCommandResult::Items(items) => {
            for item in &items {
                println!("{}", format_row(item));
            }
        }
        EngineCommandResult::Item(item) => println!("{}", serde_json::to_string_pretty(&item)?),
        EngineCommandResult::ItemRemoved { id } => println!("Removed item {}", id),
        other => return Err(format!("Unexpected engine result: {:?}", other).into()),
    }

    Ok(())
}

fn format_row(item: &ItemDto) -> String {
    let dims = &item.dimensions;
    format!(
        "{:>4}  {:<20} {} x {} x {}",
        item.id, item.item_id, dims.height, dims.width, dims.length
    )
}

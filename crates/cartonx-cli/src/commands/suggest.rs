//! Suggest command
//!
//! Usage: cartonx suggest --height H --width W --length L [--item-id ID]

use clap::Args;
use rust_decimal::Decimal;
use std::path::Path;

use cartonx_core::transport::ItemDto;
use cartonx_core::Dimensions;
use cartonx_engine::{apply_engine_command, EngineCommand, EngineCommandResult};

use super::print_error_json;

#[derive(Debug, Args)]
pub struct SuggestArgs {
    #[arg(long)]
    pub height: Decimal,

    #[arg(long)]
    pub width: Decimal,

    #[arg(long)]
    pub length: Decimal,

    #[arg(long, default_value = "item")]
    pub item_id: String,
}

pub fn execute(args: SuggestArgs, db: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let mut conn = cartonx_store::db::open_catalog(db)?;
    let item = ItemDto {
        id: 0,
        item_id: args.item_id,
        dimensions: Dimensions::new(args.height, args.width, args.length),
    };

    match apply_engine_command(EngineCommand::SuggestBox { item }, &mut conn) {
        Ok(EngineCommandResult::Suggested(dto)) => {
            println!("{}", serde_json::to_string_pretty(&dto)?);
            Ok(())
        }
        Ok(other) => Err(format!("Unexpected engine result: {:?}", other).into()),
        Err(e) => {
            print_error_json(&e)?;
            Err(e.into())
        }
    }
}

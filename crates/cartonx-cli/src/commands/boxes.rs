//! Box catalog commands
//!
//! Usage: cartonx boxes <list|show|add|update|remove|import>

use clap::{Args, Subcommand};
use rust_decimal::Decimal;
use std::path::{Path, PathBuf};

use cartonx_core::transport::BoxTypeDto;
use cartonx_core::Dimensions;
use cartonx_engine::{apply_engine_command, EngineCommand, EngineCommandResult};
use cartonx_store::NewBoxType;

#[derive(Debug, Args)]
pub struct BoxesArgs {
    #[command(subcommand)]
    pub command: BoxesCommand,
}

#[derive(Debug, Subcommand)]
pub enum BoxesCommand {
    /// List every box type
    List,
    /// Show one box type as JSON
    Show { id: i64 },
    /// Add a box type
    Add(BoxSpec),
    /// Replace the name and dimensions of a box type
    Update {
        id: i64,
        #[command(flatten)]
        spec: BoxSpec,
    },
    /// Remove a box type
    Remove { id: i64 },
    /// Import box types from a YAML seed
    Import { path: PathBuf },
}

#[derive(Debug, Args)]
pub struct BoxSpec {
    #[arg(long)]
    pub name: String,
    #[arg(long)]
    pub height: Decimal,
    #[arg(long)]
    pub width: Decimal,
    #[arg(long)]
    pub length: Decimal,
}

impl From<BoxSpec> for NewBoxType {
    fn from(spec: BoxSpec) -> Self {
        NewBoxType::new(
            spec.name,
            Dimensions::new(spec.height, spec.width, spec.length),
        )
    }
}

pub fn execute(args: BoxesArgs, db: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let mut conn = cartonx_store::db::open_catalog(db)?;

    let cmd = match args.command {
        BoxesCommand::List => EngineCommand::ListBoxes,
        BoxesCommand::Show { id } => EngineCommand::GetBox { id },
        BoxesCommand::Add(spec) => EngineCommand::AddBox {
            new_box: spec.into(),
        },
        BoxesCommand::Update { id, spec } => EngineCommand::UpdateBox {
            id,
            changes: spec.into(),
        },
        BoxesCommand::Remove { id } => EngineCommand::RemoveBox { id },
        BoxesCommand::Import { path } => EngineCommand::ImportCatalog { path },
    };

    match apply_engine_command(cmd, &mut conn)? {
        EngineCommandResult::Boxes(boxes) => {
            for b in &boxes {
                println!("{}", format_row(b));
            }
        }
        EngineCommandResult::Box(b) => println!("{}", serde_json::to_string_pretty(&b)?),
        EngineCommandResult::Removed { id } => println!("Removed box type {}", id),
        EngineCommandResult::Imported(report) => println!(
            "Imported {} box types (digest: {})",
            report.inserted, report.seed_digest
        ),
        other => return Err(format!("Unexpected engine result: {:?}", other).into()),
    }

    Ok(())
}

fn format_row(b: &BoxTypeDto) -> String {
    format!(
        "{:>4}  {:<20} {} x {} x {}  (volume {})",
        b.id, b.box_id, b.height, b.width, b.length, b.volume
    )
}

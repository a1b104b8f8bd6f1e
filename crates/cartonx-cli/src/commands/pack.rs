//! Pack command
//!
//! Usage: cartonx pack <PATH|-> [--pretty]

use clap::Args;
use std::io::Read;
use std::path::{Path, PathBuf};

use cartonx_engine::pack_json;
use cartonx_store::SqliteCatalog;

use super::print_error_json;

#[derive(Debug, Args)]
pub struct PackArgs {
    /// Request JSON file, or `-` for stdin
    pub input: PathBuf,

    /// Pretty-print the response
    #[arg(long)]
    pub pretty: bool,
}

pub fn execute(args: PackArgs, db: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let input = read_input(&args.input)?;
    let conn = cartonx_store::db::open_catalog(db)?;

    match pack_json(&input, &SqliteCatalog::new(&conn)) {
        Ok(output) if args.pretty => {
            let value: serde_json::Value = serde_json::from_str(&output)?;
            println!("{}", serde_json::to_string_pretty(&value)?);
            Ok(())
        }
        Ok(output) => {
            println!("{}", output);
            Ok(())
        }
        Err(e) => {
            print_error_json(&e)?;
            Err(e.into())
        }
    }
}

fn read_input(path: &Path) -> std::io::Result<String> {
    if path.as_os_str() == "-" {
        let mut buffer = String::new();
        std::io::stdin().read_to_string(&mut buffer)?;
        Ok(buffer)
    } else {
        std::fs::read_to_string(path)
    }
}

//! Seed importer
//!
//! Inserts every box of a validated seed inside one transaction; any
//! failure (for example a name already in the catalog) rolls the whole
//! import back.

#![allow(clippy::result_large_err)]

use crate::errors::{from_rusqlite, Result};
use crate::repo::{BoxRepo, NewBoxType};
use crate::seed::format_v0::SeedV0;
use crate::seed::{compute_seed_digest, parse_seed_file, parse_seed_str};
use cartonx_core::Dimensions;
use rusqlite::Connection;
use serde::Serialize;
use std::path::Path;

/// Outcome of a successful import
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImportReport {
    pub inserted: usize,
    pub seed_digest: String,
}

/// Import a seed file into the catalog
pub fn import_seed(path: &Path, conn: &mut Connection) -> Result<ImportReport> {
    let seed = parse_seed_file(path)?;
    import_parsed(&seed, conn)
}

/// Import seed YAML held in memory
pub fn import_seed_str(content: &str, conn: &mut Connection) -> Result<ImportReport> {
    let seed = parse_seed_str(content)?;
    import_parsed(&seed, conn)
}

fn import_parsed(seed: &SeedV0, conn: &mut Connection) -> Result<ImportReport> {
    let seed_digest = compute_seed_digest(seed);
    let tx = conn.transaction().map_err(from_rusqlite)?;

    for seed_box in &seed.boxes {
        let new_box = NewBoxType::new(
            seed_box.name.trim(),
            Dimensions::new(seed_box.height, seed_box.width, seed_box.length),
        );
        BoxRepo::insert(&tx, &new_box)?;
    }

    tx.commit().map_err(from_rusqlite)?;

    tracing::info!(
        box_count = seed.boxes.len(),
        seed_digest = %seed_digest,
        "catalog seed imported"
    );

    Ok(ImportReport {
        inserted: seed.boxes.len(),
        seed_digest,
    })
}

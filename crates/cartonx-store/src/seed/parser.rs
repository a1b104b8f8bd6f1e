//! Seed parser with validation
//!
//! Parses YAML and checks schema version, names and edge lengths

#![allow(clippy::result_large_err)]

use crate::errors::{seed_validation, Result};
use crate::seed::format_v0::SeedV0;
use cartonx_core::Dimensions;
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// Parse a seed file from a path
pub fn parse_seed_file(path: &Path) -> Result<SeedV0> {
    let content = fs::read_to_string(path)
        .map_err(|e| seed_validation(&format!("Failed to read seed file: {}", e)))?;

    parse_seed_str(&content)
}

/// Parse a seed from a string
pub fn parse_seed_str(content: &str) -> Result<SeedV0> {
    let seed: SeedV0 = serde_yaml::from_str(content)
        .map_err(|e| seed_validation(&format!("YAML parse error: {}", e)))?;

    validate_seed(&seed)?;

    Ok(seed)
}

fn validate_seed(seed: &SeedV0) -> Result<()> {
    if seed.schema_version != 0 {
        return Err(seed_validation(&format!(
            "Unsupported schema_version: {}. Expected 0",
            seed.schema_version
        )));
    }

    if seed.boxes.is_empty() {
        return Err(seed_validation("Seed must define at least one box"));
    }

    let mut names = HashSet::new();
    for (index, seed_box) in seed.boxes.iter().enumerate() {
        let name = seed_box.name.trim();
        if name.is_empty() {
            return Err(seed_validation(&format!("Box #{} has an empty name", index)));
        }

        if !names.insert(name) {
            return Err(seed_validation(&format!("Duplicate box name '{}'", name)));
        }

        let dimensions = Dimensions::new(seed_box.height, seed_box.width, seed_box.length);
        if !dimensions.is_valid() {
            return Err(seed_validation(&format!(
                "Box '{}': height, width and length must be greater than zero \
                 with an exactly representable volume",
                name
            )));
        }
    }

    Ok(())
}

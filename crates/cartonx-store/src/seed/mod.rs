//! Catalog seed import
//!
//! Provides:
//! - Seed format v0 schema
//! - YAML parser with validation
//! - Digest of the canonical seed content
//! - Transactional importer

pub mod digest;
pub mod format_v0;
pub mod importer;
pub mod parser;

pub use digest::compute_seed_digest;
pub use format_v0::{SeedBox, SeedV0};
pub use importer::{import_seed, import_seed_str, ImportReport};
pub use parser::{parse_seed_file, parse_seed_str};

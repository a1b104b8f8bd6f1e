//! Migration framework
//!
//! Embedded SQL migrations, applied in order and recorded in
//! `schema_version` together with a checksum of their SQL.

mod checksums;
mod embedded;
mod runner;

pub use runner::apply_migrations;

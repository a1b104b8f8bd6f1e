//! CartonX Engine - Orchestration layer
//!
//! Ties the packing core to the SQLite catalog and the JSON transport
//! types. Every public command logs its own start/end boundary at info.
//! Packing nests the core `pack_batch` boundary inside `pack_request`, also
//! at info. The store logs applied migrations and seed imports at info and
//! row-level changes at debug.

pub mod commands;

pub use commands::engine_command::{apply_engine_command, EngineCommand, EngineCommandResult};
pub use commands::pack::{pack_json, pack_request};

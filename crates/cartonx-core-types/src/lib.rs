//! Core types shared across CartonX crates
//!
//! - **Correlation types**: `RequestId` tagging one pack request end to end
//! - **Schema constants**: canonical log field keys and event names

pub mod correlation;
pub mod schema;

pub use correlation::RequestId;

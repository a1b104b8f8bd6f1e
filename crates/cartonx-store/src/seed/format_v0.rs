//! Seed format v0
//!
//! ```yaml
//! schema_version: 0
//! boxes:
//!   - name: Box 4
//!     height: 10
//!     width: 20
//!     length: "30.5"
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedV0 {
    /// Must be 0 for this format
    pub schema_version: u32,

    pub boxes: Vec<SeedBox>,
}

/// One box type in a seed; edges accept numbers or decimal strings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedBox {
    pub name: String,
    pub height: Decimal,
    pub width: Decimal,
    pub length: Decimal,
}

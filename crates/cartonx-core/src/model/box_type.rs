use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::dimensions::Dimensions;

/// A box model from the catalog
///
/// Box types are read-only to the engine: packing copies them into results
/// but never changes them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoxType {
    /// Catalog identifier
    pub id: i64,

    /// Display name, e.g. "Box 1"
    pub name: String,

    pub dimensions: Dimensions,
}

impl BoxType {
    pub fn new(id: i64, name: impl Into<String>, dimensions: Dimensions) -> Self {
        Self {
            id,
            name: name.into(),
            dimensions,
        }
    }

    pub fn volume(&self) -> Decimal {
        self.dimensions.volume()
    }
}

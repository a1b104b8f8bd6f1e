//! Stable digest of a seed's catalog content

use crate::seed::format_v0::SeedV0;
use sha2::{Digest, Sha256};

/// SHA-256 over the boxes sorted by name, one `name|h|w|l` line each
///
/// Decimal edges are normalized first, so `10` and `10.0` hash the same.
pub fn compute_seed_digest(seed: &SeedV0) -> String {
    let mut lines: Vec<String> = seed
        .boxes
        .iter()
        .map(|b| {
            format!(
                "{}|{}|{}|{}",
                b.name.trim(),
                b.height.normalize(),
                b.width.normalize(),
                b.length.normalize()
            )
        })
        .collect();
    lines.sort();

    let mut hasher = Sha256::new();
    for line in &lines {
        hasher.update(line.as_bytes());
        hasher.update(b"\n");
    }
    hex::encode(hasher.finalize())
}

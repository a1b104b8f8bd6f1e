//! Error helpers for cartonx-store
//!
//! Store operations report `ExError` directly, built through these helpers.

use cartonx_core::errors::{ExError, ExErrorKind};
use rusqlite::ErrorCode;

/// Result type alias using ExError
pub type Result<T> = std::result::Result<T, ExError>;

pub fn migration_error(migration_id: &str, reason: &str) -> ExError {
    ExError::new(ExErrorKind::Persistence)
        .with_op("migration")
        .with_message(format!("Migration {} failed: {}", migration_id, reason))
}

/// An applied migration whose SQL no longer matches what is embedded
pub fn checksum_mismatch(migration_id: &str, expected: &str, actual: &str) -> ExError {
    ExError::new(ExErrorKind::ConstraintViolation)
        .with_op("migration_checksum")
        .with_message(format!(
            "Checksum mismatch for migration {}: expected {}, got {}",
            migration_id, expected, actual
        ))
}

pub fn seed_validation(reason: &str) -> ExError {
    ExError::new(ExErrorKind::InvalidInput)
        .with_op("seed_parse")
        .with_message(reason.to_string())
}

pub fn box_not_found(id: i64) -> ExError {
    ExError::new(ExErrorKind::NotFound)
        .with_op("box_repo")
        .with_entity_id(id.to_string())
        .with_message(format!("Box type {} not found", id))
}

pub fn invalid_box(reason: &str) -> ExError {
    ExError::new(ExErrorKind::InvalidInput)
        .with_op("box_repo")
        .with_message(reason.to_string())
}

pub fn item_not_found(id: u64) -> ExError {
    ExError::new(ExErrorKind::NotFound)
        .with_op("item_repo")
        .with_entity_id(id.to_string())
        .with_message(format!("Item {} not found", id))
}

pub fn invalid_item(reason: &str) -> ExError {
    ExError::new(ExErrorKind::InvalidInput)
        .with_op("item_repo")
        .with_message(reason.to_string())
}

/// Map a rusqlite error, surfacing constraint failures as their own kind
pub fn from_rusqlite(err: rusqlite::Error) -> ExError {
    let kind = match &err {
        rusqlite::Error::SqliteFailure(e, _) if e.code == ErrorCode::ConstraintViolation => {
            ExErrorKind::ConstraintViolation
        }
        _ => ExErrorKind::Persistence,
    };
    ExError::new(kind)
        .with_op("sqlite")
        .with_message(err.to_string())
}

pub fn io_error(operation: &str, err: std::io::Error) -> ExError {
    ExError::new(ExErrorKind::Io)
        .with_op(operation.to_string())
        .with_message(err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_carries_entity_id() {
        let err = box_not_found(42);
        assert_eq!(err.kind(), ExErrorKind::NotFound);
        assert_eq!(err.entity_id(), Some("42"));
    }

    #[test]
    fn test_non_constraint_sqlite_error_is_persistence() {
        let err = from_rusqlite(rusqlite::Error::QueryReturnedNoRows);
        assert_eq!(err.kind(), ExErrorKind::Persistence);
        assert_eq!(err.op(), Some("sqlite"));
    }
}

//! Command orchestration layer.

pub mod catalog;
pub mod engine_command;
pub mod items;
pub mod pack;
pub mod suggest;

use std::time::Instant;

use cartonx_core::{log_op_end, log_op_error, log_op_start, ExError};

/// Run `f` between a `start` and an `end` / `end_error` boundary event
pub(crate) fn observe<T, F>(op: &'static str, f: F) -> Result<T, ExError>
where
    F: FnOnce() -> Result<T, ExError>,
{
    log_op_start!(op);
    let start = Instant::now();

    f().map(|value| {
        log_op_end!(op, duration_ms = start.elapsed().as_millis() as u64);
        value
    })
    .map_err(|e| {
        log_op_error!(
            op,
            e.clone(),
            duration_ms = start.elapsed().as_millis() as u64
        );
        e.with_op(op)
    })
}

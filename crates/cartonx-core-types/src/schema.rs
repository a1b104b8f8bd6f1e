//! Canonical schema constants for structured logging
//!
//! Every log event emitted through the logging macros uses these keys, so
//! downstream log queries stay stable across crates.

// Canonical field keys
pub const FIELD_COMPONENT: &str = "component";
pub const FIELD_OP: &str = "op";
pub const FIELD_EVENT: &str = "event";
pub const FIELD_DURATION_MS: &str = "duration_ms";
pub const FIELD_REQUEST_ID: &str = "request_id";

// Batch sizes on pack_batch boundaries
pub const FIELD_ORDER_COUNT: &str = "order_count";
pub const FIELD_BOX_COUNT: &str = "box_count";

// Error fields
pub const FIELD_ERR_KIND: &str = "err_kind";
pub const FIELD_ERR_CODE: &str = "err_code";

// Canonical event names
pub const EVENT_START: &str = "start";
pub const EVENT_END: &str = "end";
pub const EVENT_END_ERROR: &str = "end_error";

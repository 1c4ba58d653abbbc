//! Canonical schema constants for structured logging and events
//!
//! These constants ensure consistency across all logging and error reporting.

// Canonical field keys for structured logging
pub const FIELD_COMPONENT: &str = "component";
pub const FIELD_OP: &str = "op";
pub const FIELD_EVENT: &str = "event";
pub const FIELD_DURATION_MS: &str = "duration_ms";
pub const FIELD_RUN_ID: &str = "run_id";

// Conversion pair identifiers
pub const FIELD_SOURCE_ID: &str = "source_id";
pub const FIELD_TARGET_ID: &str = "target_id";

// Outcome fields
pub const FIELD_ERROR_COUNT: &str = "error_count";
pub const FIELD_MAIN_CLASS: &str = "main_class";
pub const FIELD_SEGMENT_COUNT: &str = "segment_count";
pub const FIELD_RESULT_COUNT: &str = "result_count";

// Error fields
pub const FIELD_ERR_KIND: &str = "err.kind";
pub const FIELD_ERR_CODE: &str = "err.code";

// Canonical event names
pub const EVENT_START: &str = "start";
pub const EVENT_END: &str = "end";
pub const EVENT_END_ERROR: &str = "end_error";

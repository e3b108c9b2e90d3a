//! Canonical schema constants for structured logging
//!
//! Every log line emitted through the logging facility uses these keys so
//! that JSON output from production runs can be filtered uniformly.

// Canonical field keys
pub const FIELD_COMPONENT: &str = "component";
pub const FIELD_OP: &str = "op";
pub const FIELD_EVENT: &str = "event";
pub const FIELD_DURATION_MS: &str = "duration_ms";

// Tracked-rule identifiers
pub const FIELD_CATEGORY: &str = "category";
pub const FIELD_CODE: &str = "code";

// Error fields
pub const FIELD_ERR_KIND: &str = "err.kind";
pub const FIELD_ERR_CODE: &str = "err.code";

// Canonical event names
pub const EVENT_START: &str = "start";
pub const EVENT_END: &str = "end";
pub const EVENT_END_ERROR: &str = "end_error";

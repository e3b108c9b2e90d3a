//! Change detection between consecutive snapshot entries.
//!
//! ```ignore
//! use rulewatch_core::diff::detect_change;
//!
//! let detection = detect_change(previous.as_ref(), &current);
//! if detection.changed { /* record a ChangeRecord */ }
//! ```

pub mod engine;
pub mod human_summary;
pub mod model;

pub use engine::detect_change;
pub use human_summary::render_report_markdown;
pub use model::{ChangeDetection, DiffKey};

//! Leaf types shared by every rulewatch crate
//!
//! - **Correlation**: `RunId` tags every log line emitted during one check run
//! - **Sensitive data**: `Sensitive<T>` keeps the API credential out of logs
//! - **Schema constants**: canonical structured-logging field keys and event names

pub mod correlation;
pub mod schema;
pub mod sensitive;

pub use correlation::RunId;
pub use sensitive::Sensitive;

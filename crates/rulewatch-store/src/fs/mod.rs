//! File primitives shared by every store

pub mod atomic;
pub mod json_file;

pub use atomic::atomic_write;
pub use json_file::{load_or_default, save_pretty};

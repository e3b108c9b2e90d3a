//! rulewatch-lawgo - law.go.kr DRF Open API transport
//!
//! - [`LawGoClient`]: blocking HTTP client for `lawSearch.do` / `lawService.do`
//!   with response classification and retry
//! - [`MockSource`]: fixed offline responses for `LAWGO_MOCK=1`
//! - [`parse`]: mapping of the DRF JSON shapes onto core candidate / payload types
//!
//! Both sources implement [`rulewatch_core::RemoteSource`].

#![allow(clippy::result_large_err)]

pub mod classify;
pub mod client;
pub mod config;
pub mod mock;
pub mod parse;
pub mod retry;

pub use client::LawGoClient;
pub use config::LawGoConfig;
pub use mock::MockSource;

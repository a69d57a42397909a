//! # dbview-api - Table Browser API Client
//!
//! Read-only HTTP client for the SQLite table browser API and the
//! classification of its responses into failure tiers.
//!
//! Depends on [`dbview_core`] for payload types and error handling.
//!
//! ## Public API
//!
//! ### Client
//! - [`TableApi`] - Async trait over the four GET endpoints
//! - [`HttpTableApi`] - `reqwest` implementation
//!
//! ### Failures
//! - [`FetchError`] - Transport, status, content-type, JSON and application errors
//! - [`ApiError`] - Structured `{"error": ...}` payload
//! - [`classify_response()`] - Pure status/content-type/body classification

pub mod classify;
pub mod client;
pub mod error;
#[cfg(any(test, feature = "test-helpers"))]
pub mod test_utils;

pub use classify::{classify_response, is_success, ContentTypePolicy};
pub use client::{encode_table_name, HttpTableApi, LocalTableApi, TableApi};
pub use error::{ApiError, FailureTier, FetchError};

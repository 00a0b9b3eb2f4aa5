//! `gb-report` - Last-error capture and notice sinks for geobridge.
//!
//! This crate provides:
//! - A fixed-capacity `ErrorBuffer` with bounded, last-write-wins semantics
//! - A synchronized `ErrorStore` shared between an engine's error handler
//!   and the application reading diagnostics
//! - A `NoticeSink` trait for fire-and-forget informational messages

pub mod buffer;
pub mod notice;
pub mod store;

// Re-export primary types at the crate root for convenience.
pub use buffer::{ErrorBuffer, ERROR_BUF_CAP};
pub use notice::{NoticeSink, StderrNotices, TracingNotices};
pub use store::ErrorStore;

//! Observability bootstrap
//!
//! Structured logging is provided by `tracing`; this module installs the
//! global subscriber once at process start.

pub mod logging;

pub use logging::{init_tracing, DEFAULT_LOG_FILTER};

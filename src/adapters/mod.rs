//! Infrastructure adapters. Implement outbound ports.
//!
//! HTTP endpoint, tokio runtime, terminal widgets, logging. Map errors to DomainError.

pub mod http;
pub mod logging;
pub mod runtime;
pub mod ui;

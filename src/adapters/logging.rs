//! Implements DiagnosticLog on top of tracing.

use crate::ports::DiagnosticLog;
use tracing::error;

/// Writes tagged diagnostics as `tracing` error events.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingLog;

impl DiagnosticLog for TracingLog {
    fn error(&self, tag: &str, message: &str) {
        error!(tag, "{}", message);
    }
}

//! Domain errors. Used by ports and use cases.
//!
//! Adapters map infrastructure errors into these.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Connectivity failure, non-success status or undecodable payload.
    /// Callers do not distinguish between them.
    #[error("fetch failed: {0}")]
    Fetch(String),
}

//! Outbound ports. Application calls into infrastructure.
//!
//! Implemented by adapters.

use crate::domain::{DomainError, Greeting};

/// Remote greeting endpoint.
#[async_trait::async_trait]
pub trait GreetingGateway: Send + Sync {
    /// Fetch a single greeting. Every failure (connectivity, status, decoding)
    /// comes back as `DomainError::Fetch`.
    async fn fetch_greeting(&self) -> Result<Greeting, DomainError>;
}

/// A text widget on the screen.
///
/// View ports carry no `Send` bound: they belong to the foreground task that
/// owns the screen.
pub trait TextDisplay {
    /// Render `text`. `None` clears the widget.
    fn set_text(&self, text: Option<&str>);
}

/// How long a notification should stay visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationDuration {
    Short,
    Long,
}

/// Transient user-visible notification. Fire-and-forget.
pub trait Notifier {
    fn show(&self, message: &str, duration: NotificationDuration);
}

/// Diagnostic log sink keyed by a tag. Fire-and-forget.
pub trait DiagnosticLog {
    fn error(&self, tag: &str, message: &str);
}

//! Mock greeting gateway for running without network access.
//!
//! Returns a canned greeting (or a canned failure) after a simulated delay.

use crate::domain::{DomainError, Greeting};
use crate::ports::GreetingGateway;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use tracing::info;

/// Mock gateway. Counts calls so callers can check how many requests were issued.
pub struct MockGreetingGateway {
    /// Simulated network delay in milliseconds.
    delay_ms: u64,
    outcome: Result<Greeting, DomainError>,
    calls: AtomicUsize,
}

impl MockGreetingGateway {
    /// Mock returning `{ id: "1", content: "Hello, World!" }` after 100ms.
    pub fn new() -> Self {
        Self::with_greeting(Greeting::new(
            Some("1".to_string()),
            Some("Hello, World!".to_string()),
        ))
    }

    pub fn with_greeting(greeting: Greeting) -> Self {
        Self {
            delay_ms: 100,
            outcome: Ok(greeting),
            calls: AtomicUsize::new(0),
        }
    }

    /// Mock that always fails with `DomainError::Fetch(message)`.
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            delay_ms: 100,
            outcome: Err(DomainError::Fetch(message.into())),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn delay(mut self, delay_ms: u64) -> Self {
        self.delay_ms = delay_ms;
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Default for MockGreetingGateway {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl GreetingGateway for MockGreetingGateway {
    async fn fetch_greeting(&self) -> Result<Greeting, DomainError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        info!(delay_ms = self.delay_ms, "[MOCK] Simulating greeting fetch");

        tokio::time::sleep(Duration::from_millis(self.delay_ms)).await;

        self.outcome.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_gateway() {
        let gateway = MockGreetingGateway::new().delay(5);

        let greeting = gateway.fetch_greeting().await.unwrap();

        assert_eq!(greeting.id.as_deref(), Some("1"));
        assert_eq!(greeting.content.as_deref(), Some("Hello, World!"));
        assert_eq!(gateway.calls(), 1);
    }

    #[tokio::test]
    async fn test_failing_mock_gateway() {
        let gateway = MockGreetingGateway::failing("connection reset").delay(0);

        let err = gateway.fetch_greeting().await.unwrap_err();

        assert_eq!(err, DomainError::Fetch("connection reset".into()));
        assert_eq!(err.to_string(), "fetch failed: connection reset");
        assert_eq!(gateway.calls(), 1);
    }
}

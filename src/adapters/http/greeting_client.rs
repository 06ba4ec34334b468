//! HTTP adapter for the greeting endpoint. Implements GreetingGateway.

use crate::domain::{DomainError, Greeting};
use crate::ports::GreetingGateway;
use reqwest::Client;
use tracing::{debug, warn};

/// Base address of the public greeting service.
pub const DEFAULT_BASE_URL: &str = "http://rest-service.guides.spring.io";

/// Path of the greeting resource, appended to the base address.
pub const GREETING_PATH: &str = "/greeting";

/// Greeting endpoint client. `GET {base}/greeting`, JSON body decoded into [`Greeting`].
///
/// No retries, timeouts or extra headers: reqwest defaults apply.
pub struct HttpGreetingGateway {
    client: Client,
    base_url: String,
}

impl HttpGreetingGateway {
    /// Client bound to [`DEFAULT_BASE_URL`].
    pub fn create() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Client bound to an explicit base address. Trailing slashes are dropped.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            client: Client::new(),
            base_url,
        }
    }

    pub fn greeting_url(&self) -> String {
        format!("{}{}", self.base_url, GREETING_PATH)
    }
}

#[async_trait::async_trait]
impl GreetingGateway for HttpGreetingGateway {
    async fn fetch_greeting(&self) -> Result<Greeting, DomainError> {
        let url = self.greeting_url();
        debug!(url = %url, "fetching greeting");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| DomainError::Fetch(format!("HTTP request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            warn!(status = %status, body = %text, "greeting endpoint returned error");
            return Err(DomainError::Fetch(format!(
                "greeting endpoint returned {}",
                status
            )));
        }

        let greeting = response
            .json::<Greeting>()
            .await
            .map_err(|e| DomainError::Fetch(format!("invalid greeting payload: {}", e)))?;

        debug!(
            id = greeting.id.as_deref().unwrap_or("-"),
            "greeting received"
        );
        Ok(greeting)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::Method::GET;
    use httpmock::MockServer;
    use serde_json::json;

    #[test]
    fn default_client_targets_public_service() {
        let gateway = HttpGreetingGateway::create();
        assert_eq!(
            gateway.greeting_url(),
            "http://rest-service.guides.spring.io/greeting"
        );
    }

    #[test]
    fn trailing_slash_is_trimmed() {
        let gateway = HttpGreetingGateway::with_base_url("http://localhost:8080//");
        assert_eq!(gateway.greeting_url(), "http://localhost:8080/greeting");
    }

    #[tokio::test]
    async fn decodes_greeting_from_endpoint() {
        let server = MockServer::start_async().await;
        let request_mock = server
            .mock_async(|when, then| {
                when.method(GET).path("/greeting");
                then.status(200)
                    .header("content-type", "application/json")
                    .json_body(json!({"id": 1, "content": "Hello, World!"}));
            })
            .await;

        let gateway = HttpGreetingGateway::with_base_url(server.base_url());
        let greeting = gateway.fetch_greeting().await.unwrap();

        assert_eq!(greeting.id.as_deref(), Some("1"));
        assert_eq!(greeting.content.as_deref(), Some("Hello, World!"));
        request_mock.assert_calls(1);
    }

    #[tokio::test]
    async fn non_success_status_is_fetch_error() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/greeting");
                then.status(503).body("unavailable");
            })
            .await;

        let gateway = HttpGreetingGateway::with_base_url(server.base_url());
        let err = gateway.fetch_greeting().await.unwrap_err();

        let DomainError::Fetch(msg) = err;
        assert!(msg.contains("503"), "unexpected message: {msg}");
    }

    #[tokio::test]
    async fn malformed_body_is_fetch_error() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/greeting");
                then.status(200)
                    .header("content-type", "application/json")
                    .body("{\"id\": \"1\", \"content\": ");
            })
            .await;

        let gateway = HttpGreetingGateway::with_base_url(server.base_url());
        let err = gateway.fetch_greeting().await.unwrap_err();

        let DomainError::Fetch(msg) = err;
        assert!(msg.starts_with("invalid greeting payload"), "unexpected message: {msg}");
    }

    #[tokio::test]
    async fn unreachable_host_is_fetch_error() {
        let gateway = HttpGreetingGateway::with_base_url("http://127.0.0.1:1");
        let err = gateway.fetch_greeting().await.unwrap_err();

        let DomainError::Fetch(msg) = err;
        assert!(msg.starts_with("HTTP request failed"), "unexpected message: {msg}");
    }
}

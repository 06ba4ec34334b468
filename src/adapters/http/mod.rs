//! Greeting endpoint adapters. Implement GreetingGateway.
//!
//! Provides the reqwest-backed client and an offline mock.

pub mod greeting_client;
pub mod mock_gateway;

pub use greeting_client::{DEFAULT_BASE_URL, GREETING_PATH, HttpGreetingGateway};
pub use mock_gateway::MockGreetingGateway;

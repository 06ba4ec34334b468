//! Application use cases. Orchestrate domain logic via ports.

pub mod screen_controller;

pub use screen_controller::{FETCH_ERROR_MESSAGE, GreetingView, LOG_TAG, ScreenController};

//! Inbound port. The binary drives the screen lifecycle through it.

use crate::domain::ScreenState;

/// Screen lifecycle: activate once, wait for the outcome, tear down.
///
/// Not `Send`: a screen lives on the foreground task.
#[async_trait::async_trait(?Send)]
pub trait Screen {
    /// Issue the screen's request. Returns the state right after activation.
    fn activate(&mut self) -> ScreenState;

    /// Wait for the outcome and render it.
    async fn resolve(&mut self) -> ScreenState;

    /// Cancel any in-flight work.
    fn teardown(&mut self);
}

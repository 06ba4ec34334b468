//! Greeting screen: request a greeting on activation and render the outcome.
//!
//! - Activation is synchronous (Idle -> Pending) and issues exactly one fetch
//! - The fetch runs on the BackgroundExecutor; its outcome comes back over a oneshot
//! - Widgets are written only in `resolve`, on the task that owns the controller
//! - Failures of any kind end in Errored: notification + diagnostic log, widgets untouched

use crate::domain::{DomainError, Greeting, ScreenState};
use crate::ports::{
    BackgroundExecutor, DiagnosticLog, GreetingGateway, NotificationDuration, Notifier, Screen,
    TextDisplay,
};
use std::sync::Arc;
use tokio::sync::oneshot;
use tokio::task::AbortHandle;
use tracing::{debug, info, warn};

/// Tag for diagnostic log entries written by the screen.
pub const LOG_TAG: &str = "RestGreeting";

/// Notification shown when the greeting cannot be fetched.
pub const FETCH_ERROR_MESSAGE: &str = "Could not fetch the greeting.";

/// Widgets and sinks the screen renders into. Owned by the foreground task.
pub struct GreetingView {
    id_label: Box<dyn TextDisplay>,
    content_label: Box<dyn TextDisplay>,
    notifier: Box<dyn Notifier>,
    log: Box<dyn DiagnosticLog>,
}

impl GreetingView {
    pub fn new(
        id_label: Box<dyn TextDisplay>,
        content_label: Box<dyn TextDisplay>,
        notifier: Box<dyn Notifier>,
        log: Box<dyn DiagnosticLog>,
    ) -> Self {
        Self {
            id_label,
            content_label,
            notifier,
            log,
        }
    }
}

type FetchOutcome = Result<Greeting, DomainError>;

/// The single request issued by an activation.
struct InFlight {
    rx: oneshot::Receiver<FetchOutcome>,
    abort: AbortHandle,
}

/// Screen controller. Owns its gateway from construction; no lazy setup.
pub struct ScreenController {
    gateway: Arc<dyn GreetingGateway>,
    executor: Arc<dyn BackgroundExecutor>,
    view: GreetingView,
    state: ScreenState,
    in_flight: Option<InFlight>,
}

impl ScreenController {
    pub fn new(
        gateway: Arc<dyn GreetingGateway>,
        executor: Arc<dyn BackgroundExecutor>,
        view: GreetingView,
    ) -> Self {
        Self {
            gateway,
            executor,
            view,
            state: ScreenState::Idle,
            in_flight: None,
        }
    }

    pub fn state(&self) -> ScreenState {
        self.state
    }

    fn render(&self, outcome: FetchOutcome) -> ScreenState {
        match outcome {
            Ok(greeting) => {
                self.view.id_label.set_text(greeting.id.as_deref());
                self.view.content_label.set_text(greeting.content.as_deref());
                info!(
                    id = greeting.id.as_deref().unwrap_or("-"),
                    "greeting displayed"
                );
                ScreenState::Displayed
            }
            Err(e) => {
                warn!(error = %e, "greeting fetch failed");
                self.view
                    .notifier
                    .show(FETCH_ERROR_MESSAGE, NotificationDuration::Long);
                self.view.log.error(LOG_TAG, &e.to_string());
                ScreenState::Errored
            }
        }
    }
}

#[async_trait::async_trait(?Send)]
impl Screen for ScreenController {
    fn activate(&mut self) -> ScreenState {
        if self.state != ScreenState::Idle {
            debug!(state = ?self.state, "screen already activated; ignoring");
            return self.state;
        }

        let (tx, rx) = oneshot::channel();
        let gateway = Arc::clone(&self.gateway);
        let abort = self.executor.spawn(Box::pin(async move {
            let outcome = gateway.fetch_greeting().await;
            // Receiver is gone once the screen is torn down.
            let _ = tx.send(outcome);
        }));

        self.in_flight = Some(InFlight { rx, abort });
        self.state = ScreenState::Pending;
        info!("greeting requested");
        self.state
    }

    async fn resolve(&mut self) -> ScreenState {
        if self.state != ScreenState::Pending {
            return self.state;
        }
        let Some(in_flight) = self.in_flight.take() else {
            debug!("no request in flight (torn down)");
            return self.state;
        };

        let outcome = in_flight.rx.await.unwrap_or_else(|_| {
            Err(DomainError::Fetch(
                "request task ended without a result".to_string(),
            ))
        });
        self.state = self.render(outcome);
        self.state
    }

    fn teardown(&mut self) {
        if let Some(in_flight) = self.in_flight.take() {
            in_flight.abort.abort();
            debug!("in-flight greeting request cancelled");
        }
    }
}

impl Drop for ScreenController {
    fn drop(&mut self) {
        self.teardown();
    }
}

//! Wiring & DI. Entry point: bootstrap adapters, inject into the screen, run it.
//! No business logic here; the request lifecycle lives in ScreenController.

use dotenv::dotenv;
use rest_greeting::adapters::http::{HttpGreetingGateway, MockGreetingGateway};
use rest_greeting::adapters::logging::TracingLog;
use rest_greeting::adapters::runtime::TokioExecutor;
use rest_greeting::adapters::ui::{TerminalLabel, TerminalNotifier};
use rest_greeting::ports::{BackgroundExecutor, GreetingGateway, Screen};
use rest_greeting::shared::config::AppConfig;
use rest_greeting::usecases::{GreetingView, ScreenController};
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let env_loaded = dotenv();
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    match &env_loaded {
        Ok(path) => info!(path = %path.display(), "loaded .env"),
        Err(_) => info!("no .env found (check CWD)"),
    }

    rest_greeting::adapters::ui::init_ui();

    let cfg = AppConfig::load().unwrap_or_else(|e| {
        warn!(error = %e, "invalid configuration; using defaults");
        AppConfig::default()
    });

    // --- Gateway: real endpoint unless offline mode is requested ---
    let gateway: Arc<dyn GreetingGateway> = if cfg.is_offline() {
        warn!("GREETING_OFFLINE set, using mock greeting gateway");
        Arc::new(MockGreetingGateway::new().delay(cfg.mock_delay_ms_or_default()))
    } else if let Some(base_url) = cfg.base_url_override() {
        info!(url = %base_url, "greeting endpoint (GREETING_BASE_URL)");
        Arc::new(HttpGreetingGateway::with_base_url(base_url))
    } else {
        let gateway = HttpGreetingGateway::create();
        info!(url = %gateway.greeting_url(), "greeting endpoint");
        Arc::new(gateway)
    };

    // --- Background work goes to the runtime's workers; this task owns the widgets ---
    let executor: Arc<dyn BackgroundExecutor> = Arc::new(TokioExecutor::current());
    let view = GreetingView::new(
        Box::new(TerminalLabel::new("id")),
        Box::new(TerminalLabel::new("content")),
        Box::new(TerminalNotifier::new()),
        Box::new(TracingLog),
    );

    let mut screen = ScreenController::new(gateway, executor, view);
    run_screen(&mut screen).await;

    Ok(())
}

/// Drive one screen through its lifecycle on the current task.
async fn run_screen(screen: &mut dyn Screen) {
    screen.activate();
    let state = screen.resolve().await;
    info!(?state, "screen resolved");
    screen.teardown();
}

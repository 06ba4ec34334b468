//! Port traits. API boundaries for the hexagon.
//!
//! - Inbound: Called by the binary into the application
//! - Outbound: Called by application into infrastructure
//! - Scheduler: Where the application runs background work

pub mod inbound;
pub mod outbound;
pub mod scheduler;

pub use inbound::Screen;
pub use outbound::{DiagnosticLog, GreetingGateway, NotificationDuration, Notifier, TextDisplay};
pub use scheduler::{BackgroundExecutor, BackgroundTask};

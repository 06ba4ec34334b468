pub mod banner;
pub mod memory;
pub mod terminal;

pub use memory::{MemoryLabel, MemoryLog, MemoryNotifier};
pub use terminal::{TerminalLabel, TerminalNotifier};

/// Prints the welcome banner. Call once at startup (e.g. in main after tracing init).
pub fn init_ui() {
    banner::print_welcome();
}

//! Terminal widgets. Implements TextDisplay and Notifier with crossterm.

use crate::ports::{NotificationDuration, Notifier, TextDisplay};
use crossterm::ExecutableCommand;
use crossterm::style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor};
use std::io::{Write, stderr, stdout};

const CAPTION_COLOR: Color = Color::Rgb {
    r: 0x0f,
    g: 0xf0,
    b: 0xfc,
};
const ERROR_COLOR: Color = Color::Rgb {
    r: 0xff,
    g: 0x4d,
    b: 0x6d,
};

/// Drops control characters so remote text cannot inject terminal escape sequences.
fn printable(text: &str) -> String {
    text.chars().filter(|c| !c.is_control()).collect()
}

/// A captioned label printed to stdout on every update.
pub struct TerminalLabel {
    caption: String,
}

impl TerminalLabel {
    pub fn new(caption: impl Into<String>) -> Self {
        Self {
            caption: caption.into(),
        }
    }
}

impl TextDisplay for TerminalLabel {
    fn set_text(&self, text: Option<&str>) {
        let mut out = stdout();
        let _ = out.execute(SetForegroundColor(CAPTION_COLOR));
        let _ = out.execute(Print(format!("{:>8}: ", self.caption)));
        let _ = out.execute(ResetColor);
        let _ = out.execute(Print(printable(text.unwrap_or(""))));
        let _ = out.execute(Print("\r\n"));
        let _ = out.flush();
    }
}

/// Prints notifications to stderr. A terminal line does not expire, so the
/// duration only changes emphasis.
#[derive(Debug, Default)]
pub struct TerminalNotifier;

impl TerminalNotifier {
    pub fn new() -> Self {
        Self
    }
}

impl Notifier for TerminalNotifier {
    fn show(&self, message: &str, duration: NotificationDuration) {
        let mut err = stderr();
        let _ = err.execute(SetForegroundColor(ERROR_COLOR));
        if duration == NotificationDuration::Long {
            let _ = err.execute(SetAttribute(Attribute::Bold));
        }
        let _ = err.execute(Print(format!("! {}\r\n", message)));
        let _ = err.execute(SetAttribute(Attribute::Reset));
        let _ = err.execute(ResetColor);
        let _ = err.flush();
    }
}

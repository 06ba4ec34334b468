//! In-memory widgets. Record what the screen rendered instead of drawing it.
//!
//! Handles are cheap clones sharing one record, so a caller can keep a copy
//! and inspect it after handing the widget to a screen.

use crate::ports::{DiagnosticLog, NotificationDuration, Notifier, TextDisplay};
use std::sync::{Arc, Mutex};

/// Label that remembers its current text and how many times it was written.
#[derive(Debug, Default, Clone)]
pub struct MemoryLabel {
    inner: Arc<Mutex<LabelRecord>>,
}

#[derive(Debug, Default)]
struct LabelRecord {
    text: Option<String>,
    writes: usize,
}

impl MemoryLabel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> Option<String> {
        self.inner.lock().map(|r| r.text.clone()).unwrap_or_default()
    }

    pub fn writes(&self) -> usize {
        self.inner.lock().map(|r| r.writes).unwrap_or_default()
    }
}

impl TextDisplay for MemoryLabel {
    fn set_text(&self, text: Option<&str>) {
        if let Ok(mut record) = self.inner.lock() {
            record.text = text.map(str::to_string);
            record.writes += 1;
        }
    }
}

/// Notifier that keeps every notification shown.
#[derive(Debug, Default, Clone)]
pub struct MemoryNotifier {
    shown: Arc<Mutex<Vec<(String, NotificationDuration)>>>,
}

impl MemoryNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shown(&self) -> Vec<(String, NotificationDuration)> {
        self.shown.lock().map(|s| s.clone()).unwrap_or_default()
    }
}

impl Notifier for MemoryNotifier {
    fn show(&self, message: &str, duration: NotificationDuration) {
        if let Ok(mut shown) = self.shown.lock() {
            shown.push((message.to_string(), duration));
        }
    }
}

/// Diagnostic log that keeps `(tag, message)` pairs.
#[derive(Debug, Default, Clone)]
pub struct MemoryLog {
    entries: Arc<Mutex<Vec<(String, String)>>>,
}

impl MemoryLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> Vec<(String, String)> {
        self.entries.lock().map(|e| e.clone()).unwrap_or_default()
    }
}

impl DiagnosticLog for MemoryLog {
    fn error(&self, tag: &str, message: &str) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.push((tag.to_string(), message.to_string()));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_clones_share_state() {
        let label = MemoryLabel::new();
        let handle = label.clone();

        label.set_text(Some("hello"));
        label.set_text(None);

        assert_eq!(handle.text(), None);
        assert_eq!(handle.writes(), 2);
    }

    #[test]
    fn notifier_and_log_record_in_order() {
        let notifier = MemoryNotifier::new();
        notifier.show("first", NotificationDuration::Short);
        notifier.show("second", NotificationDuration::Long);
        assert_eq!(
            notifier.shown(),
            vec![
                ("first".to_string(), NotificationDuration::Short),
                ("second".to_string(), NotificationDuration::Long),
            ]
        );

        let log = MemoryLog::new();
        log.error("Tag", "boom");
        assert_eq!(log.entries(), vec![("Tag".to_string(), "boom".to_string())]);
    }
}

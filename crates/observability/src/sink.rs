//! Observability sink for inventory state changes.
//!
//! The store never logs directly: it reports to an [`EventSink`]. Production
//! code uses [`TracingSink`]; tests use [`RecordingSink`] and assert on what
//! was emitted without capturing global output.

use std::sync::{Arc, Mutex};

/// Severity of an emitted event. Only the two levels the store uses.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum EventLevel {
    Info,
    Warning,
}

/// Receiver of human-readable inventory events.
pub trait EventSink {
    fn info(&self, message: &str);

    fn warning(&self, message: &str);
}

impl<S: EventSink + ?Sized> EventSink for &S {
    fn info(&self, message: &str) {
        (**self).info(message)
    }

    fn warning(&self, message: &str) {
        (**self).warning(message)
    }
}

impl<S: EventSink + ?Sized> EventSink for Box<S> {
    fn info(&self, message: &str) {
        (**self).info(message)
    }

    fn warning(&self, message: &str) {
        (**self).warning(message)
    }
}

impl<S: EventSink + ?Sized> EventSink for Arc<S> {
    fn info(&self, message: &str) {
        (**self).info(message)
    }

    fn warning(&self, message: &str) {
        (**self).warning(message)
    }
}

/// Forwards events to `tracing` under the `stockkeep::inventory` target.
#[derive(Debug, Default, Copy, Clone)]
pub struct TracingSink;

impl EventSink for TracingSink {
    fn info(&self, message: &str) {
        ::tracing::info!(target: "stockkeep::inventory", "{message}");
    }

    fn warning(&self, message: &str) {
        ::tracing::warn!(target: "stockkeep::inventory", "{message}");
    }
}

/// One captured event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedEvent {
    pub level: EventLevel,
    pub message: String,
}

/// In-memory sink. Clones share the same buffer, so a test can hand one clone
/// to the store and inspect the other.
#[derive(Debug, Default, Clone)]
pub struct RecordingSink {
    events: Arc<Mutex<Vec<RecordedEvent>>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything recorded so far, oldest first.
    pub fn events(&self) -> Vec<RecordedEvent> {
        self.events.lock().map(|e| e.clone()).unwrap_or_default()
    }

    pub fn messages(&self, level: EventLevel) -> Vec<String> {
        self.events()
            .into_iter()
            .filter(|e| e.level == level)
            .map(|e| e.message)
            .collect()
    }

    pub fn clear(&self) {
        if let Ok(mut events) = self.events.lock() {
            events.clear();
        }
    }

    fn push(&self, level: EventLevel, message: &str) {
        if let Ok(mut events) = self.events.lock() {
            events.push(RecordedEvent {
                level,
                message: message.to_string(),
            });
        }
    }
}

impl EventSink for RecordingSink {
    fn info(&self, message: &str) {
        self.push(EventLevel::Info, message);
    }

    fn warning(&self, message: &str) {
        self.push(EventLevel::Warning, message);
    }
}

//! Tracing, logging and the inventory event sink (shared setup).

/// Initialize process-wide observability (tracing/logging).
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init();
}

/// Event sink abstraction (info / warning) injected into the store.
pub mod sink;

/// Tracing configuration (filters, layers).
pub mod tracing;

pub use sink::{EventLevel, EventSink, RecordedEvent, RecordingSink, TracingSink};

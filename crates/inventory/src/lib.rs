//! Inventory store: item name -> quantity, with JSON persistence.
//!
//! The store is an explicit value owned by the caller. All observability goes
//! through an injected [`EventSink`](stockkeep_observability::EventSink).

pub mod persistence;
pub mod store;

pub use persistence::{DEFAULT_INVENTORY_FILE, Snapshot, read_snapshot, write_snapshot};
pub use store::InventoryStore;

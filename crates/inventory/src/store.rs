use std::collections::BTreeMap;
use std::fmt::Write as _;
use std::path::Path;

use chrono::{DateTime, Local};

use stockkeep_core::quantity::{non_negative, positive};
use stockkeep_core::{
    DEFAULT_LOW_STOCK_THRESHOLD, InventoryError, InventoryResult, ItemName, Quantity,
};
use stockkeep_observability::{EventSink, TracingSink};

use crate::persistence::{self, Snapshot};

/// In-memory inventory: item name -> quantity.
///
/// Every mutating operation validates its arguments before touching state, so
/// an `InvalidArgument` error always leaves the store unchanged.
#[derive(Debug, Clone)]
pub struct InventoryStore<S = TracingSink> {
    items: Snapshot,
    sink: S,
}

impl InventoryStore<TracingSink> {
    /// Empty store reporting to `tracing`.
    pub fn new() -> Self {
        Self::with_sink(TracingSink)
    }
}

impl Default for InventoryStore<TracingSink> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: EventSink> InventoryStore<S> {
    /// Empty store reporting to the given sink.
    pub fn with_sink(sink: S) -> Self {
        Self {
            items: BTreeMap::new(),
            sink,
        }
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Add `qty` units of `item`, creating the entry at 0 if absent.
    ///
    /// On success a `"<timestamp>: Added <qty> of <item>"` line is appended to
    /// `logs` when a collector is supplied.
    pub fn add(
        &mut self,
        item: &str,
        qty: Quantity,
        logs: Option<&mut Vec<String>>,
    ) -> InventoryResult<()> {
        self.add_at(item, qty, logs, Local::now())
    }

    /// [`add`](Self::add) with an explicit timestamp for the log line.
    pub fn add_at(
        &mut self,
        item: &str,
        qty: Quantity,
        logs: Option<&mut Vec<String>>,
        at: DateTime<Local>,
    ) -> InventoryResult<()> {
        let name = ItemName::parse(item)?;
        let qty = non_negative(qty, "qty")?;

        let current = self.items.get(&name).copied().unwrap_or(0);
        let updated = current.checked_add(qty).ok_or_else(|| {
            InventoryError::invalid_argument(format!("qty {qty} would overflow stock of {name}"))
        })?;

        if let Some(logs) = logs {
            logs.push(format!("{}: Added {qty} of {name}", at.format("%Y-%m-%dT%H:%M:%S")));
        }
        self.sink.info(&format!("Added {qty} of {name}"));
        self.items.insert(name, updated);

        Ok(())
    }

    /// Remove `qty` units of `item`.
    ///
    /// Removing a missing item is a logged no-op. Removing as much or more
    /// than is in stock deletes the entry.
    pub fn remove(&mut self, item: &str, qty: Quantity) -> InventoryResult<()> {
        let name = ItemName::parse(item)?;
        let qty = positive(qty, "qty")?;

        let Some(current) = self.items.get_mut(&name) else {
            self.sink.warning(&format!("Tried removing missing item {name}"));
            return Ok(());
        };

        // Both operands are nonnegative, so this cannot overflow.
        let remaining = *current - qty;
        if remaining <= 0 {
            self.items.remove(&name);
            self.sink.info(&format!("Removed item {name} completely"));
        } else {
            *current = remaining;
            self.sink.info(&format!("New qty for {name}: {remaining}"));
        }

        Ok(())
    }

    /// Quantity on hand; 0 for unknown items.
    pub fn get_quantity(&self, item: &str) -> InventoryResult<Quantity> {
        let name = ItemName::parse(item)?;
        Ok(self.items.get(&name).copied().unwrap_or(0))
    }

    /// Names of items whose quantity is strictly below `threshold`, in name
    /// order.
    pub fn list_low_stock(&self, threshold: Quantity) -> InventoryResult<Vec<String>> {
        let threshold = non_negative(threshold, "threshold")?;
        Ok(self.below(threshold))
    }

    /// [`list_low_stock`](Self::list_low_stock) with the default cutoff of 5.
    pub fn list_low_stock_default(&self) -> Vec<String> {
        self.below(DEFAULT_LOW_STOCK_THRESHOLD)
    }

    fn below(&self, threshold: Quantity) -> Vec<String> {
        self.items
            .iter()
            .filter(|(_, qty)| **qty < threshold)
            .map(|(name, _)| name.to_string())
            .collect()
    }

    /// Replace the whole store with the contents of `path`.
    ///
    /// A missing file empties the store. On any error the store is left as
    /// it was.
    pub fn load(&mut self, path: impl AsRef<Path>) -> InventoryResult<()> {
        self.items = persistence::read_snapshot(path.as_ref())?.unwrap_or_default();
        Ok(())
    }

    /// Write the whole store to `path`, overwriting it.
    pub fn save(&self, path: impl AsRef<Path>) -> InventoryResult<()> {
        persistence::write_snapshot(path.as_ref(), &self.items)
    }

    /// Human-readable listing sorted by name.
    pub fn report(&self) -> String {
        let mut out = String::from("Items Report\n");
        for (name, qty) in &self.items {
            let _ = writeln!(out, "{name} -> {qty}");
        }
        out
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// True when `item` names a valid, stored entry.
    pub fn contains(&self, item: &str) -> bool {
        ItemName::parse(item)
            .map(|name| self.items.contains_key(&name))
            .unwrap_or(false)
    }

    /// Entries in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&ItemName, Quantity)> + '_ {
        self.items.iter().map(|(name, qty)| (name, *qty))
    }

    /// Copy of the current contents.
    pub fn snapshot(&self) -> Snapshot {
        self.items.clone()
    }
}

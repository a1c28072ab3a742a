//! Subcommand execution against a file-backed store.

use std::io::Write;
use std::path::Path;

use anyhow::Context;
use clap::Subcommand;

use stockkeep_core::Quantity;
use stockkeep_inventory::InventoryStore;
use stockkeep_observability::EventSink;

use crate::config::CliConfig;

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Add stock for an item
    Add {
        item: String,
        #[arg(allow_negative_numbers = true)]
        qty: Quantity,
    },
    /// Remove stock for an item (missing items are ignored)
    Remove {
        item: String,
        #[arg(allow_negative_numbers = true)]
        qty: Quantity,
    },
    /// Print the quantity on hand for an item
    Qty { item: String },
    /// List items below the low-stock threshold
    Low {
        /// Overrides STOCKKEEP_LOW_STOCK_THRESHOLD
        #[arg(short, long, allow_negative_numbers = true)]
        threshold: Option<Quantity>,
    },
    /// Print every item sorted by name
    Report,
    /// Run the apple/banana walkthrough against the inventory file
    Demo,
}

impl Command {
    fn mutates(&self) -> bool {
        matches!(self, Command::Add { .. } | Command::Remove { .. })
    }
}

/// Load the configured file, run `command`, and save back if it mutated.
pub fn run<S: EventSink>(
    store: &mut InventoryStore<S>,
    command: Command,
    config: &CliConfig,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let path = config.data_file.as_path();

    // The walkthrough starts from an empty store, like a fresh process.
    if command != Command::Demo {
        store
            .load(path)
            .with_context(|| format!("failed to load inventory from {}", path.display()))?;
    }

    let mutates = command.mutates();
    match command {
        Command::Add { item, qty } => {
            let mut logs = Vec::new();
            store.add(&item, qty, Some(&mut logs))?;
            for line in logs {
                writeln!(out, "{line}")?;
            }
        }
        Command::Remove { item, qty } => {
            store.remove(&item, qty)?;
            writeln!(out, "{}: {}", item.trim(), store.get_quantity(&item)?)?;
        }
        Command::Qty { item } => {
            writeln!(out, "{}: {}", item.trim(), store.get_quantity(&item)?)?;
        }
        Command::Low { threshold } => {
            let threshold = threshold.unwrap_or(config.low_stock_threshold);
            for name in store.list_low_stock(threshold)? {
                writeln!(out, "{name}")?;
            }
        }
        Command::Report => write!(out, "{}", store.report())?,
        Command::Demo => return demo(store, path, out),
    }

    if mutates {
        store
            .save(path)
            .with_context(|| format!("failed to save inventory to {}", path.display()))?;
        tracing::debug!(path = %path.display(), items = store.len(), "inventory saved");
    }

    Ok(())
}

fn demo<S: EventSink>(
    store: &mut InventoryStore<S>,
    path: &Path,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    store.add("apple", 10, None)?;
    store.add("banana", 2, None)?;

    store.remove("apple", 3)?;
    store.remove("orange", 1)?;

    writeln!(out, "Apple stock: {}", store.get_quantity("apple")?)?;
    writeln!(out, "Low items: {:?}", store.list_low_stock_default())?;

    store
        .save(path)
        .with_context(|| format!("failed to save inventory to {}", path.display()))?;
    store
        .load(path)
        .with_context(|| format!("failed to load inventory from {}", path.display()))?;
    write!(out, "{}", store.report())?;

    Ok(())
}

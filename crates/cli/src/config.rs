//! CLI configuration: defaults, then environment, then flags.

use std::path::PathBuf;

use anyhow::Context;

use stockkeep_core::{DEFAULT_LOW_STOCK_THRESHOLD, Quantity};
use stockkeep_inventory::DEFAULT_INVENTORY_FILE;

pub const FILE_ENV: &str = "STOCKKEEP_FILE";
pub const THRESHOLD_ENV: &str = "STOCKKEEP_LOW_STOCK_THRESHOLD";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliConfig {
    /// Inventory file read before and written after each command.
    pub data_file: PathBuf,
    /// Cutoff used by `low` when `--threshold` is not given.
    pub low_stock_threshold: Quantity,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from(DEFAULT_INVENTORY_FILE),
            low_stock_threshold: DEFAULT_LOW_STOCK_THRESHOLD,
        }
    }
}

impl CliConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let mut config = Self::default();

        if let Some(file) = lookup(FILE_ENV).filter(|v| !v.trim().is_empty()) {
            config.data_file = PathBuf::from(file);
        }

        if let Some(raw) = lookup(THRESHOLD_ENV) {
            config.low_stock_threshold = raw
                .trim()
                .parse()
                .with_context(|| format!("{THRESHOLD_ENV} must be an integer, got {raw:?}"))?;
        }

        Ok(config)
    }

    /// Apply command-line overrides on top of the environment.
    pub fn with_file(mut self, file: Option<PathBuf>) -> Self {
        if let Some(file) = file {
            self.data_file = file;
        }
        self
    }
}

//! Inventory error model.

use thiserror::Error;

/// Result type used across the inventory crates.
pub type InventoryResult<T> = Result<T, InventoryError>;

/// Inventory-level error.
///
/// `InvalidArgument` is always raised before any state is touched. `Io` and
/// `InvalidFormat` only come out of `load`/`save`.
#[derive(Debug, Error)]
pub enum InventoryError {
    /// Bad item name, quantity or threshold.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The persisted file decoded, but not to an item -> integer mapping
    /// (or did not decode at all).
    #[error("invalid format: {0}")]
    InvalidFormat(String),

    /// Underlying filesystem failure.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl InventoryError {
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    pub fn invalid_format(msg: impl Into<String>) -> Self {
        Self::InvalidFormat(msg.into())
    }

    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument(_))
    }

    pub fn is_invalid_format(&self) -> bool {
        matches!(self, Self::InvalidFormat(_))
    }

    pub fn is_io(&self) -> bool {
        matches!(self, Self::Io(_))
    }
}

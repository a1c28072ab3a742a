//! Quantity validation.
//!
//! Quantities travel as `i64` so that a negative caller input is representable
//! and can be rejected with `InvalidArgument` instead of being unrepresentable.

use crate::error::{InventoryError, InventoryResult};

/// Count of an item in stock. Stored values are always `>= 0`.
pub type Quantity = i64;

/// Cutoff used by `list_low_stock` when the caller does not pick one.
pub const DEFAULT_LOW_STOCK_THRESHOLD: Quantity = 5;

/// Accept `value >= 0`.
pub fn non_negative(value: Quantity, field: &str) -> InventoryResult<Quantity> {
    if value < 0 {
        return Err(InventoryError::invalid_argument(format!(
            "{field} must be nonnegative (got {value})"
        )));
    }
    Ok(value)
}

/// Accept `value > 0`.
pub fn positive(value: Quantity, field: &str) -> InventoryResult<Quantity> {
    if value <= 0 {
        return Err(InventoryError::invalid_argument(format!(
            "{field} must be a positive integer (got {value})"
        )));
    }
    Ok(value)
}

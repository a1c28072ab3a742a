//! `stockkeep-core` — inventory building blocks.
//!
//! This crate contains the **pure** primitives shared by the store and its
//! front ends: the error model and validated input values (no IO).

pub mod error;
pub mod name;
pub mod quantity;
pub mod value_object;

pub use error::{InventoryError, InventoryResult};
pub use name::ItemName;
pub use quantity::{DEFAULT_LOW_STOCK_THRESHOLD, Quantity};
pub use value_object::ValueObject;

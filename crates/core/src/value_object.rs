//! Value object trait: equality by value, not identity.

/// Marker trait for validated input values.
///
/// A value object is immutable once constructed and is only obtainable through
/// its validating constructor, so holding one is proof the input was checked.
///
/// ```ignore
/// let a = ItemName::parse(" apple ")?;
/// let b = ItemName::parse("apple")?;
/// assert_eq!(a, b);
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}

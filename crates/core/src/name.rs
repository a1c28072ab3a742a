//! Strongly-typed item names.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::InventoryError;
use crate::value_object::ValueObject;

/// Name of a stock-keeping unit.
///
/// Always non-empty with surrounding whitespace trimmed, so `" apple "` and
/// `"apple"` address the same entry.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ItemName(String);

impl ItemName {
    /// Validate and normalize a caller-supplied name.
    pub fn parse(raw: &str) -> Result<Self, InventoryError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(InventoryError::invalid_argument(
                "item must be a nonempty string",
            ));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl ValueObject for ItemName {}

impl core::fmt::Display for ItemName {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ItemName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl core::borrow::Borrow<str> for ItemName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl FromStr for ItemName {
    type Err = InventoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for ItemName {
    type Error = InventoryError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<ItemName> for String {
    fn from(value: ItemName) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_trims_surrounding_whitespace() {
        let name = ItemName::parse("  apple \t").unwrap();
        assert_eq!(name.as_str(), "apple");
        assert_eq!(name, "apple".parse::<ItemName>().unwrap());
    }

    #[test]
    fn parse_rejects_empty_and_blank() {
        for raw in ["", " ", "\t\n"] {
            let err = ItemName::parse(raw).unwrap_err();
            assert!(err.is_invalid_argument(), "expected InvalidArgument for {raw:?}");
        }
    }

    #[test]
    fn inner_whitespace_is_kept() {
        assert_eq!(ItemName::parse(" green apple ").unwrap().as_str(), "green apple");
    }

    #[test]
    fn serde_is_a_plain_string() {
        let name = ItemName::parse("pear").unwrap();
        assert_eq!(serde_json::to_string(&name).unwrap(), "\"pear\"");

        let back: ItemName = serde_json::from_str("\" pear \"").unwrap();
        assert_eq!(back, name);

        assert!(serde_json::from_str::<ItemName>("\"   \"").is_err());
    }

    #[cfg(test)]
    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: parsing is idempotent on its own output.
            #[test]
            fn parse_is_idempotent(raw in "\\s{0,3}[A-Za-z0-9_-][A-Za-z0-9 _-]{0,30}\\s{0,3}") {
                let once = ItemName::parse(&raw).unwrap();
                let twice = ItemName::parse(once.as_str()).unwrap();
                prop_assert_eq!(once, twice);
            }
        }
    }
}

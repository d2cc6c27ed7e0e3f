//! Item name value object.

use core::str::FromStr;
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{DomainError, DomainResult};
use crate::value_object::ValueObject;

/// Name of a stocked item.
///
/// Guaranteed non-empty and not whitespace-only. The original spelling is kept
/// as-is (no trimming, no case folding), so `"Apple"` and `"apple"` are two
/// different items.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct ItemName(String);

impl ItemName {
    pub fn parse(name: impl Into<String>) -> DomainResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::validation("item name cannot be empty"));
        }
        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
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
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

// Names read from untrusted input (e.g. a stock file) go through `parse`.
impl<'de> Deserialize<'de> for ItemName {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Self::parse(raw).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_keeps_original_spelling() {
        let name = ItemName::parse(" Apple ").unwrap();
        assert_eq!(name.as_str(), " Apple ");
    }

    #[test]
    fn empty_and_blank_names_are_rejected() {
        for raw in ["", "   ", "\t\n"] {
            match ItemName::parse(raw) {
                Err(DomainError::Validation(msg)) => assert!(msg.contains("empty")),
                other => panic!("expected validation error for {raw:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn deserialize_rejects_empty_name() {
        let ok: ItemName = serde_json::from_str("\"banana\"").unwrap();
        assert_eq!(ok.as_str(), "banana");

        let err = serde_json::from_str::<ItemName>("\"\"").unwrap_err();
        assert!(err.to_string().contains("item name cannot be empty"));
    }

    #[test]
    fn serializes_as_plain_string() {
        let name: ItemName = "pear".parse().unwrap();
        assert_eq!(serde_json::to_string(&name).unwrap(), "\"pear\"");
    }
}

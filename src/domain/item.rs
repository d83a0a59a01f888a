use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use uuid::Uuid;

/// Stable identifier for an item. Identity is never derived from position.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ItemId(String);

impl ItemId {
    /// Creates an ItemId, rejecting empty or whitespace-only values
    pub fn new(id: impl Into<String>) -> Result<Self, crate::error::ReorderError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(crate::error::ReorderError::InvalidItemId(id));
        }
        Ok(Self(id))
    }

    /// Generates a random identifier for catalog entries that carry none
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Returns the string representation
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for ItemId {
    type Err = crate::error::ReorderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for ItemId {
    type Error = crate::error::ReorderError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ItemId> for String {
    fn from(id: ItemId) -> Self {
        id.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A card in the reorderable list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub title: String,
    pub subtitle: String,
}

impl Item {
    pub fn new(id: ItemId, title: impl Into<String>, subtitle: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            subtitle: subtitle.into(),
        }
    }

    /// Creates an item with a freshly generated id
    pub fn with_generated_id(title: impl Into<String>, subtitle: impl Into<String>) -> Self {
        Self::new(ItemId::generate(), title, subtitle)
    }
}

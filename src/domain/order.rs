use crate::domain::item::{Item, ItemId};
use crate::error::{ReorderError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// The display order of a list: a sequence of items with unique ids.
///
/// Serializes as a plain JSON array of item records.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Item>", into = "Vec<Item>")]
pub struct Order(Vec<Item>);

impl Order {
    /// Builds an order, rejecting duplicate ids
    pub fn new(items: Vec<Item>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(items.len());
        for item in &items {
            if !seen.insert(&item.id) {
                return Err(ReorderError::DuplicateItemId(item.id.to_string()));
            }
        }
        Ok(Self(items))
    }

    pub fn items(&self) -> &[Item] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Item> {
        self.0.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Item> {
        self.0.iter()
    }

    /// Ids in display order
    pub fn ids(&self) -> impl Iterator<Item = &ItemId> {
        self.0.iter().map(|item| &item.id)
    }

    /// Index of the item with the given id
    pub fn position_of(&self, id: &ItemId) -> Option<usize> {
        self.0.iter().position(|item| &item.id == id)
    }

    /// Removes the item by id and reinserts it at `index`.
    ///
    /// `index` is interpreted against the list with the item removed and is
    /// clamped to its end.
    pub fn move_to(&mut self, id: &ItemId, index: usize) -> Result<()> {
        let from = self
            .position_of(id)
            .ok_or_else(|| ReorderError::ItemNotFound(id.to_string()))?;

        let item = self.0.remove(from);
        let to = index.min(self.0.len());
        self.0.insert(to, item);
        Ok(())
    }

    /// True when both orders hold exactly the same id set
    pub fn is_permutation_of(&self, other: &Order) -> bool {
        if self.len() != other.len() {
            return false;
        }
        let ours: HashSet<&ItemId> = self.ids().collect();
        other.ids().all(|id| ours.contains(id))
    }

    pub fn into_items(self) -> Vec<Item> {
        self.0
    }
}

impl TryFrom<Vec<Item>> for Order {
    type Error = ReorderError;

    fn try_from(items: Vec<Item>) -> Result<Self> {
        Self::new(items)
    }
}

impl From<Order> for Vec<Item> {
    fn from(order: Order) -> Self {
        order.0
    }
}

impl<'a> IntoIterator for &'a Order {
    type Item = &'a Item;
    type IntoIter = std::slice::Iter<'a, Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

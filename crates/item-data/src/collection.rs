//! ItemCollection: the in-memory item set filters run over.
//!
//! Items keep their export order (filters preserve it too), with a side
//! index for O(1) lookups by id.

use crate::error::{ItemDataError, Result};
use crate::parser;
use crate::types::{Item, ItemId};
use std::collections::HashMap;
use std::path::Path;

/// How many items carry each optional progress section
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FieldCoverage {
    pub total: usize,
    pub with_assignments: usize,
    pub with_review_statistics: usize,
}

/// Ordered set of items with an id index.
#[derive(Debug, Default)]
pub struct ItemCollection {
    items: Vec<Item>,
    by_id: HashMap<ItemId, usize>,
}

impl ItemCollection {
    /// Creates a new, empty collection
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a collection from already-parsed items.
    ///
    /// Fails on the first duplicated id.
    pub fn from_items(items: Vec<Item>) -> Result<Self> {
        let mut collection = Self::new();
        for item in items {
            collection.insert(item)?;
        }
        Ok(collection)
    }

    /// Load an item export from disk
    pub fn load_from_file(path: &Path) -> Result<Self> {
        tracing::debug!("Loading item export from {}", path.display());
        let items = parser::parse_items_file(path)?;
        let collection = Self::from_items(items)?;
        tracing::debug!("Loaded {} items", collection.len());
        Ok(collection)
    }

    /// Insert an item, rejecting duplicate ids
    pub fn insert(&mut self, item: Item) -> Result<()> {
        if self.by_id.contains_key(&item.id) {
            return Err(ItemDataError::DuplicateId(item.id));
        }
        self.by_id.insert(item.id, self.items.len());
        self.items.push(item);
        Ok(())
    }

    /// Get an item by id
    pub fn get(&self, id: ItemId) -> Option<&Item> {
        self.by_id.get(&id).map(|&idx| &self.items[idx])
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn iter(&self) -> impl Iterator<Item = &Item> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Give up the index and hand back the items in export order
    pub fn into_items(self) -> Vec<Item> {
        self.items
    }

    /// Count how many items have each optional progress section
    pub fn coverage(&self) -> FieldCoverage {
        self.items.iter().fold(
            FieldCoverage {
                total: self.items.len(),
                ..FieldCoverage::default()
            },
            |mut acc, item| {
                if item.assignments.is_some() {
                    acc.with_assignments += 1;
                }
                if item.review_statistics.is_some() {
                    acc.with_review_statistics += 1;
                }
                acc
            },
        )
    }
}

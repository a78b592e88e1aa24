//! In-memory item list owned by the screen.

use crate::item::{Item, ItemId};
use chrono::Utc;

/// Ordered list of items, insertion order preserved.
#[derive(Debug, Clone, Default)]
pub struct ItemStore {
    items: Vec<Item>,
    last_millis: Option<i64>,
}

impl ItemStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `text` as a new item. Whitespace-only text is ignored.
    pub fn add(&mut self, text: &str) -> Option<&Item> {
        self.add_at(text, Utc::now().timestamp_millis())
    }

    /// Like [`ItemStore::add`] with an explicit clock reading.
    ///
    /// Ids stay strictly increasing: a reading at or before the last issued
    /// id is bumped to one past it.
    pub fn add_at(&mut self, text: &str, now_millis: i64) -> Option<&Item> {
        if text.trim().is_empty() {
            tracing::debug!("Ignoring blank item text");
            return None;
        }

        let millis = match self.last_millis {
            Some(last) if now_millis <= last => last + 1,
            _ => now_millis,
        };
        self.last_millis = Some(millis);

        let item = Item::new(millis, text.to_string());
        tracing::debug!("Added item {}", item.id);
        self.items.push(item);
        self.items.last()
    }

    /// Remove the item with `id`. Absent ids leave the list unchanged.
    pub fn remove(&mut self, id: &ItemId) -> Option<Item> {
        let index = self.position(id)?;
        let removed = self.items.remove(index);
        tracing::debug!("Removed item {}", removed.id);
        Some(removed)
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn get(&self, index: usize) -> Option<&Item> {
        self.items.get(index)
    }

    pub fn position(&self, id: &ItemId) -> Option<usize> {
        self.items.iter().position(|item| &item.id == id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Owned copy handed to the export pipeline.
    pub fn snapshot(&self) -> Vec<Item> {
        self.items.clone()
    }
}

//! FileList implementation
//!
//! Ordered `Vec<Item>` plus a value → occurrence count index.

use std::collections::HashMap;
use std::slice;
use std::time::SystemTime;

use crate::config::Config;
use crate::item::Item;

/// Ordered list of `(value, comment)` items with change tracking
///
/// Every mutation updates both the item sequence and the existence index,
/// bumps `last_modified` and sets `changed`.
#[derive(Debug, Clone)]
pub struct FileList {
    pub(super) items: Vec<Item>,
    /// How many stored items carry each value
    pub(super) index: HashMap<String, usize>,
    pub(super) last_modified: SystemTime,
    pub(super) changed: bool,
    pub(super) config: Config,
}

impl FileList {
    /// Create an empty list using the default config
    ///
    /// A fresh list has never been saved, so it starts out changed.
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    /// Create an empty list with a custom config
    pub fn with_config(config: Config) -> Self {
        Self {
            items: Vec::new(),
            index: HashMap::new(),
            last_modified: SystemTime::now(),
            changed: true,
            config,
        }
    }

    // =========================================================================
    // Metadata
    // =========================================================================

    pub fn count(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Time of the last mutation (or of construction)
    pub fn last_modified(&self) -> SystemTime {
        self.last_modified
    }

    /// Whether the list differs from what was last loaded or saved
    pub fn changed(&self) -> bool {
        self.changed
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    // =========================================================================
    // Queries
    // =========================================================================

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn iter(&self) -> slice::Iter<'_, Item> {
        self.items.iter()
    }

    /// First item with `value`, or the empty item
    pub fn get(&self, value: &str) -> Item {
        self.find(value).cloned().unwrap_or_default()
    }

    /// Comment of the first item with `value`, or `""`
    pub fn get_comment(&self, value: &str) -> &str {
        self.find(value).map_or("", |item| item.comment.as_str())
    }

    /// All items whose comment equals `comment`, in list order
    pub fn get_all_with_comment(&self, comment: &str) -> Vec<Item> {
        self.items
            .iter()
            .filter(|item| item.comment == comment)
            .cloned()
            .collect()
    }

    /// O(1) membership test
    pub fn exists(&self, value: &str) -> bool {
        self.index.contains_key(value)
    }

    fn find(&self, value: &str) -> Option<&Item> {
        if !self.exists(value) {
            return None;
        }
        self.items.iter().find(|item| item.value == value)
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    /// Replace every item
    ///
    /// Items whose value is empty or whitespace-only are dropped. The index
    /// is rebuilt.
    pub fn set_items(&mut self, items: Vec<Item>) {
        self.items = items;
        self.items.retain(|item| is_storable(&item.value));
        self.rebuild_index();
        self.touch();
    }

    /// Append unconditionally; duplicates are allowed
    ///
    /// A value that is empty or whitespace-only is ignored. Other values are
    /// stored as given, but only survive a save/load round trip if they have
    /// no surrounding whitespace and contain neither the comment marker nor
    /// a line break: `a//b` reloads as value `a` with comment `b`, and
    /// `x\ny` reloads as two items.
    pub fn add(&mut self, value: impl Into<String>, comment: impl Into<String>) {
        let item = Item::new(value, comment);
        if !is_storable(&item.value) {
            return;
        }
        self.push(item);
        self.touch();
    }

    /// Append unless `value` is already present
    ///
    /// If present, the first match takes the new comment; the list is only
    /// marked changed when the comment actually differs. Accepts the same
    /// values as `add`.
    pub fn add_once(&mut self, value: impl Into<String>, comment: impl Into<String>) {
        let value = value.into();
        let comment = comment.into();
        if !is_storable(&value) {
            return;
        }

        if self.exists(&value) {
            let Some(existing) = self.items.iter_mut().find(|item| item.value == value) else {
                return;
            };
            if existing.comment != comment {
                existing.comment = comment;
                self.touch();
            }
            return;
        }

        self.push(Item { value, comment });
        self.touch();
    }

    /// Remove the first item with `value`; missing values are a no-op
    pub fn remove(&mut self, value: &str) {
        let Some(pos) = self.items.iter().position(|item| item.value == value) else {
            return;
        };
        let removed = self.items.remove(pos);
        self.index_release(&removed.value);
        self.touch();
    }

    // =========================================================================
    // Internal
    // =========================================================================

    /// Append without touching metadata
    pub(super) fn push(&mut self, item: Item) {
        *self.index.entry(item.value.clone()).or_insert(0) += 1;
        self.items.push(item);
    }

    fn index_release(&mut self, value: &str) {
        if let Some(count) = self.index.get_mut(value) {
            *count -= 1;
            if *count == 0 {
                self.index.remove(value);
            }
        }
    }

    fn rebuild_index(&mut self) {
        self.index.clear();
        for item in &self.items {
            *self.index.entry(item.value.clone()).or_insert(0) += 1;
        }
    }

    fn touch(&mut self) {
        self.last_modified = SystemTime::now();
        self.changed = true;
    }
}

/// Values that trim to nothing would load back as blank lines
fn is_storable(value: &str) -> bool {
    !value.trim().is_empty()
}

impl Default for FileList {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> IntoIterator for &'a FileList {
    type Item = &'a Item;
    type IntoIter = slice::Iter<'a, Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

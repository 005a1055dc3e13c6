//! Ordered in-memory item store.
//!
//! # Design
//! `TodoStore` owns a `Vec<TodoItem>` and is its only mutator. Insertion
//! order is the listing order and is never rearranged: `add` appends and
//! `update` overwrites in place. The store carries no lock of its own; the
//! server decides how it is shared.

use crate::error::{Result, StoreError};
use crate::types::{seed_items, TodoItem};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoStore {
    items: Vec<TodoItem>,
}

impl TodoStore {
    /// An empty store.
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// A store holding the three sample items the service boots with.
    pub fn seeded() -> Self {
        Self::from_items(seed_items())
    }

    pub fn from_items(items: Vec<TodoItem>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[TodoItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Items in store order, optionally keeping only those whose `done`
    /// flag equals `done`.
    pub fn list(&self, done: Option<bool>) -> Vec<TodoItem> {
        match done {
            None => self.items.clone(),
            Some(done) => self
                .items
                .iter()
                .filter(|item| item.done == done)
                .cloned()
                .collect(),
        }
    }

    /// Appends `item` unconditionally and returns the whole list.
    pub fn add(&mut self, item: TodoItem) -> &[TodoItem] {
        self.items.push(item);
        &self.items
    }

    /// First item whose title equals `title` exactly.
    pub fn find(&self, title: &str) -> Result<&TodoItem> {
        self.items
            .iter()
            .find(|item| item.title == title)
            .ok_or_else(|| StoreError::not_found(title))
    }

    /// Overwrites the first item titled `title` with `replacement`, keeping
    /// its position, and returns the whole list. A miss leaves the store
    /// untouched.
    pub fn update(&mut self, title: &str, replacement: TodoItem) -> Result<&[TodoItem]> {
        let item = self
            .items
            .iter_mut()
            .find(|item| item.title == title)
            .ok_or_else(|| StoreError::not_found(title))?;
        item.title = replacement.title;
        item.done = replacement.done;
        Ok(&self.items)
    }
}

impl Default for TodoStore {
    fn default() -> Self {
        Self::seeded()
    }
}

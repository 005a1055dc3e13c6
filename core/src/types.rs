//! The todo record and the fixed sample data the service starts with.

use serde::{Deserialize, Serialize};

/// A single todo entry. `title` doubles as the lookup key for updates.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TodoItem {
    pub title: String,
    pub done: bool,
}

impl TodoItem {
    pub fn new(title: impl Into<String>, done: bool) -> Self {
        Self {
            title: title.into(),
            done,
        }
    }
}

/// The three items every fresh store is populated with, in order.
pub fn seed_items() -> Vec<TodoItem> {
    vec![
        TodoItem::new("Start writing TODO list", true),
        TodoItem::new("???", false),
        TodoItem::new("Profit", false),
    ]
}

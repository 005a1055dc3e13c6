//! Wire types for request and response bodies.
//!
//! # Design
//! `TodoItemBody` is the JSON shape clients see and the OpenAPI schema is
//! generated from. It is kept apart from `todo_core::TodoItem` so the domain
//! crate does not depend on the documentation stack; the two convert into
//! each other field for field.

use serde::{Deserialize, Deserializer, Serialize};
use todo_core::TodoItem;
use utoipa::{IntoParams, ToSchema};

/// Todo item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[schema(as = TodoItem, example = json!({"title": "Buy milk", "done": false}))]
pub struct TodoItemBody {
    pub title: String,
    pub done: bool,
}

impl From<TodoItem> for TodoItemBody {
    fn from(item: TodoItem) -> Self {
        Self {
            title: item.title,
            done: item.done,
        }
    }
}

impl From<TodoItemBody> for TodoItem {
    fn from(body: TodoItemBody) -> Self {
        TodoItem::new(body.title, body.done)
    }
}

/// Converts a slice of domain items into the response list.
pub fn to_bodies<'a, I>(items: I) -> Vec<TodoItemBody>
where
    I: IntoIterator<Item = &'a TodoItem>,
{
    items.into_iter().cloned().map(TodoItemBody::from).collect()
}

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListQuery {
    /// Only return items whose `done` flag equals this value.
    /// Accepts `true`/`false` and `1`/`0`, case-insensitively.
    #[serde(default, deserialize_with = "lenient_bool")]
    pub done: Option<bool>,
}

fn lenient_bool<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(raw) = Option::<String>::deserialize(deserializer)? else {
        return Ok(None);
    };
    match raw.to_ascii_lowercase().as_str() {
        "true" | "1" => Ok(Some(true)),
        "false" | "0" => Ok(Some(false)),
        _ => Err(serde::de::Error::custom(format!(
            "expected a boolean (true, false, 1, 0), got `{raw}`"
        ))),
    }
}

/// Uniform error envelope produced for every failed request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[schema(example = json!({"status_code": 404, "detail": "TODO 'X' not found."}))]
pub struct ErrorBody {
    pub status_code: u16,
    pub detail: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extra: Option<serde_json::Value>,
}

//! Request handlers for the three todo operations.
//!
//! Each handler takes the shared store, does one store call under the lock,
//! and answers with the resulting list. Failures are returned as `ApiError`
//! and rendered by its `IntoResponse` impl.

use axum::extract::State;
use axum::Json;

use crate::dto::{to_bodies, ErrorBody, ListQuery, TodoItemBody};
use crate::error::{ApiError, ApiJson, ApiPath, ApiQuery};
use crate::Db;

/// Get Todo Items.
///
/// Returns the whole list in insertion order, or only the items whose
/// `done` flag matches the `done` query parameter.
#[utoipa::path(
    get,
    path = "/",
    tag = "todo",
    params(ListQuery),
    responses(
        (status = 200, description = "Todo items in store order", body = Vec<TodoItemBody>),
        (status = 400, description = "Invalid query string", body = ErrorBody),
    )
)]
pub async fn get_list(
    State(db): State<Db>,
    ApiQuery(query): ApiQuery<ListQuery>,
) -> Json<Vec<TodoItemBody>> {
    let store = db.read().await;
    let items = store.list(query.done);
    tracing::debug!(done = ?query.done, count = items.len(), "listed items");
    Json(to_bodies(&items))
}

/// Add TodoItem.
///
/// Appends the item to the end of the list and returns the updated list.
/// Titles are not checked for uniqueness.
#[utoipa::path(
    post,
    path = "/",
    tag = "todo",
    request_body = TodoItemBody,
    responses(
        (status = 200, description = "Full list including the new item", body = Vec<TodoItemBody>),
        (status = 400, description = "Body is not a valid todo item", body = ErrorBody),
    )
)]
pub async fn add_item(
    State(db): State<Db>,
    ApiJson(data): ApiJson<TodoItemBody>,
) -> Json<Vec<TodoItemBody>> {
    let mut store = db.write().await;
    tracing::info!(title = %data.title, done = data.done, "adding item");
    Json(to_bodies(store.add(data.into())))
}

/// Update TodoItem.
///
/// Overwrites the first item titled `todo_title` with the request body,
/// keeping its position, and returns the updated list.
#[utoipa::path(
    put,
    path = "/{todo_title}",
    tag = "todo",
    params(("todo_title" = String, Path, description = "Exact, case-sensitive title of the item to update")),
    request_body = TodoItemBody,
    responses(
        (status = 200, description = "Full list after the update", body = Vec<TodoItemBody>),
        (status = 404, description = "No item has this title", body = ErrorBody),
        (status = 400, description = "Body is not a valid todo item", body = ErrorBody),
    )
)]
pub async fn update_item(
    State(db): State<Db>,
    ApiPath(todo_title): ApiPath<String>,
    ApiJson(data): ApiJson<TodoItemBody>,
) -> Result<Json<Vec<TodoItemBody>>, ApiError> {
    let mut store = db.write().await;
    let items = store.update(&todo_title, data.into())?;
    tracing::info!(%todo_title, "updated item");
    Ok(Json(to_bodies(items)))
}

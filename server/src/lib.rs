//! In-memory todo list web service.
//!
//! # Overview
//! Serves `GET /`, `POST /` and `PUT /{todo_title}` over a single shared
//! `TodoStore`, plus the OpenAPI document and its Swagger and Scalar pages
//! under `/schema`.
//!
//! # Design
//! - The store sits behind `Arc<RwLock<_>>`; listing takes the read lock,
//!   add and update take the write lock for their single store call.
//! - Wire types live in `dto`, separate from `todo_core::TodoItem`.
//! - All failures, including unknown routes, wrong methods and panics,
//!   are rendered by `ApiError`.

pub mod config;
pub mod docs;
pub mod dto;
pub mod error;
pub mod handlers;

use std::future::Future;
use std::sync::Arc;

use axum::routing::{get, put};
use axum::Router;
use todo_core::TodoStore;
use tokio::net::TcpListener;
use tokio::sync::RwLock;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::trace::TraceLayer;

pub use config::Config;
pub use dto::{ErrorBody, TodoItemBody};
pub use error::ApiError;

pub type Db = Arc<RwLock<TodoStore>>;

/// The service over a freshly seeded store.
pub fn app() -> Router {
    app_with_store(TodoStore::seeded())
}

pub fn app_with_store(store: TodoStore) -> Router {
    let db: Db = Arc::new(RwLock::new(store));
    Router::new()
        .route("/", get(handlers::get_list).post(handlers::add_item))
        .route("/{todo_title}", put(handlers::update_item))
        .with_state(db)
        .merge(docs::router())
        .fallback(error::route_not_found)
        .method_not_allowed_fallback(error::method_not_allowed)
        .layer(CatchPanicLayer::custom(error::panic_response))
        .layer(TraceLayer::new_for_http())
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

/// Like `run`, but stops accepting connections once `signal` resolves.
pub async fn run_with_shutdown<F>(listener: TcpListener, signal: F) -> Result<(), std::io::Error>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, app())
        .with_graceful_shutdown(signal)
        .await
}

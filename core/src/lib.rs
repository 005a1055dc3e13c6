//! Domain core for the in-memory todo service.
//!
//! # Overview
//! Holds the `TodoItem` record, the ordered `TodoStore` that backs every
//! request, and the `StoreError` raised when an update misses. Nothing here
//! knows about HTTP or async; the server crate wraps the store in a lock and
//! maps errors to responses.
//!
//! # Design
//! - `TodoStore` is the only mutator of the item list. `add` and `update`
//!   return the full list afterwards, matching what the service responds with.
//! - Titles are the lookup key but are not unique. Lookups are exact,
//!   case-sensitive, and the first match in insertion order wins.

pub mod error;
pub mod store;
pub mod types;

pub use error::{Result, StoreError};
pub use store::TodoStore;
pub use types::{seed_items, TodoItem};

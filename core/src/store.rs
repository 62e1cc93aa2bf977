//! The data-access seam between handlers and storage.

use async_trait::async_trait;

use crate::error::StoreError;
use crate::types::Todo;

/// Persistent collection of todos.
///
/// Each method is a single statement against the store. Absence is not an
/// error: `find` returns `None` and `update`/`delete` return `false` when no
/// row has the given id.
#[async_trait]
pub trait TodoStore: Send + Sync + 'static {
    /// All todos, most recently created first. Ties on creation time are
    /// broken by descending id.
    async fn list(&self) -> Result<Vec<Todo>, StoreError>;

    /// Insert a new, not yet completed todo and return it with its assigned id.
    async fn insert(&self, title: &str) -> Result<Todo, StoreError>;

    async fn find(&self, id: i64) -> Result<Option<Todo>, StoreError>;

    /// Overwrite `title` and `completed` of the row with `todo.id`.
    async fn update(&self, todo: &Todo) -> Result<bool, StoreError>;

    async fn delete(&self, id: i64) -> Result<bool, StoreError>;

    /// Cheap round-trip used by health checks.
    async fn ping(&self) -> Result<(), StoreError>;
}

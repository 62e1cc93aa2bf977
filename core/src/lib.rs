//! Domain core for the todo service.
//!
//! # Overview
//! Holds everything about todos that does not depend on HTTP or SQL: the
//! record and request types, input validation, the partial-update merge, and
//! the `TodoStore` trait that storage backends implement.
//!
//! # Design
//! - Handlers receive a store as an explicit dependency; there is no global
//!   connection.
//! - `MemoryTodoStore` implements the trait in-process so the HTTP layer can
//!   be tested without a database.
//! - Stores report absence as `None`/`false`; only the caller maps that to a
//!   not-found response.

pub mod error;
pub mod memory;
pub mod store;
pub mod types;

pub use error::{StoreError, ValidationError};
pub use memory::MemoryTodoStore;
pub use store::TodoStore;
pub use types::{CreateTodo, Todo, UpdateTodo};

//! Domain DTOs for the todo service.
//!
//! # Design
//! `Todo` is the wire shape as well as the domain record: `created_at` lives
//! only in storage and is used for ordering, so it never appears here.
//! Request payloads validate themselves before any store is touched.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// A single todo item.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Todo {
    pub id: i64,
    pub title: String,
    pub completed: bool,
}

/// Request payload for creating a new todo.
///
/// A missing `title` deserializes to the empty string so that it is reported
/// the same way as an explicitly empty one.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateTodo {
    #[serde(default)]
    pub title: String,
}

impl CreateTodo {
    /// Return the title to insert, or the reason it cannot be inserted.
    pub fn into_title(self) -> Result<String, ValidationError> {
        if self.title.is_empty() {
            return Err(ValidationError::EmptyTitle);
        }
        Ok(self.title)
    }
}

/// Request payload for updating an existing todo. Only the fields present in
/// the JSON are applied; omitted fields keep their stored values.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateTodo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
}

impl UpdateTodo {
    /// At least one field must be present, and a present title must not be
    /// empty.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.title.is_none() && self.completed.is_none() {
            return Err(ValidationError::NoUpdateFields);
        }
        if self.title.as_deref() == Some("") {
            return Err(ValidationError::EmptyTitle);
        }
        Ok(())
    }

    /// Merge the present fields over `current`.
    pub fn apply_to(self, mut current: Todo) -> Todo {
        if let Some(title) = self.title {
            current.title = title;
        }
        if let Some(completed) = self.completed {
            current.completed = completed;
        }
        current
    }
}

//! In-process `TodoStore` backed by a map behind a tokio `RwLock`.
//!
//! Ids are handed out from a counter that only grows, so id order is creation
//! order and listing is a reverse walk of the map.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::error::StoreError;
use crate::store::TodoStore;
use crate::types::Todo;

#[derive(Debug, Default)]
struct Inner {
    next_id: i64,
    todos: BTreeMap<i64, Todo>,
}

/// Cloning shares the underlying map.
#[derive(Debug, Clone, Default)]
pub struct MemoryTodoStore {
    inner: Arc<RwLock<Inner>>,
}

impl MemoryTodoStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.todos.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl TodoStore for MemoryTodoStore {
    async fn list(&self) -> Result<Vec<Todo>, StoreError> {
        let inner = self.inner.read().await;
        Ok(inner.todos.values().rev().cloned().collect())
    }

    async fn insert(&self, title: &str) -> Result<Todo, StoreError> {
        let mut inner = self.inner.write().await;
        inner.next_id += 1;
        let todo = Todo {
            id: inner.next_id,
            title: title.to_string(),
            completed: false,
        };
        inner.todos.insert(todo.id, todo.clone());
        Ok(todo)
    }

    async fn find(&self, id: i64) -> Result<Option<Todo>, StoreError> {
        Ok(self.inner.read().await.todos.get(&id).cloned())
    }

    async fn update(&self, todo: &Todo) -> Result<bool, StoreError> {
        let mut inner = self.inner.write().await;
        match inner.todos.get_mut(&todo.id) {
            Some(stored) => {
                stored.title.clone_from(&todo.title);
                stored.completed = todo.completed;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, id: i64) -> Result<bool, StoreError> {
        Ok(self.inner.write().await.todos.remove(&id).is_some())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }
}

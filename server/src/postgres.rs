//! PostgreSQL `TodoStore` on a sqlx connection pool.
//!
//! Every operation is one statement on a pooled connection; the connection
//! goes back to the pool when the query future completes or is dropped.

use async_trait::async_trait;
use sqlx::postgres::{PgPool, PgPoolOptions};
use sqlx::FromRow;
use todo_core::{StoreError, Todo, TodoStore};
use tracing::debug;

#[derive(Debug, FromRow)]
struct TodoRow {
    id: i64,
    title: String,
    completed: bool,
}

impl From<TodoRow> for Todo {
    fn from(row: TodoRow) -> Self {
        Todo {
            id: row.id,
            title: row.title,
            completed: row.completed,
        }
    }
}

fn store_error(err: sqlx::Error) -> StoreError {
    StoreError::new(err.to_string())
}

#[derive(Debug, Clone)]
pub struct PgTodoStore {
    pool: PgPool,
}

impl PgTodoStore {
    /// Open a pool and establish one connection, so an unreachable database
    /// fails here rather than on the first request.
    pub async fn connect(url: &str, max_connections: u32) -> Result<Self, sqlx::Error> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .connect(url)
            .await?;
        Ok(Self { pool })
    }

    /// Apply the bundled migrations. Already-applied ones are skipped.
    pub async fn migrate(&self) -> Result<(), sqlx::migrate::MigrateError> {
        sqlx::migrate!("./migrations").run(&self.pool).await
    }
}

#[async_trait]
impl TodoStore for PgTodoStore {
    async fn list(&self) -> Result<Vec<Todo>, StoreError> {
        let rows: Vec<TodoRow> = sqlx::query_as(
            "SELECT id, title, completed FROM todos ORDER BY created_at DESC, id DESC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(store_error)?;
        debug!(count = rows.len(), "listed todos");
        Ok(rows.into_iter().map(Todo::from).collect())
    }

    async fn insert(&self, title: &str) -> Result<Todo, StoreError> {
        let row: TodoRow = sqlx::query_as(
            "INSERT INTO todos (title) VALUES ($1) RETURNING id, title, completed",
        )
        .bind(title)
        .fetch_one(&self.pool)
        .await
        .map_err(store_error)?;
        debug!(id = row.id, "inserted todo");
        Ok(row.into())
    }

    async fn find(&self, id: i64) -> Result<Option<Todo>, StoreError> {
        let row: Option<TodoRow> =
            sqlx::query_as("SELECT id, title, completed FROM todos WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await
                .map_err(store_error)?;
        debug!(id, found = row.is_some(), "looked up todo");
        Ok(row.map(Todo::from))
    }

    async fn update(&self, todo: &Todo) -> Result<bool, StoreError> {
        let result = sqlx::query("UPDATE todos SET title = $1, completed = $2 WHERE id = $3")
            .bind(&todo.title)
            .bind(todo.completed)
            .bind(todo.id)
            .execute(&self.pool)
            .await
            .map_err(store_error)?;
        debug!(id = todo.id, rows = result.rows_affected(), "updated todo");
        Ok(result.rows_affected() > 0)
    }

    async fn delete(&self, id: i64) -> Result<bool, StoreError> {
        let result = sqlx::query("DELETE FROM todos WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(store_error)?;
        debug!(id, rows = result.rows_affected(), "deleted todo");
        Ok(result.rows_affected() > 0)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(store_error)?;
        debug!("pinged database");
        Ok(())
    }
}

use axum::{
    extract::{rejection::JsonRejection, rejection::PathRejection, Path, State},
    http::StatusCode,
    Json,
};
use serde_json::{json, Value};
use todo_core::{CreateTodo, Todo, TodoStore, UpdateTodo};

use crate::error::ApiError;
use crate::AppState;

type ApiResult<T> = Result<T, ApiError>;

fn parse_id(path: Result<Path<i64>, PathRejection>) -> ApiResult<i64> {
    path.map(|Path(id)| id).map_err(|_| ApiError::InvalidId)
}

fn parse_body<T>(body: Result<Json<T>, JsonRejection>) -> ApiResult<T> {
    body.map(|Json(value)| value).map_err(|rejection| {
        tracing::debug!(%rejection, "rejected request body");
        ApiError::InvalidBody
    })
}

pub async fn list_todos<S: TodoStore>(
    State(state): State<AppState<S>>,
) -> ApiResult<Json<Vec<Todo>>> {
    let todos = state
        .store
        .list()
        .await
        .map_err(ApiError::internal("Failed to retrieve todos"))?;
    Ok(Json(todos))
}

pub async fn create_todo<S: TodoStore>(
    State(state): State<AppState<S>>,
    body: Result<Json<CreateTodo>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<Todo>)> {
    let title = parse_body(body)?.into_title()?;
    let todo = state
        .store
        .insert(&title)
        .await
        .map_err(ApiError::internal("Failed to create todo"))?;
    tracing::info!(id = todo.id, "created todo");
    Ok((StatusCode::CREATED, Json(todo)))
}

pub async fn get_todo<S: TodoStore>(
    State(state): State<AppState<S>>,
    path: Result<Path<i64>, PathRejection>,
) -> ApiResult<Json<Todo>> {
    let id = parse_id(path)?;
    state
        .store
        .find(id)
        .await
        .map_err(ApiError::internal("Failed to find todo"))?
        .map(Json)
        .ok_or(ApiError::NotFound)
}

/// Read the current row, merge the present fields over it, write it back.
///
/// The read and the write are separate statements; a concurrent update to the
/// same id between them is overwritten (last writer wins).
pub async fn update_todo<S: TodoStore>(
    State(state): State<AppState<S>>,
    path: Result<Path<i64>, PathRejection>,
    body: Result<Json<UpdateTodo>, JsonRejection>,
) -> ApiResult<Json<Todo>> {
    let id = parse_id(path)?;
    let changes = parse_body(body)?;
    changes.validate()?;

    let current = state
        .store
        .find(id)
        .await
        .map_err(ApiError::internal("Failed to find todo"))?
        .ok_or(ApiError::NotFound)?;

    let merged = changes.apply_to(current);
    let matched = state
        .store
        .update(&merged)
        .await
        .map_err(ApiError::internal("Failed to update todo"))?;
    if !matched {
        // deleted between the read and the write
        return Err(ApiError::NotFound);
    }
    tracing::info!(id, "updated todo");
    Ok(Json(merged))
}

pub async fn delete_todo<S: TodoStore>(
    State(state): State<AppState<S>>,
    path: Result<Path<i64>, PathRejection>,
) -> ApiResult<Json<Value>> {
    let id = parse_id(path)?;
    let deleted = state
        .store
        .delete(id)
        .await
        .map_err(ApiError::internal("Failed to delete todo"))?;
    if !deleted {
        return Err(ApiError::NotFound);
    }
    tracing::info!(id, "deleted todo");
    Ok(Json(json!({ "message": "Todo deleted successfully" })))
}

pub async fn health<S: TodoStore>(
    State(state): State<AppState<S>>,
) -> (StatusCode, Json<Value>) {
    match state.store.ping().await {
        Ok(()) => (StatusCode::OK, Json(json!({ "status": "ok" }))),
        Err(err) => {
            tracing::warn!(error = %err, "health check failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({ "status": "unavailable" })),
            )
        }
    }
}

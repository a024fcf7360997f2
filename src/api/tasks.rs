//! Task resource API endpoints.
//!
//! Provides the CRUD endpoints for the task resource:
//! - List tasks
//! - Create task
//! - Get task by id
//! - Update task by id
//! - Delete task by id

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};

use crate::store::{Task, TaskDraft};

use super::error::ApiError;
use super::routes::AppState;

/// Create task routes.
///
/// Both paths carry a method fallback so that a request with an unbound
/// method gets the 405 plain-text body instead of an empty response.
pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/",
            get(list_tasks)
                .post(create_task)
                .fallback(method_not_allowed),
        )
        .route(
            "/:id",
            get(get_task)
                .put(update_task)
                .delete(delete_task)
                .fallback(method_not_allowed),
        )
}

// ─────────────────────────────────────────────────────────────────────────────
// Handlers
// ─────────────────────────────────────────────────────────────────────────────

/// POST /tasks - Create a new task.
///
/// Any `id` in the body is ignored; the store assigns the id.
async fn create_task(
    State(state): State<Arc<AppState>>,
    body: Result<Json<TaskDraft>, JsonRejection>,
) -> Result<Json<Task>, ApiError> {
    let Json(draft) = body.map_err(|_| ApiError::BadRequest)?;

    let task = state.store.create(draft).await;
    tracing::info!("Created task {} ({})", task.id, task.title);

    Ok(Json(task))
}

/// GET /tasks - List all tasks, in creation order.
async fn list_tasks(State(state): State<Arc<AppState>>) -> Json<Vec<Task>> {
    Json(state.store.list().await)
}

/// GET /tasks/:id - Get a single task.
async fn get_task(
    State(state): State<Arc<AppState>>,
    Path(id): Path<u64>,
) -> Result<Json<Task>, ApiError> {
    state.store.get(id).await.map(Json).ok_or(ApiError::NotFound)
}

/// PUT /tasks/:id - Overwrite a task's title, description, and status.
async fn update_task(
    State(state): State<Arc<AppState>>,
    Path(id): Path<u64>,
    body: Result<Json<TaskDraft>, JsonRejection>,
) -> Result<Json<Task>, ApiError> {
    let Json(draft) = body.map_err(|_| ApiError::BadRequest)?;

    let task = state.store.update(id, draft).await.ok_or(ApiError::NotFound)?;
    tracing::info!("Updated task {}", task.id);

    Ok(Json(task))
}

/// DELETE /tasks/:id - Delete a task.
async fn delete_task(
    State(state): State<Arc<AppState>>,
    Path(id): Path<u64>,
) -> Result<StatusCode, ApiError> {
    if state.store.delete(id).await {
        tracing::info!("Deleted task {}", id);
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::NotFound)
    }
}

/// Fallback for bound paths hit with an unbound method.
async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}

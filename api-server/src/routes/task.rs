//! Task API endpoints
//!
//! REST surface over the task service: list, add, delete, update status,
//! and the filtered/sorted query. Tasks cross the wire as
//! `{id, task, priority, status, due_date}`.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};

use todo_core::task::{DateFilter, FilterSpec, PriorityFilter, SortKey, SortOrder, SortSpec,
    StatusFilter, Task};
use todo_core::Error;

use crate::state::AppState;

// ============================================================================
// Request/Response types
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct DeleteTaskRequest {
    pub id: i64,
}

#[derive(Debug, Deserialize)]
pub struct UpdateStatusRequest {
    pub id: i64,
    pub status: bool,
}

#[derive(Debug, Deserialize, Default)]
pub struct FilterParams {
    #[serde(default)]
    pub priority: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub sort: Option<String>,
    #[serde(default)]
    pub order: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status: &'static str,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

type RouteError = (StatusCode, Json<ErrorResponse>);

fn map_error(error: Error) -> RouteError {
    let status = match &error {
        Error::InvalidInput(_) => StatusCode::BAD_REQUEST,
        Error::TaskNotFound(_) => StatusCode::NOT_FOUND,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    };
    (
        status,
        Json(ErrorResponse {
            error: error.to_string(),
        }),
    )
}

// ============================================================================
// Handlers
// ============================================================================

/// GET /api/tasks - List all tasks, as stored
async fn list_tasks(State(state): State<AppState>) -> Result<Json<Vec<Task>>, RouteError> {
    let tasks = state.service().get_all_tasks().await.map_err(map_error)?;
    Ok(Json(tasks))
}

/// POST /api/tasks/add - Create a new task
async fn add_task(
    State(state): State<AppState>,
    Json(task): Json<Task>,
) -> Result<(StatusCode, Json<Task>), RouteError> {
    let created = state.service().add_task(task).await.map_err(map_error)?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// POST /api/tasks/delete - Delete a task by id
async fn delete_task(
    State(state): State<AppState>,
    Json(req): Json<DeleteTaskRequest>,
) -> Result<Json<StatusResponse>, RouteError> {
    state.service().delete_task(req.id).await.map_err(map_error)?;
    Ok(Json(StatusResponse { status: "deleted" }))
}

/// POST /api/tasks/update - Set a task's completion flag
async fn update_status(
    State(state): State<AppState>,
    Json(req): Json<UpdateStatusRequest>,
) -> Result<Json<StatusResponse>, RouteError> {
    state
        .service()
        .update_status(req.id, req.status)
        .await
        .map_err(map_error)?;
    Ok(Json(StatusResponse { status: "updated" }))
}

/// GET /api/tasks/filter - Filtered and sorted task list
async fn filter_tasks(
    State(state): State<AppState>,
    Query(params): Query<FilterParams>,
) -> Result<Json<Vec<Task>>, RouteError> {
    let filter = FilterSpec {
        priority: PriorityFilter::parse(params.priority.as_deref().unwrap_or(""))
            .map_err(map_error)?,
        status: StatusFilter::parse(params.status.as_deref().unwrap_or(""))
            .map_err(map_error)?,
        date: DateFilter::parse(params.date.as_deref().unwrap_or("")).map_err(map_error)?,
    };
    let sort = SortSpec {
        key: SortKey::parse(params.sort.as_deref().unwrap_or("")).map_err(map_error)?,
        order: SortOrder::parse(params.order.as_deref().unwrap_or("")).map_err(map_error)?,
    };

    let tasks = state.service().query(&filter, &sort).await.map_err(map_error)?;
    Ok(Json(tasks))
}

// ============================================================================
// Router
// ============================================================================

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/tasks", get(list_tasks))
        .route("/api/tasks/add", post(add_task))
        .route("/api/tasks/delete", post(delete_task))
        .route("/api/tasks/update", post(update_status))
        .route("/api/tasks/filter", get(filter_tasks))
}

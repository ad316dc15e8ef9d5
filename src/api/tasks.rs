use super::error::ApiError;
use super::{blocking, AppState};
use crate::libs::messages::Message;
use crate::libs::task::{CreateTaskParams, ListTasksParams, ListTasksResponse, Task, TaskFilter, UpdateTaskParams};
use crate::msg_debug;
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Query, State};
use axum::Json;

/// `POST /tasks`
pub async fn create_task(State(state): State<AppState>, payload: Result<Json<CreateTaskParams>, JsonRejection>) -> Result<Json<Task>, ApiError> {
    let Json(params) = payload?;
    let tasks = state.tasks.clone();

    let task = blocking(move || tasks.create(params.goal_id, &params.title)).await?;
    msg_debug!(Message::TaskCreated {
        id: task.id,
        goal_id: task.goal_id,
    });

    Ok(Json(task))
}

/// `GET /tasks?goal_id=N`
pub async fn list_tasks(State(state): State<AppState>, query: Result<Query<ListTasksParams>, QueryRejection>) -> Result<Json<ListTasksResponse>, ApiError> {
    let Query(params) = query?;
    fetch(state, TaskFilter::ByGoal(params.goal_id)).await
}

/// `GET /tasks/all`
pub async fn list_all_tasks(State(state): State<AppState>) -> Result<Json<ListTasksResponse>, ApiError> {
    fetch(state, TaskFilter::All).await
}

/// `GET /tasks/incomplete`
pub async fn list_incomplete_tasks(State(state): State<AppState>) -> Result<Json<ListTasksResponse>, ApiError> {
    fetch(state, TaskFilter::Incomplete).await
}

/// `PATCH /tasks/update`
pub async fn update_task(State(state): State<AppState>, payload: Result<Json<UpdateTaskParams>, JsonRejection>) -> Result<Json<Task>, ApiError> {
    let Json(params) = payload?;
    let tasks = state.tasks.clone();

    let task = blocking(move || tasks.update_completion(params.task_id, params.completed)).await?;
    msg_debug!(Message::TaskCompletionUpdated {
        id: task.id,
        completed: task.completed,
    });

    Ok(Json(task))
}

async fn fetch(state: AppState, filter: TaskFilter) -> Result<Json<ListTasksResponse>, ApiError> {
    let tasks = state.tasks.clone();
    let tasks = blocking(move || tasks.fetch(filter)).await?;

    Ok(Json(ListTasksResponse { tasks }))
}

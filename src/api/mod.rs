//! HTTP surface of the goal and task stores.
//!
//! Every endpoint is public and speaks JSON:
//!
//! | method  | path                | body / query              | response            |
//! |---------|---------------------|---------------------------|---------------------|
//! | `POST`  | `/goals`            | `{title}`                 | `Goal`              |
//! | `GET`   | `/goals`            |                           | `{goals: [Goal]}`   |
//! | `GET`   | `/goals/{id}`       |                           | `{goal: Goal}`      |
//! | `POST`  | `/tasks`            | `{goal_id, title}`        | `Task`              |
//! | `GET`   | `/tasks`            | `?goal_id=N`              | `{tasks: [Task]}`   |
//! | `GET`   | `/tasks/all`        |                           | `{tasks: [Task]}`   |
//! | `GET`   | `/tasks/incomplete` |                           | `{tasks: [Task]}`   |
//! | `PATCH` | `/tasks/update`     | `{taskId, completed}`     | `Task`              |
//! | `GET`   | `/health`           |                           | `{status, ...}`     |
//!
//! Store calls are synchronous rusqlite work and run on the blocking pool.

pub mod error;
pub mod goals;
pub mod health;
pub mod tasks;

use crate::db::goals::Goals;
use crate::db::tasks::Tasks;
use crate::libs::error::StoreError;
use crate::libs::messages::Message;
use crate::{msg_info, msg_success};
use axum::routing::{get, patch, post};
use axum::Router;
use error::ApiError;
use std::future::Future;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub goals: Goals,
    pub tasks: Tasks,
}

impl AppState {
    pub fn new(goals: Goals, tasks: Tasks) -> Self {
        AppState { goals, tasks }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health))
        .route("/goals", post(goals::create_goal).get(goals::list_goals))
        .route("/goals/{id}", get(goals::get_goal))
        .route("/tasks", post(tasks::create_task).get(tasks::list_tasks))
        .route("/tasks/all", get(tasks::list_all_tasks))
        .route("/tasks/incomplete", get(tasks::list_incomplete_tasks))
        .route("/tasks/update", patch(tasks::update_task))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Serves the API on `listener` until `shutdown` resolves.
///
/// In-flight requests are allowed to finish before this returns.
pub async fn serve<F>(listener: TcpListener, state: AppState, shutdown: F) -> anyhow::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let addr = listener.local_addr()?;
    msg_info!(Message::ServerListening(addr.to_string()));

    axum::serve(listener, router(state)).with_graceful_shutdown(shutdown).await?;

    msg_success!(Message::ServerStopped);
    Ok(())
}

/// Runs a store call on the blocking pool.
async fn blocking<T, F>(call: F) -> Result<T, ApiError>
where
    F: FnOnce() -> Result<T, StoreError> + Send + 'static,
    T: Send + 'static,
{
    let result = tokio::task::spawn_blocking(call).await?;
    Ok(result?)
}

use super::error::ApiError;
use super::{blocking, AppState};
use crate::libs::goal::{CreateGoalParams, Goal, GoalResponse, ListGoalsResponse};
use crate::libs::messages::Message;
use crate::msg_debug;
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::Json;

/// `POST /goals`
pub async fn create_goal(State(state): State<AppState>, payload: Result<Json<CreateGoalParams>, JsonRejection>) -> Result<Json<Goal>, ApiError> {
    let Json(params) = payload?;
    let goals = state.goals.clone();

    let goal = blocking(move || goals.create(&params.title)).await?;
    msg_debug!(Message::GoalCreated(goal.id));

    Ok(Json(goal))
}

/// `GET /goals`
pub async fn list_goals(State(state): State<AppState>) -> Result<Json<ListGoalsResponse>, ApiError> {
    let goals = state.goals.clone();
    let goals = blocking(move || goals.list()).await?;

    Ok(Json(ListGoalsResponse { goals }))
}

/// `GET /goals/{id}`
pub async fn get_goal(State(state): State<AppState>, id: Result<Path<i64>, PathRejection>) -> Result<Json<GoalResponse>, ApiError> {
    let Path(id) = id?;
    let goals = state.goals.clone();
    let goal = blocking(move || goals.get(id)).await?;

    Ok(Json(GoalResponse { goal }))
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A top-level objective. Immutable once created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Goal {
    pub id: i64,
    pub title: String,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

/// Body of `POST /goals`. A missing title is stored as empty.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateGoalParams {
    #[serde(default)]
    pub title: String,
}

/// Body of `GET /goals`. `goals` is always present, empty when there are none.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListGoalsResponse {
    pub goals: Vec<Goal>,
}

/// Body of `GET /goals/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoalResponse {
    pub goal: Goal,
}

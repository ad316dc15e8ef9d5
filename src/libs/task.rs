use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An actionable item belonging to exactly one [`Goal`](super::goal::Goal).
///
/// `completed` starts out `false` and is only ever changed by a full
/// replace through the completion update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: i64,
    pub goal_id: i64,
    pub title: String,
    pub completed: bool,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

// Request fields that are absent take their zero value; only malformed
// input or a wrong type is rejected.

/// Body of `POST /tasks`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTaskParams {
    #[serde(default)]
    pub goal_id: i64,
    #[serde(default)]
    pub title: String,
}

/// Query of `GET /tasks`. Without `goal_id` nothing matches.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListTasksParams {
    #[serde(default)]
    pub goal_id: i64,
}

/// Body of `PATCH /tasks/update`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateTaskParams {
    #[serde(rename = "taskId", default)]
    pub task_id: i64,
    #[serde(default)]
    pub completed: bool,
}

/// Body of every task listing. `tasks` is never absent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListTasksResponse {
    pub tasks: Vec<Task>,
}

/// Which tasks a listing should return.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskFilter {
    All,
    ByGoal(i64),
    Incomplete,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn task_uses_wire_field_names() {
        let task = Task {
            id: 1,
            goal_id: 3,
            title: "Read book".to_string(),
            completed: false,
            created_at: Utc.with_ymd_and_hms(2025, 3, 1, 9, 0, 0).unwrap(),
        };
        let json = serde_json::to_value(&task).unwrap();
        assert_eq!(json["goal_id"], 3);
        assert_eq!(json["completed"], false);
        assert!(json.get("createdAt").is_some());
        assert!(json.get("created_at").is_none());
    }

    #[test]
    fn missing_request_fields_take_zero_values() {
        let params: UpdateTaskParams = serde_json::from_str(r#"{"taskId": 1}"#).unwrap();
        assert_eq!(params.task_id, 1);
        assert!(!params.completed);

        let params: CreateTaskParams = serde_json::from_str("{}").unwrap();
        assert_eq!((params.goal_id, params.title.as_str()), (0, ""));
    }

    #[test]
    fn update_params_read_camel_case_task_id() {
        let params: UpdateTaskParams = serde_json::from_str(r#"{"taskId": 4, "completed": true}"#).unwrap();
        assert_eq!(params.task_id, 4);
        assert!(params.completed);
    }
}

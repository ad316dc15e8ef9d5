//! JSON error responses.
//!
//! Every failed request answers with `{"code": ..., "message": ...}`:
//!
//! | code               | status | cause                                        |
//! |--------------------|--------|----------------------------------------------|
//! | `not_found`        | 404    | update or lookup of an id that does not exist |
//! | `invalid_argument` | 400    | malformed JSON body, query or path            |
//! | `internal`         | 500    | storage failure, including unknown `goal_id`  |

use crate::libs::error::StoreError;
use crate::libs::messages::Message;
use crate::{msg_error, msg_warning};
use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use tokio::task::JoinError;

#[derive(Debug)]
pub enum ApiError {
    NotFound(String),
    InvalidArgument(String),
    Internal(String),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}

impl ApiError {
    pub fn code(&self) -> &'static str {
        match self {
            ApiError::NotFound(_) => "not_found",
            ApiError::InvalidArgument(_) => "invalid_argument",
            ApiError::Internal(_) => "internal",
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::InvalidArgument(_) => StatusCode::BAD_REQUEST,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn message(&self) -> &str {
        match self {
            ApiError::NotFound(message) | ApiError::InvalidArgument(message) | ApiError::Internal(message) => message,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            ApiError::Internal(message) => msg_error!(Message::RequestFailed(message.clone())),
            ApiError::InvalidArgument(message) => msg_warning!(Message::InvalidRequest(message.clone())),
            ApiError::NotFound(_) => {}
        }

        let body = ErrorBody {
            code: self.code().to_string(),
            message: self.message().to_string(),
        };
        (self.status(), Json(body)).into_response()
    }
}

impl From<StoreError> for ApiError {
    fn from(error: StoreError) -> Self {
        match error {
            StoreError::NotFound { .. } => ApiError::NotFound(error.to_string()),
            StoreError::Storage(_) => ApiError::Internal(error.to_string()),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::InvalidArgument(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::InvalidArgument(rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::InvalidArgument(rejection.body_text())
    }
}

impl From<JoinError> for ApiError {
    fn from(error: JoinError) -> Self {
        ApiError::Internal(Message::BlockingTaskFailed(error.to_string()).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_not_found_maps_to_404() {
        let error = ApiError::from(StoreError::NotFound { entity: "task", id: 9 });
        assert_eq!(error.status(), StatusCode::NOT_FOUND);
        assert_eq!(error.code(), "not_found");
    }

    #[test]
    fn storage_failure_maps_to_500() {
        let error = ApiError::from(StoreError::Storage(rusqlite::Error::InvalidQuery));
        assert_eq!(error.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(error.code(), "internal");
    }
}

//! Error types shared by the goal and task stores.
//!
//! Store operations distinguish exactly two failure modes: the addressed
//! record does not exist, or the statement could not be executed at all.
//! Callers (the HTTP layer in particular) rely on that split to tell a bad
//! id apart from an unavailable database.

use thiserror::Error;

/// Failure of a single store operation.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The statement ran but matched no row for the given id.
    #[error("{entity} with id {id} not found")]
    NotFound { entity: &'static str, id: i64 },

    /// Any failure executing a statement: connectivity, constraint
    /// violations (including an unknown `goal_id`), or row decoding.
    #[error("storage error: {0}")]
    Storage(#[from] rusqlite::Error),
}

impl StoreError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::NotFound { .. })
    }
}

/// Maps "no row returned" to [`StoreError::NotFound`] for the given entity.
///
/// Every other rusqlite error stays a [`StoreError::Storage`].
pub fn not_found_or_storage(entity: &'static str, id: i64) -> impl FnOnce(rusqlite::Error) -> StoreError {
    move |error| match error {
        rusqlite::Error::QueryReturnedNoRows => StoreError::NotFound { entity, id },
        other => StoreError::Storage(other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_rows_becomes_not_found() {
        let error = not_found_or_storage("task", 7)(rusqlite::Error::QueryReturnedNoRows);
        assert!(error.is_not_found());
        assert_eq!(error.to_string(), "task with id 7 not found");
    }

    #[test]
    fn other_errors_stay_storage() {
        let error = not_found_or_storage("task", 7)(rusqlite::Error::InvalidQuery);
        assert!(matches!(error, StoreError::Storage(_)));
    }
}

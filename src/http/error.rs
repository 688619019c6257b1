//! HTTP error handling and response types.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::db::repository::RepositoryError;

/// API error response body.
///
/// The error contract is intentionally loose: some endpoints reply with a
/// `message`, the list endpoint with only an `error` field, and registration
/// failures carry both. Absent fields are omitted from the JSON output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Human-readable error message
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Failure detail, where the endpoint exposes one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ApiError {
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
            error: None,
        }
    }

    pub fn with_error(mut self, error: impl Into<String>) -> Self {
        self.error = Some(error.into());
        self
    }

    pub fn error_only(error: impl Into<String>) -> Self {
        Self {
            message: None,
            error: Some(error.into()),
        }
    }
}

/// Application error type for HTTP handlers.
#[derive(Debug)]
pub enum AppError {
    /// Registration failed (validation, duplicate roll number, or storage fault)
    Registration(String),
    /// Listing students failed
    ListFailed,
    /// No student matches the requested roll number
    StudentNotFound,
    /// Contact update failed for a reason other than a missing student
    ContactUpdateFailed,
    /// Deletion failed for a reason other than a missing student
    RemovalFailed,
}

impl AppError {
    /// Every registration failure collapses to a 400 carrying the detail.
    pub fn registration(err: RepositoryError) -> Self {
        AppError::Registration(err.message().to_string())
    }

    /// Classify a contact-update failure: a missing student is a 404,
    /// anything else a 500.
    pub fn contact_update(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound { .. } => AppError::StudentNotFound,
            _ => AppError::ContactUpdateFailed,
        }
    }

    /// Classify a deletion failure: a missing student is a 404,
    /// anything else a 500.
    pub fn removal(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound { .. } => AppError::StudentNotFound,
            _ => AppError::RemovalFailed,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error) = match self {
            AppError::Registration(detail) => (
                StatusCode::BAD_REQUEST,
                ApiError::message("Error registering student").with_error(detail),
            ),
            AppError::ListFailed => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiError::error_only("Failed to fetch students"),
            ),
            AppError::StudentNotFound => (
                StatusCode::NOT_FOUND,
                ApiError::message("Student not found"),
            ),
            AppError::ContactUpdateFailed => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiError::message("Error updating student contact"),
            ),
            AppError::RemovalFailed => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiError::message("Error deleting student"),
            ),
        };

        (status, Json(error)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_skips_absent_fields() {
        let body = serde_json::to_value(ApiError::message("Student not found")).unwrap();
        assert_eq!(body, serde_json::json!({ "message": "Student not found" }));

        let body = serde_json::to_value(ApiError::error_only("Failed to fetch students")).unwrap();
        assert_eq!(body, serde_json::json!({ "error": "Failed to fetch students" }));
    }

    #[test]
    fn test_api_error_with_both_fields() {
        let body = serde_json::to_value(
            ApiError::message("Error registering student").with_error("duplicate roll number"),
        )
        .unwrap();
        assert_eq!(
            body,
            serde_json::json!({
                "message": "Error registering student",
                "error": "duplicate roll number",
            })
        );
    }

    #[test]
    fn test_contact_update_classifies_not_found() {
        let err = RepositoryError::not_found("Student with roll number 'R9' not found");
        assert!(matches!(
            AppError::contact_update(err),
            AppError::StudentNotFound
        ));

        let err = RepositoryError::connection("pool exhausted");
        assert!(matches!(
            AppError::contact_update(err),
            AppError::ContactUpdateFailed
        ));
    }

    #[test]
    fn test_removal_classifies_not_found() {
        let err = RepositoryError::not_found("Student with roll number 'R9' not found");
        assert!(matches!(AppError::removal(err), AppError::StudentNotFound));

        let err = RepositoryError::query("relation does not exist");
        assert!(matches!(AppError::removal(err), AppError::RemovalFailed));
    }

    #[test]
    fn test_registration_keeps_failure_detail() {
        let err = RepositoryError::validation("firstName is required");
        match AppError::registration(err) {
            AppError::Registration(detail) => {
                assert_eq!(detail, "firstName is required");
            }
            other => panic!("expected Registration, got {:?}", other),
        }
    }
}

//! HTTP handlers for the REST API.
//!
//! Each handler corresponds to an API endpoint and delegates to the
//! service layer for validation and storage access.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use super::dto::{HealthResponse, MessageResponse, RegisterStudentRequest, UpdateContactRequest};
use super::error::AppError;
use super::state::AppState;
use crate::db::services as db_services;
use crate::models::Student;

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

// =============================================================================
// Health Check
// =============================================================================

/// GET /health
///
/// Health check endpoint to verify the service is running and the storage
/// backend is reachable.
pub async fn health_check(State(state): State<AppState>) -> HandlerResult<HealthResponse> {
    let db_status = match db_services::health_check(state.repository.as_ref()).await {
        Ok(true) => "connected".to_string(),
        Ok(false) => "disconnected".to_string(),
        Err(e) => format!("error: {}", e),
    };

    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        database: db_status,
    }))
}

// =============================================================================
// Student CRUD
// =============================================================================

/// POST /api/students
///
/// Register a new student. Any failure, whether a validation error, a
/// duplicate roll number, or a storage fault, is reported as a 400 with
/// the failure detail in the `error` field.
pub async fn register_student(
    State(state): State<AppState>,
    Json(request): Json<RegisterStudentRequest>,
) -> Result<(StatusCode, Json<Student>), AppError> {
    let student =
        db_services::register_student(state.repository.as_ref(), &request.into_new_student())
            .await
            .map_err(AppError::registration)?;

    Ok((StatusCode::CREATED, Json(student)))
}

/// GET /api/students
///
/// List all registered students.
pub async fn list_students(State(state): State<AppState>) -> HandlerResult<Vec<Student>> {
    let students = db_services::list_students(state.repository.as_ref())
        .await
        .map_err(|_| AppError::ListFailed)?;

    Ok(Json(students))
}

/// PUT /api/students/{roll_no}
///
/// Update the contact number of the student with the given roll number.
pub async fn update_contact_number(
    State(state): State<AppState>,
    Path(roll_no): Path<String>,
    Json(request): Json<UpdateContactRequest>,
) -> HandlerResult<Student> {
    let student = db_services::update_contact_number(
        state.repository.as_ref(),
        &roll_no,
        &request.contact_number,
    )
    .await
    .map_err(AppError::contact_update)?;

    Ok(Json(student))
}

/// DELETE /api/students/{roll_no}
///
/// Delete the student with the given roll number.
pub async fn remove_student(
    State(state): State<AppState>,
    Path(roll_no): Path<String>,
) -> HandlerResult<MessageResponse> {
    db_services::remove_student(state.repository.as_ref(), &roll_no)
        .await
        .map_err(AppError::removal)?;

    Ok(Json(MessageResponse {
        message: "Student deleted successfully".to_string(),
    }))
}

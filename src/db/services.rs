//! High-level database service layer.
//!
//! This module provides repository-agnostic operations that work with any
//! implementation of [`StudentRepository`]. Cross-cutting concerns that must
//! behave the same regardless of the storage backend live here, which for
//! this service means payload validation before insert and operation logging.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │  HTTP Layer (axum handlers)                             │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼─────────────────────────────────────┐
//! │  Service Layer (services.rs)                            │
//! │  - Payload validation                                   │
//! │  - Operation logging                                    │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼─────────────────────────────────────┐
//! │  Repository Trait (repository/) - Abstract Interface    │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//!     ┌───────────────┴────────────────┐
//!     │                                │
//! ┌───▼──────────────┐     ┌───────────▼─────────────┐
//! │ Postgres (Diesel)│     │ Local Repository        │
//! │                  │     │ (in-memory)             │
//! └──────────────────┘     └─────────────────────────┘
//! ```

use log::{info, warn};

use super::repository::{RepositoryError, RepositoryResult, StudentRepository};
use crate::models::{NewStudent, Student};

// ==================== Health & Connection ====================

/// Check if the database connection is healthy.
///
/// This is a simple pass-through to the repository's health check.
///
/// # Arguments
/// * `repo` - Repository implementation
///
/// # Returns
/// * `Ok(true)` if connection is healthy
/// * `Err` if check fails
pub async fn health_check<R: StudentRepository + ?Sized>(repo: &R) -> RepositoryResult<bool> {
    repo.health_check().await
}

// ==================== Student Operations ====================

/// Register a new student.
///
/// The payload is validated before the insert so that incomplete records
/// never reach the storage backend. Roll number uniqueness is enforced by
/// the repository itself.
///
/// # Arguments
/// * `repo` - Repository implementation
/// * `student` - The insert payload
///
/// # Returns
/// * `Ok(Student)` - The persisted record including its assigned id
/// * `Err` if validation or the insert fails
pub async fn register_student<R: StudentRepository + ?Sized>(
    repo: &R,
    student: &NewStudent,
) -> RepositoryResult<Student> {
    info!(
        "Service layer: registering student with roll number '{}'",
        student.roll_no
    );

    if let Err(message) = student.validate() {
        warn!("Service layer: rejected student registration: {}", message);
        return Err(RepositoryError::validation(message));
    }

    repo.insert_student(student).await
}

/// List every registered student.
///
/// # Arguments
/// * `repo` - Repository implementation
///
/// # Returns
/// * `Ok(Vec<Student>)` - All records; ordering is not contractual
/// * `Err` if the fetch fails
pub async fn list_students<R: StudentRepository + ?Sized>(
    repo: &R,
) -> RepositoryResult<Vec<Student>> {
    repo.list_students().await
}

/// Replace the contact number of the student with the given roll number.
///
/// # Arguments
/// * `repo` - Repository implementation
/// * `roll_no` - Roll number of the record to update
/// * `contact_number` - Replacement contact number
///
/// # Returns
/// * `Ok(Student)` - The updated record
/// * `Err` if no record matches or the update fails
pub async fn update_contact_number<R: StudentRepository + ?Sized>(
    repo: &R,
    roll_no: &str,
    contact_number: &str,
) -> RepositoryResult<Student> {
    info!(
        "Service layer: updating contact number for roll number '{}'",
        roll_no
    );

    repo.update_contact_number(roll_no, contact_number).await
}

/// Remove the student with the given roll number.
///
/// # Arguments
/// * `repo` - Repository implementation
/// * `roll_no` - Roll number of the record to delete
///
/// # Returns
/// * `Ok(Student)` - The removed record
/// * `Err` if no record matches or the delete fails
pub async fn remove_student<R: StudentRepository + ?Sized>(
    repo: &R,
    roll_no: &str,
) -> RepositoryResult<Student> {
    info!(
        "Service layer: removing student with roll number '{}'",
        roll_no
    );

    repo.delete_student(roll_no).await
}

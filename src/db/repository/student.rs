//! Core student repository trait for CRUD operations.
//!
//! This trait defines the persistence operations backing the HTTP API:
//! insert, find-all, find-one-and-update, and find-one-and-delete, all
//! addressed by roll number.

use async_trait::async_trait;

use super::error::RepositoryResult;
use crate::models::{NewStudent, Student};

/// Repository trait for student record operations.
///
/// Records are addressed externally by their unique roll number; the
/// storage-assigned id only travels inside returned records. Uniqueness of
/// the roll number is enforced by the implementation, not by callers.
///
/// # Thread Safety
/// Implementations must be `Send + Sync` to work with async Rust.
#[async_trait]
pub trait StudentRepository: Send + Sync {
    // ==================== Health & Connection ====================

    /// Check if the database connection is healthy.
    ///
    /// # Returns
    /// - `Ok(true)` if connection is healthy
    /// - `Ok(false)` if connection is unhealthy but no error occurred
    /// - `Err(RepositoryError)` if an error occurred during the check
    async fn health_check(&self) -> RepositoryResult<bool>;

    // ==================== Student Operations ====================

    /// Persist a new student record.
    ///
    /// # Arguments
    /// * `student` - The insert payload; the id is assigned by storage
    ///
    /// # Returns
    /// * `Ok(Student)` - The persisted record including its assigned id
    /// * `Err(RepositoryError::Conflict)` - If the roll number already exists
    /// * `Err(RepositoryError)` - If the operation fails
    async fn insert_student(&self, student: &NewStudent) -> RepositoryResult<Student>;

    /// List every persisted student record.
    ///
    /// # Returns
    /// * `Ok(Vec<Student>)` - All records; ordering is not contractual
    /// * `Err(RepositoryError)` - If the operation fails
    async fn list_students(&self) -> RepositoryResult<Vec<Student>>;

    /// Replace the contact number of the record with the given roll number.
    ///
    /// Only `contact_number` changes; every other field is left untouched.
    ///
    /// # Arguments
    /// * `roll_no` - Roll number of the record to update
    /// * `contact_number` - Replacement contact number
    ///
    /// # Returns
    /// * `Ok(Student)` - The updated record
    /// * `Err(RepositoryError::NotFound)` - If no record matches the roll number
    /// * `Err(RepositoryError)` - If the operation fails
    async fn update_contact_number(
        &self,
        roll_no: &str,
        contact_number: &str,
    ) -> RepositoryResult<Student>;

    /// Remove the record with the given roll number.
    ///
    /// # Arguments
    /// * `roll_no` - Roll number of the record to delete
    ///
    /// # Returns
    /// * `Ok(Student)` - The removed record
    /// * `Err(RepositoryError::NotFound)` - If no record matches the roll number
    /// * `Err(RepositoryError)` - If the operation fails
    async fn delete_student(&self, roll_no: &str) -> RepositoryResult<Student>;
}

//! Data Transfer Objects for the HTTP API.
//!
//! These DTOs are used for request/response serialization in the REST API.
//! Student records themselves already derive Serialize/Deserialize and are
//! returned directly from handlers.

use serde::{Deserialize, Serialize};

use crate::models::NewStudent;

/// Request body for registering a new student.
///
/// Every field is optional at the parsing stage so that incomplete payloads
/// reach the validation step and produce a field-by-field error message
/// instead of a bare deserialization failure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterStudentRequest {
    /// Student's first name
    #[serde(default)]
    pub first_name: Option<String>,
    /// Student's last name
    #[serde(default)]
    pub last_name: Option<String>,
    /// Unique roll number identifying the student
    #[serde(default)]
    pub roll_no: Option<String>,
    /// Password, stored as provided
    #[serde(default)]
    pub password: Option<String>,
    /// Contact phone number
    #[serde(default)]
    pub contact_number: Option<String>,
}

impl RegisterStudentRequest {
    /// Collapse absent fields to empty strings; validation reports them
    /// as missing alongside fields that were present but blank.
    pub fn into_new_student(self) -> NewStudent {
        NewStudent {
            first_name: self.first_name.unwrap_or_default(),
            last_name: self.last_name.unwrap_or_default(),
            roll_no: self.roll_no.unwrap_or_default(),
            password: self.password.unwrap_or_default(),
            contact_number: self.contact_number.unwrap_or_default(),
        }
    }
}

/// Request body for updating a student's contact number.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateContactRequest {
    /// New contact number for the student
    pub contact_number: String,
}

/// Simple message response used by the delete endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Message about the operation
    pub message: String,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status of the service
    pub status: String,
    /// Database connection status
    pub database: String,
}

//! Student record types.
//!
//! The wire format uses camelCase member names (`firstName`, `rollNo`, ...)
//! while the Rust structs stay snake_case. `roll_no` is the externally-facing
//! identifier and is unique across the registry; `id` is assigned by storage.

use serde::{Deserialize, Serialize};

/// Student identifier assigned by the persistence layer.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct StudentId(pub i64);

impl StudentId {
    pub fn new(value: i64) -> Self {
        StudentId(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for StudentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A persisted student record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    /// Storage-assigned identifier
    pub id: StudentId,
    pub first_name: String,
    pub last_name: String,
    /// Unique roll number used to address the record
    pub roll_no: String,
    pub password: String,
    pub contact_number: String,
}

/// Payload for registering a new student. The id is assigned on insert.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewStudent {
    pub first_name: String,
    pub last_name: String,
    pub roll_no: String,
    pub password: String,
    pub contact_number: String,
}

impl NewStudent {
    /// Check that every field is present and non-empty.
    ///
    /// # Returns
    /// * `Ok(())` if the payload is complete
    /// * `Err(String)` naming every missing or empty field by its wire name
    pub fn validate(&self) -> Result<(), String> {
        let mut missing = Vec::new();

        if self.first_name.trim().is_empty() {
            missing.push("firstName");
        }
        if self.last_name.trim().is_empty() {
            missing.push("lastName");
        }
        if self.roll_no.trim().is_empty() {
            missing.push("rollNo");
        }
        if self.password.is_empty() {
            missing.push("password");
        }
        if self.contact_number.trim().is_empty() {
            missing.push("contactNumber");
        }

        if missing.is_empty() {
            Ok(())
        } else {
            Err(format!("{} is required", missing.join(", ")))
        }
    }

    /// Build the persisted record once storage has assigned an id.
    pub fn into_student(self, id: StudentId) -> Student {
        Student {
            id,
            first_name: self.first_name,
            last_name: self.last_name,
            roll_no: self.roll_no,
            password: self.password,
            contact_number: self.contact_number,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> NewStudent {
        NewStudent {
            first_name: "Ann".to_string(),
            last_name: "Lee".to_string(),
            roll_no: "R1".to_string(),
            password: "x".to_string(),
            contact_number: "111".to_string(),
        }
    }

    #[test]
    fn test_student_id_new_and_value() {
        let id = StudentId::new(42);
        assert_eq!(id.value(), 42);
        assert_eq!(id, StudentId(42));
        assert_eq!(format!("{}", id), "42");
    }

    #[test]
    fn test_student_id_ordering() {
        assert!(StudentId(1) < StudentId(2));
        assert_eq!(StudentId(5).max(StudentId(3)), StudentId(5));
    }

    #[test]
    fn test_validate_accepts_complete_payload() {
        assert!(sample().validate().is_ok());
    }

    #[test]
    fn test_validate_names_every_missing_field() {
        let student = NewStudent {
            first_name: String::new(),
            last_name: "Lee".to_string(),
            roll_no: String::new(),
            password: String::new(),
            contact_number: "111".to_string(),
        };

        let err = student.validate().unwrap_err();
        assert_eq!(err, "firstName, rollNo, password is required");
    }

    #[test]
    fn test_validate_rejects_whitespace_only_name() {
        let mut student = sample();
        student.first_name = "   ".to_string();

        let err = student.validate().unwrap_err();
        assert!(err.contains("firstName"));
    }

    #[test]
    fn test_wire_format_is_camel_case() {
        let student = sample().into_student(StudentId(7));
        let value = serde_json::to_value(&student).unwrap();

        assert_eq!(value["id"], 7);
        assert_eq!(value["firstName"], "Ann");
        assert_eq!(value["rollNo"], "R1");
        assert_eq!(value["contactNumber"], "111");
        assert!(value.get("first_name").is_none());
    }

    #[test]
    fn test_into_student_preserves_fields() {
        let student = sample().into_student(StudentId(1));
        assert_eq!(student.roll_no, "R1");
        assert_eq!(student.password, "x");
        assert_eq!(student.contact_number, "111");
    }
}

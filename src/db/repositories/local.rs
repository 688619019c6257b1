//! In-memory local repository implementation.
//!
//! This module provides a local implementation of the repository trait
//! suitable for unit testing and local development. All data is stored in
//! memory using a HashMap keyed by roll number, providing fast,
//! deterministic, and isolated execution.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::db::repository::{RepositoryError, RepositoryResult, StudentRepository};
use crate::models::{NewStudent, Student, StudentId};

/// In-memory local repository.
///
/// Records live in a `HashMap` keyed by roll number, which makes the
/// uniqueness constraint a plain key check under the write lock. Ids are
/// assigned from a monotonically increasing counter.
#[derive(Clone)]
pub struct LocalRepository {
    data: Arc<RwLock<LocalData>>,
}

struct LocalData {
    students: HashMap<String, Student>,

    // ID counter
    next_student_id: StudentId,

    // Connection health
    is_healthy: bool,
}

impl Default for LocalData {
    fn default() -> Self {
        Self {
            students: HashMap::new(),
            next_student_id: StudentId(1),
            is_healthy: true,
        }
    }
}

impl LocalRepository {
    /// Create a new empty local repository.
    pub fn new() -> Self {
        Self {
            data: Arc::new(RwLock::new(LocalData::default())),
        }
    }

    /// Set the health status for testing connection failures.
    pub fn set_healthy(&self, healthy: bool) {
        let mut data = self.data.write().unwrap();
        data.is_healthy = healthy;
    }

    /// Clear all data from the repository.
    pub fn clear(&self) {
        let mut data = self.data.write().unwrap();
        *data = LocalData {
            is_healthy: data.is_healthy,
            ..Default::default()
        };
    }

    /// Get the number of students stored.
    pub fn student_count(&self) -> usize {
        self.data.read().unwrap().students.len()
    }

    /// Check if a roll number is taken.
    pub fn has_roll_no(&self, roll_no: &str) -> bool {
        self.data.read().unwrap().students.contains_key(roll_no)
    }

    /// Helper to check health and return error if unhealthy.
    fn check_health(&self) -> RepositoryResult<()> {
        let data = self.data.read().unwrap();
        if !data.is_healthy {
            return Err(RepositoryError::connection(
                "Database is not healthy".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for LocalRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl StudentRepository for LocalRepository {
    async fn health_check(&self) -> RepositoryResult<bool> {
        let data = self.data.read().unwrap();
        Ok(data.is_healthy)
    }

    async fn insert_student(&self, student: &NewStudent) -> RepositoryResult<Student> {
        self.check_health()?;

        let mut data = self.data.write().unwrap();

        if data.students.contains_key(&student.roll_no) {
            return Err(RepositoryError::conflict(format!(
                "Student with roll number '{}' already exists",
                student.roll_no
            )));
        }

        let student_id = data.next_student_id;
        data.next_student_id = StudentId(student_id.0 + 1);

        let record = student.clone().into_student(student_id);
        data.students.insert(record.roll_no.clone(), record.clone());

        Ok(record)
    }

    async fn list_students(&self) -> RepositoryResult<Vec<Student>> {
        self.check_health()?;

        let data = self.data.read().unwrap();

        let mut students: Vec<Student> = data.students.values().cloned().collect();
        students.sort_by_key(|s| s.id);

        Ok(students)
    }

    async fn update_contact_number(
        &self,
        roll_no: &str,
        contact_number: &str,
    ) -> RepositoryResult<Student> {
        self.check_health()?;

        let mut data = self.data.write().unwrap();

        let student = data.students.get_mut(roll_no).ok_or_else(|| {
            RepositoryError::not_found(format!(
                "Student with roll number '{}' not found",
                roll_no
            ))
        })?;

        student.contact_number = contact_number.to_string();
        Ok(student.clone())
    }

    async fn delete_student(&self, roll_no: &str) -> RepositoryResult<Student> {
        self.check_health()?;

        let mut data = self.data.write().unwrap();

        data.students.remove(roll_no).ok_or_else(|| {
            RepositoryError::not_found(format!(
                "Student with roll number '{}' not found",
                roll_no
            ))
        })
    }
}

//! Domain model types for the student registry.

pub mod student;

pub use student::{NewStudent, Student, StudentId};

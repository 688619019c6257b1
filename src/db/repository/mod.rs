//! Repository trait definitions for database operations.
//!
//! This module abstracts the persistence layer behind a trait so storage
//! backends can be swapped without touching the service or HTTP layers.
//!
//! # Module Organization
//!
//! - [`error`]: Error types for repository operations
//! - [`student`]: CRUD operations for student records

pub mod error;
pub mod student;

// Re-export error types
pub use error::{ErrorContext, RepositoryError, RepositoryResult};

// Re-export the repository trait
pub use student::StudentRepository;

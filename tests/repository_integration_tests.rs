//! Integration tests for repository implementations.

#![cfg(feature = "local-repo")]

use std::sync::Arc;
use student_registry::db::{repositories::LocalRepository, RepositoryError, StudentRepository};
use student_registry::models::NewStudent;

fn new_student(roll_no: &str) -> NewStudent {
    NewStudent {
        first_name: "Ann".to_string(),
        last_name: "Lee".to_string(),
        roll_no: roll_no.to_string(),
        password: "pw".to_string(),
        contact_number: "123".to_string(),
    }
}

#[tokio::test]
async fn test_repository_health_check() {
    let repo: Arc<dyn StudentRepository> = Arc::new(LocalRepository::new());
    let result = repo.health_check().await;
    assert!(result.is_ok());
    assert!(result.unwrap());
}

#[tokio::test]
async fn test_register_and_list_students() {
    let repo = LocalRepository::new();

    // Initially empty
    let students = repo.list_students().await.unwrap();
    assert_eq!(students.len(), 0);

    // Register a student
    let stored = repo.insert_student(&new_student("R1")).await.unwrap();
    assert_eq!(stored.id.value(), 1);
    assert_eq!(stored.first_name, "Ann");
    assert_eq!(stored.roll_no, "R1");

    // Verify it shows up in the list
    let students = repo.list_students().await.unwrap();
    assert_eq!(students.len(), 1);
    assert_eq!(students[0], stored);
}

#[tokio::test]
async fn test_sequential_id_assignment() {
    let repo = LocalRepository::new();

    for i in 1..=3 {
        let stored = repo
            .insert_student(&new_student(&format!("R{}", i)))
            .await
            .unwrap();
        assert_eq!(stored.id.value(), i);
    }

    let students = repo.list_students().await.unwrap();
    assert_eq!(students.len(), 3);
    assert_eq!(students[0].roll_no, "R1");
    assert_eq!(students[2].roll_no, "R3");
}

#[tokio::test]
async fn test_duplicate_roll_number_is_conflict() {
    let repo = LocalRepository::new();

    repo.insert_student(&new_student("R1")).await.unwrap();

    let mut duplicate = new_student("R1");
    duplicate.first_name = "Bob".to_string();
    let result = repo.insert_student(&duplicate).await;
    assert!(result.is_err());
    assert!(matches!(
        result.unwrap_err(),
        RepositoryError::Conflict { .. }
    ));

    // The first record is untouched
    let students = repo.list_students().await.unwrap();
    assert_eq!(students.len(), 1);
    assert_eq!(students[0].first_name, "Ann");
}

#[tokio::test]
async fn test_update_contact_number() {
    let repo = LocalRepository::new();
    let stored = repo.insert_student(&new_student("R1")).await.unwrap();

    let updated = repo.update_contact_number("R1", "999").await.unwrap();
    assert_eq!(updated.contact_number, "999");

    // Every other field is unchanged
    assert_eq!(updated.id, stored.id);
    assert_eq!(updated.first_name, stored.first_name);
    assert_eq!(updated.last_name, stored.last_name);
    assert_eq!(updated.roll_no, stored.roll_no);
    assert_eq!(updated.password, stored.password);

    // The stored record reflects the update
    let students = repo.list_students().await.unwrap();
    assert_eq!(students[0].contact_number, "999");
}

#[tokio::test]
async fn test_update_unknown_roll_number_not_found() {
    let repo = LocalRepository::new();

    let result = repo.update_contact_number("R9", "999").await;
    assert!(result.is_err());
    assert!(matches!(
        result.unwrap_err(),
        RepositoryError::NotFound { .. }
    ));
}

#[tokio::test]
async fn test_delete_returns_removed_record() {
    let repo = LocalRepository::new();
    repo.insert_student(&new_student("R1")).await.unwrap();

    let removed = repo.delete_student("R1").await.unwrap();
    assert_eq!(removed.roll_no, "R1");
    assert_eq!(repo.student_count(), 0);

    // A second delete reports the record as missing
    let result = repo.delete_student("R1").await;
    assert!(matches!(
        result.unwrap_err(),
        RepositoryError::NotFound { .. }
    ));
}

#[tokio::test]
async fn test_concurrent_registration() {
    use tokio::task::JoinSet;

    let repo = Arc::new(LocalRepository::new());
    let mut set = JoinSet::new();

    // Spawn multiple tasks registering distinct students concurrently
    for i in 0..10 {
        let repo_clone = repo.clone();
        set.spawn(async move {
            repo_clone
                .insert_student(&new_student(&format!("R{}", i)))
                .await
        });
    }

    // Wait for all tasks
    let mut count = 0;
    while let Some(result) = set.join_next().await {
        assert!(result.is_ok());
        assert!(result.unwrap().is_ok());
        count += 1;
    }

    assert_eq!(count, 10);

    // Verify all students were stored with distinct ids
    let students = repo.list_students().await.unwrap();
    assert_eq!(students.len(), 10);
    let mut ids: Vec<i64> = students.iter().map(|s| s.id.value()).collect();
    ids.dedup();
    assert_eq!(ids.len(), 10);
}

#[tokio::test]
async fn test_concurrent_duplicate_registration() {
    use tokio::task::JoinSet;

    let repo = Arc::new(LocalRepository::new());
    let mut set = JoinSet::new();

    // Every task races to claim the same roll number
    for _ in 0..10 {
        let repo_clone = repo.clone();
        set.spawn(async move { repo_clone.insert_student(&new_student("R1")).await });
    }

    let mut successes = 0;
    let mut conflicts = 0;
    while let Some(result) = set.join_next().await {
        match result.unwrap() {
            Ok(_) => successes += 1,
            Err(RepositoryError::Conflict { .. }) => conflicts += 1,
            Err(other) => panic!("unexpected error: {}", other),
        }
    }

    // Exactly one registration wins
    assert_eq!(successes, 1);
    assert_eq!(conflicts, 9);
    assert_eq!(repo.student_count(), 1);
}

#[tokio::test]
async fn test_helper_methods() {
    let repo = LocalRepository::new();

    assert_eq!(repo.student_count(), 0);
    assert!(!repo.has_roll_no("R1"));

    repo.insert_student(&new_student("R1")).await.unwrap();
    assert_eq!(repo.student_count(), 1);
    assert!(repo.has_roll_no("R1"));

    // Clear repository
    repo.clear();
    assert_eq!(repo.student_count(), 0);
}

#[tokio::test]
async fn test_connection_unhealthy() {
    let repo = LocalRepository::new();

    // Set unhealthy
    repo.set_healthy(false);
    assert!(!repo.health_check().await.unwrap());

    // Try to register (should fail)
    let result = repo.insert_student(&new_student("R1")).await;
    assert!(result.is_err());
    assert!(matches!(
        result.unwrap_err(),
        RepositoryError::ConnectionError { .. }
    ));
}

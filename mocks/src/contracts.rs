//! Contract test helpers for validating trait implementations
//!
//! Provides standardized tests that any TodoRepository implementation
//! should pass. The contracts never assume an empty store, so they can be
//! run back to back against the same repository.

use crate::{
    assert_contains_id, assert_created_from, assert_not_found, assert_sorted_by_id,
    assert_update_applied, assert_validation_error, NewTodoBuilder, UpdateTodoBuilder,
};
use todo_core::{TodoRepository, UpdateTodo};

/// Test any TodoRepository implementation with comprehensive contract tests
pub async fn test_repository_contract<R: TodoRepository>(repo: &R) {
    test_create_contract(repo).await;
    test_get_contract(repo).await;
    test_list_contract(repo).await;
    test_update_contract(repo).await;
    test_delete_contract(repo).await;
    test_validation_contract(repo).await;
    test_health_check_contract(repo).await;
}

/// Creation assigns a fresh id and preserves every field
pub async fn test_create_contract<R: TodoRepository>(repo: &R) {
    let new_todo = NewTodoBuilder::new()
        .with_title("Contract create")
        .with_description("created by contract")
        .build();
    let first = repo.create(new_todo.clone()).await.expect("Create should succeed");
    assert_created_from(&first, &new_todo);

    // Identical payloads are allowed and get distinct ids
    let second = repo.create(new_todo).await.expect("Duplicate create should succeed");
    assert!(second.id > first.id, "Ids should increase: {} then {}", first.id, second.id);

    let minimal = NewTodoBuilder::new().with_title("Contract minimal").build();
    let todo = repo.create(minimal).await.expect("Minimal create should succeed");
    assert!(todo.description.is_none(), "Missing description should stay absent");
    assert!(!todo.completed, "Completed should default to false");
}

/// Reads return what was written and NotFound for unknown ids
pub async fn test_get_contract<R: TodoRepository>(repo: &R) {
    let created = repo
        .create(NewTodoBuilder::new().with_title("Contract get").with_completed(true).build())
        .await
        .expect("Create should succeed");

    let fetched = repo.get_by_id(created.id).await.expect("Get should succeed");
    assert_eq!(fetched, created, "Get should return the stored todo");

    assert_not_found(&repo.get_by_id(i64::MAX).await);
    assert_not_found(&repo.get_by_id(0).await);
    assert_not_found(&repo.get_by_id(-1).await);
}

/// Listing returns every stored todo ordered by id
pub async fn test_list_contract<R: TodoRepository>(repo: &R) {
    let a = repo
        .create(NewTodoBuilder::new().with_title("Contract list a").build())
        .await
        .expect("Create should succeed");
    let b = repo
        .create(NewTodoBuilder::new().with_title("Contract list b").build())
        .await
        .expect("Create should succeed");

    let todos = repo.list().await.expect("List should succeed");
    assert_contains_id(&todos, a.id);
    assert_contains_id(&todos, b.id);
    assert_sorted_by_id(&todos);

    let again = repo.list().await.expect("List should succeed");
    assert_eq!(todos, again, "List without writes should be stable");
}

/// Partial updates change only the present fields
pub async fn test_update_contract<R: TodoRepository>(repo: &R) {
    let created = repo
        .create(
            NewTodoBuilder::new()
                .with_title("Contract update")
                .with_description("before")
                .build(),
        )
        .await
        .expect("Create should succeed");

    let updates = UpdateTodoBuilder::new().completed(true).build();
    let updated = repo.update(created.id, updates.clone()).await.expect("Update should succeed");
    assert_update_applied(&created, &updates, &updated);

    let persisted = repo.get_by_id(created.id).await.expect("Get should succeed");
    assert_eq!(persisted, updated, "Update should be persisted");

    let updates = UpdateTodoBuilder::new().title("Contract renamed").description("after").build();
    let renamed = repo.update(created.id, updates.clone()).await.expect("Update should succeed");
    assert_update_applied(&updated, &updates, &renamed);

    let unchanged = repo
        .update(created.id, UpdateTodo::default())
        .await
        .expect("Empty update should succeed");
    assert_eq!(unchanged, renamed, "Empty update should change nothing");

    assert_not_found(&repo.update(i64::MAX, UpdateTodoBuilder::new().completed(true).build()).await);
}

/// Deletion removes the todo exactly once
pub async fn test_delete_contract<R: TodoRepository>(repo: &R) {
    let created = repo
        .create(NewTodoBuilder::new().with_title("Contract delete").build())
        .await
        .expect("Create should succeed");
    let before = repo.list().await.expect("List should succeed").len();

    repo.delete(created.id).await.expect("Delete should succeed");

    assert_not_found(&repo.get_by_id(created.id).await);
    assert_not_found(&repo.delete(created.id).await);
    assert_not_found(&repo.update(created.id, UpdateTodoBuilder::new().completed(true).build()).await);

    let after = repo.list().await.expect("List should succeed");
    assert_eq!(after.len(), before - 1, "Delete should remove exactly one todo");
    assert!(after.iter().all(|t| t.id != created.id));
}

/// Blank titles and descriptions are rejected without touching the store
pub async fn test_validation_contract<R: TodoRepository>(repo: &R) {
    let before = repo.list().await.expect("List should succeed");

    assert_validation_error(&repo.create(NewTodoBuilder::new().with_title("").build()).await);
    assert_validation_error(&repo.create(NewTodoBuilder::new().with_title("  \n").build()).await);
    assert_validation_error(
        &repo
            .create(NewTodoBuilder::new().with_title("ok").with_description(" ").build())
            .await,
    );
    assert_eq!(repo.list().await.expect("List should succeed"), before);

    let target = repo
        .create(NewTodoBuilder::new().with_title("Contract validation").build())
        .await
        .expect("Create should succeed");
    assert_validation_error(&repo.update(target.id, UpdateTodoBuilder::new().title("\t").build()).await);
    let persisted = repo.get_by_id(target.id).await.expect("Get should succeed");
    assert_eq!(persisted, target, "Rejected update should not be applied");
}

/// Health check passes on a working repository
pub async fn test_health_check_contract<R: TodoRepository>(repo: &R) {
    repo.health_check().await.expect("Health check should succeed");
}

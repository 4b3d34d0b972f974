//! Integration tests for the users domain
//!
//! These tests use real PostgreSQL via testcontainers to ensure:
//! - Gateways map rows and keys correctly
//! - The unique email index surfaces as EMAIL_ALREADY_EXISTS
//! - Seeded roles resolve into a RolePolicy

use domain_users::*;
use test_utils::{TestDataBuilder, TestDatabase, assertions::*, seed};

fn new_user(email: String) -> User {
    User {
        id: 0,
        email,
        password_hash: "$argon2id$placeholder".to_string(),
        first_name: "Ann".to_string(),
        last_name: "Lee".to_string(),
        birthdate: None,
        gender: Some(Gender::Female),
        phone: None,
        blacklist: false,
        active: true,
        role_id: seed::MEMBER_ROLE_ID,
        address_id: None,
    }
}

// ============================================================================
// Repository Tests
// ============================================================================

#[tokio::test]
async fn test_create_and_find_user() {
    let db = TestDatabase::new().await;
    let repo = PgUserRepository::new(db.connection());
    let builder = TestDataBuilder::from_test_name("create_and_find");

    let created = repo.create(new_user(builder.email("ann"))).await.unwrap();
    assert!(created.id > 0);

    let by_id = assert_some(repo.find_by_id(created.id).await.unwrap(), "user by id");
    assert_eq!(by_id, created);

    let by_email = assert_some(
        repo.find_by_email(&created.email).await.unwrap(),
        "user by email",
    );
    assert_eq!(by_email.gender, Some(Gender::Female));
    assert!(repo.exists_by_email(&created.email).await.unwrap());
}

#[tokio::test]
async fn test_duplicate_email_constraint() {
    let db = TestDatabase::new().await;
    let repo = PgUserRepository::new(db.connection());
    let builder = TestDataBuilder::from_test_name("duplicate_email");

    repo.create(new_user(builder.email("ann"))).await.unwrap();
    let result = repo.create(new_user(builder.email("ann"))).await;

    assert_err_code(result, UserError::code, "EMAIL_ALREADY_EXISTS");
}

#[tokio::test]
async fn test_update_and_delete_user() {
    let db = TestDatabase::new().await;
    let repo = PgUserRepository::new(db.connection());
    let builder = TestDataBuilder::from_test_name("update_and_delete");

    let mut user = repo.create(new_user(builder.email("ann"))).await.unwrap();
    user.phone = Some("0499-123-456".to_string());
    user.role_id = seed::STAFF_ROLE_ID;

    let updated = repo.update(user.clone()).await.unwrap();
    assert_eq!(updated.phone.as_deref(), Some("0499-123-456"));
    assert_eq!(updated.role_id, seed::STAFF_ROLE_ID);

    assert!(repo.delete_by_email(&user.email).await.unwrap());
    assert!(repo.find_by_id(user.id).await.unwrap().is_none());

    let result = repo.update(user).await;
    assert_err_code(result, UserError::code, "USER_NOT_FOUND");
}

#[tokio::test]
async fn test_update_with_unknown_role_is_rejected() {
    let db = TestDatabase::new().await;
    let repo = PgUserRepository::new(db.connection());
    let builder = TestDataBuilder::from_test_name("unknown_role");

    let mut user = repo.create(new_user(builder.email("ann"))).await.unwrap();
    user.role_id = 999;
    assert_err_code(repo.update(user.clone()).await, UserError::code, "INVALID_ROLE_ID");

    let stored = assert_some(repo.find_by_id(user.id).await.unwrap(), "user after failed update");
    assert_eq!(stored.role_id, seed::MEMBER_ROLE_ID);

    let mut orphan = new_user(builder.email("bob"));
    orphan.role_id = 999;
    assert_err_code(repo.create(orphan).await, UserError::code, "INVALID_ROLE_ID");
}

#[tokio::test]
async fn test_find_all_is_ordered_by_id() {
    let db = TestDatabase::new().await;
    let repo = PgUserRepository::new(db.connection());
    let builder = TestDataBuilder::from_test_name("find_all_ordered");

    for local in ["c", "a", "b"] {
        repo.create(new_user(builder.email(local))).await.unwrap();
    }

    let ids: Vec<i32> = repo.find_all().await.unwrap().iter().map(|u| u.id).collect();
    let mut sorted = ids.clone();
    sorted.sort();
    assert_eq!(ids, sorted);
    assert_eq!(ids.len(), 3);
}

// ============================================================================
// Service Tests
// ============================================================================

#[tokio::test]
async fn test_register_and_authenticate_against_postgres() {
    let db = TestDatabase::new().await;
    let roles = RoleService::new(PgRoleRepository::new(db.connection()));
    let policy = roles.resolve_policy("member", "admin").await.unwrap();
    assert_eq!(
        policy,
        RolePolicy::new(seed::MEMBER_ROLE_ID, seed::ADMIN_ROLE_ID)
    );

    let service = UserService::new(PgUserRepository::new(db.connection()), policy);
    let created = service
        .create_user(
            NewUser {
                email: "john@example.com".to_string(),
                password: "Abcdef12".to_string(),
                first_name: "John".to_string(),
                last_name: "Doe".to_string(),
                role_id: None,
            },
            "Abcdef12",
        )
        .await
        .unwrap();
    assert_eq!(created.role_id, seed::MEMBER_ROLE_ID);

    let user = service
        .authenticate("john@example.com", "Abcdef12")
        .await
        .unwrap();
    assert_eq!(user.map(|u| u.id), Some(created.id));
}

#[tokio::test]
async fn test_role_crud_against_postgres() {
    let db = TestDatabase::new().await;
    let service = RoleService::new(PgRoleRepository::new(db.connection()));
    let builder = TestDataBuilder::from_test_name("role_crud");

    let role = service
        .create_role(&builder.name("role", "coach"))
        .await
        .unwrap();
    let renamed = service
        .update_role(role.id, &builder.name("role", "trainer"))
        .await
        .unwrap();
    assert_eq!(renamed.id, role.id);

    service.delete_role_by_id(role.id).await.unwrap();
    assert!(service.find_role_by_id(role.id).await.unwrap().is_none());

    assert_eq!(service.find_all_roles().await.unwrap().len(), 3);
}

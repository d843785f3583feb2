mod support;

use std::sync::Arc;

use dashboard_lib::access_service::{AccessControlService, USER_ID_NOT_INTEGER, USER_ID_REQUIRED};
use dashboard_lib::entities::{NewRole, RoleChanges, RoleFilter, UserRoleFilter};
use dashboard_lib::errors_service::ServiceError;
use dashboard_lib::repository::errors::RepositoryError;

use support::fixtures::{role_row, user_role_row};
use support::mocks::{MockRoleRepo, MockUserRoleRepo};

fn create_test_service(
    role_repo: MockRoleRepo,
    user_role_repo: MockUserRoleRepo,
) -> AccessControlService<MockRoleRepo, MockUserRoleRepo> {
    AccessControlService::with_repos(Arc::new(role_repo), Arc::new(user_role_repo))
}

// ==================== ROLE TESTS ====================

#[tokio::test]
async fn test_create_role_success() {
    let mut role_repo = MockRoleRepo::new();
    let user_role_repo = MockUserRoleRepo::new();

    role_repo
        .expect_create_role()
        .withf(|role| role.role_name == "VERIFIER" && role.description.as_deref() == Some("Verifier role"))
        .times(1)
        .returning(|role| {
            let mut row = role_row(2, &role.role_name);
            row.description = role.description.unwrap_or_default();
            Ok(row)
        });

    let service = create_test_service(role_repo, user_role_repo);
    let result = service
        .create_role(NewRole {
            role_name: "VERIFIER".to_string(),
            description: Some("Verifier role".to_string()),
        })
        .await;

    let role = result.unwrap();
    assert_eq!(role.id, 2);
    assert_eq!(role.role_name, "VERIFIER");
    assert_eq!(role.description, "Verifier role");
}

#[tokio::test]
async fn test_create_role_trims_name_before_insert() {
    let mut role_repo = MockRoleRepo::new();
    let user_role_repo = MockUserRoleRepo::new();

    role_repo
        .expect_create_role()
        .withf(|role| role.role_name == "ANALYST" && role.description.is_none())
        .times(1)
        .returning(|role| Ok(role_row(3, &role.role_name)));

    let service = create_test_service(role_repo, user_role_repo);
    let role = service
        .create_role(NewRole {
            role_name: "  ANALYST  ".to_string(),
            description: None,
        })
        .await
        .unwrap();

    assert_eq!(role.role_name, "ANALYST");
    assert_eq!(role.description, "");
}

#[tokio::test]
async fn test_create_role_name_conflict() {
    let mut role_repo = MockRoleRepo::new();
    let user_role_repo = MockUserRoleRepo::new();

    role_repo
        .expect_create_role()
        .times(1)
        .returning(|_| Err(RepositoryError::RoleNameAlreadyExists));

    let service = create_test_service(role_repo, user_role_repo);
    let err = service
        .create_role(NewRole {
            role_name: "ADMIN".to_string(),
            description: None,
        })
        .await
        .unwrap_err();

    assert!(matches!(err, ServiceError::RoleNameAlreadyExists));
    assert!(err.is_conflict());
}

#[tokio::test]
async fn test_create_role_blank_name_never_reaches_repository() {
    let mut role_repo = MockRoleRepo::new();
    let user_role_repo = MockUserRoleRepo::new();
    role_repo.expect_create_role().times(0);

    let service = create_test_service(role_repo, user_role_repo);
    let err = service
        .create_role(NewRole {
            role_name: "   ".to_string(),
            description: None,
        })
        .await
        .unwrap_err();

    assert!(matches!(err, ServiceError::Validation(_)));
}

#[tokio::test]
async fn test_get_roles_passes_filter_through() {
    let mut role_repo = MockRoleRepo::new();
    let user_role_repo = MockUserRoleRepo::new();

    role_repo
        .expect_get_roles()
        .withf(|filter| filter.search.as_deref() == Some("officer") && filter.role_name.is_none())
        .times(1)
        .returning(|_| Ok(vec![role_row(4, "HEALTH_OFFICER")]));

    let service = create_test_service(role_repo, user_role_repo);
    let roles = service
        .get_roles(RoleFilter {
            role_name: None,
            search: Some("officer".to_string()),
        })
        .await
        .unwrap();

    assert_eq!(roles.len(), 1);
    assert_eq!(roles[0].role_name, "HEALTH_OFFICER");
}

#[tokio::test]
async fn test_get_role_not_found_is_none() {
    let mut role_repo = MockRoleRepo::new();
    let user_role_repo = MockUserRoleRepo::new();

    role_repo.expect_get_role().times(1).returning(|_| Ok(None));

    let service = create_test_service(role_repo, user_role_repo);
    assert!(service.get_role(99).await.unwrap().is_none());
}

#[tokio::test]
async fn test_update_role_missing_row_is_not_found() {
    let mut role_repo = MockRoleRepo::new();
    let user_role_repo = MockUserRoleRepo::new();

    role_repo
        .expect_update_role()
        .times(1)
        .returning(|_, _| Err(RepositoryError::NotFound));

    let service = create_test_service(role_repo, user_role_repo);
    let err = service
        .update_role(
            12,
            RoleChanges {
                role_name: Some("AUDITOR".to_string()),
                description: None,
            },
        )
        .await
        .unwrap_err();

    assert!(matches!(err, ServiceError::NotFound { entity: "role", id: 12 }));
}

#[tokio::test]
async fn test_update_role_rename_conflict() {
    let mut role_repo = MockRoleRepo::new();
    let user_role_repo = MockUserRoleRepo::new();

    role_repo
        .expect_update_role()
        .times(1)
        .returning(|_, _| Err(RepositoryError::RoleNameAlreadyExists));

    let service = create_test_service(role_repo, user_role_repo);
    let err = service
        .update_role(
            1,
            RoleChanges {
                role_name: Some("ADMIN".to_string()),
                description: None,
            },
        )
        .await
        .unwrap_err();

    assert!(matches!(err, ServiceError::RoleNameAlreadyExists));
}

#[tokio::test]
async fn test_partial_update_leaves_name_untouched() {
    let mut role_repo = MockRoleRepo::new();
    let user_role_repo = MockUserRoleRepo::new();

    role_repo
        .expect_update_role()
        .withf(|id, changes| {
            *id == 1 && changes.role_name.is_none() && changes.description.as_deref() == Some("Reads reports")
        })
        .times(1)
        .returning(|_, changes| {
            let mut row = role_row(1, "ADMIN");
            row.description = changes.description.unwrap_or_default();
            Ok(row)
        });

    let service = create_test_service(role_repo, user_role_repo);
    let role = service
        .update_role(
            1,
            RoleChanges {
                role_name: None,
                description: Some(" Reads reports ".to_string()),
            },
        )
        .await
        .unwrap();

    assert_eq!(role.role_name, "ADMIN");
    assert_eq!(role.description, "Reads reports");
}

#[tokio::test]
async fn test_delete_missing_role_is_not_found() {
    let mut role_repo = MockRoleRepo::new();
    let user_role_repo = MockUserRoleRepo::new();

    role_repo
        .expect_delete_role()
        .times(1)
        .returning(|_| Err(RepositoryError::NotFound));

    let service = create_test_service(role_repo, user_role_repo);
    let err = service.delete_role(5).await.unwrap_err();

    assert!(matches!(err, ServiceError::NotFound { .. }));
}

// ==================== USER ROLE TESTS ====================

#[tokio::test]
async fn test_assign_role_returns_joined_detail() {
    let role_repo = MockRoleRepo::new();
    let mut user_role_repo = MockUserRoleRepo::new();

    user_role_repo
        .expect_assign_role()
        .withf(|user_id, role_id| *user_id == 7 && *role_id == 3)
        .times(1)
        .returning(|user_id, _| {
            let role = role_row(3, "HEALTH_OFFICER");
            Ok(user_role_row(11, user_id, "testuser@example.com", &role, 0))
        });

    let service = create_test_service(role_repo, user_role_repo);
    let user_role = service.assign_role(7, 3).await.unwrap();

    assert_eq!(user_role.id, 11);
    assert_eq!(user_role.user, 7);
    assert_eq!(user_role.role, 3);
    assert_eq!(user_role.user_email, "testuser@example.com");
    assert_eq!(user_role.role_detail.id, 3);
    assert_eq!(user_role.role_detail.role_name, "HEALTH_OFFICER");
}

#[tokio::test]
async fn test_assign_role_twice_is_conflict() {
    let role_repo = MockRoleRepo::new();
    let mut user_role_repo = MockUserRoleRepo::new();

    user_role_repo
        .expect_assign_role()
        .times(1)
        .returning(|_, _| Err(RepositoryError::UserAlreadyHasRole));

    let service = create_test_service(role_repo, user_role_repo);
    let err = service.assign_role(7, 3).await.unwrap_err();

    assert!(matches!(err, ServiceError::UserAlreadyHasRole));
}

#[tokio::test]
async fn test_assign_unknown_user_is_validation_error() {
    let role_repo = MockRoleRepo::new();
    let mut user_role_repo = MockUserRoleRepo::new();

    user_role_repo
        .expect_assign_role()
        .times(1)
        .returning(|_, _| Err(RepositoryError::UnknownUser));

    let service = create_test_service(role_repo, user_role_repo);
    let err = service.assign_role(404, 3).await.unwrap_err();

    assert!(matches!(err, ServiceError::Validation(_)));
}

#[tokio::test]
async fn test_assign_unknown_role_is_validation_error() {
    let role_repo = MockRoleRepo::new();
    let mut user_role_repo = MockUserRoleRepo::new();

    user_role_repo
        .expect_assign_role()
        .times(1)
        .returning(|_, _| Err(RepositoryError::UnknownRole));

    let service = create_test_service(role_repo, user_role_repo);
    let err = service.assign_role(7, 404).await.unwrap_err();

    assert!(matches!(err, ServiceError::Validation(msg) if msg.contains("role")));
}

#[tokio::test]
async fn test_get_user_roles_with_filter() {
    let role_repo = MockRoleRepo::new();
    let mut user_role_repo = MockUserRoleRepo::new();

    user_role_repo
        .expect_get_user_roles()
        .withf(|filter| filter.role == Some(3) && filter.user.is_none())
        .times(1)
        .returning(|_| {
            let role = role_row(3, "ANALYST");
            Ok(vec![
                user_role_row(2, 8, "b@example.com", &role, 5),
                user_role_row(1, 7, "a@example.com", &role, 1),
            ])
        });

    let service = create_test_service(role_repo, user_role_repo);
    let user_roles = service
        .get_user_roles(UserRoleFilter {
            role: Some(3),
            ..Default::default()
        })
        .await
        .unwrap();

    assert_eq!(user_roles.len(), 2);
    assert!(user_roles[0].assigned_at > user_roles[1].assigned_at);
}

#[tokio::test]
async fn test_delete_missing_user_role_is_not_found() {
    let role_repo = MockRoleRepo::new();
    let mut user_role_repo = MockUserRoleRepo::new();

    user_role_repo
        .expect_delete_user_role()
        .times(1)
        .returning(|_| Err(RepositoryError::NotFound));

    let service = create_test_service(role_repo, user_role_repo);
    let err = service.delete_user_role(31).await.unwrap_err();

    assert!(matches!(err, ServiceError::NotFound { entity: "user role", id: 31 }));
}

// ==================== LOOKUP BY USER TESTS ====================

#[tokio::test]
async fn test_lookup_user_roles_returns_assignments() {
    let role_repo = MockRoleRepo::new();
    let mut user_role_repo = MockUserRoleRepo::new();

    user_role_repo
        .expect_get_user_roles_for_user()
        .withf(|user_id| *user_id == 7)
        .times(1)
        .returning(|user_id| {
            let role = role_row(3, "HEALTH_OFFICER");
            Ok(vec![user_role_row(1, user_id, "testuser@example.com", &role, 0)])
        });

    let service = create_test_service(role_repo, user_role_repo);
    let user_roles = service.lookup_user_roles(Some("7")).await.unwrap();

    assert_eq!(user_roles.len(), 1);
    assert_eq!(user_roles[0].user, 7);
    assert_eq!(user_roles[0].role, 3);
    assert_eq!(user_roles[0].role_detail.role_name, "HEALTH_OFFICER");
}

#[tokio::test]
async fn test_lookup_user_without_roles_is_empty() {
    let role_repo = MockRoleRepo::new();
    let mut user_role_repo = MockUserRoleRepo::new();

    user_role_repo
        .expect_get_user_roles_for_user()
        .times(1)
        .returning(|_| Ok(vec![]));

    let service = create_test_service(role_repo, user_role_repo);
    let user_roles = service.lookup_user_roles(Some("8")).await.unwrap();

    assert!(user_roles.is_empty());
}

#[tokio::test]
async fn test_lookup_without_user_id_is_validation_error() {
    let role_repo = MockRoleRepo::new();
    let mut user_role_repo = MockUserRoleRepo::new();
    user_role_repo.expect_get_user_roles_for_user().times(0);

    let service = create_test_service(role_repo, user_role_repo);
    let err = service.lookup_user_roles(None).await.unwrap_err();

    assert!(matches!(err, ServiceError::Validation(msg) if msg == USER_ID_REQUIRED));
}

#[tokio::test]
async fn test_lookup_with_non_integer_user_id_is_validation_error() {
    let role_repo = MockRoleRepo::new();
    let mut user_role_repo = MockUserRoleRepo::new();
    user_role_repo.expect_get_user_roles_for_user().times(0);

    let service = create_test_service(role_repo, user_role_repo);
    let err = service.lookup_user_roles(Some("abc")).await.unwrap_err();

    assert!(matches!(err, ServiceError::Validation(msg) if msg == USER_ID_NOT_INTEGER));
}

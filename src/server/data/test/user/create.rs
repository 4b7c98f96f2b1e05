use super::*;

fn param(email: &str) -> CreateUserParam {
    CreateUserParam {
        name: "Jane Doe".to_string(),
        email: email.to_string(),
        password_hash: "hash".to_string(),
        phone: None,
        role: Role::Agent,
    }
}

/// Tests creating a new user.
///
/// Verifies that the repository stores the account as active and unverified
/// and that it can be found again by email.
///
/// Expected: Ok with matching user
#[tokio::test]
async fn creates_active_unverified_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo.create(param("jane@example.com")).await?;

    assert!(user.is_active);
    assert!(!user.is_verified);
    assert_eq!(user.role, Role::Agent);

    let found = repo.find_by_email("jane@example.com").await?;
    assert_eq!(found.map(|u| u.id), Some(user.id));

    Ok(())
}

/// Tests the unique email constraint.
///
/// Verifies that inserting a second account with the same email fails at
/// the database level.
///
/// Expected: Err(DbErr)
#[tokio::test]
async fn rejects_duplicate_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    repo.create(param("dup@example.com")).await?;

    let result = repo.create(param("dup@example.com")).await;

    assert!(result.is_err());

    Ok(())
}

/// Tests looking up an unknown email.
///
/// Expected: Ok(None)
#[tokio::test]
async fn find_by_email_returns_none_when_missing() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = UserRepository::new(db)
        .find_by_email("nobody@example.com")
        .await?;

    assert!(result.is_none());

    Ok(())
}

use super::*;

/// Tests logging in with the correct password.
///
/// Expected: Ok with the matching user
#[tokio::test]
async fn logs_in_with_valid_credentials() -> Result<(), AppError> {
    let test = TestBuilder::new().with_table(entity::prelude::User).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let created = UserFactory::new(db)
        .email("agent@example.com")
        .password_hash(hash_password("secret123")?)
        .build()
        .await?;

    let user = AuthService::new(db)
        .login(LoginParam {
            email: "agent@example.com".to_string(),
            password: "secret123".to_string(),
        })
        .await?;

    assert_eq!(user.id, created.id);

    Ok(())
}

/// Tests that a wrong password and an unknown email fail the same way.
///
/// Expected: Err(InvalidCredentials) for both
#[tokio::test]
async fn rejects_wrong_password_and_unknown_email() -> Result<(), AppError> {
    let test = TestBuilder::new().with_table(entity::prelude::User).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    UserFactory::new(db)
        .email("agent@example.com")
        .password_hash(hash_password("secret123")?)
        .build()
        .await?;

    let service = AuthService::new(db);
    for (email, password) in [
        ("agent@example.com", "wrong-password"),
        ("nobody@example.com", "secret123"),
    ] {
        let result = service
            .login(LoginParam {
                email: email.to_string(),
                password: password.to_string(),
            })
            .await;

        assert!(matches!(
            result,
            Err(AppError::AuthErr(AuthError::InvalidCredentials))
        ));
    }

    Ok(())
}

/// Tests logging in to a deactivated account.
///
/// Expected: Err(AccountDeactivated)
#[tokio::test]
async fn rejects_deactivated_account() -> Result<(), AppError> {
    let test = TestBuilder::new().with_table(entity::prelude::User).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let created = UserFactory::new(db)
        .email("gone@example.com")
        .password_hash(hash_password("secret123")?)
        .active(false)
        .build()
        .await?;

    let result = AuthService::new(db)
        .login(LoginParam {
            email: "gone@example.com".to_string(),
            password: "secret123".to_string(),
        })
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccountDeactivated(id))) if id == created.id
    ));

    Ok(())
}

use super::*;

/// Tests changing the password with the correct current password.
///
/// Verifies that the new password works for login and the old one no longer does.
///
/// Expected: Ok
#[tokio::test]
async fn replaces_password() -> Result<(), AppError> {
    let test = TestBuilder::new().with_table(entity::prelude::User).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = User::from_entity(
        UserFactory::new(db)
            .email("jane@example.com")
            .password_hash(hash_password("secret123")?)
            .build()
            .await?,
    );

    let service = AuthService::new(db);
    service
        .update_password(
            &user,
            UpdatePasswordParam {
                current_password: "secret123".to_string(),
                new_password: "better-secret".to_string(),
            },
        )
        .await?;

    let login = |password: &str| LoginParam {
        email: "jane@example.com".to_string(),
        password: password.to_string(),
    };
    assert!(service.login(login("better-secret")).await.is_ok());
    assert!(service.login(login("secret123")).await.is_err());

    Ok(())
}

/// Tests changing the password with a wrong current password.
///
/// Expected: Err(IncorrectPassword)
#[tokio::test]
async fn rejects_incorrect_current_password() -> Result<(), AppError> {
    let test = TestBuilder::new().with_table(entity::prelude::User).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = User::from_entity(
        UserFactory::new(db)
            .password_hash(hash_password("secret123")?)
            .build()
            .await?,
    );

    let result = AuthService::new(db)
        .update_password(
            &user,
            UpdatePasswordParam {
                current_password: "not-it".to_string(),
                new_password: "better-secret".to_string(),
            },
        )
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::IncorrectPassword(_)))
    ));

    Ok(())
}

use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::user::{CreateUserParam, LoginParam, RegisterParam, UpdatePasswordParam, User},
    util::{
        db::is_unique_violation,
        password::{hash_password, verify_password},
    },
};

pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AuthService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates an account with a hashed password.
    ///
    /// # Returns
    /// - `Ok(User)` - The new account
    /// - `Err(AppError::BadRequest)` - Email already registered
    /// - `Err(AppError::AuthErr)` - Password hashing failed
    pub async fn register(&self, param: RegisterParam) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.db);

        if user_repo.find_by_email(&param.email).await?.is_some() {
            return Err(AppError::BadRequest("User already exists".to_string()));
        }

        let password_hash = hash_password(&param.password)?;

        let user = user_repo
            .create(CreateUserParam {
                name: param.name,
                email: param.email,
                password_hash,
                phone: param.phone,
                role: param.role,
            })
            .await
            .map_err(|err| {
                if is_unique_violation(&err) {
                    AppError::BadRequest("User already exists".to_string())
                } else {
                    err.into()
                }
            })?;

        tracing::info!(user_id = user.id, role = ?user.role, "Registered new user");

        Ok(user)
    }

    /// Checks credentials.
    ///
    /// Unknown emails and wrong passwords produce the same error so the
    /// response does not reveal which accounts exist.
    pub async fn login(&self, param: LoginParam) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.db);

        let Some(user) = user_repo.find_by_email(&param.email).await? else {
            return Err(AuthError::InvalidCredentials.into());
        };

        if !verify_password(&param.password, &user.password_hash) {
            return Err(AuthError::InvalidCredentials.into());
        }

        if !user.is_active {
            return Err(AuthError::AccountDeactivated(user.id).into());
        }

        Ok(user)
    }

    /// Replaces the password after verifying the current one.
    pub async fn update_password(
        &self,
        user: &User,
        param: UpdatePasswordParam,
    ) -> Result<(), AppError> {
        if !verify_password(&param.current_password, &user.password_hash) {
            return Err(AuthError::IncorrectPassword(user.id).into());
        }

        let password_hash = hash_password(&param.new_password)?;

        UserRepository::new(self.db)
            .update_password(user.id, password_hash)
            .await?;

        Ok(())
    }
}

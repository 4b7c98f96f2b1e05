use sea_orm::{ActiveEnum, DatabaseConnection};
use tower_sessions::Session;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    middleware::session::AuthSession,
    model::user::User,
};

/// Role requirement checked by `AuthGuard::require`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Permission {
    /// Role agent or admin.
    Agent,
    /// Role admin.
    Admin,
}

pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    session: &'a Session,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, session: &'a Session) -> Self {
        Self { db, session }
    }

    /// Loads the session user and checks every permission.
    ///
    /// An empty permission list only requires a logged in, active user.
    ///
    /// # Returns
    /// - `Ok(User)` - The authorized user
    /// - `Err(AuthError::UserNotInSession)` - Nobody is logged in (401)
    /// - `Err(AuthError::UserNotInDatabase)` - Session user no longer exists (401)
    /// - `Err(AuthError::AccountDeactivated)` - Session user was deactivated (401)
    /// - `Err(AuthError::AccessDenied)` - Role lacks a permission (403)
    pub async fn require(&self, permissions: &[Permission]) -> Result<User, AppError> {
        let Some(user_id) = AuthSession::new(self.session).get_user_id().await? else {
            return Err(AuthError::UserNotInSession.into());
        };

        let Some(user) = UserRepository::new(self.db).find_by_id(user_id).await? else {
            return Err(AuthError::UserNotInDatabase(user_id).into());
        };

        if !user.is_active {
            return Err(AuthError::AccountDeactivated(user_id).into());
        }

        for permission in permissions {
            let allowed = match permission {
                Permission::Agent => user.role.can_list(),
                Permission::Admin => user.is_admin(),
            };

            if !allowed {
                return Err(AuthError::AccessDenied(
                    user_id,
                    format!(
                        "User role {} is not authorized to access this route",
                        user.role.to_value()
                    ),
                )
                .into());
            }
        }

        Ok(user)
    }

    /// Returns the session user if one is logged in and active.
    ///
    /// Used by public endpoints that behave differently for logged in users.
    pub async fn optional(&self) -> Result<Option<User>, AppError> {
        let Some(user_id) = AuthSession::new(self.session).get_user_id().await? else {
            return Ok(None);
        };

        let user = UserRepository::new(self.db).find_by_id(user_id).await?;

        Ok(user.filter(|u| u.is_active))
    }
}

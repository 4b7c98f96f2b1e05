//! Type-safe session management wrappers.
//!
//! `AuthSession` wraps the tower-sessions `Session` and exposes only the
//! authentication state, so the session key and value type live in one place.

use tower_sessions::Session;

use crate::server::error::AppError;

const SESSION_AUTH_USER_ID: &str = "auth:user";

/// Authentication session management.
///
/// Stores the id of the logged in user and handles the session lifecycle on
/// login and logout.
pub struct AuthSession<'a> {
    session: &'a Session,
}

impl<'a> AuthSession<'a> {
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Marks the session as belonging to `user_id`.
    ///
    /// The session id is rotated first so an id issued before login can never
    /// be reused to act as the logged in user.
    ///
    /// # Returns
    /// - `Ok(())` - User id stored under a fresh session id
    /// - `Err(AppError::SessionErr(_))` - Failed to write to the session store
    pub async fn login(&self, user_id: i32) -> Result<(), AppError> {
        self.session.cycle_id().await?;
        self.set_user_id(user_id).await
    }

    pub async fn set_user_id(&self, user_id: i32) -> Result<(), AppError> {
        self.session.insert(SESSION_AUTH_USER_ID, user_id).await?;
        Ok(())
    }

    /// Retrieves the logged in user's id.
    ///
    /// # Returns
    /// - `Ok(Some(user_id))` - A user is logged in
    /// - `Ok(None)` - Anonymous session
    /// - `Err(AppError::SessionErr(_))` - Failed to read the session
    pub async fn get_user_id(&self) -> Result<Option<i32>, AppError> {
        Ok(self.session.get::<i32>(SESSION_AUTH_USER_ID).await?)
    }

    /// Removes all session data. Used on logout.
    pub async fn clear(&self) {
        self.session.clear().await;
    }
}

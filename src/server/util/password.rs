use argon2::{
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use rand::Rng;

use crate::server::error::auth::AuthError;

/// Hashes a password with argon2id and a random 16 byte salt.
///
/// # Returns
/// - `Ok(String)` - PHC formatted hash suitable for storage
/// - `Err(AuthError::PasswordHash)` - Hashing failed
pub fn hash_password(password: &str) -> Result<String, AuthError> {
    let mut salt_bytes = [0u8; 16];
    rand::rng().fill(&mut salt_bytes);

    let salt =
        SaltString::encode_b64(&salt_bytes).map_err(|e| AuthError::PasswordHash(e.to_string()))?;

    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| AuthError::PasswordHash(e.to_string()))
}

/// Checks a password against a stored hash.
///
/// A stored value that is not a valid PHC string never matches.
pub fn verify_password(password: &str, stored_hash: &str) -> bool {
    let Ok(parsed) = PasswordHash::new(stored_hash) else {
        return false;
    };

    Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok()
}

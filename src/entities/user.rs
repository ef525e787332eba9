//! User entity - account usato dall'autenticazione JWT

use bcrypt::{DEFAULT_COST, hash, verify};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, sqlx::FromRow)]
pub struct User {
    pub user_id: i64,
    pub username: String,
    pub password: String,
}

impl User {
    /// Verify if target_password matches the stored hashed password
    pub fn verify_password(&self, target_password: &str) -> bool {
        verify(target_password, &self.password).unwrap_or(false)
    }

    /// Hash a password using bcrypt with default cost
    pub fn hash_password(password: &str) -> Result<String, bcrypt::BcryptError> {
        let hash = hash(password, DEFAULT_COST)?;
        Ok(hash)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify() {
        let hashed = User::hash_password("Secret123").unwrap();
        let user = User {
            user_id: 1,
            username: "alice".to_string(),
            password: hashed,
        };

        assert!(user.verify_password("Secret123"));
        assert!(!user.verify_password("secret123"));
    }

    #[test]
    fn test_verify_against_garbage_hash() {
        let user = User {
            user_id: 1,
            username: "alice".to_string(),
            password: "not-a-hash".to_string(),
        };
        assert!(!user.verify_password("anything"));
    }
}

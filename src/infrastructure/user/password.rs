//! Password hashing utilities using Argon2

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHasher as Argon2PasswordHasher, SaltString},
    Argon2,
};
use std::fmt::Debug;

use crate::domain::DomainError;

/// Trait for one-way password hashing. There is no verify counterpart:
/// nothing in this system compares a password against a stored digest.
pub trait PasswordHasher: Send + Sync + Debug {
    /// Hash a plaintext password into a salted digest
    fn hash(&self, password: &str) -> Result<String, DomainError>;
}

/// Argon2-based password hasher
#[derive(Debug, Clone, Default)]
pub struct Argon2Hasher;

impl Argon2Hasher {
    /// Create a new Argon2 hasher
    pub fn new() -> Self {
        Self
    }
}

impl PasswordHasher for Argon2Hasher {
    fn hash(&self, password: &str) -> Result<String, DomainError> {
        let salt = SaltString::generate(&mut OsRng);
        let argon2 = Argon2::default();

        argon2
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| DomainError::internal(format!("Failed to hash password: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use argon2::password_hash::PasswordHash;

    #[test]
    fn test_hash_is_not_plaintext() {
        let hasher = Argon2Hasher::new();

        let hash = hasher.hash("secret").unwrap();

        assert_ne!(hash, "secret");
        assert!(hash.starts_with("$argon2"));
    }

    #[test]
    fn test_hash_is_unique() {
        let hasher = Argon2Hasher::new();
        let password = "my_secure_password";

        let hash1 = hasher.hash(password).unwrap();
        let hash2 = hasher.hash(password).unwrap();

        // Hashes should be different due to random salt
        assert_ne!(hash1, hash2);
    }

    #[test]
    fn test_hash_is_valid_phc_string() {
        let hasher = Argon2Hasher::new();

        let hash = hasher.hash("secret").unwrap();

        assert!(PasswordHash::new(&hash).is_ok());
    }

    #[test]
    fn test_empty_password() {
        let hasher = Argon2Hasher::new();

        let hash = hasher.hash("").unwrap();

        assert!(hash.starts_with("$argon2"));
    }
}

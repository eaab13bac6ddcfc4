//! User repository trait

use async_trait::async_trait;
use std::fmt::Debug;

use super::entity::{NewUser, User, UserId};
use crate::domain::DomainError;

/// Repository trait for user storage
#[async_trait]
pub trait UserRepository: Send + Sync + Debug {
    /// List every stored user, ordered by id
    async fn list_all(&self) -> Result<Vec<User>, DomainError>;

    /// Get a user by id
    async fn get(&self, id: UserId) -> Result<Option<User>, DomainError>;

    /// Insert a new user; storage assigns the id
    async fn create(&self, record: NewUser) -> Result<User, DomainError>;

    /// Overwrite name, email and password hash of an existing user
    async fn update(&self, id: UserId, record: NewUser) -> Result<User, DomainError>;

    /// Remove a user; returns false when the id was absent
    async fn delete(&self, id: UserId) -> Result<bool, DomainError>;

    /// Count stored users
    async fn count(&self) -> Result<usize, DomainError>;

    /// Check whether a user id exists
    async fn exists(&self, id: UserId) -> Result<bool, DomainError> {
        Ok(self.get(id).await?.is_some())
    }
}

//! User service bridging the HTTP surface and the repository

use std::sync::Arc;

use crate::domain::user::{NewUser, User, UserId, UserRepository};
use crate::domain::DomainError;

use super::password::PasswordHasher;

/// Request for creating a new user
#[derive(Debug, Clone)]
pub struct CreateUserRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Request for overwriting an existing user. The password is always taken
/// as submitted and re-hashed; there is no partial update.
#[derive(Debug, Clone)]
pub struct UpdateUserRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// User service: hashes passwords and delegates persistence to the
/// repository. Presence validation is a create-handler concern and
/// deliberately does not live here.
#[derive(Debug)]
pub struct UserService<R: UserRepository, H: PasswordHasher> {
    repository: Arc<R>,
    hasher: Arc<H>,
}

impl<R: UserRepository, H: PasswordHasher> UserService<R, H> {
    /// Create a new user service
    pub fn new(repository: Arc<R>, hasher: Arc<H>) -> Self {
        Self { repository, hasher }
    }

    /// List every stored user
    pub async fn list(&self) -> Result<Vec<User>, DomainError> {
        self.repository.list_all().await
    }

    /// Get a user by id
    pub async fn get(&self, id: UserId) -> Result<User, DomainError> {
        self.repository
            .get(id)
            .await?
            .ok_or_else(|| DomainError::not_found(format!("User '{}' not found", id)))
    }

    /// Hash the submitted password and insert a new user
    pub async fn create(&self, request: CreateUserRequest) -> Result<User, DomainError> {
        let password_hash = self.hasher.hash(&request.password)?;

        self.repository
            .create(NewUser::new(request.name, request.email, password_hash))
            .await
    }

    /// Overwrite an existing user with the submitted fields, hashing the
    /// password anew
    pub async fn update(&self, id: UserId, request: UpdateUserRequest) -> Result<User, DomainError> {
        let password_hash = self.hasher.hash(&request.password)?;

        self.repository
            .update(id, NewUser::new(request.name, request.email, password_hash))
            .await
    }

    /// Delete a user by id
    pub async fn delete(&self, id: UserId) -> Result<(), DomainError> {
        if !self.repository.delete(id).await? {
            return Err(DomainError::not_found(format!("User '{}' not found", id)));
        }

        Ok(())
    }

    /// Count stored users
    pub async fn count(&self) -> Result<usize, DomainError> {
        self.repository.count().await
    }
}

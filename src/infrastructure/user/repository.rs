//! In-memory user repository implementation

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI32, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::user::{NewUser, User, UserId, UserRepository};
use crate::domain::DomainError;

/// In-memory implementation of UserRepository. Ids are assigned from a
/// monotonically increasing counter, matching the storage-assigned ids of
/// the PostgreSQL implementation.
#[derive(Debug)]
pub struct InMemoryUserRepository {
    users: Arc<RwLock<BTreeMap<i32, User>>>,
    next_id: AtomicI32,
}

impl InMemoryUserRepository {
    /// Create a new empty repository
    pub fn new() -> Self {
        Self {
            users: Arc::new(RwLock::new(BTreeMap::new())),
            next_id: AtomicI32::new(1),
        }
    }
}

impl Default for InMemoryUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn list_all(&self) -> Result<Vec<User>, DomainError> {
        let users = self.users.read().await;
        Ok(users.values().cloned().collect())
    }

    async fn get(&self, id: UserId) -> Result<Option<User>, DomainError> {
        let users = self.users.read().await;
        Ok(users.get(&id.as_i32()).cloned())
    }

    async fn create(&self, record: NewUser) -> Result<User, DomainError> {
        let mut users = self.users.write().await;

        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let user = User::new(
            UserId::new(id),
            record.name,
            record.email,
            record.password_hash,
        );

        users.insert(id, user.clone());

        Ok(user)
    }

    async fn update(&self, id: UserId, record: NewUser) -> Result<User, DomainError> {
        let mut users = self.users.write().await;

        if !users.contains_key(&id.as_i32()) {
            return Err(DomainError::not_found(format!("User '{}' not found", id)));
        }

        let user = User::new(id, record.name, record.email, record.password_hash);
        users.insert(id.as_i32(), user.clone());

        Ok(user)
    }

    async fn delete(&self, id: UserId) -> Result<bool, DomainError> {
        let mut users = self.users.write().await;
        Ok(users.remove(&id.as_i32()).is_some())
    }

    async fn count(&self) -> Result<usize, DomainError> {
        let users = self.users.read().await;
        Ok(users.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, email: &str) -> NewUser {
        NewUser::new(name, email, "digest")
    }

    #[tokio::test]
    async fn test_create_assigns_sequential_ids() {
        let repo = InMemoryUserRepository::new();

        let first = repo.create(record("Ana", "ana@x.com")).await.unwrap();
        let second = repo.create(record("Bia", "bia@x.com")).await.unwrap();

        assert_eq!(first.id(), UserId::new(1));
        assert_eq!(second.id(), UserId::new(2));
    }

    #[tokio::test]
    async fn test_create_and_get() {
        let repo = InMemoryUserRepository::new();

        let created = repo.create(record("Ana", "ana@x.com")).await.unwrap();

        let retrieved = repo.get(created.id()).await.unwrap();
        assert_eq!(retrieved, Some(created));
    }

    #[tokio::test]
    async fn test_get_absent_id() {
        let repo = InMemoryUserRepository::new();

        let retrieved = repo.get(UserId::new(99)).await.unwrap();
        assert!(retrieved.is_none());
    }

    #[tokio::test]
    async fn test_list_all_preserves_insertion_order() {
        let repo = InMemoryUserRepository::new();

        repo.create(record("Ana", "ana@x.com")).await.unwrap();
        repo.create(record("Bia", "bia@x.com")).await.unwrap();
        repo.create(record("Caio", "caio@x.com")).await.unwrap();

        let all = repo.list_all().await.unwrap();
        let names: Vec<&str> = all.iter().map(|u| u.name()).collect();

        assert_eq!(names, vec!["Ana", "Bia", "Caio"]);
    }

    #[tokio::test]
    async fn test_update_overwrites_all_fields() {
        let repo = InMemoryUserRepository::new();

        let created = repo.create(record("Ana", "ana@x.com")).await.unwrap();

        let updated = repo
            .update(created.id(), NewUser::new("Ana Maria", "am@x.com", "digest2"))
            .await
            .unwrap();

        assert_eq!(updated.id(), created.id());
        assert_eq!(updated.name(), "Ana Maria");
        assert_eq!(updated.email(), "am@x.com");
        assert_eq!(updated.password_hash(), "digest2");
    }

    #[tokio::test]
    async fn test_update_absent_id() {
        let repo = InMemoryUserRepository::new();

        let result = repo
            .update(UserId::new(99), record("Ana", "ana@x.com"))
            .await;

        assert!(matches!(result, Err(DomainError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_delete() {
        let repo = InMemoryUserRepository::new();

        let created = repo.create(record("Ana", "ana@x.com")).await.unwrap();

        assert!(repo.delete(created.id()).await.unwrap());
        assert!(repo.get(created.id()).await.unwrap().is_none());
        assert!(!repo.delete(created.id()).await.unwrap());
    }

    #[tokio::test]
    async fn test_count() {
        let repo = InMemoryUserRepository::new();

        assert_eq!(repo.count().await.unwrap(), 0);

        repo.create(record("Ana", "ana@x.com")).await.unwrap();
        repo.create(record("Bia", "bia@x.com")).await.unwrap();

        assert_eq!(repo.count().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_exists() {
        let repo = InMemoryUserRepository::new();

        let created = repo.create(record("Ana", "ana@x.com")).await.unwrap();

        assert!(repo.exists(created.id()).await.unwrap());
        assert!(!repo.exists(UserId::new(99)).await.unwrap());
    }
}

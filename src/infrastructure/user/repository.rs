//! In-memory user repository implementation

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::user::{NewUser, User, UserId, UserRepository};
use crate::domain::DomainError;

#[derive(Debug)]
struct UserTable {
    next_id: i64,
    /// Keyed by ID; IDs are handed out in increasing order so key order is
    /// insertion order
    users: BTreeMap<UserId, User>,
}

impl Default for UserTable {
    fn default() -> Self {
        Self {
            next_id: 1,
            users: BTreeMap::new(),
        }
    }
}

/// In-memory implementation of UserRepository
#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    table: Arc<RwLock<UserTable>>,
}

impl InMemoryUserRepository {
    /// Create a new empty repository
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, user: NewUser) -> Result<User, DomainError> {
        let mut table = self.table.write().await;

        let id = UserId::new(table.next_id);
        table.next_id = table
            .next_id
            .checked_add(1)
            .ok_or_else(|| DomainError::storage("User ID space exhausted"))?;

        let user = user.into_user(id);
        table.users.insert(id, user.clone());

        Ok(user)
    }

    async fn get(&self, id: UserId) -> Result<Option<User>, DomainError> {
        let table = self.table.read().await;
        Ok(table.users.get(&id).cloned())
    }

    async fn list(&self) -> Result<Vec<User>, DomainError> {
        let table = self.table.read().await;
        Ok(table.users.values().cloned().collect())
    }

    async fn count(&self) -> Result<usize, DomainError> {
        let table = self.table.read().await;
        Ok(table.users.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_user(name: &str, email: &str) -> NewUser {
        NewUser::new(name, email).unwrap()
    }

    #[tokio::test]
    async fn test_create_assigns_sequential_ids() {
        let repo = InMemoryUserRepository::new();

        let first = repo.create(new_user("First", "first@example.com")).await.unwrap();
        let second = repo.create(new_user("Second", "second@example.com")).await.unwrap();

        assert_eq!(first.id(), UserId::new(1));
        assert_eq!(second.id(), UserId::new(2));
    }

    #[tokio::test]
    async fn test_create_and_get() {
        let repo = InMemoryUserRepository::new();
        let user = repo
            .create(new_user("Test User", "test@example.com"))
            .await
            .unwrap();

        let retrieved = repo.get(user.id()).await.unwrap();
        assert_eq!(retrieved, Some(user));
    }

    #[tokio::test]
    async fn test_get_missing() {
        let repo = InMemoryUserRepository::new();

        let retrieved = repo.get(UserId::new(1)).await.unwrap();
        assert!(retrieved.is_none());
    }

    #[tokio::test]
    async fn test_list_empty() {
        let repo = InMemoryUserRepository::new();

        let users = repo.list().await.unwrap();
        assert!(users.is_empty());
        assert_eq!(repo.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_list_in_insertion_order() {
        let repo = InMemoryUserRepository::new();

        for name in ["Carol", "Alice", "Bob"] {
            let email = format!("{}@example.com", name.to_lowercase());
            repo.create(new_user(name, &email)).await.unwrap();
        }

        let names: Vec<String> = repo
            .list()
            .await
            .unwrap()
            .iter()
            .map(|u| u.name().to_string())
            .collect();

        assert_eq!(names, vec!["Carol", "Alice", "Bob"]);
        assert_eq!(repo.count().await.unwrap(), 3);
    }
}

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::account::errors::AccountError;
use crate::account::models::Account;
use crate::account::models::Identity;
use crate::account::ports::AccountRepository;

/// Process-lifetime account storage.
///
/// Inserts hold the write lock across the existence check and the insert;
/// lookups share the read lock and never observe a half-written entry.
#[derive(Debug, Clone, Default)]
pub struct InMemoryAccountRepository {
    accounts: Arc<RwLock<HashMap<Identity, Account>>>,
}

impl InMemoryAccountRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of registered accounts.
    pub async fn len(&self) -> usize {
        self.accounts.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.accounts.read().await.is_empty()
    }
}

#[async_trait]
impl AccountRepository for InMemoryAccountRepository {
    async fn insert(&self, account: Account) -> Result<Account, AccountError> {
        let mut accounts = self.accounts.write().await;

        match accounts.entry(account.identity.clone()) {
            Entry::Occupied(entry) => {
                tracing::debug!(identity = %entry.key(), "Identity already registered");
                Err(AccountError::AlreadyExists(entry.key().to_string()))
            }
            Entry::Vacant(entry) => Ok(entry.insert(account).clone()),
        }
    }

    async fn find_by_identity(&self, identity: &Identity) -> Result<Option<Account>, AccountError> {
        Ok(self.accounts.read().await.get(identity).cloned())
    }
}

#[cfg(test)]
mod tests {
    use tokio::task::JoinSet;

    use super::*;
    use crate::account::models::Secret;

    fn account(identity: &str, secret: &str) -> Account {
        Account {
            identity: Identity::new(identity.to_string()).unwrap(),
            secret: Secret::new(secret.to_string()),
        }
    }

    #[tokio::test]
    async fn test_insert_and_find() {
        let repository = InMemoryAccountRepository::new();
        assert!(repository.is_empty().await);

        repository.insert(account("a@x.com", "p1")).await.unwrap();
        assert!(!repository.is_empty().await);

        let identity = Identity::new("a@x.com".to_string()).unwrap();
        let found = repository.find_by_identity(&identity).await.unwrap();
        assert_eq!(found, Some(account("a@x.com", "p1")));

        let other = Identity::new("A@x.com".to_string()).unwrap();
        assert_eq!(repository.find_by_identity(&other).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_duplicate_insert_keeps_original() {
        let repository = InMemoryAccountRepository::new();

        repository.insert(account("a@x.com", "p1")).await.unwrap();
        let result = repository.insert(account("a@x.com", "p2")).await;

        assert_eq!(
            result,
            Err(AccountError::AlreadyExists("a@x.com".to_string()))
        );
        assert_eq!(repository.len().await, 1);

        let identity = Identity::new("a@x.com".to_string()).unwrap();
        let stored = repository.find_by_identity(&identity).await.unwrap().unwrap();
        assert!(stored.secret.matches(&Secret::new("p1".to_string())));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_inserts_same_identity() {
        let repository = InMemoryAccountRepository::new();
        let attempts = 64;

        let mut tasks = JoinSet::new();
        for i in 0..attempts {
            let repository = repository.clone();
            tasks.spawn(async move {
                repository
                    .insert(account("race@x.com", &format!("secret-{i}")))
                    .await
            });
        }

        let mut successes = 0;
        let mut conflicts = 0;
        while let Some(result) = tasks.join_next().await {
            match result.expect("task panicked") {
                Ok(_) => successes += 1,
                Err(AccountError::AlreadyExists(_)) => conflicts += 1,
                Err(other) => panic!("unexpected error: {other}"),
            }
        }

        assert_eq!(successes, 1);
        assert_eq!(conflicts, attempts - 1);
        assert_eq!(repository.len().await, 1);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_inserts_distinct_identities() {
        let repository = InMemoryAccountRepository::new();

        let mut tasks = JoinSet::new();
        for i in 0..32 {
            let repository = repository.clone();
            tasks.spawn(async move {
                repository
                    .insert(account(&format!("user{i}@x.com"), "p"))
                    .await
            });
        }

        while let Some(result) = tasks.join_next().await {
            assert!(result.expect("task panicked").is_ok());
        }
        assert_eq!(repository.len().await, 32);
    }
}

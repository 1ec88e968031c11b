use std::sync::Arc;

use async_trait::async_trait;

use crate::account::errors::AccountError;
use crate::account::models::Account;
use crate::account::models::Credentials;
use crate::account::models::Identity;
use crate::account::ports::AccountRepository;
use crate::account::ports::CredentialStorePort;

/// Domain service implementation for credential store operations.
///
/// Concrete implementation of CredentialStorePort with dependency injection.
///
/// Secrets are compared as plain strings. Swapping in a salted one-way hash only
/// changes `register` (hash before insert) and `verify` (hash comparison).
pub struct AccountService<AR>
where
    AR: AccountRepository,
{
    repository: Arc<AR>,
}

impl<AR> AccountService<AR>
where
    AR: AccountRepository,
{
    /// Create a new account service with an injected repository.
    pub fn new(repository: Arc<AR>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<AR> CredentialStorePort for AccountService<AR>
where
    AR: AccountRepository,
{
    async fn register(&self, credentials: Credentials) -> Result<Account, AccountError> {
        let account = self.repository.insert(credentials.into()).await?;

        tracing::info!(identity = %account.identity, "Account registered");

        Ok(account)
    }

    async fn verify(&self, credentials: &Credentials) -> Result<Account, AccountError> {
        let account = self.lookup(&credentials.identity).await?;

        if !account.secret.matches(&credentials.secret) {
            return Err(AccountError::Mismatch);
        }

        Ok(account)
    }

    async fn lookup(&self, identity: &Identity) -> Result<Account, AccountError> {
        self.repository
            .find_by_identity(identity)
            .await?
            .ok_or_else(|| AccountError::NotFound(identity.to_string()))
    }
}

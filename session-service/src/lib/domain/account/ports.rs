use async_trait::async_trait;

use crate::account::errors::AccountError;
use crate::account::models::Account;
use crate::account::models::Credentials;
use crate::account::models::Identity;

/// Port for credential store operations.
#[async_trait]
pub trait CredentialStorePort: Send + Sync + 'static {
    /// Register a new account.
    ///
    /// # Arguments
    /// * `credentials` - Identity and secret to store
    ///
    /// # Returns
    /// Registered account
    ///
    /// # Errors
    /// * `AlreadyExists` - Identity is already registered; nothing is changed
    /// * `Storage` - Storage operation failed
    async fn register(&self, credentials: Credentials) -> Result<Account, AccountError>;

    /// Check presented credentials against the stored account.
    ///
    /// # Arguments
    /// * `credentials` - Identity and secret presented by the caller
    ///
    /// # Returns
    /// Matching account
    ///
    /// # Errors
    /// * `NotFound` - Identity is not registered
    /// * `Mismatch` - Stored secret differs from the presented one
    /// * `Storage` - Storage operation failed
    async fn verify(&self, credentials: &Credentials) -> Result<Account, AccountError>;

    /// Resolve the current account for an identity.
    ///
    /// # Arguments
    /// * `identity` - Identity to look up
    ///
    /// # Returns
    /// Account entity
    ///
    /// # Errors
    /// * `NotFound` - Identity is not registered
    /// * `Storage` - Storage operation failed
    async fn lookup(&self, identity: &Identity) -> Result<Account, AccountError>;
}

/// Persistence operations for accounts.
#[async_trait]
pub trait AccountRepository: Send + Sync + 'static {
    /// Persist a new account unless its identity is taken.
    ///
    /// The existence check and the insert form one atomic step: of any number of
    /// concurrent calls for the same identity, exactly one succeeds.
    ///
    /// # Arguments
    /// * `account` - Account to create
    ///
    /// # Returns
    /// Created account
    ///
    /// # Errors
    /// * `AlreadyExists` - Identity is already registered
    /// * `Storage` - Storage operation failed
    async fn insert(&self, account: Account) -> Result<Account, AccountError>;

    /// Retrieve account by identity.
    ///
    /// # Arguments
    /// * `identity` - Identity to search for
    ///
    /// # Returns
    /// Optional account (None if not found)
    ///
    /// # Errors
    /// * `Storage` - Storage operation failed
    async fn find_by_identity(&self, identity: &Identity) -> Result<Option<Account>, AccountError>;
}

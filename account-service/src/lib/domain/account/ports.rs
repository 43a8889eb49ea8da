use async_trait::async_trait;

use crate::account::errors::AccountError;
use crate::account::models::Account;
use crate::account::models::AccountId;
use crate::account::models::ChangePasswordCommand;
use crate::account::models::LoginCommand;
use crate::account::models::LoginOutcome;
use crate::account::models::RegisterCommand;
use crate::account::models::Username;

/// Port for account domain service operations.
///
/// Every operation validates its command before touching the store, and
/// performs at most one write, as its last step.
#[async_trait]
pub trait AccountServicePort: Send + Sync + 'static {
    /// Create a new account. No token is issued; the caller logs in separately.
    ///
    /// # Errors
    /// * `ValidationFailed` - Command failed field rules
    /// * `UsernameTaken` - Normalized username already registered
    /// * `Password` / `DatabaseError` / `Unknown` - Internal fault
    async fn register(&self, command: RegisterCommand) -> Result<Account, AccountError>;

    /// Verify credentials and issue a session token bound to the account id.
    ///
    /// # Errors
    /// * `ValidationFailed` - Username or password missing
    /// * `InvalidCredentials` - Unknown username or wrong password
    /// * `Password` / `Token` / `DatabaseError` / `Unknown` - Internal fault
    async fn login(&self, command: LoginCommand) -> Result<LoginOutcome, AccountError>;

    /// Replace the password of the account identified by a verified token.
    ///
    /// # Arguments
    /// * `account_id` - Identity resolved by the token middleware
    /// * `command` - Claimed username, old and new password
    ///
    /// # Errors
    /// * `ValidationFailed` - Command failed field rules
    /// * `IdentityMismatch` - Claimed username is not the authenticated account's
    /// * `InvalidCredentials` - Old password wrong, or account no longer exists
    /// * `Password` / `DatabaseError` / `Unknown` - Internal fault
    async fn change_password(
        &self,
        account_id: &AccountId,
        command: ChangePasswordCommand,
    ) -> Result<(), AccountError>;
}

/// Credential store.
///
/// Usernames arrive already normalized. Implementations must enforce
/// username uniqueness atomically on insert.
#[async_trait]
pub trait AccountRepository: Send + Sync + 'static {
    /// Persist a new account.
    ///
    /// # Errors
    /// * `UsernameTaken` - Uniqueness constraint rejected the insert
    /// * `DatabaseError` - Database operation failed
    async fn create(&self, account: Account) -> Result<Account, AccountError>;

    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn find_by_id(&self, id: &AccountId) -> Result<Option<Account>, AccountError>;

    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn find_by_username(&self, username: &Username)
        -> Result<Option<Account>, AccountError>;

    /// Replace the stored hash wholesale.
    ///
    /// # Errors
    /// * `InvalidCredentials` - No account with this id
    /// * `DatabaseError` - Database operation failed
    async fn update_password_hash(
        &self,
        id: &AccountId,
        password_hash: &str,
    ) -> Result<(), AccountError>;
}

use std::sync::Arc;

use async_trait::async_trait;
use auth::AuthenticationError;
use auth::Authenticator;
use chrono::Utc;

use crate::account::errors::AccountError;
use crate::account::models::Account;
use crate::account::models::AccountId;
use crate::account::models::ChangePasswordCommand;
use crate::account::models::LoginCommand;
use crate::account::models::LoginOutcome;
use crate::account::models::RegisterCommand;
use crate::account::models::Username;
use crate::account::ports::AccountRepository;
use crate::account::ports::AccountServicePort;
use crate::account::validation::ValidatedCommand;

/// Domain service implementation for account operations.
///
/// Argon2 work runs on the blocking pool so a slow hash only holds up the
/// request that asked for it.
pub struct AccountService<AR>
where
    AR: AccountRepository,
{
    repository: Arc<AR>,
    authenticator: Arc<Authenticator>,
}

impl<AR> AccountService<AR>
where
    AR: AccountRepository,
{
    /// Create a new account service with injected dependencies.
    ///
    /// # Arguments
    /// * `repository` - Credential store
    /// * `authenticator` - Password hasher and token issuer, keyed by the server secret
    pub fn new(repository: Arc<AR>, authenticator: Arc<Authenticator>) -> Self {
        Self {
            repository,
            authenticator,
        }
    }

    async fn hash_password(&self, password: String) -> Result<String, AccountError> {
        let authenticator = Arc::clone(&self.authenticator);

        tokio::task::spawn_blocking(move || authenticator.hash_password(&password))
            .await
            .map_err(|e| AccountError::Unknown(format!("Hashing task failed: {}", e)))?
            .map_err(AccountError::from)
    }

    async fn verify_password(
        &self,
        password: String,
        password_hash: String,
    ) -> Result<bool, AccountError> {
        let authenticator = Arc::clone(&self.authenticator);

        tokio::task::spawn_blocking(move || authenticator.verify_password(&password, &password_hash))
            .await
            .map_err(|e| AccountError::Unknown(format!("Verification task failed: {}", e)))?
            .map_err(AccountError::from)
    }
}

#[async_trait]
impl<AR> AccountServicePort for AccountService<AR>
where
    AR: AccountRepository,
{
    async fn register(&self, command: RegisterCommand) -> Result<Account, AccountError> {
        command.check()?;

        let username = Username::new(&command.username);

        // Fast path only; the store's unique constraint settles concurrent registrations.
        if self.repository.find_by_username(&username).await?.is_some() {
            return Err(AccountError::UsernameTaken(username.to_string()));
        }

        let password_hash = self.hash_password(command.password).await?;

        let account = Account {
            id: AccountId::new(),
            name: command.name,
            username,
            password_hash,
            created_at: Utc::now(),
        };

        let created = self.repository.create(account).await?;

        tracing::info!(account_id = %created.id, username = %created.username, "Account registered");

        Ok(created)
    }

    async fn login(&self, command: LoginCommand) -> Result<LoginOutcome, AccountError> {
        command.check()?;

        let username = Username::new(&command.username);

        let account = self
            .repository
            .find_by_username(&username)
            .await?
            .ok_or(AccountError::InvalidCredentials)?;

        let authenticator = Arc::clone(&self.authenticator);
        let password = command.password;
        let password_hash = account.password_hash.clone();
        let account_id = account.id.to_string();

        let result = tokio::task::spawn_blocking(move || {
            authenticator.authenticate(&password, &password_hash, &account_id)
        })
        .await
        .map_err(|e| AccountError::Unknown(format!("Authentication task failed: {}", e)))?
        .map_err(|e| match e {
            AuthenticationError::InvalidCredentials => AccountError::InvalidCredentials,
            AuthenticationError::PasswordError(err) => AccountError::Password(err),
            AuthenticationError::JwtError(err) => AccountError::Token(err),
        })?;

        tracing::info!(account_id = %account.id, "Login succeeded");

        Ok(LoginOutcome {
            username: account.username,
            token: result.access_token,
        })
    }

    async fn change_password(
        &self,
        account_id: &AccountId,
        command: ChangePasswordCommand,
    ) -> Result<(), AccountError> {
        command.check()?;

        let username = Username::new(&command.username);

        let account = self
            .repository
            .find_by_id(account_id)
            .await?
            .ok_or(AccountError::InvalidCredentials)?;

        if account.username != username {
            tracing::warn!(
                account_id = %account.id,
                claimed_username = %username,
                "Password change for a username the token does not own"
            );
            return Err(AccountError::IdentityMismatch(username.to_string()));
        }

        if !self
            .verify_password(command.old_password, account.password_hash)
            .await?
        {
            return Err(AccountError::InvalidCredentials);
        }

        let password_hash = self.hash_password(command.new_password).await?;

        self.repository
            .update_password_hash(&account.id, &password_hash)
            .await?;

        tracing::info!(account_id = %account.id, "Password changed");

        Ok(())
    }
}

use std::fmt;

use chrono::DateTime;
use chrono::Utc;
use uuid::Uuid;
use validator::Validate;

use crate::account::errors::AccountIdError;
use crate::account::validation::ValidatedCommand;

/// Identity record.
///
/// The only persisted entity. `password_hash` never leaves the store and
/// the service; it is not part of any response.
#[derive(Debug, Clone)]
pub struct Account {
    pub id: AccountId,
    pub name: String,
    pub username: Username,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

/// Account unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AccountId(pub Uuid);

impl AccountId {
    /// Generate a new random account ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse an account ID from string.
    ///
    /// # Errors
    /// * `InvalidFormat` - String is not a valid UUID
    pub fn from_string(s: &str) -> Result<Self, AccountIdError> {
        Uuid::parse_str(s)
            .map(AccountId)
            .map_err(|e| AccountIdError::InvalidFormat(e.to_string()))
    }
}

impl Default for AccountId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Username normalized to lowercase.
///
/// Construction is the only way in, so every stored value and every lookup
/// key goes through the same normalization. Length rules live on the
/// commands, not here: a login with a short username is simply unknown.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Username(String);

impl Username {
    pub fn new(raw: &str) -> Self {
        Self(raw.to_lowercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Command to register a new account.
#[derive(Validate)]
pub struct RegisterCommand {
    #[validate(length(min = 3, message = "Enter a valid name"))]
    pub name: String,

    #[validate(length(min = 4, message = "Username must be at least 4 characters"))]
    pub username: String,

    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    pub password: String,
}

impl RegisterCommand {
    pub fn new(name: String, username: String, password: String) -> Self {
        Self {
            name,
            username,
            password,
        }
    }
}

impl ValidatedCommand for RegisterCommand {
    const FIELDS: &'static [(&'static str, &'static str)] = &[
        ("name", "name"),
        ("username", "username"),
        ("password", "password"),
    ];
}

/// Command to authenticate with username and password.
#[derive(Validate)]
pub struct LoginCommand {
    #[validate(length(min = 1, message = "Username cannot be blank"))]
    pub username: String,

    #[validate(length(min = 1, message = "Password cannot be blank"))]
    pub password: String,
}

impl LoginCommand {
    pub fn new(username: String, password: String) -> Self {
        Self { username, password }
    }
}

impl ValidatedCommand for LoginCommand {
    const FIELDS: &'static [(&'static str, &'static str)] =
        &[("username", "username"), ("password", "password")];
}

/// Command to replace the password of the authenticated account.
#[derive(Validate)]
pub struct ChangePasswordCommand {
    #[validate(length(min = 4, message = "Username must be at least 4 characters"))]
    pub username: String,

    #[validate(length(
        min = 6,
        message = "Password cannot be blank/less than 6 characters"
    ))]
    pub old_password: String,

    #[validate(length(
        min = 6,
        message = "Password cannot be blank/less than 6 characters"
    ))]
    pub new_password: String,
}

impl ChangePasswordCommand {
    pub fn new(username: String, old_password: String, new_password: String) -> Self {
        Self {
            username,
            old_password,
            new_password,
        }
    }
}

impl ValidatedCommand for ChangePasswordCommand {
    const FIELDS: &'static [(&'static str, &'static str)] = &[
        ("username", "username"),
        ("old_password", "oldpassword"),
        ("new_password", "newpassword"),
    ];
}

// Commands carry plaintext passwords; keep them out of logs.
impl fmt::Debug for RegisterCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegisterCommand")
            .field("name", &self.name)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

impl fmt::Debug for LoginCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginCommand")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

impl fmt::Debug for ChangePasswordCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChangePasswordCommand")
            .field("username", &self.username)
            .field("old_password", &"<redacted>")
            .field("new_password", &"<redacted>")
            .finish()
    }
}

/// Successful login: the normalized username and a signed session token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginOutcome {
    pub username: Username,
    pub token: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_username_is_lowercased() {
        assert_eq!(Username::new("AnnL").as_str(), "annl");
        assert_eq!(Username::new("ANNL"), Username::new("annl"));
    }

    #[test]
    fn test_username_keeps_other_characters() {
        assert_eq!(Username::new("Ann.Lee_01").as_str(), "ann.lee_01");
    }

    #[test]
    fn test_account_id_round_trip() {
        let id = AccountId::new();

        let parsed = AccountId::from_string(&id.to_string()).unwrap();

        assert_eq!(parsed, id);
    }

    #[test]
    fn test_account_id_rejects_garbage() {
        assert!(matches!(
            AccountId::from_string("not-a-uuid"),
            Err(AccountIdError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_debug_redacts_passwords() {
        let command = ChangePasswordCommand::new(
            "annl".to_string(),
            "secret1".to_string(),
            "newpass1".to_string(),
        );

        let rendered = format!("{:?}", command);

        assert!(!rendered.contains("secret1"));
        assert!(!rendered.contains("newpass1"));
        assert!(rendered.contains("annl"));
    }
}

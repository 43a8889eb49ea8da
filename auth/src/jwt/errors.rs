use thiserror::Error;

/// Error type for token operations.
#[derive(Debug, Clone, Error)]
pub enum JwtError {
    #[error("Failed to encode token: {0}")]
    EncodingFailed(String),

    #[error("Token is expired")]
    TokenExpired,

    /// Bad signature, malformed structure or undecodable payload.
    #[error("Token is invalid: {0}")]
    InvalidToken(String),
}

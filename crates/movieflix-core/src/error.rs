use movieflix_config::StoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Passwords do not match")]
    PasswordMismatch,

    #[error("Password must be at least 6 characters")]
    PasswordTooShort,

    #[error("User with this email already exists")]
    UserExists,

    /// Unknown email and wrong password collapse to this one message so a
    /// caller cannot tell which part failed.
    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("credential hashing failed: {0}")]
    Hash(String),
}

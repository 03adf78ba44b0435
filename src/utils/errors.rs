//! Error types for jobtoken
//!
//! All error types use thiserror for clean error handling.
//! SECURITY: Error messages MUST NOT contain passwords or credential blobs.

/// Top-level error type for token resolution
#[derive(Debug, thiserror::Error)]
pub enum ResolveError {
    #[error("empty account specifier")]
    EmptySpecifier,

    #[error("invalid account specifier `{0}`")]
    InvalidSpecifier(String),

    #[error("failed to retrieve credential for account `{0}`")]
    CredentialLookup(String, #[source] CredentialError),

    #[error("failed to decode credential for account `{0}`")]
    CredentialDecode(String, #[source] SecretDecodeError),

    #[error("failed to logon account `{0}`")]
    Logon(String, #[source] TokenError),

    #[error("failed to open current process token")]
    TokenOpen(#[source] TokenError),
}

/// Errors from credential storage operations
#[derive(Debug, thiserror::Error)]
pub enum CredentialError {
    #[error("credential not found for target `{0}`")]
    NotFound(String),

    #[error("credential store error: {0}")]
    Platform(String),
}

/// Errors decoding a stored credential blob into password text
#[derive(Debug, thiserror::Error)]
pub enum SecretDecodeError {
    #[error("credential blob length {0} is not a whole number of UTF-16 units")]
    OddLength(usize),

    #[error("credential blob is not valid UTF-16")]
    InvalidUtf16,
}

/// A native OS failure, preserved as code + message
///
/// Causes from the OS primitives are opaque to this crate; they are
/// wrapped, never interpreted.
#[derive(Debug, thiserror::Error)]
pub enum TokenError {
    #[error("OS error {code:#010x}: {message}")]
    Os { code: i32, message: String },
}

#[cfg(windows)]
impl From<windows::core::Error> for TokenError {
    fn from(err: windows::core::Error) -> Self {
        TokenError::Os {
            code: err.code().0,
            message: err.message(),
        }
    }
}

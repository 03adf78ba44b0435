//! Platform-agnostic token acquisition traits

use crate::models::{LogonStrategy, SecureString, Token};
use crate::utils::TokenError;

/// The OS identity-exchange primitive
///
/// Exchanges identity material for an owned token handle. Implementations
/// must not retain the password beyond the call.
pub trait TokenIssuer: Send + Sync {
    /// Logon `username` in `domain` under the given strategy
    ///
    /// `password` is `None` for service accounts and passwordless
    /// interactive logons. An empty `domain` means an unqualified account.
    fn logon(
        &self,
        username: &str,
        domain: &str,
        password: Option<&SecureString>,
        strategy: LogonStrategy,
    ) -> Result<Token, TokenError>;
}

/// The OS token-query primitive for the calling process
pub trait ProcessTokenSource: Send + Sync {
    /// Open the current process's own token with full access rights
    fn open_current(&self) -> Result<Token, TokenError>;
}

//! Identity resolution (platform-agnostic)
//!
//! Orchestrates parsing, strategy selection, credential retrieval, and the
//! OS token exchange behind the [`CredentialStore`] and [`TokenIssuer`]
//! seams. Holds no state between calls; safe for concurrent use.

use crate::core::credential::CredentialStore;
use crate::core::logon::{ProcessTokenSource, TokenIssuer};
use crate::models::{AccountSpecifier, CredentialSource, SecureString, Token};
use crate::utils::{CredentialError, ResolveError};

/// Resolves an account specifier to an owned logon token
///
/// The caller exclusively owns the returned [`Token`] and is responsible
/// for releasing it; the resolver retains nothing after returning.
pub struct IdentityResolver<S, I> {
    store: S,
    issuer: I,
}

impl<S: CredentialStore, I: TokenIssuer> IdentityResolver<S, I> {
    /// Create a resolver over a credential store and a token issuer
    pub fn new(store: S, issuer: I) -> Self {
        IdentityResolver { store, issuer }
    }

    /// Resolve `specifier` (`DOMAIN\username` or `username`) to a token
    ///
    /// Accounts under the `localhost` domain require a generic credential
    /// stored under the full compound specifier; there is no fallback to a
    /// passwordless logon for that path. `NT AUTHORITY` accounts use the
    /// service logon with no password. Everything else is an interactive
    /// logon with no password.
    pub fn resolve(&self, specifier: &str) -> Result<Token, ResolveError> {
        let account = AccountSpecifier::parse(specifier)?;
        let plan = account.logon_plan();
        tracing::debug!(account = %account, strategy = ?plan.strategy, "resolving logon token");

        // Password material stays on this frame; SecureString wipes it on
        // return, error paths included.
        let password = match plan.credential {
            CredentialSource::Store => Some(self.retrieve_password(&account)?),
            CredentialSource::None => None,
        };

        self.issuer
            .logon(
                account.username(),
                account.domain(),
                password.as_ref(),
                plan.strategy,
            )
            .map_err(|err| ResolveError::Logon(account.as_str().to_string(), err))
    }

    fn retrieve_password(&self, account: &AccountSpecifier) -> Result<SecureString, ResolveError> {
        // Lookup key is the full original specifier, not the bare username.
        let target = account.as_str();
        let blob = self
            .store
            .retrieve(target)
            .map_err(|err| ResolveError::CredentialLookup(target.to_string(), err))?
            .ok_or_else(|| {
                ResolveError::CredentialLookup(
                    target.to_string(),
                    CredentialError::NotFound(target.to_string()),
                )
            })?;

        SecureString::from_utf16_blob(&blob)
            .map_err(|err| ResolveError::CredentialDecode(target.to_string(), err))
    }
}

/// Retrieves the calling process's own token as a fallback identity
pub struct CurrentProcessTokenProvider<P> {
    source: P,
}

impl<P: ProcessTokenSource> CurrentProcessTokenProvider<P> {
    /// Create a provider over a process token source
    pub fn new(source: P) -> Self {
        CurrentProcessTokenProvider { source }
    }

    /// Open the current process's token with full access rights
    ///
    /// Pure query: no secret material, no branching. Ownership of the
    /// returned token passes to the caller.
    pub fn current(&self) -> Result<Token, ResolveError> {
        self.source.open_current().map_err(ResolveError::TokenOpen)
    }
}

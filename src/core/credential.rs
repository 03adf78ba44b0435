//! Platform-agnostic credential storage trait

use crate::models::SecretBlob;
use crate::utils::CredentialError;

/// Platform-agnostic read access to a secure credential store
///
/// Implementations handle platform-specific secure storage (Windows
/// Credential Manager on the only tier-one target; test doubles elsewhere).
/// The store's own persistence format and encryption are its business, not
/// this crate's.
pub trait CredentialStore: Send + Sync {
    /// Retrieve the raw secret bytes stored under `target`
    ///
    /// For domain-qualified accounts the target is the full compound
    /// specifier (`localhost\alice`), never the bare username.
    ///
    /// # Returns
    /// * `Ok(Some(blob))` - a credential exists under `target`
    /// * `Ok(None)` - nothing stored under `target` (not an error)
    /// * `Err(CredentialError)` - the store could not be read
    ///
    /// # Security
    /// - MUST NOT log the returned bytes
    /// - Returned blobs are wiped on drop by [`SecretBlob`]
    fn retrieve(&self, target: &str) -> Result<Option<SecretBlob>, CredentialError>;
}

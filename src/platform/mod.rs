//! Platform-specific implementations (Windows only)
//!
//! All unsafe Windows API code is isolated here behind the seam traits
//! defined in `core`.

pub mod credman;
pub mod logon;

pub use credman::WindowsCredentialManager;
pub use logon::WindowsTokenIssuer;

use crate::core::{CurrentProcessTokenProvider, IdentityResolver};
use crate::models::Token;
use crate::utils::ResolveError;

/// Resolver wired to the native credential store and logon APIs
pub type NativeResolver = IdentityResolver<WindowsCredentialManager, WindowsTokenIssuer>;

/// Build a resolver over the Windows Credential Manager and `LogonUserW`
pub fn native_resolver() -> NativeResolver {
    IdentityResolver::new(WindowsCredentialManager::new(), WindowsTokenIssuer::new())
}

/// Open the current process's token as a fallback identity
pub fn current_process_token() -> Result<Token, ResolveError> {
    CurrentProcessTokenProvider::new(WindowsTokenIssuer::new()).current()
}

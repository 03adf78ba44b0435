//! jobtoken - logon token resolution for job-scoped Windows workloads
//!
//! Resolves an account specifier (`DOMAIN\username` or `username`) to an
//! owned OS security token under which an isolated workload executes, and
//! retrieves the current process's token as a fallback identity.
//!
//! Three acquisition paths, selected by the domain literal alone:
//! interactive domain/local accounts, `NT AUTHORITY` service accounts, and
//! `localhost` accounts whose password lives in the Windows Credential
//! Manager under the full specifier string.
//!
//! The core is platform-agnostic and fully testable off Windows through
//! the [`CredentialStore`], [`TokenIssuer`], and [`ProcessTokenSource`]
//! seams; the `platform` module provides the native implementations.

// Public modules
pub mod core;
pub mod models;
pub mod utils;

// Platform-specific modules
#[cfg(windows)]
pub mod platform;

// Re-export commonly used types
pub use crate::core::{
    CredentialStore, CurrentProcessTokenProvider, IdentityResolver, ProcessTokenSource,
    TokenIssuer,
};
pub use crate::models::{
    AccountSpecifier, CredentialSource, LogonPlan, LogonStrategy, RawToken, SecretBlob,
    SecureString, Token,
};
pub use crate::utils::{CredentialError, ResolveError, SecretDecodeError, TokenError};

#[cfg(windows)]
pub use crate::platform::{
    current_process_token, native_resolver, NativeResolver, WindowsCredentialManager,
    WindowsTokenIssuer,
};

//! # Domain Models
//!
//! Core data structures for account specifiers, secret material, and token
//! handles.
//!
//! ## Security Design
//!
//! The [`SecureString`] and [`SecretBlob`] types keep password material
//! memory-safe:
//! - Wiped on drop via `zeroize`, on every exit path including decode failures
//! - Never exposed through `Debug` or `Display`
//! - Scoped strictly to a single resolution call; nothing is cached
//!
//! [`Token`] models the resolved OS handle as a distinct owned resource:
//! not `Clone`, not `Copy`, released exactly once.
//!
//! ## Account Classification
//!
//! [`AccountSpecifier::logon_plan`] holds the complete domain-literal
//! mapping in one place: `NT AUTHORITY` selects the service-account path,
//! `localhost` selects the credential-store-backed path, anything else is a
//! plain interactive logon.

pub mod account;
pub mod secret;
pub mod token;

pub use account::{
    AccountSpecifier, CredentialSource, LogonPlan, LogonStrategy, SEPARATOR,
    SERVICE_ACCOUNT_DOMAIN, STORED_CREDENTIAL_DOMAIN,
};
pub use secret::{SecretBlob, SecureString};
pub use token::{RawToken, Token};

//! # Utilities Module
//!
//! Cross-cutting concerns shared throughout the crate.
//!
//! ## Modules
//!
//! - [`errors`]: Typed error hierarchy using `thiserror` for domain-specific errors
//!
//! ## Design Notes
//!
//! Error types are defined in this module to avoid circular dependencies between
//! the `core` and `platform` modules. Every failure of a single resolution call
//! is total: no partial token is ever produced, and nothing is retried here —
//! transient OS failures are the caller's concern.

pub mod errors;

pub use errors::{CredentialError, ResolveError, SecretDecodeError, TokenError};

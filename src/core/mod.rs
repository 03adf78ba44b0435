//! Core resolution logic (platform-agnostic)
//!
//! CRITICAL: This module MUST NOT import platform-specific code. The OS
//! and credential-store collaborators are reached only through the
//! [`CredentialStore`], [`TokenIssuer`], and [`ProcessTokenSource`] seams.

pub mod credential;
pub mod logon;
pub mod resolver;

// Test doubles for the platform seams (tests only)
#[cfg(test)]
pub mod mock;

pub use credential::CredentialStore;
pub use logon::{ProcessTokenSource, TokenIssuer};
pub use resolver::{CurrentProcessTokenProvider, IdentityResolver};

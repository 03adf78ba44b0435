//! Account specifier parsing and logon strategy selection

use crate::utils::ResolveError;
use std::fmt;

/// Separator between the optional domain and the username
pub const SEPARATOR: char = '\\';

/// Domain literal that selects the service-account logon path
/// (NETWORK SERVICE, LOCAL SERVICE, SYSTEM)
pub const SERVICE_ACCOUNT_DOMAIN: &str = "NT AUTHORITY";

/// Domain literal that selects the credential-store-backed logon path
pub const STORED_CREDENTIAL_DOMAIN: &str = "localhost";

/// A parsed account specifier in `DOMAIN\username` or `username` form
///
/// The raw string is preserved verbatim: it is the lookup key for
/// credential-store-backed accounts, compound form included.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AccountSpecifier {
    raw: String,
    domain: String,
    username: String,
}

impl AccountSpecifier {
    /// Parse a caller-supplied specifier
    ///
    /// Accepted forms:
    /// - `user` (no domain)
    /// - `DOMAIN\user`
    ///
    /// The empty string fails with [`ResolveError::EmptySpecifier`] before
    /// any splitting happens; an empty string would otherwise also look
    /// like a degenerate one-part split.
    pub fn parse(raw: &str) -> Result<Self, ResolveError> {
        if raw.is_empty() {
            return Err(ResolveError::EmptySpecifier);
        }

        let parts: Vec<&str> = raw.split(SEPARATOR).collect();
        let (domain, username) = match parts.as_slice() {
            [username] => ("", *username),
            [domain, username] => (*domain, *username),
            _ => return Err(ResolveError::InvalidSpecifier(raw.to_string())),
        };

        if username.is_empty() {
            return Err(ResolveError::InvalidSpecifier(raw.to_string()));
        }

        Ok(AccountSpecifier {
            raw: raw.to_string(),
            domain: domain.to_string(),
            username: username.to_string(),
        })
    }

    /// The original specifier string, exactly as supplied
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// The domain component; empty when the specifier had no domain
    pub fn domain(&self) -> &str {
        &self.domain
    }

    /// The username component; never empty
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Select the logon plan for this account
    ///
    /// The domain literal is the only classification signal. Matching is
    /// exact and case-sensitive: `nt authority` is an ordinary interactive
    /// domain, not a service account. This match is the complete mapping —
    /// no other branching on domain exists in the crate.
    pub fn logon_plan(&self) -> LogonPlan {
        match self.domain.as_str() {
            SERVICE_ACCOUNT_DOMAIN => LogonPlan {
                strategy: LogonStrategy::ServiceAccount,
                credential: CredentialSource::None,
            },
            STORED_CREDENTIAL_DOMAIN => LogonPlan {
                strategy: LogonStrategy::Interactive,
                credential: CredentialSource::Store,
            },
            _ => LogonPlan {
                strategy: LogonStrategy::Interactive,
                credential: CredentialSource::None,
            },
        }
    }
}

impl fmt::Display for AccountSpecifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.raw)
    }
}

/// Mode under which the OS exchanges identity claims for a token
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogonStrategy {
    /// Interactive logon; password may be absent for passwordless accounts
    Interactive,
    /// Service logon for well-known NT AUTHORITY accounts
    ServiceAccount,
}

/// Where the password for a logon comes from
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CredentialSource {
    /// No password material; the logon relies on passwordless semantics
    None,
    /// Password must be retrieved from the credential store, keyed by the
    /// full original specifier
    Store,
}

/// Strategy plus credential source for one resolution
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LogonPlan {
    pub strategy: LogonStrategy,
    pub credential: CredentialSource,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_domain_qualified() {
        let account = AccountSpecifier::parse("CONTOSO\\alice").unwrap();
        assert_eq!(account.domain(), "CONTOSO");
        assert_eq!(account.username(), "alice");
        assert_eq!(account.as_str(), "CONTOSO\\alice");
    }

    #[test]
    fn test_parse_bare_username() {
        let account = AccountSpecifier::parse("alice").unwrap();
        assert_eq!(account.domain(), "");
        assert_eq!(account.username(), "alice");
    }

    #[test]
    fn test_parse_leading_separator_means_empty_domain() {
        let account = AccountSpecifier::parse("\\alice").unwrap();
        assert_eq!(account.domain(), "");
        assert_eq!(account.username(), "alice");
    }

    #[test]
    fn test_empty_specifier_rejected_first() {
        assert!(matches!(
            AccountSpecifier::parse(""),
            Err(ResolveError::EmptySpecifier)
        ));
    }

    #[test]
    fn test_multiple_separators_rejected() {
        assert!(matches!(
            AccountSpecifier::parse("a\\b\\c"),
            Err(ResolveError::InvalidSpecifier(_))
        ));
        assert!(matches!(
            AccountSpecifier::parse("\\\\"),
            Err(ResolveError::InvalidSpecifier(_))
        ));
    }

    #[test]
    fn test_empty_username_rejected() {
        assert!(matches!(
            AccountSpecifier::parse("localhost\\"),
            Err(ResolveError::InvalidSpecifier(_))
        ));
    }

    #[test]
    fn test_service_account_plan() {
        let plan = AccountSpecifier::parse("NT AUTHORITY\\NetworkService")
            .unwrap()
            .logon_plan();
        assert_eq!(plan.strategy, LogonStrategy::ServiceAccount);
        assert_eq!(plan.credential, CredentialSource::None);
    }

    #[test]
    fn test_stored_credential_plan() {
        let plan = AccountSpecifier::parse("localhost\\svc-account")
            .unwrap()
            .logon_plan();
        assert_eq!(plan.strategy, LogonStrategy::Interactive);
        assert_eq!(plan.credential, CredentialSource::Store);
    }

    #[test]
    fn test_domain_match_is_case_sensitive() {
        let plan = AccountSpecifier::parse("nt authority\\NetworkService")
            .unwrap()
            .logon_plan();
        assert_eq!(plan.strategy, LogonStrategy::Interactive);
        assert_eq!(plan.credential, CredentialSource::None);

        let plan = AccountSpecifier::parse("LOCALHOST\\alice")
            .unwrap()
            .logon_plan();
        assert_eq!(plan.credential, CredentialSource::None);
    }

    #[test]
    fn test_ordinary_domain_plan() {
        let plan = AccountSpecifier::parse("CONTOSO\\alice").unwrap().logon_plan();
        assert_eq!(plan.strategy, LogonStrategy::Interactive);
        assert_eq!(plan.credential, CredentialSource::None);

        let plan = AccountSpecifier::parse("alice").unwrap().logon_plan();
        assert_eq!(plan.strategy, LogonStrategy::Interactive);
        assert_eq!(plan.credential, CredentialSource::None);
    }
}

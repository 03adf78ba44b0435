//! Mock credential store and token issuer for testing without Windows
//!
//! The mocks record every interaction so tests can assert that, for
//! example, the service-account path never touches the credential store
//! and failed lookups never reach the OS logon call.

use crate::core::credential::CredentialStore;
use crate::core::logon::{ProcessTokenSource, TokenIssuer};
use crate::models::{LogonStrategy, RawToken, SecretBlob, SecureString, Token};
use crate::utils::{CredentialError, TokenError};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use zeroize::Zeroizing;

/// In-memory credential store that counts lookups
pub struct MockCredentialStore {
    entries: HashMap<String, Vec<u8>>,
    lookups: AtomicUsize,
}

impl MockCredentialStore {
    pub fn new() -> Self {
        MockCredentialStore {
            entries: HashMap::new(),
            lookups: AtomicUsize::new(0),
        }
    }

    /// Add a stored credential blob under `target`
    pub fn with_entry(mut self, target: &str, blob: Vec<u8>) -> Self {
        self.entries.insert(target.to_string(), blob);
        self
    }

    /// How many times `retrieve` was invoked
    pub fn lookup_count(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }
}

impl CredentialStore for MockCredentialStore {
    fn retrieve(&self, target: &str) -> Result<Option<SecretBlob>, CredentialError> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        Ok(self
            .entries
            .get(target)
            .map(|blob| Zeroizing::new(blob.clone())))
    }
}

/// Credential store that is present but unreadable
pub struct FailingCredentialStore;

impl CredentialStore for FailingCredentialStore {
    fn retrieve(&self, _target: &str) -> Result<Option<SecretBlob>, CredentialError> {
        Err(CredentialError::Platform(
            "credential store unavailable".to_string(),
        ))
    }
}

/// One recorded invocation of the mock issuer
#[derive(Clone, Debug)]
pub struct LogonCall {
    pub username: String,
    pub domain: String,
    pub password: Option<String>,
    pub strategy: LogonStrategy,
}

/// Token issuer that records logon arguments or simulates OS failure
pub struct MockTokenIssuer {
    calls: Mutex<Vec<LogonCall>>,
    token: RawToken,
    fail: bool,
}

impl MockTokenIssuer {
    /// Issuer that succeeds, handing out tokens with the given raw value
    pub fn new(token: RawToken) -> Self {
        MockTokenIssuer {
            calls: Mutex::new(Vec::new()),
            token,
            fail: false,
        }
    }

    /// Issuer whose every call fails with a simulated native error
    pub fn failing() -> Self {
        MockTokenIssuer {
            calls: Mutex::new(Vec::new()),
            token: 0,
            fail: true,
        }
    }

    /// Snapshot of all recorded logon calls
    pub fn calls(&self) -> Vec<LogonCall> {
        self.calls.lock().unwrap().clone()
    }

    fn native_failure() -> TokenError {
        // ERROR_LOGON_FAILURE as an HRESULT
        TokenError::Os {
            code: 0x8007052Eu32 as i32,
            message: "The user name or password is incorrect.".to_string(),
        }
    }
}

impl TokenIssuer for MockTokenIssuer {
    fn logon(
        &self,
        username: &str,
        domain: &str,
        password: Option<&SecureString>,
        strategy: LogonStrategy,
    ) -> Result<Token, TokenError> {
        if self.fail {
            return Err(Self::native_failure());
        }
        self.calls.lock().unwrap().push(LogonCall {
            username: username.to_string(),
            domain: domain.to_string(),
            password: password.map(|p| p.as_str().to_string()),
            strategy,
        });
        Ok(Token::from_raw(self.token))
    }
}

impl ProcessTokenSource for MockTokenIssuer {
    fn open_current(&self) -> Result<Token, TokenError> {
        if self.fail {
            return Err(Self::native_failure());
        }
        Ok(Token::from_raw(self.token))
    }
}

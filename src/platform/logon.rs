//! Windows token acquisition
//!
//! Unsafe wrappers over `LogonUserW` and `OpenProcessToken`. Native
//! failure causes are opaque here: they are wrapped into [`TokenError`]
//! and never interpreted or retried.

use crate::core::{ProcessTokenSource, TokenIssuer};
use crate::models::{LogonStrategy, SecureString, Token};
use crate::utils::TokenError;
use windows::core::PCWSTR;
use windows::Win32::Foundation::HANDLE;
use windows::Win32::Security::{
    LogonUserW, LOGON32_LOGON_INTERACTIVE, LOGON32_LOGON_SERVICE, LOGON32_PROVIDER_DEFAULT,
    TOKEN_ALL_ACCESS,
};
use windows::Win32::System::Threading::{GetCurrentProcess, OpenProcessToken};
use zeroize::Zeroizing;

/// Token issuance backed by the native logon APIs
pub struct WindowsTokenIssuer;

impl WindowsTokenIssuer {
    pub fn new() -> Self {
        WindowsTokenIssuer
    }
}

impl Default for WindowsTokenIssuer {
    fn default() -> Self {
        Self::new()
    }
}

fn to_wide(s: &str) -> Vec<u16> {
    s.encode_utf16().chain(std::iter::once(0)).collect()
}

impl TokenIssuer for WindowsTokenIssuer {
    fn logon(
        &self,
        username: &str,
        domain: &str,
        password: Option<&SecureString>,
        strategy: LogonStrategy,
    ) -> Result<Token, TokenError> {
        let username_wide = to_wide(username);
        // An unqualified account passes an empty wide string, not NULL.
        let domain_wide = to_wide(domain);
        // The wide copy of the password is wiped when this frame unwinds.
        let password_wide: Option<Zeroizing<Vec<u16>>> =
            password.map(|p| Zeroizing::new(to_wide(p.as_str())));

        let logon_type = match strategy {
            LogonStrategy::Interactive => LOGON32_LOGON_INTERACTIVE,
            LogonStrategy::ServiceAccount => LOGON32_LOGON_SERVICE,
        };

        let mut handle = HANDLE::default();
        unsafe {
            LogonUserW(
                PCWSTR::from_raw(username_wide.as_ptr()),
                PCWSTR::from_raw(domain_wide.as_ptr()),
                password_wide
                    .as_ref()
                    .map_or(PCWSTR::null(), |w| PCWSTR::from_raw(w.as_ptr())),
                logon_type,
                LOGON32_PROVIDER_DEFAULT,
                &mut handle,
            )
        }
        .map_err(TokenError::from)?;

        Ok(Token::from_raw(handle.0 as isize))
    }
}

impl ProcessTokenSource for WindowsTokenIssuer {
    fn open_current(&self) -> Result<Token, TokenError> {
        let mut handle = HANDLE::default();
        unsafe { OpenProcessToken(GetCurrentProcess(), TOKEN_ALL_ACCESS, &mut handle) }
            .map_err(TokenError::from)?;
        Ok(Token::from_raw(handle.0 as isize))
    }
}

//! Owned OS token handle

use std::fmt;

/// Raw representation of an OS token handle
///
/// Zero denotes "no token" and must never be used as a live handle.
pub type RawToken = isize;

/// An owned security token handle
///
/// Represents the security context a workload will execute under. The
/// holder exclusively owns the underlying OS resource: the type is
/// deliberately neither `Clone` nor `Copy` so a handle is never aliased.
///
/// On Windows, dropping a valid token closes the handle; `close` releases
/// it explicitly and `into_raw` transfers ownership to code that manages
/// the handle itself (e.g. process-creation machinery). On other targets
/// the raw value is inert, which is what test doubles rely on.
pub struct Token(RawToken);

impl Token {
    /// Take ownership of a raw handle value
    pub fn from_raw(raw: RawToken) -> Self {
        Token(raw)
    }

    /// The raw handle value, ownership retained
    pub fn as_raw(&self) -> RawToken {
        self.0
    }

    /// Whether this is a live handle rather than the "no token" sentinel
    pub fn is_valid(&self) -> bool {
        self.0 != 0
    }

    /// Give up ownership of the raw handle without releasing it
    pub fn into_raw(self) -> RawToken {
        let raw = self.0;
        std::mem::forget(self);
        raw
    }
}

#[cfg(windows)]
impl Token {
    /// Release the handle, surfacing any close failure
    pub fn close(self) -> Result<(), crate::utils::TokenError> {
        let raw = self.into_raw();
        if raw == 0 {
            return Ok(());
        }
        unsafe {
            windows::Win32::Foundation::CloseHandle(windows::Win32::Foundation::HANDLE(
                raw as *mut std::ffi::c_void,
            ))
        }
        .map_err(crate::utils::TokenError::from)
    }
}

#[cfg(windows)]
impl Drop for Token {
    fn drop(&mut self) {
        if self.0 != 0 {
            let _ = unsafe {
                windows::Win32::Foundation::CloseHandle(windows::Win32::Foundation::HANDLE(
                    self.0 as *mut std::ffi::c_void,
                ))
            };
        }
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Token").field(&format_args!("{:#x}", self.0)).finish()
    }
}

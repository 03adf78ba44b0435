//! Windows Credential Manager implementation
//!
//! This module contains all unsafe Windows API code for credential access.
//!
//! The resolver only ever reads: passwords for `localhost`-domain accounts
//! are provisioned out of band (e.g. `cmdkey /generic:localhost\user`).
//! `store` and `delete` exist for provisioning helpers and the round-trip
//! tests below.

use crate::core::CredentialStore;
use crate::models::SecretBlob;
use crate::utils::CredentialError;
use std::ffi::OsStr;
use std::os::windows::ffi::OsStrExt;
use windows::core::{PCWSTR, PWSTR};
use windows::Win32::Foundation::{ERROR_NOT_FOUND, FILETIME};
use windows::Win32::Security::Credentials::{
    CredDeleteW, CredFree, CredReadW, CredWriteW, CREDENTIALW, CRED_FLAGS,
    CRED_PERSIST_LOCAL_MACHINE, CRED_TYPE_GENERIC,
};
use zeroize::Zeroizing;

/// Generic-credential access backed by the Windows Credential Manager
///
/// Credentials are encrypted at rest by DPAPI and tied to the machine
/// account. Blobs pass through as raw bytes; decoding is the resolver's
/// concern.
pub struct WindowsCredentialManager;

impl WindowsCredentialManager {
    pub fn new() -> Self {
        WindowsCredentialManager
    }
}

impl Default for WindowsCredentialManager {
    fn default() -> Self {
        Self::new()
    }
}

/// Null-terminated UTF-16 for the Windows APIs
fn to_wide(s: &str) -> Vec<u16> {
    OsStr::new(s).encode_wide().chain(std::iter::once(0)).collect()
}

impl CredentialStore for WindowsCredentialManager {
    fn retrieve(&self, target: &str) -> Result<Option<SecretBlob>, CredentialError> {
        let target_wide = to_wide(target);

        unsafe {
            let mut pcred = std::ptr::null_mut();
            match CredReadW(
                PCWSTR::from_raw(target_wide.as_ptr()),
                CRED_TYPE_GENERIC,
                0,
                &mut pcred,
            ) {
                Ok(()) => {
                    // SAFETY: pcred is valid after successful CredReadW
                    let cred = &*(pcred as *const CREDENTIALW);

                    // Copy the blob out before CredFree invalidates it.
                    let blob = Zeroizing::new(
                        std::slice::from_raw_parts(
                            cred.CredentialBlob,
                            cred.CredentialBlobSize as usize,
                        )
                        .to_vec(),
                    );

                    CredFree(pcred as *const _);
                    Ok(Some(blob))
                }
                Err(e) if e.code() == ERROR_NOT_FOUND.to_hresult() => Ok(None),
                Err(e) => Err(CredentialError::Platform(format!(
                    "failed to read credential for target `{target}`: {e:?}"
                ))),
            }
        }
    }
}

impl WindowsCredentialManager {
    /// Store a raw blob as a generic credential under `target`
    pub fn store(&self, target: &str, blob: &[u8]) -> Result<(), CredentialError> {
        let target_wide = to_wide(target);

        // SAFETY: All pointers are valid for the duration of the CredWriteW call
        let cred = CREDENTIALW {
            Flags: CRED_FLAGS(0),
            Type: CRED_TYPE_GENERIC,
            TargetName: PWSTR(target_wide.as_ptr() as *mut u16),
            Comment: PWSTR::null(),
            LastWritten: FILETIME::default(),
            CredentialBlobSize: blob.len() as u32,
            CredentialBlob: blob.as_ptr() as *mut u8,
            Persist: CRED_PERSIST_LOCAL_MACHINE,
            AttributeCount: 0,
            Attributes: std::ptr::null_mut(),
            TargetAlias: PWSTR::null(),
            UserName: PWSTR::null(),
        };

        unsafe { CredWriteW(&cred, 0) }.map_err(|e| {
            CredentialError::Platform(format!(
                "failed to write credential for target `{target}`: {e:?}"
            ))
        })
    }

    /// Delete the generic credential under `target`; succeeds if absent
    pub fn delete(&self, target: &str) -> Result<(), CredentialError> {
        let target_wide = to_wide(target);

        match unsafe { CredDeleteW(PCWSTR::from_raw(target_wide.as_ptr()), CRED_TYPE_GENERIC, 0) } {
            Ok(()) => Ok(()),
            Err(e) if e.code() == ERROR_NOT_FOUND.to_hresult() => Ok(()),
            Err(e) => Err(CredentialError::Platform(format!(
                "failed to delete credential for target `{target}`: {e:?}"
            ))),
        }
    }
}

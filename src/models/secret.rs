//! Secret material handling
//!
//! SECURITY: Password bytes and text are zeroed on drop on every exit
//! path, including decode failures. Nothing here implements `Display`,
//! and `Debug` never reveals content.

use crate::utils::SecretDecodeError;
use std::fmt;
use zeroize::{Zeroize, Zeroizing};

/// Raw credential bytes as returned by a credential store
///
/// Wiped on drop; exists only for the duration of a single resolution call.
pub type SecretBlob = Zeroizing<Vec<u8>>;

/// Password text that zeros its memory on drop
pub struct SecureString(String);

impl SecureString {
    /// Create a new secure string
    pub fn new(password: impl Into<String>) -> Self {
        SecureString(password.into())
    }

    /// Decode a credential blob stored as UTF-16 text with an optional BOM
    ///
    /// A byte-order marker, when present, selects the endianness of the
    /// rest of the blob; without one the bytes are read little-endian, the
    /// Windows convention. Trailing NUL units are trimmed since stored
    /// blobs commonly include the terminator.
    ///
    /// Intermediate buffers are wiped before returning, success or failure.
    pub fn from_utf16_blob(blob: &[u8]) -> Result<Self, SecretDecodeError> {
        let (body, big_endian) = match blob {
            [0xFF, 0xFE, rest @ ..] => (rest, false),
            [0xFE, 0xFF, rest @ ..] => (rest, true),
            _ => (blob, false),
        };

        if body.len() % 2 != 0 {
            return Err(SecretDecodeError::OddLength(body.len()));
        }

        let units: Zeroizing<Vec<u16>> = Zeroizing::new(
            body.chunks_exact(2)
                .map(|pair| {
                    if big_endian {
                        u16::from_be_bytes([pair[0], pair[1]])
                    } else {
                        u16::from_le_bytes([pair[0], pair[1]])
                    }
                })
                .collect(),
        );

        let mut text = String::from_utf16(&units).map_err(|_| SecretDecodeError::InvalidUtf16)?;

        // Truncate in place rather than trim-and-copy so no stray
        // unwiped copy of the password is left behind.
        let trimmed = text.trim_end_matches('\0').len();
        text.truncate(trimmed);

        Ok(SecureString(text))
    }

    /// Get the password as a string slice
    ///
    /// Use this sparingly and only at the OS call boundary.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Length of the password in bytes
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if the password is empty
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Drop for SecureString {
    fn drop(&mut self) {
        self.0.zeroize();
    }
}

impl fmt::Debug for SecureString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // SECURITY: Never reveal the password content
        write!(f, "SecureString(*** {} bytes ***)", self.0.len())
    }
}

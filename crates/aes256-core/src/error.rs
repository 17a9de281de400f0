//! Error type shared by the block core, padding layer and ECB driver.

use thiserror::Error;

/// Errors reported by the cipher.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum Error {
    /// A block or key did not have the exact required size.
    #[error("{context}: invalid length (expected {expected}, got {actual})")]
    InvalidLength {
        /// Which input was rejected.
        context: &'static str,
        /// Required length in bytes.
        expected: usize,
        /// Supplied length in bytes.
        actual: usize,
    },
    /// ECB ciphertext that is empty or not a whole number of blocks.
    #[error("ciphertext length {0} is not a positive multiple of the block size")]
    UnalignedCiphertext(usize),
    /// The PKCS#7 trailer of a decrypted message is malformed.
    #[error("invalid PKCS#7 padding")]
    InvalidPadding,
}

/// Convenience alias used throughout the crate.
pub type Result<T> = core::result::Result<T, Error>;

/// Checks `actual` against `expected`, producing [`Error::InvalidLength`] on mismatch.
pub(crate) fn check_len(context: &'static str, expected: usize, actual: usize) -> Result<()> {
    if actual == expected {
        Ok(())
    } else {
        Err(Error::InvalidLength {
            context,
            expected,
            actual,
        })
    }
}

//! Dispatch from CLI choices to the cipher core.

use aes256_core::{decrypt, decrypt_block, encrypt, encrypt_block};
use anyhow::Result;

use crate::report::Direction;

/// How input bytes are fed to the cipher.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    /// Exactly one 16-byte block, no padding.
    RawBlock,
    /// Any length, PKCS#7 padded ECB.
    Padded,
}

/// Runs one encryption or decryption.
pub fn apply(direction: Direction, mode: Mode, data: &[u8], key: &[u8]) -> Result<Vec<u8>> {
    log::debug!("{direction:?} {mode:?}: {} input bytes", data.len());
    let out = match (direction, mode) {
        (Direction::Encrypt, Mode::RawBlock) => encrypt_block(data, key)?.to_vec(),
        (Direction::Decrypt, Mode::RawBlock) => decrypt_block(data, key)?.to_vec(),
        (Direction::Encrypt, Mode::Padded) => encrypt(data, key)?,
        (Direction::Decrypt, Mode::Padded) => decrypt(data, key)?,
    };
    Ok(out)
}

//! Key types for AES-256.

use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::error::{check_len, Error};
use crate::state::{Block, State};

/// Key size in bytes.
pub const KEY_SIZE: usize = 32;

/// Number of rounds for a 256-bit key.
pub const ROUNDS: usize = 14;

/// AES-256 key wrapper. Wiped on drop.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct Aes256Key([u8; KEY_SIZE]);

impl Aes256Key {
    /// Raw key bytes.
    #[inline]
    pub fn as_bytes(&self) -> &[u8; KEY_SIZE] {
        &self.0
    }
}

impl From<[u8; KEY_SIZE]> for Aes256Key {
    fn from(value: [u8; KEY_SIZE]) -> Self {
        Self(value)
    }
}

impl TryFrom<&[u8]> for Aes256Key {
    type Error = Error;

    fn try_from(value: &[u8]) -> Result<Self, Self::Error> {
        check_len("key", KEY_SIZE, value.len())?;
        let mut key = [0u8; KEY_SIZE];
        key.copy_from_slice(value);
        Ok(Self(key))
    }
}

impl core::fmt::Debug for Aes256Key {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("Aes256Key(..)")
    }
}

/// The 15 round keys derived from an [`Aes256Key`]. Wiped on drop.
///
/// Rounds borrow the stored matrices directly, so no per-round copies of key
/// material are made while a block is processed.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct RoundKeys(pub(crate) [State; ROUNDS + 1]);

impl RoundKeys {
    /// Returns a copy of the round key at the requested index (0..=14) in block order.
    ///
    /// The copy is owned by the caller and is not wiped.
    #[inline]
    pub fn get(&self, round: usize) -> Block {
        self.0[round].to_block()
    }

    /// Borrows the round key at `round` as a state matrix.
    #[inline]
    pub(crate) fn state(&self, round: usize) -> &State {
        &self.0[round]
    }
}

impl core::fmt::Debug for RoundKeys {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("RoundKeys(..)")
    }
}

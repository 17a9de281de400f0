//! Reference AES-256 implementation (FIPS-197) with a PKCS#7 padded ECB mode.
//!
//! This crate follows FIPS-197 step by step and provides:
//! - GF(2^8) arithmetic and the constant S-box, round-constant and MixColumns tables.
//! - The round transforms over a value-typed 4x4 [`State`].
//! - The AES-256 key schedule (15 round keys from a 32-byte key).
//! - Single-block encryption and decryption.
//! - PKCS#7 padding and an ECB driver for arbitrary-length messages.
//!
//! The implementation aims for clarity and testability rather than constant-time
//! guarantees; S-box lookups are data dependent and it should not be treated as
//! side-channel hardened. ECB leaks block-level patterns and nothing here is
//! authenticated.
//!
//! Keys and round keys are wiped on drop. Intermediate round states are plain
//! `Copy` values and are not wiped.
//!
//! ```
//! let key = [0x11u8; 32];
//! let ct = aes256_core::encrypt(b"hello", &key).unwrap();
//! assert_eq!(ct.len(), 16);
//! assert_eq!(aes256_core::decrypt(&ct, &key).unwrap(), b"hello");
//! ```

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod cipher;
mod ecb;
mod error;
mod gf;
mod key;
mod padding;
mod round;
mod state;
mod tables;

pub use crate::cipher::{
    decrypt_block, decrypt_block_with, encrypt_block, encrypt_block_with, expand_key,
};
pub use crate::ecb::{decrypt, encrypt};
pub use crate::error::{Error, Result};
pub use crate::gf::{gmul, xtime};
pub use crate::key::{Aes256Key, RoundKeys, KEY_SIZE, ROUNDS};
pub use crate::padding::{pkcs7_pad, pkcs7_unpad};
pub use crate::round::{
    add_round_key, inv_mix_columns, inv_shift_rows, inv_sub_bytes, mix_columns, shift_rows,
    sub_bytes,
};
pub use crate::state::{Block, State, BLOCK_SIZE};
pub use crate::tables::{inv_sbox, sbox, INV_MIX_COLUMNS, INV_SBOX, MIX_COLUMNS, RCON, SBOX};

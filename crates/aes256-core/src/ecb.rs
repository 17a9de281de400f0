//! ECB driver over the block core with PKCS#7 padding.
//!
//! Blocks are processed independently, so identical plaintext blocks yield
//! identical ciphertext blocks. With the `parallel` feature the blocks are
//! spread across the rayon pool; output is identical either way.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::cipher::{decrypt_block_with, encrypt_block_with};
use crate::error::{Error, Result};
use crate::key::{Aes256Key, RoundKeys};
use crate::padding::{pkcs7_pad, pkcs7_unpad};
use crate::state::{Block, BLOCK_SIZE};

type BlockFn = fn(&Block, &RoundKeys) -> Block;

fn apply_blocks(data: &mut [u8], round_keys: &RoundKeys, f: BlockFn) {
    let run = |chunk: &mut [u8]| {
        let mut block = [0u8; BLOCK_SIZE];
        block.copy_from_slice(chunk);
        chunk.copy_from_slice(&f(&block, round_keys));
    };

    #[cfg(feature = "parallel")]
    data.par_chunks_mut(BLOCK_SIZE).for_each(run);
    #[cfg(not(feature = "parallel"))]
    data.chunks_mut(BLOCK_SIZE).for_each(run);
}

/// Pads `message` and encrypts it block by block.
///
/// Output length is `(message.len() / 16 + 1) * 16`.
pub fn encrypt(message: &[u8], key: &[u8]) -> Result<Vec<u8>> {
    let key = Aes256Key::try_from(key)?;
    let round_keys = crate::cipher::expand_key(&key);

    let mut data = pkcs7_pad(message);
    log::debug!("ecb encrypt: {} blocks", data.len() / BLOCK_SIZE);
    apply_blocks(&mut data, &round_keys, encrypt_block_with);
    Ok(data)
}

/// Decrypts block by block, then strips the padding.
pub fn decrypt(ciphertext: &[u8], key: &[u8]) -> Result<Vec<u8>> {
    let key = Aes256Key::try_from(key)?;
    if ciphertext.is_empty() || !ciphertext.len().is_multiple_of(BLOCK_SIZE) {
        return Err(Error::UnalignedCiphertext(ciphertext.len()));
    }
    let round_keys = crate::cipher::expand_key(&key);

    let mut data = ciphertext.to_vec();
    log::debug!("ecb decrypt: {} blocks", data.len() / BLOCK_SIZE);
    apply_blocks(&mut data, &round_keys, decrypt_block_with);
    let len = pkcs7_unpad(&data)?.len();
    data.truncate(len);
    Ok(data)
}

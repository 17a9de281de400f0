//! AES-256 key schedule and block encryption/decryption.

use zeroize::Zeroize;

use crate::error::{check_len, Result};
use crate::key::{Aes256Key, RoundKeys, KEY_SIZE, ROUNDS};
use crate::round::{
    add_round_key, inv_mix_columns, inv_shift_rows, inv_sub_bytes, mix_columns, shift_rows,
    sub_bytes,
};
use crate::state::{Block, State, BLOCK_SIZE};
use crate::tables::{sbox, RCON};

/// Words in the key (`Nk`).
const KEY_WORDS: usize = KEY_SIZE / 4;
/// Words in the expanded schedule, four per round key.
const SCHEDULE_WORDS: usize = 4 * (ROUNDS + 1);

fn rot_word(word: [u8; 4]) -> [u8; 4] {
    [word[1], word[2], word[3], word[0]]
}

fn sub_word(word: [u8; 4]) -> [u8; 4] {
    word.map(sbox)
}

/// Expands a 256-bit key into 15 round keys.
pub fn expand_key(key: &Aes256Key) -> RoundKeys {
    let mut w = [[0u8; 4]; SCHEDULE_WORDS];
    for (word, chunk) in w.iter_mut().zip(key.as_bytes().chunks_exact(4)) {
        word.copy_from_slice(chunk);
    }

    for i in KEY_WORDS..SCHEDULE_WORDS {
        let mut temp = w[i - 1];
        if i % KEY_WORDS == 0 {
            temp = sub_word(rot_word(temp));
            temp[0] ^= RCON[i / KEY_WORDS - 1];
        } else if i % KEY_WORDS == 4 {
            temp = sub_word(temp);
        }
        let mut prev = w[i - KEY_WORDS];
        w[i] = core::array::from_fn(|b| prev[b] ^ temp[b]);
        temp.zeroize();
        prev.zeroize();
    }

    // Word j of round key k is column j of its matrix.
    let mut round_keys = RoundKeys([State::default(); ROUNDS + 1]);
    for (round_key, words) in round_keys.0.iter_mut().zip(w.chunks_exact(4)) {
        round_key.0.copy_from_slice(words);
    }
    w.zeroize();
    log::trace!("expanded {} schedule words", SCHEDULE_WORDS);

    round_keys
}

/// Encrypts a single 16-byte block with pre-expanded round keys.
pub fn encrypt_block_with(block: &Block, round_keys: &RoundKeys) -> Block {
    let mut state = add_round_key(State::from_block(block), round_keys.state(0));

    for round in 1..ROUNDS {
        state = sub_bytes(state);
        state = shift_rows(state);
        state = mix_columns(state);
        state = add_round_key(state, round_keys.state(round));
    }

    state = sub_bytes(state);
    state = shift_rows(state);
    state = add_round_key(state, round_keys.state(ROUNDS));

    state.to_block()
}

/// Decrypts a single 16-byte block with pre-expanded round keys.
pub fn decrypt_block_with(block: &Block, round_keys: &RoundKeys) -> Block {
    let mut state = add_round_key(State::from_block(block), round_keys.state(ROUNDS));

    for round in (1..ROUNDS).rev() {
        state = inv_shift_rows(state);
        state = inv_sub_bytes(state);
        state = add_round_key(state, round_keys.state(round));
        state = inv_mix_columns(state);
    }

    state = inv_shift_rows(state);
    state = inv_sub_bytes(state);
    state = add_round_key(state, round_keys.state(0));

    state.to_block()
}

/// Validates a block slice and copies it into a fixed array.
pub(crate) fn to_block(context: &'static str, bytes: &[u8]) -> Result<Block> {
    check_len(context, BLOCK_SIZE, bytes.len())?;
    let mut block = [0u8; BLOCK_SIZE];
    block.copy_from_slice(bytes);
    Ok(block)
}

/// Encrypts exactly one 16-byte block under a 32-byte key.
///
/// The key schedule is derived afresh on every call. Sizes are checked before
/// any transform runs.
pub fn encrypt_block(plaintext: &[u8], key: &[u8]) -> Result<Block> {
    let block = to_block("plaintext block", plaintext)?;
    let key = Aes256Key::try_from(key)?;
    Ok(encrypt_block_with(&block, &expand_key(&key)))
}

/// Decrypts exactly one 16-byte block under a 32-byte key.
pub fn decrypt_block(ciphertext: &[u8], key: &[u8]) -> Result<Block> {
    let block = to_block("ciphertext block", ciphertext)?;
    let key = Aes256Key::try_from(key)?;
    Ok(decrypt_block_with(&block, &expand_key(&key)))
}

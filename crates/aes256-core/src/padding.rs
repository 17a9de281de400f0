//! PKCS#7 padding for the 16-byte block size.

use crate::error::{Error, Result};
use crate::state::BLOCK_SIZE;

/// Appends `n` bytes of value `n`, `n = 16 - len % 16`.
///
/// Always adds between 1 and 16 bytes, so aligned input gains a full block.
pub fn pkcs7_pad(data: &[u8]) -> Vec<u8> {
    let pad_len = BLOCK_SIZE - data.len() % BLOCK_SIZE;
    let mut padded = Vec::with_capacity(data.len() + pad_len);
    padded.extend_from_slice(data);
    padded.resize(data.len() + pad_len, pad_len as u8);
    padded
}

/// Strips a PKCS#7 trailer, rejecting anything malformed.
///
/// The final byte must be in `1..=16`, no longer than the input, and every
/// stripped byte must repeat it.
pub fn pkcs7_unpad(data: &[u8]) -> Result<&[u8]> {
    let &last = data.last().ok_or(Error::InvalidPadding)?;
    let pad_len = usize::from(last);
    if pad_len == 0 || pad_len > BLOCK_SIZE || pad_len > data.len() {
        return Err(Error::InvalidPadding);
    }
    let (body, trailer) = data.split_at(data.len() - pad_len);
    if trailer.iter().any(|&b| b != last) {
        return Err(Error::InvalidPadding);
    }
    Ok(body)
}

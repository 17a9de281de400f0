//! AES round transformations.
//!
//! Each transform takes the state by value and returns the transformed state.

use crate::gf::gmul;
use crate::state::State;
use crate::tables::{inv_sbox, sbox, INV_MIX_COLUMNS, MIX_COLUMNS};

/// Applies SubBytes.
#[inline]
#[must_use]
pub fn sub_bytes(state: State) -> State {
    state.map(sbox)
}

/// Applies the inverse SubBytes transformation.
#[inline]
#[must_use]
pub fn inv_sub_bytes(state: State) -> State {
    state.map(inv_sbox)
}

/// Rotates row `r` left by `r` positions.
#[inline]
#[must_use]
pub fn shift_rows(state: State) -> State {
    State(core::array::from_fn(|col| {
        core::array::from_fn(|row| state.0[(col + row) % 4][row])
    }))
}

/// Rotates row `r` right by `r` positions.
#[inline]
#[must_use]
pub fn inv_shift_rows(state: State) -> State {
    State(core::array::from_fn(|col| {
        core::array::from_fn(|row| state.0[(col + 4 - row) % 4][row])
    }))
}

fn mul_column(matrix: &[[u8; 4]; 4], column: [u8; 4]) -> [u8; 4] {
    core::array::from_fn(|row| {
        matrix[row]
            .iter()
            .zip(column)
            .fold(0, |acc, (&coeff, byte)| acc ^ gmul(byte, coeff))
    })
}

/// MixColumns over all four columns.
#[inline]
#[must_use]
pub fn mix_columns(state: State) -> State {
    state.map_columns(|column| mul_column(&MIX_COLUMNS, column))
}

/// Inverse MixColumns over all four columns.
#[inline]
#[must_use]
pub fn inv_mix_columns(state: State) -> State {
    state.map_columns(|column| mul_column(&INV_MIX_COLUMNS, column))
}

/// Adds (XORs) a round key into the state.
#[inline]
#[must_use]
pub fn add_round_key(state: State, round_key: &State) -> State {
    state.xor(round_key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Block;

    fn state_from_hex(hex_str: &str) -> State {
        let bytes: Block = hex::decode(hex_str)
            .expect("valid hex")
            .try_into()
            .expect("16 bytes");
        State::from_block(&bytes)
    }

    fn sample() -> State {
        State::from_block(&core::array::from_fn(|i| (i as u8).wrapping_mul(29) ^ 0x5a))
    }

    #[test]
    fn shift_rows_moves_rows_left() {
        let state = State::from_block(&core::array::from_fn(|i| i as u8));
        let shifted = shift_rows(state);
        // Row 0 untouched, row 1 rotated by one column, row 3 by three.
        assert_eq!([0, 1, 2, 3].map(|c| shifted.get(0, c)), [0, 4, 8, 12]);
        assert_eq!([0, 1, 2, 3].map(|c| shifted.get(1, c)), [5, 9, 13, 1]);
        assert_eq!([0, 1, 2, 3].map(|c| shifted.get(2, c)), [10, 14, 2, 6]);
        assert_eq!([0, 1, 2, 3].map(|c| shifted.get(3, c)), [15, 3, 7, 11]);
    }

    #[test]
    fn mix_columns_known_column() {
        // db 13 53 45 -> 8e 4d a1 bc
        let state = state_from_hex("db135345f20a225c01010101c6c6c6c6");
        let mixed = mix_columns(state).to_block();
        assert_eq!(hex::encode(mixed), "8e4da1bc9fdc589d01010101c6c6c6c6");
    }

    #[test]
    fn fips197_round_one_of_c3() {
        // Appendix C.3, round[1]: start -> s_box -> s_row -> m_col.
        let start = state_from_hex("00102030405060708090a0b0c0d0e0f0");
        let s_box = sub_bytes(start);
        assert_eq!(
            hex::encode(s_box.to_block()),
            "63cab7040953d051cd60e0e7ba70e18c"
        );
        let s_row = shift_rows(s_box);
        assert_eq!(
            hex::encode(s_row.to_block()),
            "6353e08c0960e104cd70b751bacad0e7"
        );
        let m_col = mix_columns(s_row);
        assert_eq!(
            hex::encode(m_col.to_block()),
            "5f72641557f5bc92f7be3b291db9f91a"
        );
    }

    #[test]
    fn transforms_invert() {
        let state = sample();
        assert_eq!(inv_sub_bytes(sub_bytes(state)), state);
        assert_eq!(inv_shift_rows(shift_rows(state)), state);
        assert_eq!(inv_mix_columns(mix_columns(state)), state);
        let key = State::from_block(&[0xa5; 16]);
        assert_eq!(add_round_key(add_round_key(state, &key), &key), state);
    }
}

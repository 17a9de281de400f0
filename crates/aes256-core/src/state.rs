//! Block and state representations.

use zeroize::Zeroize;

/// AES block of 16 bytes.
pub type Block = [u8; 16];

/// Block size in bytes.
pub const BLOCK_SIZE: usize = 16;

/// The 4x4 cipher state, stored column-major: `self.0[col][row]`.
///
/// Byte `i` of a block lands at row `i % 4`, column `i / 4`, so a column is
/// four consecutive block bytes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Zeroize)]
pub struct State(pub [[u8; 4]; 4]);

impl State {
    /// Loads a block into a fresh state.
    #[inline]
    pub fn from_block(block: &Block) -> Self {
        Self(core::array::from_fn(|col| {
            core::array::from_fn(|row| block[col * 4 + row])
        }))
    }

    /// Serializes the state back into block order.
    #[inline]
    pub fn to_block(self) -> Block {
        core::array::from_fn(|i| self.0[i / 4][i % 4])
    }

    /// Byte at `(row, col)`.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> u8 {
        self.0[col][row]
    }

    /// Applies `f` to every byte.
    #[inline]
    pub fn map(self, f: impl Fn(u8) -> u8) -> Self {
        Self(self.0.map(|column| column.map(&f)))
    }

    /// Applies `f` to every column.
    #[inline]
    pub fn map_columns(self, f: impl Fn([u8; 4]) -> [u8; 4]) -> Self {
        Self(self.0.map(f))
    }

    /// Element-wise XOR with another state.
    #[inline]
    pub fn xor(self, rhs: &State) -> Self {
        Self(core::array::from_fn(|col| {
            core::array::from_fn(|row| self.0[col][row] ^ rhs.0[col][row])
        }))
    }
}

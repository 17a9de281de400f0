//! GF(2^8) arithmetic under the AES polynomial `x^8 + x^4 + x^3 + x + 1`.

/// Low byte of the reducing polynomial.
const REDUCE: u8 = 0x1b;

/// Multiplies by `x`, reducing modulo the AES polynomial.
#[inline]
pub fn xtime(byte: u8) -> u8 {
    let shifted = byte << 1;
    if byte & 0x80 != 0 {
        shifted ^ REDUCE
    } else {
        shifted
    }
}

/// Shift-and-XOR multiplication of two field elements.
pub fn gmul(mut a: u8, mut b: u8) -> u8 {
    let mut product = 0u8;
    for _ in 0..8 {
        if b & 1 != 0 {
            product ^= a;
        }
        a = xtime(a);
        b >>= 1;
    }
    product
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fips197_worked_examples() {
        // Section 4.2 of FIPS-197.
        assert_eq!(gmul(0x57, 0x83), 0xc1);
        assert_eq!(gmul(0x57, 0x13), 0xfe);
        assert_eq!(xtime(0x57), 0xae);
        assert_eq!(xtime(0x8e), 0x07);
    }

    #[test]
    fn identity_and_zero() {
        for a in 0..=255u8 {
            assert_eq!(gmul(a, 1), a);
            assert_eq!(gmul(1, a), a);
            assert_eq!(gmul(a, 0), 0);
        }
    }

    #[test]
    fn commutative() {
        for a in (0..=255u8).step_by(7) {
            for b in (0..=255u8).step_by(11) {
                assert_eq!(gmul(a, b), gmul(b, a));
            }
        }
    }
}

//! Bit-field extraction and numeric rendering.
//!
//! Every field the decoders look at goes through [`bitsel`], so the ranges
//! written at the call sites are the architectural `[hi:lo]` positions from
//! the ISA manual, inclusive on both ends.

use num_traits::{PrimInt, Unsigned};

/// Extract bits `[hi:lo]` (inclusive) of `word`, right-aligned.
///
/// Equivalent to `(word >> lo) & ((1 << (hi - lo + 1)) - 1)` but without
/// overflowing when the range spans the whole type.
#[inline]
pub fn bitsel<T: PrimInt + Unsigned>(word: T, hi: u32, lo: u32) -> T {
    debug_assert!(hi >= lo, "bitsel: hi ({hi}) < lo ({lo})");
    let bits = T::zero().count_zeros();
    let width = hi - lo + 1;
    let shifted = if lo >= bits { T::zero() } else { word >> lo as usize };
    if width >= bits {
        shifted
    } else {
        shifted & ((T::one() << width as usize) - T::one())
    }
}

/// Single-bit convenience over [`bitsel`].
#[inline]
pub fn bit<T: PrimInt + Unsigned>(word: T, pos: u32) -> bool {
    bitsel(word, pos, pos) != T::zero()
}

/// Lowercase hex with `_` between every four digits counted from the
/// right, no prefix: `0x12345` renders as `1_2345`.
pub fn hex(v: u64) -> String {
    let digits = format!("{v:x}");
    let mut out = String::with_capacity(digits.len() + digits.len() / 4);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 4 == 0 {
            out.push('_');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn bitsel_matches_shift_and_mask() {
        let w = 0xDEAD_BEEFu32;
        assert_eq!(bitsel(w, 6, 0), 0x6F);
        assert_eq!(bitsel(w, 11, 7), (w >> 7) & 0x1F);
        assert_eq!(bitsel(w, 31, 31), 1);
        assert_eq!(bitsel(w, 31, 0), w);
        assert_eq!(bitsel(0xFFFFu16, 15, 13), 0b111);
    }

    #[test]
    fn bitsel_wide_words() {
        let w = 0x1_0000_0003u64;
        assert_eq!(bitsel(w, 1, 0), 0b11);
        assert_eq!(bitsel(w, 63, 32), 1);
        assert_eq!(bitsel(w, 63, 0), w);
    }

    #[test]
    fn single_bit() {
        assert!(bit(0b100u32, 2));
        assert!(!bit(0b100u32, 1));
    }

    #[test]
    fn hex_groups_of_four() {
        assert_eq!(hex(0), "0");
        assert_eq!(hex(0xabc), "abc");
        assert_eq!(hex(0xabcd), "abcd");
        assert_eq!(hex(0x12345), "1_2345");
        assert_eq!(hex(0x1_0000_0000), "1_0000_0000");
        assert_eq!(hex(0xfffff000), "ffff_f000");
    }
}

//! Word-at-a-time helpers for scanning byte strings.
//!
//! The zero-byte test is the classic `(w - ONES) & !w & HIGHS` trick. Its
//! constants are derived from the width of the word, so the same code
//! serves 2, 4, 8 and 16 byte words.

use core::mem;

/// The word the copy fast path strides with.
pub type NativeWord = usize;

pub trait Word: Copy + Eq + core::fmt::Debug {
    const BYTES: usize;

    /// `0x01` in every byte lane.
    const ONES: Self;

    /// `0x80` in every byte lane.
    const HIGHS: Self;

    /// True iff at least one byte lane of `self` is zero.
    fn has_zero_byte(self) -> bool;

    /// Index, in memory order, of the first zero byte lane.
    fn zero_byte_index(self) -> Option<usize>;
}

macro_rules! impl_word {
    ($($t:ty),* $(,)?) => {
        $(
            impl Word for $t {
                const BYTES: usize = mem::size_of::<$t>();

                const ONES: Self = <$t>::MAX / (u8::MAX as $t);

                const HIGHS: Self = Self::ONES * (u8::MAX as $t / 2 + 1);

                #[inline(always)]
                fn has_zero_byte(self) -> bool {
                    (self.wrapping_sub(Self::ONES) & !self & Self::HIGHS) != 0
                }

                #[inline]
                fn zero_byte_index(self) -> Option<usize> {
                    // Carry-free variant: exact in every lane, not just the lowest.
                    let low = !Self::HIGHS;
                    let mask = !(((self & low).wrapping_add(low)) | self | low);
                    if mask == 0 {
                        None
                    } else if cfg!(target_endian = "little") {
                        Some(mask.trailing_zeros() as usize / 8)
                    } else {
                        Some(mask.leading_zeros() as usize / 8)
                    }
                }
            }
        )*
    };
}

impl_word!(u16, u32, u64, u128, usize);

#[inline]
pub const fn is_aligned_for<W: Word>(addr: usize) -> bool {
    addr % W::BYTES == 0
}

/// True iff `addr` is a multiple of the native word size.
#[inline]
pub const fn is_word_aligned(addr: usize) -> bool {
    is_aligned_for::<NativeWord>(addr)
}

/// True iff both addresses sit at the same offset within a native word,
/// i.e. a common byte prologue aligns them both.
#[inline]
pub const fn same_alignment_class(a: usize, b: usize) -> bool {
    a % NativeWord::BYTES == b % NativeWord::BYTES
}

#[inline(always)]
pub fn word_contains_zero_byte(w: NativeWord) -> bool {
    w.has_zero_byte()
}

/// Reads one `W` from `src`.
///
/// # Safety
/// `src` must be aligned for `W` and the whole word must be readable.
#[inline(always)]
pub unsafe fn load_aligned<W: Word>(src: *const u8) -> W {
    debug_assert!(is_aligned_for::<W>(src as usize));
    src.cast::<W>().read()
}

/// Writes one `W` to `dst`.
///
/// # Safety
/// `dst` must be aligned for `W` and the whole word must be writable.
#[inline(always)]
pub unsafe fn store_aligned<W: Word>(dst: *mut u8, w: W) {
    debug_assert!(is_aligned_for::<W>(dst as usize));
    dst.cast::<W>().write(w)
}

#[cfg(test)]
mod tests {
    use super::*;

    macro_rules! naive_has_zero {
        ($t:ty, $w:expr) => {
            <$t>::to_ne_bytes($w).iter().any(|&b| b == 0)
        };
    }

    macro_rules! naive_index {
        ($t:ty, $w:expr) => {
            <$t>::to_ne_bytes($w).iter().position(|&b| b == 0)
        };
    }

    #[test]
    fn constants_follow_width() {
        assert_eq!(<u16 as Word>::ONES, 0x0101);
        assert_eq!(<u16 as Word>::HIGHS, 0x8080);
        assert_eq!(<u32 as Word>::ONES, 0x0101_0101);
        assert_eq!(<u32 as Word>::HIGHS, 0x8080_8080);
        assert_eq!(<u64 as Word>::ONES, 0x0101_0101_0101_0101);
        assert_eq!(<u64 as Word>::HIGHS, 0x8080_8080_8080_8080);
        assert_eq!(<u128 as Word>::ONES, u128::MAX / 0xFF);
        assert_eq!(<usize as Word>::BYTES, mem::size_of::<usize>());
    }

    #[test]
    fn exhaustive_u16() {
        for w in 0..=u16::MAX {
            assert_eq!(w.has_zero_byte(), naive_has_zero!(u16, w), "{w:#06x}");
            assert_eq!(w.zero_byte_index(), naive_index!(u16, w), "{w:#06x}");
        }
    }

    #[test]
    fn every_lane_u32_u64() {
        // 0x01 and 0x80 neighbours are the patterns a sloppy formula trips on.
        for fill in [0x01u8, 0x7F, 0x80, 0x81, 0xFE, 0xFF] {
            for lane in 0..4 {
                let mut bytes = [fill; 4];
                assert!(!u32::from_ne_bytes(bytes).has_zero_byte());
                bytes[lane] = 0;
                let w = u32::from_ne_bytes(bytes);
                assert!(w.has_zero_byte(), "{w:#010x}");
                assert_eq!(w.zero_byte_index(), Some(lane));
            }
            for lane in 0..8 {
                let mut bytes = [fill; 8];
                assert!(!u64::from_ne_bytes(bytes).has_zero_byte());
                bytes[lane] = 0;
                let w = u64::from_ne_bytes(bytes);
                assert!(w.has_zero_byte(), "{w:#018x}");
                assert_eq!(w.zero_byte_index(), Some(lane));
            }
        }
    }

    #[test]
    fn all_zero_and_all_one() {
        assert!(0u32.has_zero_byte());
        assert!(0u64.has_zero_byte());
        assert!(!u32::MAX.has_zero_byte());
        assert!(!u64::MAX.has_zero_byte());
        assert!(!u128::MAX.has_zero_byte());
        assert_eq!(0u64.zero_byte_index(), Some(0));
        assert_eq!(u64::MAX.zero_byte_index(), None);
    }

    #[test]
    fn alignment() {
        let n = NativeWord::BYTES;
        assert!(is_word_aligned(0));
        assert!(is_word_aligned(n * 3));
        assert!(!is_word_aligned(n * 3 + 1));
        assert!(is_aligned_for::<u16>(2));
        assert!(!is_aligned_for::<u32>(2));
        assert!(same_alignment_class(n + 3, 5 * n + 3));
        assert!(!same_alignment_class(n + 3, n + 4));
    }
}

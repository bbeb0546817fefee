/// Sets `n` bytes at `s` to the low byte of `c`, one byte at a time.
///
/// # Safety
/// `s` must be valid for `n` bytes of writes.
#[inline]
pub unsafe fn memset(s: *mut u8, c: i32, mut n: usize) -> *mut u8 {
    let mut p = s;
    while n != 0 {
        *p = c as u8;
        p = p.add(1);
        n -= 1;
    }
    s
}

/// Fills `buf` with the low byte of `value`.
///
/// Goes through the exported `memset` when `c-memset` is on.
#[inline]
pub fn fill(buf: &mut [u8], value: i32) -> &mut [u8] {
    #[cfg(feature = "c-memset")]
    let _ = unsafe { super::libc::memset(buf.as_mut_ptr().cast(), value, buf.len()) };
    #[cfg(not(feature = "c-memset"))]
    let _ = unsafe { memset(buf.as_mut_ptr(), value, buf.len()) };
    buf
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fill_prefix() {
        let mut buf = [0u8; 5];
        fill(&mut buf[..3], b'A' as i32);
        assert_eq!(buf, [0x41, 0x41, 0x41, 0x00, 0x00]);
    }

    #[test]
    fn value_is_truncated() {
        let mut buf = [0u8; 4];
        fill(&mut buf, 0x1_23);
        assert_eq!(buf, [0x23; 4]);
        fill(&mut buf, -1);
        assert_eq!(buf, [0xFF; 4]);
    }

    #[test]
    fn returns_start() {
        let mut buf = [1u8; 3];
        let p = buf.as_mut_ptr();
        assert_eq!(unsafe { memset(p, 0, 3) }, p);
        assert_eq!(unsafe { memset(p, 9, 0) }, p);
        assert_eq!(buf, [0; 3]);
    }
}

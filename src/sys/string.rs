use core::ffi::CStr;

use super::word::{self, NativeWord, Word};

/// Copies the nul-terminated string at `s`, terminator included, to `d`.
///
/// Returns the address of the terminator written to `d`.
///
/// When `s` and `d` share an alignment class the whole aligned word holding
/// the terminator is loaded, which may run past the end of the string.
///
/// # Safety
/// - `s` must be a valid C string (nul terminated)
/// - the aligned word containing the terminator of `s` must be readable
/// - `d` must be large enough to hold `s` and must not overlap it
#[inline]
pub unsafe fn stpcpy(mut d: *mut u8, mut s: *const u8) -> *mut u8 {
    if word::same_alignment_class(d as usize, s as usize) {
        while !word::is_word_aligned(s as usize) {
            *d = *s;
            if *d == 0 {
                return d;
            }
            s = s.add(1);
            d = d.add(1);
        }

        loop {
            let w = word::load_aligned::<NativeWord>(s);
            if w.has_zero_byte() {
                break;
            }
            word::store_aligned(d, w);
            s = s.add(NativeWord::BYTES);
            d = d.add(NativeWord::BYTES);
        }
    }

    loop {
        *d = *s;
        if *d == 0 {
            return d;
        }
        s = s.add(1);
        d = d.add(1);
    }
}

/// Like [`stpcpy`] for a string whose length `len`, terminator included,
/// is known. Never reads outside `s..s + len`.
///
/// # Safety
/// - `s` must be readable for `len` bytes and `s[len - 1]` must be its first zero byte
/// - `d` must be writable for `len` bytes and must not overlap `s`
#[inline]
pub unsafe fn stpcpy_sized(mut d: *mut u8, mut s: *const u8, mut len: usize) -> *mut u8 {
    debug_assert!(len != 0);
    if word::same_alignment_class(d as usize, s as usize) {
        while len != 0 && !word::is_word_aligned(s as usize) {
            *d = *s;
            if *d == 0 {
                return d;
            }
            s = s.add(1);
            d = d.add(1);
            len -= 1;
        }

        while len >= NativeWord::BYTES {
            let w = word::load_aligned::<NativeWord>(s);
            if let Some(i) = w.zero_byte_index() {
                for k in 0..=i {
                    *d.add(k) = *s.add(k);
                }
                return d.add(i);
            }
            word::store_aligned(d, w);
            s = s.add(NativeWord::BYTES);
            d = d.add(NativeWord::BYTES);
            len -= NativeWord::BYTES;
        }
    }

    loop {
        *d = *s;
        if *d == 0 {
            return d;
        }
        s = s.add(1);
        d = d.add(1);
    }
}

/// # Safety
/// Same as [`stpcpy`].
#[inline]
pub unsafe fn strcpy(d: *mut u8, s: *const u8) -> *mut u8 {
    stpcpy(d, s);
    d
}

/// Compares two C strings as unsigned bytes.
///
/// # Safety
/// `l` and `r` must be valid C strings.
#[inline]
pub unsafe fn strcmp(mut l: *const u8, mut r: *const u8) -> i32 {
    while *l == *r && *l != 0 {
        l = l.add(1);
        r = r.add(1);
    }
    *l as i32 - *r as i32
}

/// Compares at most `n` bytes of two C strings as unsigned bytes.
///
/// Neither pointer is read when `n` is zero.
///
/// # Safety
/// Unless `n` is zero, `l` and `r` must be readable up to their terminator
/// or `n` bytes, whichever comes first.
#[inline]
pub unsafe fn strncmp(mut l: *const u8, mut r: *const u8, n: usize) -> i32 {
    if n == 0 {
        return 0;
    }
    let mut n = n - 1;
    while *l != 0 && *r != 0 && n != 0 && *l == *r {
        l = l.add(1);
        r = r.add(1);
        n -= 1;
    }
    *l as i32 - *r as i32
}

/// Copies `src` into `dst` and returns the index of the copied terminator.
///
/// Returns `None`, leaving `dst` untouched, if `dst` cannot hold `src`
/// and its terminator.
///
/// Always uses the in-crate copy: a replacement `__stpcpy` may read
/// beyond `src`, which a `&CStr` does not allow.
pub fn copy_to_terminator(dst: &mut [u8], src: &CStr) -> Option<usize> {
    let len = src.to_bytes_with_nul().len();
    if dst.len() < len {
        return None;
    }
    let base = dst.as_mut_ptr();
    // SAFETY: `src` holds `len` bytes ending in its only zero byte, `dst`
    // is large enough, and a `&mut` borrow cannot alias `src`.
    let end = unsafe { stpcpy_sized(base, src.as_ptr().cast(), len) };
    Some(unsafe { end.offset_from(base) } as usize)
}

/// Copies `src` into `dst` and returns the copy, which starts at `dst[0]`.
pub fn copy<'a>(dst: &'a mut [u8], src: &CStr) -> Option<&'a CStr> {
    let end = copy_to_terminator(dst, src)?;
    CStr::from_bytes_with_nul(&dst[..=end]).ok()
}

/// Goes through the exported `strcmp` when `c-strcmp` is on, so a host
/// replacement is used here too.
#[inline]
pub fn compare(a: &CStr, b: &CStr) -> i32 {
    #[cfg(feature = "c-strcmp")]
    return unsafe { super::libc::strcmp(a.as_ptr(), b.as_ptr()) };
    #[cfg(not(feature = "c-strcmp"))]
    return unsafe { strcmp(a.as_ptr().cast(), b.as_ptr().cast()) };
}

/// Like [`compare`], but looks at no more than `n` bytes of each string.
#[inline]
pub fn compare_bounded(a: &CStr, b: &CStr, n: usize) -> i32 {
    #[cfg(feature = "c-strncmp")]
    return unsafe { super::libc::strncmp(a.as_ptr(), b.as_ptr(), n) };
    #[cfg(not(feature = "c-strncmp"))]
    return unsafe { strncmp(a.as_ptr().cast(), b.as_ptr().cast(), n) };
}

//! C symbols consumed by the filesystem driver.
//!
//! Each symbol sits behind its own `c-*` feature, so a build that gets one
//! from elsewhere can drop just that one. With `weak` they are emitted as
//! weak definitions and any strong definition in the final link wins.

#![allow(non_upper_case_globals)]

#[allow(unused_imports)]
use core::ffi::{c_char, c_int, c_void};

#[allow(unused_imports)]
use super::{mem, stdio, string};

/// # Safety
/// - `s` must be a valid C string (nul terminated)
/// - `d` must be large enough to hold `s` and must not overlap it
#[cfg(feature = "c-stpcpy")]
#[cfg_attr(feature = "weak", linkage = "weak")]
#[no_mangle]
pub unsafe extern "C" fn __stpcpy(d: *mut c_char, s: *const c_char) -> *mut c_char {
    string::stpcpy(d.cast(), s.cast()).cast()
}

/// # Safety
/// Same as [`__stpcpy`].
#[cfg(feature = "c-strcpy")]
#[cfg_attr(feature = "weak", linkage = "weak")]
#[no_mangle]
pub unsafe extern "C" fn strcpy(dest: *mut c_char, src: *const c_char) -> *mut c_char {
    string::strcpy(dest.cast(), src.cast()).cast()
}

/// # Safety
/// `l` and `r` must be valid C strings.
#[cfg(feature = "c-strcmp")]
#[cfg_attr(feature = "weak", linkage = "weak")]
#[no_mangle]
pub unsafe extern "C" fn strcmp(l: *const c_char, r: *const c_char) -> c_int {
    string::strcmp(l.cast(), r.cast())
}

/// # Safety
/// Unless `n` is zero, `l` and `r` must be readable up to their terminator
/// or `n` bytes.
#[cfg(feature = "c-strncmp")]
#[cfg_attr(feature = "weak", linkage = "weak")]
#[no_mangle]
pub unsafe extern "C" fn strncmp(l: *const c_char, r: *const c_char, n: usize) -> c_int {
    string::strncmp(l.cast(), r.cast(), n)
}

/// # Safety
/// `s` must be valid for `n` bytes of writes.
#[cfg(feature = "c-memset")]
#[cfg_attr(feature = "weak", linkage = "weak")]
#[no_mangle]
pub unsafe extern "C" fn memset(s: *mut c_void, c: c_int, n: usize) -> *mut c_void {
    mem::memset(s.cast(), c, n).cast()
}

#[cfg(feature = "c-stdio")]
#[cfg_attr(feature = "weak", linkage = "weak")]
#[no_mangle]
pub static stdout: stdio::StreamHandle = stdio::StreamHandle::NULL;

#[cfg(feature = "c-stdio")]
#[cfg_attr(feature = "weak", linkage = "weak")]
#[no_mangle]
pub extern "C" fn fflush(f: *mut stdio::FILE) -> c_int {
    stdio::flush(stdio::StreamHandle::from_ptr(f))
}

//! Exported C symbols. Run with `--features c-abi`.
#![cfg(feature = "c-abi")]

use core::ffi::{c_char, c_void};
use core::ptr;

use ulibc::sys::{libc, stdio};

#[test]
fn string_symbols() {
    let src = c"ext4";
    let mut dst = [0 as c_char; 8];
    unsafe {
        let end = libc::__stpcpy(dst.as_mut_ptr(), src.as_ptr());
        assert_eq!(end, dst.as_mut_ptr().add(4));
        assert_eq!(libc::strcpy(dst.as_mut_ptr(), src.as_ptr()), dst.as_mut_ptr());
        assert_eq!(libc::strcmp(dst.as_ptr(), src.as_ptr()), 0);
        assert!(libc::strcmp(c"ext3".as_ptr(), src.as_ptr()) < 0);
        assert_eq!(libc::strncmp(src.as_ptr(), c"ext400".as_ptr(), 4), 0);
        assert_eq!(libc::strncmp(ptr::null(), ptr::null(), 0), 0);
    }
}

#[test]
fn memset_symbol() {
    let mut buf = [0u8; 5];
    let p = buf.as_mut_ptr().cast::<c_void>();
    assert_eq!(unsafe { libc::memset(p, b'A' as i32, 3) }, p);
    assert_eq!(buf, [0x41, 0x41, 0x41, 0, 0]);
}

#[test]
fn stdio_symbols() {
    assert!(libc::stdout.is_null());
    assert_eq!(libc::fflush(libc::stdout.as_ptr()), 0);
    assert_eq!(libc::fflush(ptr::null_mut::<stdio::FILE>()), 0);
}

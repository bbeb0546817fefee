//! Freestanding fallbacks for the handful of C string, memory and stdio
//! symbols an embedded filesystem driver links against.
//!
//! Enable `c-abi` (or individual `c-*` features) to export the C symbols.
//! With `weak` on a nightly toolchain they are emitted as weak definitions,
//! so a host libc that links its own copy takes precedence.

#![cfg_attr(not(test), no_std)]
#![cfg_attr(feature = "weak", feature(linkage))]
#![cfg_attr(
    any(
        feature = "c-stpcpy",
        feature = "c-strcpy",
        feature = "c-strcmp",
        feature = "c-strncmp",
        feature = "c-memset"
    ),
    no_builtins
)]

pub mod sys;

pub use sys::mem::fill;
pub use sys::stdio::{flush, StreamHandle, STDOUT};
pub use sys::string::{compare, compare_bounded, copy, copy_to_terminator};
pub use sys::word::{is_word_aligned, word_contains_zero_byte, NativeWord, Word};

#[doc(hidden)]
pub use log;

pub mod word;
pub mod string;
pub mod mem;
pub mod stdio;
pub mod debug;
pub mod libc;

use critical_section as cs;

/// Execute closure `f` in a critical section.
///
/// The host must provide a `critical-section` implementation.
#[inline]
pub fn with_cs<R>(f: impl FnOnce(cs::CriticalSection) -> R) -> R {
    cs::with(f)
}

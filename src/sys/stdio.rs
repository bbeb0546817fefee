use core::{marker, ptr};

/// Opaque C `FILE`. Never constructed on this side.
#[repr(C)]
pub struct FILE {
    _data: [u8; 0],
    _marker: marker::PhantomData<(*mut u8, marker::PhantomPinned)>,
}

/// A `FILE*` that can live in a `static`.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StreamHandle(*mut FILE);

// Only ever compared, never dereferenced.
unsafe impl Sync for StreamHandle {}
unsafe impl Send for StreamHandle {}

impl StreamHandle {
    pub const NULL: Self = Self(ptr::null_mut());

    #[inline]
    pub const fn from_ptr(ptr: *mut FILE) -> Self {
        Self(ptr)
    }

    #[inline]
    pub const fn as_ptr(self) -> *mut FILE {
        self.0
    }

    #[inline]
    pub const fn is_null(self) -> bool {
        self.0.is_null()
    }
}

/// There is no console. Writing through this handle is a caller error.
pub static STDOUT: StreamHandle = StreamHandle::NULL;

/// Nothing is buffered, so there is nothing to flush.
#[inline]
pub fn flush(_stream: StreamHandle) -> i32 {
    0
}

#[cfg(test)]
mod tests {
    use super::*;

    const STDOUT_IS_NULL: bool = StreamHandle::NULL.is_null();

    #[test]
    fn stdout_is_null() {
        assert!(STDOUT_IS_NULL);
        assert!(STDOUT.is_null());
        assert_eq!(STDOUT.as_ptr(), ptr::null_mut());
    }

    #[test]
    fn flush_always_succeeds() {
        assert_eq!(flush(STDOUT), 0);
        let mut dummy = 0u8;
        assert_eq!(flush(StreamHandle::from_ptr((&raw mut dummy).cast())), 0);
    }
}

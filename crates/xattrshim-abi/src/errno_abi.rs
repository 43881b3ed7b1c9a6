//! ABI layer for `<errno.h>` — thread-local errno storage.
//!
//! This is the out-of-band channel the shim reports through: a pure
//! per-thread accessor with no locking and no cross-thread visibility.

use std::cell::UnsafeCell;
use std::ffi::c_int;

// Un-mangled only in release builds so debug/test binaries do not interpose
// the host libc's own errno machinery.
#[cfg_attr(not(debug_assertions), unsafe(no_mangle))]
pub unsafe extern "C" fn __errno_location() -> *mut c_int {
    thread_local! {
        static ERRNO: UnsafeCell<c_int> = const { UnsafeCell::new(0) };
    }
    ERRNO.with(|cell| cell.get())
}

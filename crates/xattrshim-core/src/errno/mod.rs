//! Error number definitions.
//!
//! Implements `<errno.h>` support with thread-local errno storage. The cell
//! starts at zero on every thread and is written only when a shim call
//! fails; nothing in this crate ever reads it back.

use std::cell::Cell;

thread_local! {
    static ERRNO: Cell<i32> = const { Cell::new(0) };
}

/// Well-known errno constants.
pub const EPERM: i32 = 1;
pub const ENOENT: i32 = 2;
pub const EINTR: i32 = 4;
pub const EIO: i32 = 5;
pub const EBADF: i32 = 9;
pub const EAGAIN: i32 = 11;
pub const ENOMEM: i32 = 12;
pub const EACCES: i32 = 13;
pub const EFAULT: i32 = 14;
pub const EEXIST: i32 = 17;
pub const EINVAL: i32 = 22;
pub const ERANGE: i32 = 34;
pub const ENOSYS: i32 = 38;
/// Attribute absent. Callers must never confuse this with [`ENOTSUP`],
/// which means the attribute *feature* is absent.
pub const ENODATA: i32 = 61;
pub const EOPNOTSUPP: i32 = 95;
/// Operation not supported. Aliases [`EOPNOTSUPP`] on Linux.
pub const ENOTSUP: i32 = EOPNOTSUPP;

/// Returns the current thread-local errno value.
///
/// Equivalent to reading C `errno`.
pub fn get_errno() -> i32 {
    ERRNO.get()
}

/// Sets the current thread-local errno value.
///
/// Equivalent to assigning to C `errno`.
pub fn set_errno(value: i32) {
    ERRNO.set(value);
}

//! ABI layer for the descriptor-based extended-attribute calls.
//!
//! The four exports delegate to [`UnsupportedXattr`], so each one returns
//! `-1` with errno set to `ENOTSUP` regardless of input. Arguments pass
//! through untouched: no pointer is dereferenced, no buffer read or written,
//! no descriptor or name validated. Validation is deliberately absent — an
//! `EINVAL` or `EBADF` here would falsely signal that the feature exists.

use std::ffi::{c_char, c_int, c_void};

use xattrshim_core::xattr::{UnsupportedXattr, XattrProvider};

/// Provider behind every exported symbol. Zero-sized; a platform with real
/// xattr support substitutes its own provider here.
static PROVIDER: UnsupportedXattr = UnsupportedXattr;

#[inline]
unsafe fn set_abi_errno(val: c_int) {
    let p = unsafe { super::errno_abi::__errno_location() };
    unsafe { *p = val };
}

// ---------------------------------------------------------------------------
// fgetxattr
// ---------------------------------------------------------------------------

#[unsafe(no_mangle)]
pub unsafe extern "C" fn fgetxattr(
    fd: c_int,
    name: *const c_char,
    value: *mut c_void,
    size: libc::size_t,
) -> libc::ssize_t {
    match PROVIDER.fgetxattr(fd, name, value, size) {
        Ok(len) => len as libc::ssize_t,
        Err(err) => {
            unsafe { set_abi_errno(err.errno()) };
            -1
        }
    }
}

// ---------------------------------------------------------------------------
// fsetxattr
// ---------------------------------------------------------------------------

#[unsafe(no_mangle)]
pub unsafe extern "C" fn fsetxattr(
    fd: c_int,
    name: *const c_char,
    value: *const c_void,
    size: libc::size_t,
    flags: c_int,
) -> c_int {
    match PROVIDER.fsetxattr(fd, name, value, size, flags) {
        Ok(()) => 0,
        Err(err) => {
            unsafe { set_abi_errno(err.errno()) };
            -1
        }
    }
}

// ---------------------------------------------------------------------------
// fremovexattr
// ---------------------------------------------------------------------------

#[unsafe(no_mangle)]
pub unsafe extern "C" fn fremovexattr(fd: c_int, name: *const c_char) -> c_int {
    match PROVIDER.fremovexattr(fd, name) {
        Ok(()) => 0,
        Err(err) => {
            unsafe { set_abi_errno(err.errno()) };
            -1
        }
    }
}

// ---------------------------------------------------------------------------
// flistxattr
// ---------------------------------------------------------------------------

#[unsafe(no_mangle)]
pub unsafe extern "C" fn flistxattr(
    fd: c_int,
    list: *mut c_char,
    size: libc::size_t,
) -> libc::ssize_t {
    match PROVIDER.flistxattr(fd, list, size) {
        Ok(len) => len as libc::ssize_t,
        Err(err) => {
            unsafe { set_abi_errno(err.errno()) };
            -1
        }
    }
}

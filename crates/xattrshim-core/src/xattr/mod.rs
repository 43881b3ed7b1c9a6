//! Extended-attribute capability surface.
//!
//! The four descriptor-based xattr operations are modeled as a trait so the
//! ABI boundary is written against the contract, not against one provider.
//! The only provider shipped here is [`UnsupportedXattr`], because the
//! target runtime has no xattr syscall family to delegate to. A platform
//! with real support would substitute another provider without touching the
//! exported symbols.

use std::ffi::{c_char, c_int, c_void};

use thiserror::Error;

use crate::errno;

/// `fsetxattr` flag: pure create, fail if the attribute already exists.
pub const XATTR_CREATE: c_int = 0x1;
/// `fsetxattr` flag: pure replace, fail if the attribute is missing.
pub const XATTR_REPLACE: c_int = 0x2;

/// Failure reported by an xattr provider.
///
/// Exactly one kind exists. The shim performs no validation, so there is no
/// "invalid argument" or "bad descriptor" case to distinguish; every call
/// collapses to the same capability-missing signal.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum XattrError {
    /// The execution environment has no extended-attribute support at all.
    #[error("extended attributes are not supported in this environment")]
    Unsupported,
}

impl XattrError {
    /// The errno value this failure is reported as at the ABI boundary.
    ///
    /// Deliberately the generic `ENOTSUP`, not a feature-specific code:
    /// callers are already written to treat it as "capability missing".
    pub fn errno(self) -> i32 {
        match self {
            XattrError::Unsupported => errno::ENOTSUP,
        }
    }
}

/// The four descriptor-based extended-attribute capabilities.
///
/// Arguments keep the raw C shapes of the corresponding syscalls so that a
/// provider swap never changes the exported signatures. A provider that does
/// not implement the feature must not dereference any pointer argument:
/// `name` may be null or unterminated, `value`/`list` may be null or smaller
/// than `size`, and `fd` may not refer to an open file. Only a provider that
/// actually performs an operation may rely on argument validity.
pub trait XattrProvider {
    /// Read the value of attribute `name` into `value`, returning the value
    /// length in bytes.
    fn fgetxattr(
        &self,
        fd: c_int,
        name: *const c_char,
        value: *mut c_void,
        size: usize,
    ) -> Result<usize, XattrError>;

    /// Store `size` bytes of `value` as attribute `name`, honoring
    /// [`XATTR_CREATE`] / [`XATTR_REPLACE`] in `flags`.
    fn fsetxattr(
        &self,
        fd: c_int,
        name: *const c_char,
        value: *const c_void,
        size: usize,
        flags: c_int,
    ) -> Result<(), XattrError>;

    /// Remove attribute `name`.
    fn fremovexattr(&self, fd: c_int, name: *const c_char) -> Result<(), XattrError>;

    /// Write the NUL-separated attribute-name list into `list`, returning
    /// the list length in bytes.
    fn flistxattr(
        &self,
        fd: c_int,
        list: *mut c_char,
        size: usize,
    ) -> Result<usize, XattrError>;
}

/// Provider for environments where the xattr syscall family does not exist.
///
/// Every method fails with [`XattrError::Unsupported`] without looking at a
/// single argument. Validating arguments here would falsely advertise
/// partial support: a caller that gets `EINVAL` back would conclude the
/// feature exists and its input was the problem. Failing silently, or
/// pretending "set" stored and "list" is empty, would be worse still, since
/// callers would assume attributes they wrote were persisted.
#[derive(Debug, Default, Clone, Copy)]
pub struct UnsupportedXattr;

impl XattrProvider for UnsupportedXattr {
    fn fgetxattr(
        &self,
        _fd: c_int,
        _name: *const c_char,
        _value: *mut c_void,
        _size: usize,
    ) -> Result<usize, XattrError> {
        Err(XattrError::Unsupported)
    }

    fn fsetxattr(
        &self,
        _fd: c_int,
        _name: *const c_char,
        _value: *const c_void,
        _size: usize,
        _flags: c_int,
    ) -> Result<(), XattrError> {
        Err(XattrError::Unsupported)
    }

    fn fremovexattr(&self, _fd: c_int, _name: *const c_char) -> Result<(), XattrError> {
        Err(XattrError::Unsupported)
    }

    fn flistxattr(
        &self,
        _fd: c_int,
        _list: *mut c_char,
        _size: usize,
    ) -> Result<usize, XattrError> {
        Err(XattrError::Unsupported)
    }
}

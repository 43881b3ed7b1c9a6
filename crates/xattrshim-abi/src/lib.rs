// All extern "C" exports accept raw pointers from C callers and, per the
// shim contract, never dereference them; per-function safety docs would be
// redundant boilerplate.
#![allow(clippy::missing_safety_doc)]
//! # xattrshim-abi
//!
//! ABI-compatible extern "C" boundary for the extended-attribute shim.
//!
//! This crate produces a `cdylib` exposing the four descriptor-based xattr
//! symbols (`fgetxattr`, `fsetxattr`, `fremovexattr`, `flistxattr`) a hosted
//! C runtime expects to link against, inside a restricted execution
//! environment whose kernel surface has no xattr support at all.
//!
//! # Architecture
//!
//! ```text
//! C caller -> ABI entry (this crate) -> always-unsupported provider -> errno + sentinel
//! ```
//!
//! Every call fails with `ENOTSUP` and the `-1` sentinel. Linking the real
//! feature in later means substituting the provider in `xattrshim-core`,
//! not touching these exports.

pub mod errno_abi;
pub mod xattr_abi;

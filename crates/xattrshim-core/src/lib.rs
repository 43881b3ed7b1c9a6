//! # xattrshim-core
//!
//! Safe Rust core of the extended-attribute compatibility shim.
//!
//! The target runtime is a restricted execution environment whose kernel
//! surface has no xattr syscall family at all. This crate provides the
//! capability contract ([`xattr::XattrProvider`]) and the one provider that
//! environment can honestly offer ([`xattr::UnsupportedXattr`]), plus the
//! thread-local errno channel the ABI boundary reports failures through.
//! No `unsafe` code is permitted at the crate level.

#![deny(unsafe_code)]

pub mod errno;
pub mod xattr;

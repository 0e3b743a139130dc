//! Conversion between the textual and binary forms of Windows GUIDs.
//!
//! A [`Guid`] is the 128-bit structured value behind text such as
//! `{B196B284-BAB4-101A-B69C-00AA00341D07}`: a `u32`, two `u16`s and an
//! eight-byte tail, with the first three fields little-endian in the binary
//! wire layout.
//!
//! [`Guid::parse`] accepts the hyphenated 8-4-4-4-12 form, upper or lower
//! case, with or without a matching pair of braces, and rejects everything
//! else. [`Guid::parse_or_null`] keeps the classic single-return contract of
//! yielding the null GUID on malformed input. Formatting via `Display`
//! always produces the brace-wrapped uppercase canonical form.

pub mod error;
pub mod guid;

pub use error::{Error, Result};
pub use guid::Guid;

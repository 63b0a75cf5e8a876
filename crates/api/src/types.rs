//! Core types shared across the eccrypt crates
//!
//! [`SecretVec`] carries key material that must not leak through `Debug`
//! output or timing of comparisons; [`Input`] normalises the "bytes or text"
//! arguments accepted at the public surface.

use core::fmt;
use core::ops::Deref;
use std::borrow::Cow;

use subtle::ConstantTimeEq;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::Result;

/// A variable-length byte buffer that is securely zeroed when dropped
///
/// This type provides:
/// - Secure zeroing when dropped
/// - Constant-time equality comparison
/// - Debug implementation that hides the actual bytes
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct SecretVec {
    data: Vec<u8>,
}

impl SecretVec {
    /// Take ownership of existing bytes
    pub fn new(data: Vec<u8>) -> Self {
        Self { data }
    }

    /// Copy bytes out of a slice
    pub fn from_slice(slice: &[u8]) -> Self {
        Self {
            data: slice.to_vec(),
        }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }
}

impl AsRef<[u8]> for SecretVec {
    fn as_ref(&self) -> &[u8] {
        &self.data
    }
}

impl Deref for SecretVec {
    type Target = [u8];

    fn deref(&self) -> &Self::Target {
        &self.data
    }
}

impl PartialEq for SecretVec {
    fn eq(&self, other: &Self) -> bool {
        self.data.len() == other.data.len() && bool::from(self.data.ct_eq(&other.data))
    }
}

impl Eq for SecretVec {}

impl fmt::Debug for SecretVec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SecretVec({} bytes)", self.data.len())
    }
}

/// A byte-or-text argument
///
/// Messages given as text are taken as their UTF-8 bytes; key material and
/// wire ciphertexts given as text are taken as hexadecimal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input<'a> {
    Bytes(&'a [u8]),
    Text(&'a str),
}

impl<'a> Input<'a> {
    /// Bytes of the input, reading text as UTF-8
    pub fn utf8_bytes(&self) -> &'a [u8] {
        match *self {
            Input::Bytes(bytes) => bytes,
            Input::Text(text) => text.as_bytes(),
        }
    }

    /// Bytes of the input, reading text as hexadecimal
    pub fn hex_bytes(&self) -> Result<Cow<'a, [u8]>> {
        match *self {
            Input::Bytes(bytes) => Ok(Cow::Borrowed(bytes)),
            Input::Text(text) => Ok(Cow::Owned(hex::decode(text)?)),
        }
    }
}

impl<'a> From<&'a [u8]> for Input<'a> {
    fn from(bytes: &'a [u8]) -> Self {
        Input::Bytes(bytes)
    }
}

impl<'a, const N: usize> From<&'a [u8; N]> for Input<'a> {
    fn from(bytes: &'a [u8; N]) -> Self {
        Input::Bytes(bytes)
    }
}

impl<'a> From<&'a Vec<u8>> for Input<'a> {
    fn from(bytes: &'a Vec<u8>) -> Self {
        Input::Bytes(bytes)
    }
}

impl<'a> From<&'a str> for Input<'a> {
    fn from(text: &'a str) -> Self {
        Input::Text(text)
    }
}

impl<'a> From<&'a String> for Input<'a> {
    fn from(text: &'a String) -> Self {
        Input::Text(text)
    }
}

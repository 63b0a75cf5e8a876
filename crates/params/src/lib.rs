//! Constant values for the eccrypt library
//!
//! Key, digest, nonce and signature sizes for every algorithm the capability
//! implementations expose, plus the defaults used by the ECIES configuration.

#![no_std]

pub mod ecies;
pub mod traditional;
pub mod utils;

//! Constants for traditional elliptic-curve algorithms

pub mod ecdh;
pub mod ecdsa;

//! Elliptic curve key agreement
//!
//! Three curves are registered: NIST P-521, secp256k1 and X25519. Each one
//! wraps the RustCrypto implementation behind the [`Curve`] capability using
//! raw fixed-length key encodings:
//!
//! | curve     | private | public            | shared point       |
//! |-----------|---------|-------------------|--------------------|
//! | P-521     | 66      | 67 (compressed)   | 133 (uncompressed) |
//! | secp256k1 | 32      | 65 (uncompressed) | 33 (compressed)    |
//! | X25519    | 32      | 32                | u-coordinate, 32   |

use core::fmt;
use core::str::FromStr;

use eccrypt_api::{Curve, Error};

pub mod k256;
pub mod p521;
pub mod x25519;

pub use self::k256::Secp256k1Curve;
pub use self::p521::P521Curve;
pub use self::x25519::X25519Curve;

/// Shared P-521 instance
pub static P521: P521Curve = P521Curve;

/// Shared secp256k1 instance
pub static SECP256K1: Secp256k1Curve = Secp256k1Curve;

/// Shared X25519 instance
pub static X25519: X25519Curve = X25519Curve;

/// Registered curves
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CurveId {
    /// NIST P-521 (secp521r1)
    P521,
    /// secp256k1
    Secp256k1,
    /// Curve25519 in Montgomery form
    X25519,
}

impl CurveId {
    /// Every registered curve, in declaration order
    pub const ALL: [CurveId; 3] = [CurveId::P521, CurveId::Secp256k1, CurveId::X25519];

    /// Registered name
    pub fn name(self) -> &'static str {
        self.capability().name()
    }

    /// The capability instance behind this identifier
    pub fn capability(self) -> &'static dyn Curve {
        match self {
            CurveId::P521 => &P521,
            CurveId::Secp256k1 => &SECP256K1,
            CurveId::X25519 => &X25519,
        }
    }
}

impl fmt::Display for CurveId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CurveId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().replace(['-', '_'], "").as_str() {
            "P521" | "SECP521R1" | "NISTP521" => Ok(CurveId::P521),
            "SECP256K1" | "K256" => Ok(CurveId::Secp256k1),
            "X25519" | "CURVE25519" => Ok(CurveId::X25519),
            _ => Err(Error::UnknownAlgorithm {
                kind: "curve",
                name: s.to_string(),
            }),
        }
    }
}

//! Shared fixtures for the eccrypt integration tests and benchmarks

use eccrypt_algorithms::{CurveId, HashId, SymmetricId};
use eccrypt_pke::{Configuration, ConfigurationOptions};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

/// Deterministic RNG for reproducible test runs
pub fn seeded_rng(seed: u64) -> ChaCha20Rng {
    ChaCha20Rng::seed_from_u64(seed)
}

/// Every curve x hash x symmetric combination with a 32-byte derived key
pub fn all_configurations() -> Vec<Configuration> {
    let mut configs = Vec::new();
    for curve in CurveId::ALL {
        for hash in HashId::ALL {
            for symmetric in SymmetricId::ALL {
                let options = ConfigurationOptions::default()
                    .with_curve(curve)
                    .with_hash(hash)
                    .with_symmetric(symmetric);
                match Configuration::new(options) {
                    Ok(config) => configs.push(config),
                    Err(e) => panic!("{curve}/{hash}/{symmetric} rejected: {e}"),
                }
            }
        }
    }
    configs
}

/// Copy of `bytes` with bit `bit` (counted from the front) inverted
pub fn flip_bit(bytes: &[u8], bit: usize) -> Vec<u8> {
    let mut out = bytes.to_vec();
    out[bit / 8] ^= 1 << (bit % 8);
    out
}

/// Offset of the first byte of the hex data field in a wire ciphertext
pub fn data_field_offset(config: &Configuration, wire: &[u8]) -> usize {
    let pk_len = config.curve().public_key_length();
    let dots = wire[pk_len..]
        .iter()
        .enumerate()
        .filter(|(_, &b)| b == b'.')
        .map(|(i, _)| i)
        .take(3)
        .collect::<Vec<_>>();
    pk_len + dots[2] + 1
}

use super::*;

#[test]
fn test_sha256_known_answer() {
    // FIPS 180-2, "abc"
    assert_eq!(
        hex::encode(SHA256.hash(b"abc")),
        "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
    );
    assert_eq!(SHA256.output_length(), 32);
}

#[test]
fn test_sha512_known_answer() {
    assert_eq!(
        hex::encode(SHA512.hash(b"abc")),
        "ddaf35a193617abacc417349ae20413112e6fa4e89a97ea20a9eeee64b55d39a\
         2192992a274fc1a836ba3c23a3feebbd454d4423643ce80e2a9ac94fa54ca49f"
    );
    assert_eq!(SHA512.output_length(), 64);
}

#[test]
fn test_hash_is_deterministic() {
    for id in HashId::ALL {
        let hash = id.capability();
        assert_eq!(hash.hash(b"payload"), hash.hash(b"payload"));
        assert_ne!(hash.hash(b"payload"), hash.hash(b"payloaD"));
    }
}

#[test]
fn test_hkdf_respects_length_limit() {
    for id in HashId::ALL {
        let hash = id.capability();
        let max = 255 * hash.output_length();
        assert_eq!(hash.hkdf(b"ikm", None, None, max).unwrap().len(), max);
        assert!(matches!(
            hash.hkdf(b"ikm", None, None, max + 1),
            Err(Error::KeyDerivationFailed { .. })
        ));
    }
}

#[test]
fn test_hkdf_zero_length_is_empty() {
    assert!(SHA256.hkdf(b"ikm", None, None, 0).unwrap().is_empty());
}

#[test]
fn test_hash_id_names_round_trip() {
    for id in HashId::ALL {
        assert_eq!(id.name().parse::<HashId>().unwrap(), id);
        assert_eq!(id.to_string(), id.name());
    }
    assert_eq!("sha_512".parse::<HashId>().unwrap(), HashId::Sha512);
    assert!(matches!(
        "MD5".parse::<HashId>(),
        Err(Error::UnknownAlgorithm { kind: "hash", .. })
    ));
}

//! End-to-end ECIES behaviour across every configuration

use eccrypt_algorithms::{CurveId, SymmetricId};
use eccrypt_api::Error;
use eccrypt_pke::ecies::frame;
use eccrypt_pke::{Configuration, ConfigurationOptions, Frame};
use eccrypt_tests::{all_configurations, data_field_offset, flip_bit, seeded_rng};

#[test]
fn test_hello_world() {
    let config = Configuration::default();
    let pair = config.key_pair().unwrap();

    let encrypted = config
        .encrypt("Hello, World!", pair.public_key.as_bytes())
        .unwrap();
    let decrypted = config
        .decrypt(&encrypted, pair.private_key.as_bytes())
        .unwrap();

    assert_eq!(String::from_utf8(decrypted).unwrap(), "Hello, World!");
}

#[test]
fn test_round_trip_every_combination() {
    let mut rng = seeded_rng(100);
    let messages: [&[u8]; 4] = [b"", b"x", b"Hello, World!", &[0xa5; 4096]];

    for config in all_configurations() {
        let pair = config.key_pair_with_rng(&mut rng).unwrap();
        for message in messages {
            let wire = config
                .encrypt_with_rng(message, pair.public_key.as_bytes(), &mut rng)
                .unwrap();
            let plain = config.decrypt(&wire, pair.private_key.as_bytes()).unwrap();
            assert_eq!(plain, message, "{config}");
        }
    }
}

#[test]
fn test_ephemeral_keys_are_unique() {
    let mut rng = seeded_rng(101);
    for config in all_configurations() {
        let pair = config.key_pair_with_rng(&mut rng).unwrap();
        let pk_len = config.curve().public_key_length();

        let a = config
            .encrypt_with_rng(b"m", pair.public_key.as_bytes(), &mut rng)
            .unwrap();
        let b = config
            .encrypt_with_rng(b"m", pair.public_key.as_bytes(), &mut rng)
            .unwrap();
        assert_ne!(a[..pk_len], b[..pk_len], "{config}");
        assert_ne!(a, b);
    }
}

#[test]
fn test_shared_secret_symmetry() {
    let mut rng = seeded_rng(102);
    for config in all_configurations() {
        let alice = config.private_key_with_rng(&mut rng).unwrap();
        let bob = config.private_key_with_rng(&mut rng).unwrap();

        let from_alice = alice
            .get_shared_secret(&config, bob.public_key().as_bytes())
            .unwrap();
        let from_bob = alice
            .public_key()
            .get_shared_secret(&config, &bob)
            .unwrap();
        assert_eq!(from_alice, from_bob, "{config}");
    }
}

#[test]
fn test_private_key_length_validation() {
    for curve in CurveId::ALL {
        let config = Configuration::for_curve(curve);
        let expected = config.curve().private_key_length();
        for len in [0, expected - 1, expected + 1] {
            assert_eq!(
                config.private_key(&vec![1u8; len]).unwrap_err(),
                Error::InvalidKeyLength {
                    context: "private key",
                    expected,
                    actual: len,
                },
                "{curve}"
            );
        }
    }

    // P-521 keys are exactly 66 bytes.
    let config = Configuration::p521();
    assert!(matches!(
        config.private_key(&[1u8; 65]),
        Err(Error::InvalidKeyLength { expected: 66, actual: 65, .. })
    ));
    assert!(config.private_key(&[1u8; 66]).is_ok());
}

#[test]
fn test_public_key_length_validation() {
    for curve in CurveId::ALL {
        let config = Configuration::for_curve(curve);
        let expected = config.curve().public_key_length();
        assert!(matches!(
            config.encrypt("m", &vec![2u8; expected - 1]),
            Err(Error::InvalidKeyLength { .. })
        ));
        assert!(matches!(
            config.public_key(&vec![2u8; expected + 1]),
            Err(Error::InvalidKeyLength { .. })
        ));
    }
}

#[test]
fn test_frame_round_trip_and_length_corruption() {
    let encoded = frame::serialize(b"ciphertext bytes", b"twelve bytes", "AES-GCM").unwrap();
    let decoded = frame::deserialize(&encoded).unwrap();
    assert_eq!(decoded.data, b"ciphertext bytes");
    assert_eq!(decoded.nonce, b"twelve bytes");
    assert_eq!(decoded.algorithm, "AES-GCM");

    // "20" (32 hex chars) becomes "21"
    let mut corrupted = encoded.clone();
    assert_eq!(&corrupted[..3], b"20.");
    corrupted[1] = b'1';
    assert!(matches!(
        frame::deserialize(&corrupted),
        Err(Error::MalformedFrame { .. })
    ));
}

#[test]
fn test_length_prefix_corruption_on_the_wire() {
    let mut rng = seeded_rng(103);
    let config = Configuration::default();
    let pair = config.key_pair_with_rng(&mut rng).unwrap();
    let mut wire = config
        .encrypt_with_rng(b"prefix", pair.public_key.as_bytes(), &mut rng)
        .unwrap();

    let pk_len = config.curve().public_key_length();
    wire[pk_len] = if wire[pk_len] == b'f' { b'e' } else { b'f' };
    assert!(matches!(
        config.decrypt(&wire, pair.private_key.as_bytes()),
        Err(Error::MalformedFrame { .. })
    ));
}

#[test]
fn test_algorithm_mismatch() {
    let mut rng = seeded_rng(104);
    let sender = Configuration::new(
        ConfigurationOptions::default().with_symmetric(SymmetricId::ChaCha20Poly1305),
    )
    .unwrap();
    let receiver = Configuration::default();
    let pair = receiver.key_pair_with_rng(&mut rng).unwrap();

    let wire = sender
        .encrypt_with_rng(b"m", pair.public_key.as_bytes(), &mut rng)
        .unwrap();
    assert!(matches!(
        receiver.decrypt(&wire, pair.private_key.as_bytes()),
        Err(Error::AlgorithmMismatch { expected: "AES-GCM", .. })
    ));
    assert_eq!(
        receiver.decrypt_redacted(&wire, pair.private_key.as_bytes()),
        Err(Error::DecryptionRejected)
    );
}

#[test]
fn test_single_bit_tamper_fails_authentication() {
    let mut rng = seeded_rng(105);
    for config in all_configurations() {
        let pair = config.key_pair_with_rng(&mut rng).unwrap();
        let wire = config
            .encrypt_with_rng(b"tamper with me", pair.public_key.as_bytes(), &mut rng)
            .unwrap();
        let pk_len = config.curve().public_key_length();
        let parsed = frame::deserialize(&wire[pk_len..]).unwrap();

        for bit in [0, 7, 8 * parsed.data.len() - 1] {
            let tampered = Frame::new(
                flip_bit(&parsed.data, bit),
                parsed.nonce.clone(),
                parsed.algorithm.clone(),
            )
            .unwrap();
            let mut forged = wire[..pk_len].to_vec();
            forged.extend_from_slice(&tampered.to_bytes());

            assert!(
                matches!(
                    config.decrypt(&forged, pair.private_key.as_bytes()),
                    Err(Error::AuthenticationFailed { .. })
                ),
                "{config} bit {bit}"
            );
        }
    }
}

#[test]
fn test_non_hex_data_is_malformed() {
    let mut rng = seeded_rng(106);
    let config = Configuration::x25519();
    let pair = config.key_pair_with_rng(&mut rng).unwrap();
    let mut wire = config
        .encrypt_with_rng(b"data", pair.public_key.as_bytes(), &mut rng)
        .unwrap();
    let offset = data_field_offset(&config, &wire);
    wire[offset] = b'g';
    assert!(matches!(
        config.decrypt(&wire, pair.private_key.as_bytes()),
        Err(Error::MalformedFrame { .. })
    ));
}

#[test]
fn test_hex_text_interchange() {
    let mut rng = seeded_rng(107);
    let config = Configuration::secp256k1();
    let pair = config.key_pair_with_rng(&mut rng).unwrap();

    let public_hex = pair.public_key.to_hex();
    let private_hex = pair.private_key.to_hex();
    assert_eq!(public_hex.len(), 130);
    assert_eq!(public_hex, public_hex.to_lowercase());

    let wire = config
        .encrypt_with_rng("over text", &public_hex, &mut rng)
        .unwrap();
    let plain = config.decrypt(&hex::encode(wire), &private_hex).unwrap();
    assert_eq!(plain, b"over text");
}

#[test]
fn test_seeded_rng_reproduces_ciphertext() {
    let config = Configuration::default();
    let pair = config.key_pair_with_rng(&mut seeded_rng(108)).unwrap();
    let once = config
        .encrypt_with_rng(b"repeat", pair.public_key.as_bytes(), &mut seeded_rng(109))
        .unwrap();
    let twice = config
        .encrypt_with_rng(b"repeat", pair.public_key.as_bytes(), &mut seeded_rng(109))
        .unwrap();
    assert_eq!(once, twice);
}

#[test]
fn test_from_seed_determinism() {
    for curve in CurveId::ALL {
        let config = Configuration::for_curve(curve);
        let a = config.from_seed("a long and memorable passphrase").unwrap();
        let b = config.from_seed("a long and memorable passphrase").unwrap();
        assert_eq!(a, b);
        assert_eq!(a.len(), config.curve().private_key_length());

        // A seed that already has key length is still stretched.
        let key_sized = vec![3u8; config.curve().private_key_length()];
        assert_ne!(config.from_seed(&key_sized).unwrap(), key_sized);

        let pair_key = config.private_key(&a).unwrap();
        let wire = config
            .encrypt_with_rng(b"seeded", pair_key.public_key().as_bytes(), &mut seeded_rng(110))
            .unwrap();
        assert_eq!(config.decrypt(&wire, &a).unwrap(), b"seeded");
    }
}

#[cfg(feature = "serde")]
#[test]
fn test_descriptor_serde_round_trip() {
    for config in all_configurations() {
        let json = serde_json::to_string(&config.describe()).unwrap();
        let descriptor: eccrypt_pke::ConfigurationDescriptor = serde_json::from_str(&json).unwrap();
        assert_eq!(Configuration::try_from(descriptor).unwrap(), config);
    }
}

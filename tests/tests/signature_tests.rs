//! ECDSA signing through the configuration surface

use eccrypt_api::{Error, SignatureScheme};
use eccrypt_sign::{SignatureId, SigningConfiguration, ECDSA_P521, ECDSA_SECP256K1};
use eccrypt_tests::{flip_bit, seeded_rng};

#[test]
fn test_sign_verify_every_scheme() {
    let mut rng = seeded_rng(500);
    for id in SignatureId::ALL {
        let config = SigningConfiguration::new(id);
        let pair = config.key_pair_with_rng(&mut rng).unwrap();
        let sig = config.sign("Hello, World!", pair.private_key.as_bytes()).unwrap();

        assert!(config.verify("Hello, World!", &sig, &pair.public_key).unwrap(), "{id}");
        assert!(!config.verify("Hello, World?", &sig, &pair.public_key).unwrap(), "{id}");
    }
}

#[test]
fn test_tampered_signature_is_rejected() {
    let mut rng = seeded_rng(501);
    for id in SignatureId::ALL {
        let config = SigningConfiguration::new(id);
        let pair = config.key_pair_with_rng(&mut rng).unwrap();
        let sig = config.sign(b"payload", pair.private_key.as_bytes()).unwrap();

        for bit in [0, 8 * sig.len() - 1] {
            assert!(!config
                .verify(b"payload", &flip_bit(&sig, bit), &pair.public_key)
                .unwrap());
        }
        assert!(!config
            .verify(b"payload", &sig[..sig.len() - 1], &pair.public_key)
            .unwrap());
    }
}

#[test]
fn test_signature_sizes() {
    let mut rng = seeded_rng(502);

    let p521 = SigningConfiguration::new(SignatureId::EcdsaP521);
    let pair = p521.key_pair_with_rng(&mut rng).unwrap();
    assert_eq!(pair.private_key.len(), 66);
    assert_eq!(p521.sign("m", pair.private_key.as_bytes()).unwrap().len(), 132);

    let k256 = SigningConfiguration::new(SignatureId::EcdsaSecp256k1);
    let pair = k256.key_pair_with_rng(&mut rng).unwrap();
    assert_eq!(pair.private_key.len(), 32);
    assert_eq!(pair.public_key.len(), 65);
    assert_eq!(k256.sign("m", pair.private_key.as_bytes()).unwrap().len(), 64);
}

#[test]
fn test_cross_scheme_keys_do_not_verify() {
    let mut rng = seeded_rng(503);
    let p521 = SigningConfiguration::new(SignatureId::EcdsaP521);
    let k256 = SigningConfiguration::new(SignatureId::EcdsaSecp256k1);
    let p521_pair = p521.key_pair_with_rng(&mut rng).unwrap();
    let k256_pair = k256.key_pair_with_rng(&mut rng).unwrap();

    let sig = k256.sign("m", k256_pair.private_key.as_bytes()).unwrap();
    assert!(!p521.verify("m", &sig, &p521_pair.public_key).unwrap());
}

#[test]
fn test_signing_with_bad_key_length() {
    let config = SigningConfiguration::default();
    assert!(matches!(
        config.sign("m", &[1u8; 10][..]),
        Err(Error::InvalidKeyLength { .. })
    ));
}

#[test]
fn test_static_instances_report_names() {
    assert_eq!(ECDSA_P521.name(), "ECDSA-P521");
    assert_eq!(ECDSA_SECP256K1.name(), "ECDSA-SECP256K1");
}

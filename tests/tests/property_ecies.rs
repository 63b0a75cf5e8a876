//! Property tests for the frame codec and the ECIES round trip

use eccrypt_algorithms::{CurveId, HashId, SymmetricId};
use eccrypt_api::Error;
use eccrypt_pke::ecies::frame;
use eccrypt_pke::{Configuration, ConfigurationOptions};
use eccrypt_tests::seeded_rng;
use proptest::prelude::*;

fn configuration() -> impl Strategy<Value = Configuration> {
    (0..CurveId::ALL.len(), 0..HashId::ALL.len(), 0..SymmetricId::ALL.len()).prop_map(
        |(c, h, s)| {
            let options = ConfigurationOptions::default()
                .with_curve(CurveId::ALL[c])
                .with_hash(HashId::ALL[h])
                .with_symmetric(SymmetricId::ALL[s]);
            Configuration::new(options).unwrap()
        },
    )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn ecies_round_trip(
        config in configuration(),
        message in proptest::collection::vec(any::<u8>(), 0..512),
        seed in any::<u64>(),
    ) {
        let mut rng = seeded_rng(seed);
        let pair = config.key_pair_with_rng(&mut rng).unwrap();
        let wire = config
            .encrypt_with_rng(&message, pair.public_key.as_bytes(), &mut rng)
            .unwrap();
        prop_assert_eq!(config.decrypt(&wire, pair.private_key.as_bytes()).unwrap(), message);
    }

    #[test]
    fn frame_round_trip(
        data in proptest::collection::vec(any::<u8>(), 0..256),
        nonce in proptest::collection::vec(any::<u8>(), 0..32),
        algorithm in "[A-Z0-9-]{1,24}",
    ) {
        let encoded = frame::serialize(&data, &nonce, &algorithm).unwrap();
        let decoded = frame::deserialize(&encoded).unwrap();
        prop_assert_eq!(decoded.data, data);
        prop_assert_eq!(decoded.nonce, nonce);
        prop_assert_eq!(decoded.algorithm, algorithm);
    }

    #[test]
    fn truncated_frames_never_parse(
        data in proptest::collection::vec(any::<u8>(), 1..64),
        cut in 1usize..16,
    ) {
        let encoded = frame::serialize(&data, &[7u8; 12], "AES-GCM").unwrap();
        let cut = cut.min(encoded.len() - 1);
        let truncated = &encoded[..encoded.len() - cut];
        prop_assert!(
            matches!(frame::deserialize(truncated), Err(Error::MalformedFrame { .. })),
            "truncated frame parsed"
        );
    }
}

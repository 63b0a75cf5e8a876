//! Configurations and keys are shared across threads without locking

use std::sync::Arc;
use std::thread;

use eccrypt_pke::{Configuration, KeyPair};
use eccrypt_sign::SigningConfiguration;
use eccrypt_tests::{all_configurations, seeded_rng};

const THREADS: u64 = 8;

#[test]
fn test_concurrent_encrypt_decrypt_with_shared_configuration() {
    let config = Configuration::default();
    let pair = config.key_pair_with_rng(&mut seeded_rng(200)).unwrap();

    thread::scope(|s| {
        for t in 0..THREADS {
            let config = &config;
            let pair = &pair;
            s.spawn(move || {
                let mut rng = seeded_rng(1000 + t);
                for i in 0..4 {
                    let message = format!("thread {t} message {i}");
                    let wire = config
                        .encrypt_with_rng(message.as_str(), pair.public_key.as_bytes(), &mut rng)
                        .unwrap();
                    let plain = config.decrypt(&wire, pair.private_key.as_bytes()).unwrap();
                    assert_eq!(plain, message.as_bytes());
                }
            });
        }
    });
}

#[test]
fn test_each_thread_owns_a_configuration() {
    let configs = all_configurations();
    let pairs: Vec<KeyPair> = configs
        .iter()
        .enumerate()
        .map(|(i, c)| c.key_pair_with_rng(&mut seeded_rng(300 + i as u64)).unwrap())
        .collect();

    thread::scope(|s| {
        for (i, (config, pair)) in configs.iter().zip(&pairs).enumerate() {
            s.spawn(move || {
                let wire = config
                    .encrypt_with_rng(b"owned", pair.public_key.as_bytes(), &mut seeded_rng(i as u64))
                    .unwrap();
                assert_eq!(
                    config.decrypt(&wire, pair.private_key.as_bytes()).unwrap(),
                    b"owned"
                );
            });
        }
    });
}

#[test]
fn test_arc_shared_signing_configuration() {
    let config = Arc::new(SigningConfiguration::default());
    let pair = Arc::new(config.key_pair_with_rng(&mut seeded_rng(400)).unwrap());

    let handles: Vec<_> = (0..4)
        .map(|t| {
            let config = Arc::clone(&config);
            let pair = Arc::clone(&pair);
            thread::spawn(move || {
                let data = format!("signed by thread {t}");
                let sig = config
                    .sign(data.as_str(), pair.private_key.as_bytes())
                    .unwrap();
                assert!(config.verify(data.as_str(), &sig, &pair.public_key).unwrap());
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }
}

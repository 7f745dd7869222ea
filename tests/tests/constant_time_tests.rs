// Timing comparison of decapsulation across ciphertexts.
//
// Wall-clock measurements depend on the host, so these run only on request:
// `cargo test -p pqkem-tests --release -- --ignored`

use api::{Kem, Serialize};
use kem::{Kyber512, KyberCiphertext, KyberSecretKey};
use pqkem_tests::constant_time::{TestConfig, TimingTester};
use pqkem_tests::fixtures;
use std::hint::black_box;

fn flip(ct: &KyberCiphertext, index: usize) -> KyberCiphertext {
    let mut bytes = ct.to_bytes();
    bytes[index] ^= 1;
    KyberCiphertext::from_bytes(&bytes).unwrap()
}

fn compare(label: &str, sk: &KyberSecretKey, a: &KyberCiphertext, b: &KyberCiphertext) {
    let config = TestConfig::for_decapsulation();
    for _ in 0..config.num_warmup {
        let _ = Kyber512::decapsulate(sk, a);
        let _ = Kyber512::decapsulate(sk, b);
    }

    let tester = TimingTester::from_config(&config);
    let (t_a, t_b) = tester.measure_pair(
        || {
            black_box(Kyber512::decapsulate(sk, black_box(a)).unwrap());
        },
        || {
            black_box(Kyber512::decapsulate(sk, black_box(b)).unwrap());
        },
    );

    let analysis = tester
        .analyze(&t_a, &t_b, &config)
        .unwrap_or_else(|e| panic!("{}: analysis failed: {}", label, e));
    println!("{}:\n{}", label, analysis);
    assert!(analysis.is_constant_time, "{}: timing differs:\n{}", label, analysis);
}

#[test]
#[ignore = "timing-sensitive; run with --ignored on a quiet machine"]
fn test_decapsulation_timing_is_independent_of_validity() {
    let mut rng = fixtures::rng();
    let (pk, sk) = fixtures::keypair(&mut rng);
    let (valid, _) = Kyber512::encapsulate(&mut rng, &pk).unwrap();
    let forged = flip(&valid, 0);

    compare("Kyber-512 decapsulation, valid vs forged", &sk, &valid, &forged);
}

#[test]
#[ignore = "timing-sensitive; run with --ignored on a quiet machine"]
fn test_decapsulation_timing_is_independent_of_mismatch_position() {
    let mut rng = fixtures::rng();
    let (pk, sk) = fixtures::keypair(&mut rng);
    let (valid, _) = Kyber512::encapsulate(&mut rng, &pk).unwrap();
    let early = flip(&valid, 0);
    let late = flip(&valid, valid.len() - 1);

    compare("Kyber-512 decapsulation, early vs late mismatch", &sk, &early, &late);
}

// End-to-end checks across the KEM, the safe entry layer and the C ABI

use algorithms::hash::{HashFunction, Sha3_256};
use api::{Kem, Serialize, SerializeSecret};
use kem::{Kyber512, KyberCiphertext, KyberPublicKey, KyberSecretKey, KyberSharedSecret};
use pqkem_tests::fixtures;
use wasm::entry::{self, Status};

fn sha3_hex(data: &[u8]) -> String {
    hex::encode(Sha3_256::digest(data).unwrap())
}

#[test]
fn test_exchange_scenario() {
    let mut rng = fixtures::rng();
    let sizes = entry::sizes();

    let (pk, sk) = fixtures::keypair(&mut rng);
    let (ct, ss1) = Kyber512::encapsulate(&mut rng, &pk).unwrap();
    let ss2 = Kyber512::decapsulate(&sk, &ct).unwrap();

    assert_eq!(ss1, ss2);
    assert_eq!(ss1.as_ref().len(), sizes.shared_secret);
    assert_eq!(ct.as_ref().len(), sizes.ciphertext);
    assert_eq!(pk.as_ref().len(), sizes.public_key);
    assert_eq!(sk.as_ref().len(), sizes.secret_key);
}

#[test]
fn test_known_answer() {
    let kat = fixtures::known_answer();
    let (pk, sk) = Kyber512::keypair_derand(&kat.d, &kat.z).unwrap();
    let (ct, ss) = Kyber512::encapsulate_derand(&pk, &kat.m).unwrap();

    assert_eq!(hex::encode(&pk.as_ref()[..16]), kat.pk_prefix);
    assert_eq!(sha3_hex(pk.as_ref()), kat.pk_sha3);
    assert_eq!(sha3_hex(sk.as_ref()), kat.sk_sha3);
    assert_eq!(hex::encode(&ct.as_ref()[..16]), kat.ct_prefix);
    assert_eq!(sha3_hex(ct.as_ref()), kat.ct_sha3);
    assert_eq!(hex::encode(ss.as_ref()), kat.shared_secret);
    assert_eq!(hex::encode(Kyber512::decapsulate(&sk, &ct).unwrap().as_ref()), kat.shared_secret);

    let mut forged = ct.to_bytes();
    forged[0] ^= 1;
    let mut out = [0u8; 32];
    assert_eq!(entry::decapsulate_into(&mut out, &forged, sk.as_ref()), Status::Success);
    assert_eq!(hex::encode(out), kat.rejection_secret);
}

#[test]
fn test_entry_layer_interoperates_with_typed_api() {
    let mut rng = fixtures::rng();
    let sizes = entry::sizes();

    let mut pk = vec![0u8; sizes.public_key];
    let mut sk = vec![0u8; sizes.secret_key];
    assert!(entry::keypair_into_with_rng(&mut pk, &mut sk, &mut rng).is_success());

    // Encapsulate through the typed API, decapsulate through the entry layer
    let public = KyberPublicKey::from_bytes(&pk).unwrap();
    let (ct, ss) = Kyber512::encapsulate(&mut rng, &public).unwrap();
    let mut out = vec![0u8; sizes.shared_secret];
    assert!(entry::decapsulate_into(&mut out, ct.as_ref(), &sk).is_success());
    assert_eq!(out, ss.as_ref());

    // And the other way round
    let mut ct_buf = vec![0u8; sizes.ciphertext];
    let mut ss_buf = vec![0u8; sizes.shared_secret];
    assert!(entry::encapsulate_into_with_rng(&mut ct_buf, &mut ss_buf, &pk, &mut rng).is_success());
    let secret = KyberSecretKey::from_bytes(&sk).unwrap();
    let ciphertext = KyberCiphertext::from_bytes(&ct_buf).unwrap();
    let recovered = Kyber512::decapsulate(&secret, &ciphertext).unwrap();
    assert_eq!(recovered.as_ref(), &ss_buf[..]);
}

#[test]
fn test_c_abi_matches_entry_layer() {
    assert_eq!(wasm::get_public_key_bytes() as usize, entry::sizes().public_key);
    assert_eq!(wasm::get_secret_key_bytes() as usize, entry::sizes().secret_key);
    assert_eq!(wasm::get_ciphertext_bytes() as usize, entry::sizes().ciphertext);
    assert_eq!(wasm::get_shared_secret_bytes() as usize, entry::sizes().shared_secret);

    let kat = fixtures::known_answer();
    let (pk, sk) = Kyber512::keypair_derand(&kat.d, &kat.z).unwrap();
    let (ct, _) = Kyber512::encapsulate_derand(&pk, &kat.m).unwrap();

    let mut ss = [0u8; 32];
    let rc = unsafe { wasm::decapsulate(ss.as_mut_ptr(), ct.as_ref().as_ptr(), sk.as_ref().as_ptr()) };
    assert_eq!(rc, 0);
    assert_eq!(hex::encode(ss), kat.shared_secret);
}

#[test]
fn test_size_queries_are_stable() {
    for _ in 0..3 {
        assert_eq!(wasm::get_public_key_bytes(), 800);
        assert_eq!(wasm::get_secret_key_bytes(), 1632);
        assert_eq!(wasm::get_ciphertext_bytes(), 768);
        assert_eq!(wasm::get_shared_secret_bytes(), 32);
    }
}

#[test]
fn test_malformed_inputs_rejected_by_types() {
    let err = KyberPublicKey::<kem::Kyber512Params>::from_bytes(&[0u8; 801]).unwrap_err();
    assert!(matches!(err, api::Error::InvalidKey { .. }));
    let err = KyberCiphertext::<kem::Kyber512Params>::from_bytes(&[0u8; 700]).unwrap_err();
    assert!(matches!(err, api::Error::InvalidCiphertext { .. }));
    assert!(<KyberSecretKey as SerializeSecret>::from_bytes(&[0u8; 10]).is_err());
    assert!(<KyberSharedSecret as SerializeSecret>::from_bytes(&[0u8; 33]).is_err());
}

#[test]
fn test_independent_keypairs_do_not_interoperate() {
    let mut rng = fixtures::rng();
    let (pk_a, _) = fixtures::keypair(&mut rng);
    let (_, sk_b) = fixtures::keypair(&mut rng);
    let (ct, ss) = Kyber512::encapsulate(&mut rng, &pk_a).unwrap();
    assert_ne!(Kyber512::decapsulate(&sk_b, &ct).unwrap(), ss);
}

// Property tests for the KEM and its encoding layer

use algorithms::poly::params::{N, Q};
use algorithms::poly::polynomial::Polynomial;
use algorithms::poly::serialize::{compress, decompress, poly_from_bytes, poly_to_bytes, POLY_BYTES};
use api::Kem;
use kem::{Kyber512, KyberCiphertext};
use proptest::prelude::*;
use wasm::entry::{self, Status};

fn seed() -> impl Strategy<Value = [u8; 32]> {
    prop::array::uniform32(any::<u8>())
}

fn canonical_poly() -> impl Strategy<Value = Polynomial> {
    prop::collection::vec(0..Q, N).prop_map(|v| {
        let mut coeffs = [0i16; N];
        coeffs.copy_from_slice(&v);
        Polynomial::from_coeffs(coeffs)
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn decapsulation_recovers_encapsulated_secret(d in seed(), z in seed(), m in seed()) {
        let (pk, sk) = Kyber512::keypair_derand(&d, &z).unwrap();
        let (ct, ss) = Kyber512::encapsulate_derand(&pk, &m).unwrap();
        prop_assert_eq!(Kyber512::decapsulate(&sk, &ct).unwrap(), ss);
    }

    #[test]
    fn tampering_yields_stable_rejection(
        d in seed(),
        m in seed(),
        index in 0usize..768,
        bit in 0u8..8,
    ) {
        let (pk, sk) = Kyber512::keypair_derand(&d, &[0x5A; 32]).unwrap();
        let (ct, ss) = Kyber512::encapsulate_derand(&pk, &m).unwrap();

        let mut bytes = ct.as_ref().to_vec();
        bytes[index] ^= 1 << bit;
        let tampered: KyberCiphertext = KyberCiphertext::new(bytes).unwrap();

        let r1 = Kyber512::decapsulate(&sk, &tampered).unwrap();
        let r2 = Kyber512::decapsulate(&sk, &tampered).unwrap();
        prop_assert_ne!(&r1, &ss);
        prop_assert_eq!(r1, r2);
    }

    #[test]
    fn wrong_length_buffers_are_untouched(extra in 1usize..64, shrink in any::<bool>(), fill in any::<u8>()) {
        let sizes = entry::sizes();
        let pk_len = if shrink { sizes.public_key - extra } else { sizes.public_key + extra };
        let mut pk = vec![fill; pk_len];
        let mut sk = vec![fill; sizes.secret_key];
        prop_assert_eq!(entry::keypair_into(&mut pk, &mut sk), Status::Failure);
        prop_assert!(pk.iter().all(|&b| b == fill));
        prop_assert!(sk.iter().all(|&b| b == fill));
    }

    #[test]
    fn encoding_roundtrip(p in canonical_poly()) {
        let mut bytes = [0u8; POLY_BYTES];
        poly_to_bytes(&p, &mut bytes).unwrap();
        // Decoding yields centered representatives
        let decoded = poly_from_bytes(&bytes).unwrap();
        prop_assert_eq!(decoded.to_unsigned(), p.to_unsigned());
    }

    #[test]
    fn compression_error_is_bounded(x in 0u16..(Q as u16), d in prop::sample::select(vec![1u32, 4, 5, 10, 11])) {
        let q = Q as i32;
        let y = compress(x, d);
        prop_assert!(u32::from(y) < (1 << d));

        let back = decompress(y, d) as i32;
        let mut diff = (back - x as i32).rem_euclid(q);
        if diff > q / 2 {
            diff -= q;
        }
        let bound = (q + (1 << d)) / (1 << (d + 1));
        prop_assert!(diff.abs() <= bound, "x={} d={} back={} diff={}", x, d, back, diff);
    }
}

//! Deterministic inputs and a known-answer vector for Kyber-512.

use api::Kem;
use kem::{Kyber512, KyberPublicKey, KyberSecretKey};
use rand::SeedableRng;
use rand_chacha::ChaChaRng;

/// Seed used by every test that needs a reproducible generator
pub const DEFAULT_SEED: u64 = 42;

/// A 32-byte seed whose bytes count up from `start`
pub fn counting_seed(start: u8) -> [u8; 32] {
    let mut out = [0u8; 32];
    for (i, b) in out.iter_mut().enumerate() {
        *b = start.wrapping_add(i as u8);
    }
    out
}

pub fn rng() -> ChaChaRng {
    ChaChaRng::seed_from_u64(DEFAULT_SEED)
}

pub fn keypair(rng: &mut ChaChaRng) -> (KyberPublicKey, KyberSecretKey) {
    Kyber512::keypair(rng).expect("keypair with a seeded generator")
}

/// Known-answer vector. Keys come from `keypair_derand(d, z)` and the
/// ciphertext from `encapsulate_derand(pk, m)`; long outputs are pinned by
/// their SHA3-256 digest. The values agree with the round-3 reference code
/// fed `d || z || m` as its random byte stream.
pub struct KnownAnswer {
    pub d: [u8; 32],
    pub z: [u8; 32],
    pub m: [u8; 32],
    pub pk_prefix: &'static str,
    pub pk_sha3: &'static str,
    pub sk_sha3: &'static str,
    pub ct_prefix: &'static str,
    pub ct_sha3: &'static str,
    pub shared_secret: &'static str,
    /// Shared secret for the ciphertext with its first bit flipped
    pub rejection_secret: &'static str,
}

pub fn known_answer() -> KnownAnswer {
    KnownAnswer {
        d: counting_seed(0),
        z: counting_seed(32),
        m: counting_seed(64),
        pk_prefix: "ad9c21b9b7a12a80a93f8bc8db1400ce",
        pk_sha3: "b0448d37ecbcf2918a73bcc1b3d8174e322df9863ce92f5ea0f6bd6bca7da05e",
        sk_sha3: "fce230daa8dd4f465ddcc2b8dc864d0c604983f97447e91524dde80ac913f522",
        ct_prefix: "b08d310f9e3f5949aa5e4a05aec84a8e",
        ct_sha3: "961cdaa90d7f63ad4f72c696fc5e2d8d0abbf27bda1a3c6609d0789e1dfb3877",
        shared_secret: "484c65aa18a6955f7a9f70137c882fcdbf0bd732d15ccf204a250bd17bf3fc4f",
        rejection_secret: "dc88ce8c295322d9bd8bfe68236db10dff156e145d253ff945a0c88b97376218",
    }
}

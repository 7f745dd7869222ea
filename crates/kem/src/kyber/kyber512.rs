//! Kyber-512 (k = 2, eta1 = 3, eta2 = 2, du = 10, dv = 4)

use super::kem::{KemSizes, KyberKem};
use super::params::Kyber512Params;

/// Kyber-512 KEM
pub type Kyber512 = KyberKem<Kyber512Params>;

/// Kyber-512 public key length
pub const KYBER512_PUBLIC_KEY_BYTES: usize = 800;
/// Kyber-512 secret key length
pub const KYBER512_SECRET_KEY_BYTES: usize = 1632;
/// Kyber-512 ciphertext length
pub const KYBER512_CIPHERTEXT_BYTES: usize = 768;
/// Kyber-512 shared secret length
pub const KYBER512_SHARED_SECRET_BYTES: usize = 32;

/// Byte sizes of Kyber-512 objects
pub const KYBER512_SIZES: KemSizes = Kyber512::sizes();

const _: () = assert!(
    KYBER512_SIZES.public_key == KYBER512_PUBLIC_KEY_BYTES
        && KYBER512_SIZES.secret_key == KYBER512_SECRET_KEY_BYTES
        && KYBER512_SIZES.ciphertext == KYBER512_CIPHERTEXT_BYTES
        && KYBER512_SIZES.shared_secret == KYBER512_SHARED_SECRET_BYTES
);

//! Kyber parameter definitions.

use params::pqc::kyber as global_params;

/// Common Kyber polynomial degree.
pub const KYBER_N: usize = global_params::KYBER_N;
/// Size of seeds, hashes and messages.
pub const KYBER_SYMBYTES: usize = global_params::KYBER_SYMBYTES;
/// Shared secret size for all Kyber variants.
pub const KYBER_SS_BYTES: usize = 32;
/// Size of a polynomial packed at 12 bits per coefficient.
pub const KYBER_POLYBYTES: usize = global_params::KYBER_POLYBYTES;

/// Trait defining parameters for a specific Kyber variant.
pub trait KyberParams: Send + Sync + 'static {
    /// Security parameter k (dimension of vectors/matrices).
    const K: usize;
    /// Noise parameter eta1 for secret s, e and encryption noise r.
    const ETA1: u8;
    /// Noise parameter eta2 for error e1, e2.
    const ETA2: u8;
    /// Compression bits for vector u (part of ciphertext).
    const DU: u32;
    /// Compression bits for polynomial v (part of ciphertext).
    const DV: u32;

    /// Algorithm name string.
    const NAME: &'static str;
    /// Size of the public key in bytes.
    const PUBLIC_KEY_BYTES: usize;
    /// Size of the secret key in bytes.
    const SECRET_KEY_BYTES: usize;
    /// Size of the ciphertext in bytes.
    const CIPHERTEXT_BYTES: usize;

    /// Size of a packed polynomial vector.
    const POLYVEC_BYTES: usize = Self::K * KYBER_POLYBYTES;
    /// Size of the compressed vector u.
    const POLYVEC_COMPRESSED_BYTES: usize = Self::K * KYBER_N * Self::DU as usize / 8;
    /// Size of the compressed polynomial v.
    const POLY_COMPRESSED_BYTES: usize = KYBER_N * Self::DV as usize / 8;
}

/// Kyber-512 (NIST security category 1)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Kyber512Params;

impl KyberParams for Kyber512Params {
    const K: usize = global_params::KYBER512.k;
    const ETA1: u8 = global_params::KYBER512.eta1;
    const ETA2: u8 = global_params::KYBER512.eta2;
    const DU: u32 = global_params::KYBER512.du as u32;
    const DV: u32 = global_params::KYBER512.dv as u32;
    const NAME: &'static str = "Kyber-512";
    const PUBLIC_KEY_BYTES: usize = global_params::KYBER512.public_key_size;
    const SECRET_KEY_BYTES: usize = global_params::KYBER512.secret_key_size;
    const CIPHERTEXT_BYTES: usize = global_params::KYBER512.ciphertext_size;
}

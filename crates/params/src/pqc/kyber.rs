//! Constants for Kyber key encapsulation mechanism

/// Kyber polynomial degree
pub const KYBER_N: usize = 256;

/// Kyber modulus
pub const KYBER_Q: u16 = 3329;

/// Size in bytes of seeds, hashes, messages and shared secrets
pub const KYBER_SYMBYTES: usize = 32;

/// Size in bytes of a polynomial packed with 12 bits per coefficient
pub const KYBER_POLYBYTES: usize = 384;

/// Structure containing the parameters of one Kyber security level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KyberParameterSet {
    /// Polynomial degree
    pub n: usize,

    /// Modulus
    pub q: u16,

    /// Number of polynomials (dimension)
    pub k: usize,

    /// Noise parameter for the secret and error vectors
    pub eta1: u8,

    /// Noise parameter for the encryption errors
    pub eta2: u8,

    /// Compression width of the ciphertext vector u
    pub du: usize,

    /// Compression width of the ciphertext polynomial v
    pub dv: usize,

    /// Size of public key in bytes
    pub public_key_size: usize,

    /// Size of secret key in bytes
    pub secret_key_size: usize,

    /// Size of ciphertext in bytes
    pub ciphertext_size: usize,

    /// Size of shared secret in bytes
    pub shared_secret_size: usize,
}

impl KyberParameterSet {
    /// Bytes taken by a packed vector of `k` polynomials
    pub const fn polyvec_bytes(&self) -> usize {
        self.k * KYBER_POLYBYTES
    }

    /// Bytes taken by the compressed vector u
    pub const fn polyvec_compressed_bytes(&self) -> usize {
        self.k * self.n * self.du / 8
    }

    /// Bytes taken by the compressed polynomial v
    pub const fn poly_compressed_bytes(&self) -> usize {
        self.n * self.dv / 8
    }
}

/// Kyber-512 parameters
pub const KYBER512: KyberParameterSet = KyberParameterSet {
    n: KYBER_N,
    q: KYBER_Q,
    k: 2,
    eta1: 3,
    eta2: 2,
    du: 10,
    dv: 4,
    public_key_size: 800,
    secret_key_size: 1632,
    ciphertext_size: 768,
    shared_secret_size: KYBER_SYMBYTES,
};

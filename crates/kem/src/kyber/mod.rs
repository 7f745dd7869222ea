//! Kyber key encapsulation mechanism.
//!
//! Module-lattice KEM made IND-CCA2 secure with a Fujisaki-Okamoto
//! transform. Decapsulation uses implicit rejection: a forged ciphertext
//! yields a pseudorandom shared secret rather than an error.

mod cpa_pke; // CPA-secure PKE
mod ind_cca; // Fujisaki-Okamoto transform
mod kem; // Typed keys and the api::Kem implementation
mod params;
mod polyvec;
mod serialize;

mod kyber512;

pub use self::kem::{
    KemSizes, KyberCiphertext, KyberKem, KyberPublicKey, KyberSecretKey, KyberSharedSecret,
};
pub use self::kyber512::{
    Kyber512, KYBER512_CIPHERTEXT_BYTES, KYBER512_PUBLIC_KEY_BYTES, KYBER512_SECRET_KEY_BYTES,
    KYBER512_SHARED_SECRET_BYTES, KYBER512_SIZES,
};
pub use self::params::{Kyber512Params, KyberParams, KYBER_SS_BYTES, KYBER_SYMBYTES};

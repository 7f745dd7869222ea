//! Key encapsulation for the pqkem library
//!
//! Provides Kyber-512 behind the [`api::Kem`] trait, plus deterministic
//! entry points for reproducible testing.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

pub mod error;
pub mod kyber;

// Re-exports
pub use kyber::{
    KemSizes, Kyber512, Kyber512Params, KyberCiphertext, KyberKem, KyberPublicKey,
    KyberSecretKey, KyberSharedSecret, KYBER512_SIZES,
};

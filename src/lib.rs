//! # pqkem
//!
//! A Kyber-512 key encapsulation mechanism written in pure Rust, with a
//! C-ABI boundary for web-assembly hosts.
//!
//! ## Usage
//!
//! ```toml
//! [dependencies]
//! pqkem = "0.1"
//! ```
//!
//! ```
//! use pqkem::prelude::*;
//! use rand::rngs::OsRng;
//!
//! let (pk, sk) = Kyber512::keypair(&mut OsRng).unwrap();
//! let (ct, ss_sender) = Kyber512::encapsulate(&mut OsRng, &pk).unwrap();
//! let ss_recipient = Kyber512::decapsulate(&sk, &ct).unwrap();
//! assert_eq!(ss_sender.as_ref(), ss_recipient.as_ref());
//! ```
//!
//! ## Features
//!
//! - `std` (default): standard library support and OS entropy
//! - `serde`: serde derives for public keys and ciphertexts
//! - `wasm`: the C-ABI entry points for host embedding
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several sub-crates:
//!
//! - [`pqkem-params`]: compiled-in Kyber-512 constants
//! - [`pqkem-algorithms`]: ring arithmetic, sampling, hashing and encoding
//! - [`pqkem-kem`]: the Kyber KEM
//! - [`pqkem-wasm`]: the host boundary

#![cfg_attr(not(feature = "std"), no_std)]

// Core re-exports (always available)
pub use pqkem_algorithms as algorithms;
pub use pqkem_api as api;
pub use pqkem_common as common;
pub use pqkem_internal as internal;
pub use pqkem_kem as kem;
pub use pqkem_params as params;

#[cfg(feature = "wasm")]
pub use pqkem_wasm as wasm;

/// Common imports for pqkem users
pub mod prelude {
    pub use crate::api::{Error, Kem, Result, Serialize, SerializeSecret};

    pub use crate::kem::kyber::{
        KemSizes, Kyber512, KyberCiphertext, KyberPublicKey, KyberSecretKey, KyberSharedSecret,
    };

    pub use crate::common::{EphemeralSecret, SecretBuffer};
}

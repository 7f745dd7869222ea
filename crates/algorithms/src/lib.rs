//! Lattice primitives for the pqkem library
//!
//! This crate holds everything below the KEM scheme layer:
//!
//! - arithmetic in R_q = Z_q[X]/(X^256 + 1) with a number-theoretic transform
//! - deterministic samplers (uniform rejection sampling, centered binomial)
//! - coefficient packing, compression and message encoding
//! - the SHA-3 and SHAKE instances the KEM is built from
//!
//! Nothing here draws randomness: every function is a pure function of its
//! inputs, and secret-dependent work avoids data-dependent branches.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

extern crate alloc;

// Error module and re-exports
pub mod error;
pub use error::{validate, Error, Result};

// Hash function implementations
pub mod hash;
pub use hash::{HashFunction, Sha3_256, Sha3_512};

// XOF implementations
pub mod xof;
pub use xof::{ExtendableOutputFunction, ShakeXof128, ShakeXof256};

// Polynomial engine
pub mod poly;
pub use poly::polynomial::Polynomial;

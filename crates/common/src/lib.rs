//! Shared secret-handling types for the pqkem library
//!
//! Every crate that holds key material uses these wrappers so that
//! secrets are wiped when they go out of scope.

#![cfg_attr(not(feature = "std"), no_std)]

pub mod security;

// Re-export core security types
pub use security::{EphemeralSecret, SecretBuffer};

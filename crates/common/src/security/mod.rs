//! Security primitives for sensitive cryptographic material

pub mod secret;

pub use secret::{EphemeralSecret, SecretBuffer};

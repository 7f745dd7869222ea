//! Fixed-output hash functions
//!
//! The KEM uses SHA3-256 as `H` and SHA3-512 as `G`. Both are thin
//! adapters over the `sha3` crate behind the [`HashFunction`] trait.

pub mod sha3;

pub use self::sha3::{Sha3_256, Sha3_512};

use crate::error::Result;

/// Streaming hash function with a fixed-size output
pub trait HashFunction: Sized {
    /// Output type
    type Output: AsRef<[u8]>;

    /// Creates a fresh hashing state
    fn new() -> Self;

    /// Absorbs more input
    fn update(&mut self, data: &[u8]) -> Result<&mut Self>;

    /// Produces the digest, consuming the state
    fn finalize(self) -> Result<Self::Output>;

    /// One-shot digest over `data`
    fn digest(data: &[u8]) -> Result<Self::Output> {
        let mut h = Self::new();
        h.update(data)?;
        h.finalize()
    }
}

//! SHA-3 hash functions (FIPS 202)

use ::sha3::Digest;

use super::HashFunction;
use crate::error::Result;

/// SHA3-256 output size in bytes
pub const SHA3_256_OUTPUT_SIZE: usize = 32;

/// SHA3-512 output size in bytes
pub const SHA3_512_OUTPUT_SIZE: usize = 64;

/// Streaming **SHA3-256** engine.
#[derive(Clone, Default)]
pub struct Sha3_256 {
    inner: ::sha3::Sha3_256,
}

/// Streaming **SHA3-512** engine.
#[derive(Clone, Default)]
pub struct Sha3_512 {
    inner: ::sha3::Sha3_512,
}

impl HashFunction for Sha3_256 {
    type Output = [u8; SHA3_256_OUTPUT_SIZE];

    fn new() -> Self {
        Self::default()
    }

    fn update(&mut self, data: &[u8]) -> Result<&mut Self> {
        Digest::update(&mut self.inner, data);
        Ok(self)
    }

    fn finalize(self) -> Result<Self::Output> {
        let mut out = [0u8; SHA3_256_OUTPUT_SIZE];
        out.copy_from_slice(&self.inner.finalize());
        Ok(out)
    }
}

impl HashFunction for Sha3_512 {
    type Output = [u8; SHA3_512_OUTPUT_SIZE];

    fn new() -> Self {
        Self::default()
    }

    fn update(&mut self, data: &[u8]) -> Result<&mut Self> {
        Digest::update(&mut self.inner, data);
        Ok(self)
    }

    fn finalize(self) -> Result<Self::Output> {
        let mut out = [0u8; SHA3_512_OUTPUT_SIZE];
        out.copy_from_slice(&self.inner.finalize());
        Ok(out)
    }
}

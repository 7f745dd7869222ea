//! Traits for byte serialization of cryptographic types.

use crate::Result;
use alloc::vec::Vec;
use zeroize::Zeroizing;

/// Public types that can be serialized to and from bytes.
pub trait Serialize: Sized {
    /// Parses an object, validating its length.
    fn from_bytes(bytes: &[u8]) -> Result<Self>;
    /// Converts the object to a byte vector.
    fn to_bytes(&self) -> Vec<u8>;
}

/// Secret types whose serialized form is wiped on drop.
pub trait SerializeSecret: Sized {
    /// Parses an object, validating its length. The caller owns the input
    /// and is responsible for wiping it.
    fn from_bytes(bytes: &[u8]) -> Result<Self>;
    /// Converts the object to a byte vector that is zeroized on drop.
    fn to_bytes_zeroizing(&self) -> Zeroizing<Vec<u8>>;
}

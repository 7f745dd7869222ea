//! Validation helpers returning the API error type

use alloc::string::ToString;

use super::types::{Error, Result};

/// Validate that a buffer has exactly the expected length
#[inline(always)]
pub fn length(context: &'static str, actual: usize, expected: usize) -> Result<()> {
    if actual != expected {
        return Err(Error::InvalidLength {
            context,
            expected,
            actual,
        });
    }
    Ok(())
}

/// Validate key material
#[inline(always)]
pub fn key(condition: bool, context: &'static str, reason: &'static str) -> Result<()> {
    if !condition {
        return Err(Error::InvalidKey {
            context,
            message: reason.to_string(),
        });
    }
    Ok(())
}

/// Validate a ciphertext
#[inline(always)]
pub fn ciphertext(condition: bool, context: &'static str, reason: &'static str) -> Result<()> {
    if !condition {
        return Err(Error::InvalidCiphertext {
            context,
            message: reason.to_string(),
        });
    }
    Ok(())
}

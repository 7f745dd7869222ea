//! Extendable Output Functions (XOF)
//!
//! SHAKE-128 drives matrix generation, SHAKE-256 drives noise sampling and
//! key derivation.

use crate::error::{Error, Result};

pub mod shake;

pub use shake::{ShakeXof128, ShakeXof256};

/// Trait for extendable output functions
pub trait ExtendableOutputFunction {
    /// Creates a new instance of the XOF
    fn new() -> Self;

    /// Updates the XOF state with new data
    fn update(&mut self, data: &[u8]) -> Result<()>;

    /// Finalizes the XOF state for output. Idempotent.
    fn finalize(&mut self) -> Result<()>;

    /// Squeezes output bytes into the provided buffer, finalizing first if
    /// needed. Successive calls continue the same output stream.
    fn squeeze(&mut self, output: &mut [u8]) -> Result<()>;
}

impl Error {
    /// Create an XOF squeezing error
    pub(crate) fn xof_squeezing() -> Self {
        Error::Processing {
            operation: "XOF",
            details: "Cannot update after squeezing has begun",
        }
    }
}

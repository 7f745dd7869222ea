//! SHAKE extendable output functions (FIPS 202)
//!
//! Absorbing and squeezing are two explicit phases: once output has been
//! read, further input is rejected.

use ::sha3::digest::{ExtendableOutput, Update, XofReader};

use super::ExtendableOutputFunction;
use crate::error::{Error, Result};

/// SHAKE-128 rate in bytes
pub const SHAKE128_RATE: usize = 168;

macro_rules! shake_xof {
    ($(#[$doc:meta])* $name:ident, $hasher:ty, $reader:ty) => {
        $(#[$doc])*
        #[derive(Clone)]
        pub struct $name {
            hasher: Option<$hasher>,
            reader: Option<$reader>,
        }

        impl ExtendableOutputFunction for $name {
            fn new() -> Self {
                Self {
                    hasher: Some(<$hasher>::default()),
                    reader: None,
                }
            }

            fn update(&mut self, data: &[u8]) -> Result<()> {
                match self.hasher.as_mut() {
                    Some(h) => {
                        h.update(data);
                        Ok(())
                    }
                    None => Err(Error::xof_squeezing()),
                }
            }

            fn finalize(&mut self) -> Result<()> {
                if let Some(h) = self.hasher.take() {
                    self.reader = Some(h.finalize_xof());
                }
                Ok(())
            }

            fn squeeze(&mut self, output: &mut [u8]) -> Result<()> {
                self.finalize()?;
                match self.reader.as_mut() {
                    Some(r) => {
                        r.read(output);
                        Ok(())
                    }
                    None => Err(Error::Processing {
                        operation: stringify!($name),
                        details: "reader missing after finalization",
                    }),
                }
            }
        }
    };
}

shake_xof!(
    /// SHAKE-128 extendable output function
    ShakeXof128,
    ::sha3::Shake128,
    ::sha3::Shake128Reader
);

shake_xof!(
    /// SHAKE-256 extendable output function
    ShakeXof256,
    ::sha3::Shake256,
    ::sha3::Shake256Reader
);

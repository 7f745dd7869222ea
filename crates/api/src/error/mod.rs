//! Error handling for the pqkem crates

use alloc::string::ToString;

pub mod types;
pub mod validate;

// Re-export the primary error type and result
pub use types::{Error, Result};

impl From<rand::Error> for Error {
    fn from(e: rand::Error) -> Self {
        Self::RandomGenerationError {
            context: "entropy source",
            message: e.to_string(),
        }
    }
}

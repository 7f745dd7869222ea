//! Error handling for KEM operations

use alloc::format;
use alloc::string::{String, ToString};
use core::fmt;

use algorithms::error::Error as PrimitiveError;
use api::error::Error as CoreError;

/// Error type for KEM operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Primitive error
    Primitive(PrimitiveError),

    /// Key generation failed
    KeyGeneration {
        /// Algorithm name
        algorithm: &'static str,
        /// What went wrong
        details: &'static str,
    },

    /// Encapsulation failed
    Encapsulation {
        /// Algorithm name
        algorithm: &'static str,
        /// What went wrong
        details: &'static str,
    },

    /// Invalid key format
    InvalidKey {
        /// Which key was rejected
        key_type: &'static str,
        /// Why it was rejected
        reason: &'static str,
    },

    /// Invalid ciphertext format
    InvalidCiphertext {
        /// Algorithm name
        algorithm: &'static str,
        /// Why it was rejected
        reason: &'static str,
    },

    /// Serialization/deserialization errors
    Serialization {
        /// Where the failure happened
        context: &'static str,
        /// What went wrong
        details: &'static str,
    },

    /// The random number generator failed
    Random {
        /// Operation that was drawing randomness
        context: &'static str,
        /// Message reported by the generator
        message: String,
    },
}

/// Result type for KEM operations
pub type Result<T> = core::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Primitive(e) => write!(f, "Primitive error: {}", e),
            Error::KeyGeneration { algorithm, details } => {
                write!(f, "Key generation error for {}: {}", algorithm, details)
            }
            Error::Encapsulation { algorithm, details } => {
                write!(f, "Encapsulation error for {}: {}", algorithm, details)
            }
            Error::InvalidKey { key_type, reason } => {
                write!(f, "Invalid {} key: {}", key_type, reason)
            }
            Error::InvalidCiphertext { algorithm, reason } => {
                write!(f, "Invalid {} ciphertext: {}", algorithm, reason)
            }
            Error::Serialization { context, details } => {
                write!(f, "Serialization error in {}: {}", context, details)
            }
            Error::Random { context, message } => {
                write!(f, "Random generation failed in {}: {}", context, message)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Primitive(e) => Some(e),
            _ => None,
        }
    }
}

impl From<PrimitiveError> for Error {
    fn from(err: PrimitiveError) -> Self {
        Error::Primitive(err)
    }
}

impl Error {
    /// Wraps a generator failure raised while running `context`
    pub fn random(context: &'static str, err: rand::Error) -> Self {
        Error::Random {
            context,
            message: err.to_string(),
        }
    }
}

impl From<Error> for CoreError {
    fn from(err: Error) -> Self {
        match err {
            Error::Primitive(e) => e.into(),
            Error::KeyGeneration { algorithm, details } => CoreError::Other {
                context: algorithm,
                message: format!("key generation failed: {}", details),
            },
            Error::Encapsulation { algorithm, details } => CoreError::Other {
                context: algorithm,
                message: format!("encapsulation failed: {}", details),
            },
            Error::InvalidKey { key_type, reason } => CoreError::InvalidKey {
                context: key_type,
                message: reason.to_string(),
            },
            Error::InvalidCiphertext { algorithm, reason } => CoreError::InvalidCiphertext {
                context: algorithm,
                message: reason.to_string(),
            },
            Error::Serialization { context, details } => CoreError::SerializationError {
                context,
                message: details.to_string(),
            },
            Error::Random { context, message } => {
                CoreError::RandomGenerationError { context, message }
            }
        }
    }
}

// Include validation submodule
pub mod validate;

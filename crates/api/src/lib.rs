//! Public API traits and types for the pqkem library
//!
//! This crate provides the public API surface shared by every pqkem crate:
//! the error type, validation helpers and the KEM and serialization traits.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod error;
pub mod traits;

// Re-export commonly used items at the crate level for convenience
pub use error::{Error, Result};

pub use traits::{Kem, Serialize, SerializeSecret};

// Re-export trait modules for direct access
pub use traits::{kem, serialize};

//! Constant values for the pqkem library
//!
//! Parameter sets are plain `const` data. Scheme crates lift them into
//! trait associated constants.

#![no_std]

pub mod pqc;

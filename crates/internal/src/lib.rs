//! Internal utilities for the pqkem library
//!
//! Not part of the public API; used by the scheme crates.

#![cfg_attr(not(test), no_std)]

pub mod constant_time;

//! Polynomial arithmetic over R_q = Z_q[X]/(X^256 + 1)
//!
//! Everything a lattice KEM needs below the scheme layer: reductions, the
//! number-theoretic transform, samplers and the byte encodings.

pub mod ntt;
pub mod params;
pub mod polynomial;
pub mod reduce;
pub mod sampling;
pub mod serialize;

/// Prelude for easy importing of common polynomial types and traits.
pub mod prelude {
    pub use super::params::{N, Q};
    pub use super::polynomial::Polynomial;
    pub use super::sampling::{CbdSampler, DefaultSamplers, UniformSampler};
    pub use super::serialize::{
        CoefficientPacker, CoefficientUnpacker, DefaultCoefficientSerde,
    };
}

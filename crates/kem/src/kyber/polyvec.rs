//! Polynomial vector operations for Kyber.

use alloc::vec::Vec;
use core::marker::PhantomData;

use algorithms::error::Result as AlgoResult;
use algorithms::poly::polynomial::Polynomial;
use algorithms::poly::serialize::{compress_poly, decompress_poly, poly_from_bytes, poly_to_bytes};
use zeroize::Zeroize;

use super::params::{KyberParams, KYBER_N, KYBER_POLYBYTES};

/// A vector of `P::K` polynomials.
#[derive(Debug, PartialEq, Eq)]
pub struct PolyVec<P: KyberParams> {
    /// The polynomials in this vector.
    pub(crate) polys: Vec<Polynomial>,
    _params: PhantomData<P>,
}

impl<P: KyberParams> Clone for PolyVec<P> {
    fn clone(&self) -> Self {
        Self {
            polys: self.polys.clone(),
            _params: PhantomData,
        }
    }
}

impl<P: KyberParams> Zeroize for PolyVec<P> {
    fn zeroize(&mut self) {
        self.polys.iter_mut().for_each(Zeroize::zeroize);
    }
}

impl<P: KyberParams> PolyVec<P> {
    #[cfg(test)]
    pub(crate) fn zero() -> Self {
        Self {
            polys: alloc::vec![Polynomial::zero(); P::K],
            _params: PhantomData,
        }
    }

    /// Builds a vector from exactly `P::K` polynomials.
    pub(crate) fn from_polys(polys: Vec<Polynomial>) -> Self {
        debug_assert_eq!(polys.len(), P::K);
        Self {
            polys,
            _params: PhantomData,
        }
    }

    /// Forward NTT of every entry, with reduced output.
    pub fn ntt(&mut self) {
        self.polys.iter_mut().for_each(Polynomial::ntt);
    }

    /// Inverse NTT of every entry, times the Montgomery factor.
    pub fn invntt_tomont(&mut self) {
        self.polys.iter_mut().for_each(Polynomial::invntt_tomont);
    }

    /// Barrett-reduces every coefficient.
    pub fn reduce(&mut self) {
        self.polys.iter_mut().for_each(Polynomial::reduce);
    }

    /// Adds `other` entry-wise without reducing.
    pub fn add_assign(&mut self, other: &Self) {
        for (a, b) in self.polys.iter_mut().zip(other.polys.iter()) {
            a.add_assign(b);
        }
    }

    /// Inner product in the NTT domain, reduced. Carries a factor 2^-16.
    pub fn basemul_acc(&self, other: &Self) -> Polynomial {
        let mut acc = Polynomial::zero();
        for (a, b) in self.polys.iter().zip(other.polys.iter()) {
            acc.add_assign(&a.basemul_montgomery(b));
        }
        acc.reduce();
        acc
    }

    /// Packs every entry at 12 bits per coefficient.
    pub fn to_bytes(&self, out: &mut [u8]) -> AlgoResult<()> {
        algorithms::validate::length("polyvec", out.len(), P::POLYVEC_BYTES)?;
        for (p, chunk) in self.polys.iter().zip(out.chunks_exact_mut(KYBER_POLYBYTES)) {
            poly_to_bytes(p, chunk)?;
        }
        Ok(())
    }

    /// Inverse of [`PolyVec::to_bytes`]; coefficients come back reduced.
    pub fn from_bytes(bytes: &[u8]) -> AlgoResult<Self> {
        algorithms::validate::length("polyvec", bytes.len(), P::POLYVEC_BYTES)?;
        let polys = bytes
            .chunks_exact(KYBER_POLYBYTES)
            .map(poly_from_bytes)
            .collect::<AlgoResult<Vec<_>>>()?;
        Ok(Self::from_polys(polys))
    }

    /// Compresses every entry to `P::DU` bits and packs it.
    pub fn compress(&self, out: &mut [u8]) -> AlgoResult<()> {
        algorithms::validate::length("compressed polyvec", out.len(), P::POLYVEC_COMPRESSED_BYTES)?;
        let chunk = KYBER_N * P::DU as usize / 8;
        for (p, c) in self.polys.iter().zip(out.chunks_exact_mut(chunk)) {
            compress_poly(p, P::DU, c)?;
        }
        Ok(())
    }

    /// Inverse of [`PolyVec::compress`], up to the compression error.
    pub fn decompress(bytes: &[u8]) -> AlgoResult<Self> {
        algorithms::validate::length("compressed polyvec", bytes.len(), P::POLYVEC_COMPRESSED_BYTES)?;
        let chunk = KYBER_N * P::DU as usize / 8;
        let polys = bytes
            .chunks_exact(chunk)
            .map(|c| decompress_poly(c, P::DU))
            .collect::<AlgoResult<Vec<_>>>()?;
        Ok(Self::from_polys(polys))
    }
}

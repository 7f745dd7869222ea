//! Polynomials in R_q with signed 16-bit coefficients

use core::ops::{Add, Sub};

use zeroize::Zeroize;

use super::ntt::{basemul_montgomery, invntt_tomont, ntt};
use super::params::{MONT_SQ, N, Q32};
use super::reduce::{barrett_reduce, fqmul, to_unsigned};

/// A polynomial with `N` coefficients modulo q.
///
/// Coefficients are kept as small signed representatives; which range they
/// lie in depends on the last operation (see each method). Addition and
/// subtraction do not reduce, callers reduce once after accumulating.
#[derive(Clone, PartialEq, Eq, Zeroize)]
pub struct Polynomial {
    /// Coefficients, lowest degree first (or NTT order after [`Polynomial::ntt`])
    pub coeffs: [i16; N],
}

impl Polynomial {
    /// The zero polynomial
    pub const fn zero() -> Self {
        Self { coeffs: [0; N] }
    }

    /// Builds a polynomial from raw coefficients
    pub const fn from_coeffs(coeffs: [i16; N]) -> Self {
        Self { coeffs }
    }

    /// Coefficient-wise sum, unreduced
    pub fn add(&self, other: &Self) -> Self {
        let mut r = self.clone();
        r.add_assign(other);
        r
    }

    /// Coefficient-wise difference, unreduced
    pub fn sub(&self, other: &Self) -> Self {
        let mut r = self.clone();
        for (a, b) in r.coeffs.iter_mut().zip(other.coeffs.iter()) {
            *a -= *b;
        }
        r
    }

    /// In-place coefficient-wise sum, unreduced
    pub fn add_assign(&mut self, other: &Self) {
        for (a, b) in self.coeffs.iter_mut().zip(other.coeffs.iter()) {
            *a += *b;
        }
    }

    /// Barrett-reduces every coefficient to the centered range
    pub fn reduce(&mut self) {
        for c in self.coeffs.iter_mut() {
            *c = barrett_reduce(*c);
        }
    }

    /// Multiplies every coefficient by 2^16, entering Montgomery form
    pub fn to_mont(&mut self) {
        for c in self.coeffs.iter_mut() {
            *c = fqmul(*c, MONT_SQ);
        }
    }

    /// Canonical coefficients in `[0, q)`
    pub fn to_unsigned(&self) -> [u16; N] {
        let mut out = [0u16; N];
        for (o, &c) in out.iter_mut().zip(self.coeffs.iter()) {
            *o = to_unsigned(barrett_reduce(c));
        }
        out
    }

    /// Forward NTT in place, with reduced output
    pub fn ntt(&mut self) {
        ntt(&mut self.coeffs);
        self.reduce();
    }

    /// Inverse NTT in place, multiplying by the Montgomery factor
    pub fn invntt_tomont(&mut self) {
        invntt_tomont(&mut self.coeffs);
    }

    /// Point-wise product in the NTT domain, carrying a factor 2^-16
    pub fn basemul_montgomery(&self, other: &Self) -> Self {
        Self::from_coeffs(basemul_montgomery(&self.coeffs, &other.coeffs))
    }

    /// Product in R_q computed through the NTT. Inputs and output are in
    /// the standard domain; output is bounded by q in absolute value.
    pub fn ntt_mul(&self, other: &Self) -> Self {
        let mut a = self.clone();
        let mut b = other.clone();
        a.ntt();
        b.ntt();
        let mut r = a.basemul_montgomery(&b);
        r.reduce();
        r.invntt_tomont();
        a.zeroize();
        b.zeroize();
        r
    }

    /// Schoolbook negacyclic product with canonical output.
    ///
    /// Quadratic and not constant time; only used to cross-check
    /// [`Polynomial::ntt_mul`].
    pub fn schoolbook_mul(&self, other: &Self) -> Self {
        let mut acc = [0i64; N];
        for (i, &a) in self.coeffs.iter().enumerate() {
            for (j, &b) in other.coeffs.iter().enumerate() {
                let p = a as i64 * b as i64;
                if i + j < N {
                    acc[i + j] += p;
                } else {
                    acc[i + j - N] -= p;
                }
            }
        }
        let mut r = Self::zero();
        for (c, a) in r.coeffs.iter_mut().zip(acc.iter()) {
            *c = a.rem_euclid(Q32 as i64) as i16;
        }
        r
    }
}

impl Default for Polynomial {
    fn default() -> Self {
        Self::zero()
    }
}

impl core::fmt::Debug for Polynomial {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "Polynomial({:?})", &self.coeffs[..])
    }
}

impl Add for &Polynomial {
    type Output = Polynomial;

    fn add(self, other: Self) -> Self::Output {
        Polynomial::add(self, other)
    }
}

impl Sub for &Polynomial {
    type Output = Polynomial;

    fn sub(self, other: Self) -> Self::Output {
        Polynomial::sub(self, other)
    }
}

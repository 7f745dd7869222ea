//! Deterministic samplers driven by SHAKE
//!
//! Uniform polynomials come from rejection sampling over SHAKE-128 output and
//! are interpreted directly in the NTT domain. Noise polynomials come from a
//! centered binomial distribution over SHAKE-256 output.

use log::error;
use zeroize::Zeroizing;

use super::params::{N, Q};
use super::polynomial::Polynomial;
use crate::error::{validate, Error, Result};
use crate::xof::shake::SHAKE128_RATE;
use crate::xof::{ExtendableOutputFunction, ShakeXof128, ShakeXof256};

/// Length of the seeds fed to the samplers
pub const SEED_BYTES: usize = 32;

/// SHAKE-128 blocks squeezed up front for one uniform polynomial; enough for
/// all 256 coefficients with overwhelming probability
pub const UNIFORM_INITIAL_BLOCKS: usize = 3;

/// Hard limit on SHAKE-128 blocks per uniform polynomial
pub const MAX_XOF_BLOCKS: usize = 32;

/// Largest supported noise parameter
pub const MAX_ETA: usize = 3;

/// Trait for sampling polynomials uniformly modulo q
pub trait UniformSampler {
    /// Samples `Parse(SHAKE128(seed || x || y))`
    fn sample_uniform(seed: &[u8; SEED_BYTES], x: u8, y: u8) -> Result<Polynomial>;
}

/// Trait for sampling polynomials from a centered binomial distribution
pub trait CbdSampler {
    /// Samples `CBD_eta(SHAKE256(seed || nonce))`
    fn sample_cbd(seed: &[u8; SEED_BYTES], nonce: u8, eta: u8) -> Result<Polynomial>;
}

/// Default implementation of the samplers
pub struct DefaultSamplers;

/// Fills `out[ctr..]` with candidates below q taken from `buf`, two 12-bit
/// values per 3 bytes. Returns the new fill count.
pub fn rej_uniform(out: &mut [i16; N], mut ctr: usize, buf: &[u8]) -> usize {
    for chunk in buf.chunks_exact(3) {
        if ctr >= N {
            break;
        }
        let b0 = chunk[0] as u16;
        let b1 = chunk[1] as u16;
        let b2 = chunk[2] as u16;
        let val0 = (b0 | (b1 << 8)) & 0xFFF;
        let val1 = ((b1 >> 4) | (b2 << 4)) & 0xFFF;

        if val0 < Q as u16 {
            out[ctr] = val0 as i16;
            ctr += 1;
        }
        if ctr < N && val1 < Q as u16 {
            out[ctr] = val1 as i16;
            ctr += 1;
        }
    }
    ctr
}

impl UniformSampler for DefaultSamplers {
    fn sample_uniform(seed: &[u8; SEED_BYTES], x: u8, y: u8) -> Result<Polynomial> {
        let mut xof = ShakeXof128::new();
        xof.update(seed)?;
        xof.update(&[x, y])?;

        let mut poly = Polynomial::zero();
        let mut buf = [0u8; UNIFORM_INITIAL_BLOCKS * SHAKE128_RATE];
        xof.squeeze(&mut buf)?;
        let mut ctr = rej_uniform(&mut poly.coeffs, 0, &buf);
        let mut blocks = UNIFORM_INITIAL_BLOCKS;

        let mut block = [0u8; SHAKE128_RATE];
        while ctr < N {
            if blocks >= MAX_XOF_BLOCKS {
                error!("uniform sampling exhausted {} XOF blocks", MAX_XOF_BLOCKS);
                return Err(Error::Processing {
                    operation: "uniform sampling",
                    details: "XOF block limit reached",
                });
            }
            xof.squeeze(&mut block)?;
            ctr = rej_uniform(&mut poly.coeffs, ctr, &block);
            blocks += 1;
        }

        Ok(poly)
    }
}

/// `SHAKE256(seed || nonce)`, filling `out`
pub fn prf(seed: &[u8; SEED_BYTES], nonce: u8, out: &mut [u8]) -> Result<()> {
    let mut xof = ShakeXof256::new();
    xof.update(seed)?;
    xof.update(&[nonce])?;
    xof.squeeze(out)
}

/// Centered binomial sample from `eta * N / 4` bytes of uniform input.
///
/// Each coefficient is the number of set bits among `eta` consecutive input
/// bits minus the number among the next `eta`, read least significant bit
/// first.
pub fn cbd(buf: &[u8], eta: u8) -> Result<Polynomial> {
    check_eta(eta)?;
    let eta = eta as usize;
    validate::length("CBD input", buf.len(), eta * N / 4)?;

    let bit = |pos: usize| ((buf[pos / 8] >> (pos % 8)) & 1) as i16;

    let mut poly = Polynomial::zero();
    for (i, c) in poly.coeffs.iter_mut().enumerate() {
        let base = 2 * eta * i;
        let mut a = 0i16;
        let mut b = 0i16;
        for j in 0..eta {
            a += bit(base + j);
            b += bit(base + eta + j);
        }
        *c = a - b;
    }
    Ok(poly)
}

fn check_eta(eta: u8) -> Result<()> {
    validate::parameter(eta == 2 || eta == 3, "eta", "must be 2 or 3")
}

impl CbdSampler for DefaultSamplers {
    fn sample_cbd(seed: &[u8; SEED_BYTES], nonce: u8, eta: u8) -> Result<Polynomial> {
        check_eta(eta)?;
        let len = eta as usize * N / 4;
        let mut buf = Zeroizing::new([0u8; MAX_ETA * N / 4]);
        prf(seed, nonce, &mut buf[..len])?;
        cbd(&buf[..len], eta)
    }
}

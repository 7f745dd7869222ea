//! Coefficient packing, compression and message encoding
//!
//! All packed formats are little-endian bit streams: coefficient `i` occupies
//! bits `[i*d, (i+1)*d)`, least significant bit first.

use super::params::{N, Q, Q32};
use super::polynomial::Polynomial;
use super::reduce::barrett_reduce;
use crate::error::{validate, Result};

/// Bytes of a message encoded as a polynomial (one bit per coefficient)
pub const MSG_BYTES: usize = N / 8;

/// Bytes of a polynomial packed at 12 bits per coefficient
pub const POLY_BYTES: usize = bytes_required(12, N);

/// ceil(2^48 / q): `(x * DIV_Q_MAGIC) >> 48 == x / q` for every `x < 2^25`
const DIV_Q_MAGIC: u64 = ((1u64 << 48) + Q32 as u64 - 1) / Q32 as u64;

/// Trait for packing coefficients into a byte buffer
pub trait CoefficientPacker {
    /// Packs the low `bits_per_coeff` bits of each coefficient into `out`,
    /// which must be exactly `bytes_required(bits_per_coeff, N)` long
    fn pack_coeffs(coeffs: &[u16; N], bits_per_coeff: usize, out: &mut [u8]) -> Result<()>;
}

/// Trait for unpacking coefficients from a byte buffer
pub trait CoefficientUnpacker {
    /// Unpacks `N` coefficients of `bits_per_coeff` bits each
    fn unpack_coeffs(bytes: &[u8], bits_per_coeff: usize) -> Result<[u16; N]>;
}

/// Default implementation for coefficient serialization
pub struct DefaultCoefficientSerde;

fn check_width(bits_per_coeff: usize, name: &'static str) -> Result<()> {
    validate::parameter(
        (1..=16).contains(&bits_per_coeff),
        name,
        "bits_per_coeff must be in range [1, 16]",
    )
}

impl CoefficientPacker for DefaultCoefficientSerde {
    fn pack_coeffs(coeffs: &[u16; N], bits_per_coeff: usize, out: &mut [u8]) -> Result<()> {
        check_width(bits_per_coeff, "coefficient packing")?;
        validate::length(
            "coefficient packing",
            out.len(),
            bytes_required(bits_per_coeff, N),
        )?;

        out.fill(0);
        let mask = ((1u32 << bits_per_coeff) - 1) as u16;
        let mut bit_pos = 0;
        for &coeff in coeffs.iter() {
            let masked = coeff & mask;
            for bit in 0..bits_per_coeff {
                out[bit_pos / 8] |= (((masked >> bit) & 1) as u8) << (bit_pos % 8);
                bit_pos += 1;
            }
        }
        Ok(())
    }
}

impl CoefficientUnpacker for DefaultCoefficientSerde {
    fn unpack_coeffs(bytes: &[u8], bits_per_coeff: usize) -> Result<[u16; N]> {
        check_width(bits_per_coeff, "coefficient unpacking")?;
        validate::length(
            "coefficient unpacking",
            bytes.len(),
            bytes_required(bits_per_coeff, N),
        )?;

        let mut coeffs = [0u16; N];
        let mut bit_pos = 0;
        for coeff in coeffs.iter_mut() {
            let mut value = 0u16;
            for bit in 0..bits_per_coeff {
                value |= (((bytes[bit_pos / 8] >> (bit_pos % 8)) & 1) as u16) << bit;
                bit_pos += 1;
            }
            *coeff = value;
        }
        Ok(coeffs)
    }
}

/// Number of bytes needed to pack `n` coefficients of `bits_per_coeff` bits
#[allow(clippy::manual_div_ceil)]
pub const fn bytes_required(bits_per_coeff: usize, n: usize) -> usize {
    (n * bits_per_coeff + 7) / 8
}

/// `round(2^d / q * x) mod 2^d` for a canonical `x` in `[0, q)`.
///
/// Uses a multiply-and-shift in place of a division so the running time does
/// not depend on `x`.
#[inline(always)]
pub const fn compress(x: u16, d: u32) -> u16 {
    let scaled = ((x as u64) << d) + (Q32 as u64 / 2);
    (((scaled * DIV_Q_MAGIC) >> 48) & ((1u64 << d) - 1)) as u16
}

/// `round(q / 2^d * y)` for `y` in `[0, 2^d)`
#[inline(always)]
pub const fn decompress(y: u16, d: u32) -> i16 {
    (((y as u32) * Q32 as u32 + (1u32 << (d - 1))) >> d) as i16
}

/// Compresses every coefficient to `d` bits and packs the result into `out`
pub fn compress_poly(p: &Polynomial, d: u32, out: &mut [u8]) -> Result<()> {
    check_width(d as usize, "compression")?;
    let mut coeffs = p.to_unsigned();
    for c in coeffs.iter_mut() {
        *c = compress(*c, d);
    }
    DefaultCoefficientSerde::pack_coeffs(&coeffs, d as usize, out)
}

/// Unpacks `d`-bit values and decompresses them to coefficients in `[0, q)`
pub fn decompress_poly(bytes: &[u8], d: u32) -> Result<Polynomial> {
    let coeffs = DefaultCoefficientSerde::unpack_coeffs(bytes, d as usize)?;
    let mut p = Polynomial::zero();
    for (c, &y) in p.coeffs.iter_mut().zip(coeffs.iter()) {
        *c = decompress(y, d);
    }
    Ok(p)
}

/// Serializes a polynomial at 12 bits per canonical coefficient
pub fn poly_to_bytes(p: &Polynomial, out: &mut [u8]) -> Result<()> {
    DefaultCoefficientSerde::pack_coeffs(&p.to_unsigned(), 12, out)
}

/// Deserializes a 12-bit packed polynomial.
///
/// Values up to 4095 are accepted and reduced modulo q.
pub fn poly_from_bytes(bytes: &[u8]) -> Result<Polynomial> {
    let coeffs = DefaultCoefficientSerde::unpack_coeffs(bytes, 12)?;
    let mut p = Polynomial::zero();
    for (c, &v) in p.coeffs.iter_mut().zip(coeffs.iter()) {
        *c = barrett_reduce(v as i16);
    }
    Ok(p)
}

/// Maps each message bit to 0 or `(q+1)/2`, without branching on the bit
pub fn poly_from_msg(msg: &[u8]) -> Result<Polynomial> {
    validate::length("message", msg.len(), MSG_BYTES)?;
    let half = (Q + 1) / 2;
    let mut p = Polynomial::zero();
    for (i, &byte) in msg.iter().enumerate() {
        for j in 0..8 {
            let mask = -(((byte >> j) & 1) as i16);
            p.coeffs[8 * i + j] = mask & half;
        }
    }
    Ok(p)
}

/// Decodes one bit per coefficient: 1 when the coefficient is closer to
/// `q/2` than to 0
pub fn poly_to_msg(p: &Polynomial) -> [u8; MSG_BYTES] {
    let coeffs = p.to_unsigned();
    let mut msg = [0u8; MSG_BYTES];
    for (i, byte) in msg.iter_mut().enumerate() {
        for j in 0..8 {
            *byte |= (compress(coeffs[8 * i + j], 1) as u8) << j;
        }
    }
    msg
}

//! Modular reductions for coefficients modulo q

use super::params::{QINV, Q32};

/// Montgomery reduction.
///
/// For `a` in `[-q * 2^15, q * 2^15)` returns `a * 2^-16 mod q`, in
/// `(-q, q)`.
#[inline(always)]
pub const fn montgomery_reduce(a: i32) -> i16 {
    let t = (a as i16).wrapping_mul(QINV);
    ((a - (t as i32) * Q32) >> 16) as i16
}

/// Barrett reduction to the centered representative in
/// `[-(q-1)/2, (q-1)/2]`.
#[inline(always)]
pub const fn barrett_reduce(a: i16) -> i16 {
    const V: i32 = ((1 << 26) + Q32 / 2) / Q32;
    let t = ((V * a as i32 + (1 << 25)) >> 26) * Q32;
    (a as i32 - t) as i16
}

/// Multiplication followed by Montgomery reduction
#[inline(always)]
pub const fn fqmul(a: i16, b: i16) -> i16 {
    montgomery_reduce(a as i32 * b as i32)
}

/// Maps a value in `(-q, q)` to `[0, q)` without branching
#[inline(always)]
pub const fn to_unsigned(a: i16) -> u16 {
    (a + ((a >> 15) & (Q32 as i16))) as u16
}

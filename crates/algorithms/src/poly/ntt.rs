//! Number-theoretic transform over R_q
//!
//! The forward transform takes standard-order coefficients to bit-reversed
//! NTT order. Because 17 is only a 256-th root of unity, the transform stops
//! at 128 degree-1 residues modulo `X^2 - zeta`, and multiplication in the
//! NTT domain is [`basemul`] on coefficient pairs.

use super::params::{INV_NTT_SCALE, N, ZETAS};
use super::reduce::{barrett_reduce, fqmul};

/// In-place forward NTT (Cooley-Tukey butterflies).
///
/// Input coefficients must be bounded by q in absolute value. Output is
/// bounded by 8q and is not reduced.
pub fn ntt(r: &mut [i16; N]) {
    let mut k = 1;
    let mut len = 128;
    while len >= 2 {
        let mut start = 0;
        while start < N {
            let zeta = ZETAS[k];
            k += 1;
            for j in start..start + len {
                let t = fqmul(zeta, r[j + len]);
                r[j + len] = r[j] - t;
                r[j] += t;
            }
            start += 2 * len;
        }
        len >>= 1;
    }
}

/// In-place inverse NTT (Gentleman-Sande butterflies), followed by
/// multiplication by the Montgomery factor 2^16.
///
/// Output coefficients are bounded by q in absolute value.
pub fn invntt_tomont(r: &mut [i16; N]) {
    let mut k = 127;
    let mut len = 2;
    while len <= 128 {
        let mut start = 0;
        while start < N {
            let zeta = ZETAS[k];
            k -= 1;
            for j in start..start + len {
                let t = r[j];
                r[j] = barrett_reduce(t + r[j + len]);
                r[j + len] = fqmul(zeta, r[j + len] - t);
            }
            start += 2 * len;
        }
        len <<= 1;
    }

    for c in r.iter_mut() {
        *c = fqmul(*c, INV_NTT_SCALE);
    }
}

/// Product of `a0 + a1 X` and `b0 + b1 X` modulo `X^2 - zeta`, with a
/// Montgomery factor 2^-16.
#[inline(always)]
pub fn basemul(a: [i16; 2], b: [i16; 2], zeta: i16) -> [i16; 2] {
    let r0 = fqmul(fqmul(a[1], b[1]), zeta) + fqmul(a[0], b[0]);
    let r1 = fqmul(a[0], b[1]) + fqmul(a[1], b[0]);
    [r0, r1]
}

/// Point-wise multiplication of two polynomials in the NTT domain.
///
/// The result carries a factor 2^-16 that a later [`invntt_tomont`] or
/// Montgomery conversion removes.
pub fn basemul_montgomery(a: &[i16; N], b: &[i16; N]) -> [i16; N] {
    let mut r = [0i16; N];
    for i in 0..N / 4 {
        let zeta = ZETAS[64 + i];
        let lo = 4 * i;
        let hi = 4 * i + 2;

        let p = basemul([a[lo], a[lo + 1]], [b[lo], b[lo + 1]], zeta);
        r[lo] = p[0];
        r[lo + 1] = p[1];

        let p = basemul([a[hi], a[hi + 1]], [b[hi], b[hi + 1]], -zeta);
        r[hi] = p[0];
        r[hi + 1] = p[1];
    }
    r
}

//! Ring parameters for R_q = Z_q[X]/(X^256 + 1), q = 3329
//!
//! The twiddle table is generated at compile time so it cannot drift from
//! the constants it is derived from.

use params::pqc::kyber::{KYBER_N, KYBER_Q};

/// Polynomial degree
pub const N: usize = KYBER_N;

/// Coefficient modulus
pub const Q: i16 = KYBER_Q as i16;

/// Modulus as `i32`, for widened arithmetic
pub const Q32: i32 = KYBER_Q as i32;

/// q^-1 mod 2^16, as a signed value
pub const QINV: i16 = -3327;

/// 2^16 mod q, centered
pub const MONT: i16 = -1044;

/// 2^32 mod q: multiplying by this with a Montgomery reduction maps a value
/// into Montgomery form
pub const MONT_SQ: i16 = 1353;

/// mont^2 / 128 mod q: final scaling of the inverse NTT
pub const INV_NTT_SCALE: i16 = 1441;

/// Primitive 256-th root of unity modulo q
pub const ROOT_OF_UNITY: u32 = 17;

const fn pow_mod(base: u32, mut exp: u32, m: u32) -> u32 {
    let mut result = 1u64;
    let mut b = (base % m) as u64;
    while exp > 0 {
        if exp & 1 == 1 {
            result = result * b % m as u64;
        }
        b = b * b % m as u64;
        exp >>= 1;
    }
    result as u32
}

const fn bitrev7(mut x: usize) -> u32 {
    let mut r = 0u32;
    let mut i = 0;
    while i < 7 {
        r = (r << 1) | (x & 1) as u32;
        x >>= 1;
        i += 1;
    }
    r
}

const fn gen_zetas() -> [i16; 128] {
    let q = KYBER_Q as u32;
    let mont = (1u32 << 16) % q;
    let mut table = [0i16; 128];
    let mut i = 0;
    while i < 128 {
        let z = (mont as u64 * pow_mod(ROOT_OF_UNITY, bitrev7(i), q) as u64 % q as u64) as i32;
        table[i] = if z > (q / 2) as i32 { z - q as i32 } else { z } as i16;
        i += 1;
    }
    table
}

/// Powers of the root of unity in bit-reversed order, in Montgomery form
pub const ZETAS: [i16; 128] = gen_zetas();

//! Constant-time operations to prevent timing attacks

use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};

/// Constant-time comparison of two byte slices.
///
/// Slices of different lengths compare unequal; lengths are public, so
/// that early return leaks nothing secret.
pub fn ct_eq<A, B>(a: A, b: B) -> bool
where
    A: AsRef<[u8]>,
    B: AsRef<[u8]>,
{
    ct_eq_choice(a, b).into()
}

/// Constant-time equality check that returns a [`Choice`] (0 or 1)
pub fn ct_eq_choice<A, B>(a: A, b: B) -> Choice
where
    A: AsRef<[u8]>,
    B: AsRef<[u8]>,
{
    let a = a.as_ref();
    let b = b.as_ref();

    if a.len() != b.len() {
        return Choice::from(0);
    }

    a.ct_eq(b)
}

/// Constant-time conditional assignment.
///
/// Overwrites `dst` with `src` when `condition` is set, otherwise leaves it
/// unchanged. Every byte is touched either way.
pub fn ct_assign<const N: usize>(dst: &mut [u8; N], src: &[u8; N], condition: Choice) {
    for (d, s) in dst.iter_mut().zip(src.iter()) {
        d.conditional_assign(s, condition);
    }
}

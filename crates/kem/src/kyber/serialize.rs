//! Byte layouts of Kyber keys and ciphertexts.
//!
//! ```text
//! pk = encode12(t_hat) || rho
//! sk = encode12(s_hat) || pk || H(pk) || z
//! ct = compress_du(u) || compress_dv(v)
//! ```

use alloc::vec;
use alloc::vec::Vec;

use algorithms::poly::polynomial::Polynomial;
use algorithms::poly::serialize::{compress_poly, decompress_poly};

use super::params::{KyberParams, KYBER_SYMBYTES};
use super::polyvec::PolyVec;
use crate::error::{validate, Result};

/// Serializes a CPA public key.
pub(crate) fn pack_pk<P: KyberParams>(t_hat: &PolyVec<P>, rho: &[u8; KYBER_SYMBYTES]) -> Result<Vec<u8>> {
    let mut out = vec![0u8; P::PUBLIC_KEY_BYTES];
    t_hat.to_bytes(&mut out[..P::POLYVEC_BYTES])?;
    out[P::POLYVEC_BYTES..].copy_from_slice(rho);
    Ok(out)
}

/// Parses a CPA public key into `t_hat` and the matrix seed.
pub(crate) fn unpack_pk<P: KyberParams>(bytes: &[u8]) -> Result<(PolyVec<P>, [u8; KYBER_SYMBYTES])> {
    validate::key(
        bytes.len() == P::PUBLIC_KEY_BYTES,
        "public",
        "wrong public key length",
    )?;
    let t_hat = PolyVec::<P>::from_bytes(&bytes[..P::POLYVEC_BYTES])?;
    let mut rho = [0u8; KYBER_SYMBYTES];
    rho.copy_from_slice(&bytes[P::POLYVEC_BYTES..]);
    Ok((t_hat, rho))
}

/// Serializes the CPA secret vector `s_hat`.
pub(crate) fn pack_sk<P: KyberParams>(s_hat: &PolyVec<P>, out: &mut [u8]) -> Result<()> {
    validate::serialization(
        out.len() == P::POLYVEC_BYTES,
        "CPA secret key",
        "output buffer has wrong length",
    )?;
    s_hat.to_bytes(out)?;
    Ok(())
}

/// Parses the CPA secret vector `s_hat`.
pub(crate) fn unpack_sk<P: KyberParams>(bytes: &[u8]) -> Result<PolyVec<P>> {
    Ok(PolyVec::<P>::from_bytes(bytes)?)
}

/// Serializes a ciphertext `(u, v)`.
pub(crate) fn pack_ciphertext<P: KyberParams>(u: &PolyVec<P>, v: &Polynomial) -> Result<Vec<u8>> {
    let mut out = vec![0u8; P::CIPHERTEXT_BYTES];
    let (u_bytes, v_bytes) = out.split_at_mut(P::POLYVEC_COMPRESSED_BYTES);
    u.compress(u_bytes)?;
    compress_poly(v, P::DV, v_bytes)?;
    Ok(out)
}

/// Parses and decompresses a ciphertext into `(u, v)`.
pub(crate) fn unpack_ciphertext<P: KyberParams>(bytes: &[u8]) -> Result<(PolyVec<P>, Polynomial)> {
    validate::ciphertext(
        bytes.len() == P::CIPHERTEXT_BYTES,
        P::NAME,
        "wrong ciphertext length",
    )?;
    let (u_bytes, v_bytes) = bytes.split_at(P::POLYVEC_COMPRESSED_BYTES);
    let u = PolyVec::<P>::decompress(u_bytes)?;
    let v = decompress_poly(v_bytes, P::DV)?;
    Ok((u, v))
}

/// Borrowed view of the four fields of a CCA secret key.
pub(crate) struct SecretKeyParts<'a> {
    pub(crate) indcpa: &'a [u8],
    pub(crate) pk: &'a [u8],
    pub(crate) h_pk: &'a [u8],
    pub(crate) z: &'a [u8; KYBER_SYMBYTES],
}

/// Splits a CCA secret key without copying.
pub(crate) fn split_sk<P: KyberParams>(sk: &[u8]) -> Result<SecretKeyParts<'_>> {
    validate::key(
        sk.len() == P::SECRET_KEY_BYTES,
        "secret",
        "wrong secret key length",
    )?;
    let (indcpa, rest) = sk.split_at(P::POLYVEC_BYTES);
    let (pk, rest) = rest.split_at(P::PUBLIC_KEY_BYTES);
    let (h_pk, z) = rest.split_at(KYBER_SYMBYTES);
    let z: &[u8; KYBER_SYMBYTES] = z.try_into().map_err(|_| crate::error::Error::InvalidKey {
        key_type: "secret",
        reason: "wrong secret key length",
    })?;
    Ok(SecretKeyParts { indcpa, pk, h_pk, z })
}

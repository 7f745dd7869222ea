//! Kyber IND-CCA2 KEM construction using the Fujisaki-Okamoto transform
//! with implicit rejection.

use alloc::vec::Vec;

use algorithms::hash::{HashFunction, Sha3_256, Sha3_512};
use algorithms::xof::{ExtendableOutputFunction, ShakeXof256};
use internal::constant_time::{ct_assign, ct_eq_choice};
use log::{debug, error};
use rand::{CryptoRng, RngCore};
use zeroize::Zeroizing;

use super::cpa_pke::{decrypt_cpa, encrypt_cpa, keypair_cpa_derand};
use super::params::{KyberParams, KYBER_SS_BYTES, KYBER_SYMBYTES};
use super::serialize::split_sk;
use crate::error::{validate, Error, Result};

pub(crate) type SharedSecretBytes = Zeroizing<[u8; KYBER_SS_BYTES]>;

// H: SHA3-256
fn h_func(data: &[u8]) -> Result<[u8; KYBER_SYMBYTES]> {
    Ok(Sha3_256::digest(data)?)
}

// G: SHA3-512, split into two 32-byte halves
fn g_func(
    a: &[u8; KYBER_SYMBYTES],
    b: &[u8],
) -> Result<(Zeroizing<[u8; KYBER_SYMBYTES]>, Zeroizing<[u8; KYBER_SYMBYTES]>)> {
    let mut hasher = Sha3_512::new();
    hasher.update(a)?.update(b)?;
    let digest = Zeroizing::new(hasher.finalize()?);
    let mut k = Zeroizing::new([0u8; KYBER_SYMBYTES]);
    let mut r = Zeroizing::new([0u8; KYBER_SYMBYTES]);
    k.copy_from_slice(&digest[..KYBER_SYMBYTES]);
    r.copy_from_slice(&digest[KYBER_SYMBYTES..]);
    Ok((k, r))
}

// KDF: SHAKE-256(K_bar || H(ct)) truncated to 32 bytes
fn kdf(k_bar: &[u8; KYBER_SYMBYTES], h_ct: &[u8; KYBER_SYMBYTES]) -> Result<SharedSecretBytes> {
    let mut xof = ShakeXof256::new();
    xof.update(k_bar)?;
    xof.update(h_ct)?;
    let mut ss = Zeroizing::new([0u8; KYBER_SS_BYTES]);
    xof.squeeze(&mut ss[..])?;
    Ok(ss)
}

fn fill_random<R: RngCore + CryptoRng>(
    rng: &mut R,
    context: &'static str,
) -> Result<Zeroizing<[u8; KYBER_SYMBYTES]>> {
    let mut buf = Zeroizing::new([0u8; KYBER_SYMBYTES]);
    rng.try_fill_bytes(&mut buf[..]).map_err(|e| {
        error!("{}: entropy source failed", context);
        Error::random(context, e)
    })?;
    Ok(buf)
}

/// Deterministic key generation from the CPA seed `d` and the rejection
/// secret `z`.
pub(crate) fn kem_keygen_derand<P: KyberParams>(
    d: &[u8; KYBER_SYMBYTES],
    z: &[u8; KYBER_SYMBYTES],
) -> Result<(Vec<u8>, Zeroizing<Vec<u8>>)> {
    let (pk, sk_cpa) = keypair_cpa_derand::<P>(d)?;
    let h_pk = h_func(&pk)?;

    let mut sk = Zeroizing::new(Vec::with_capacity(P::SECRET_KEY_BYTES));
    sk.extend_from_slice(&sk_cpa);
    sk.extend_from_slice(&pk);
    sk.extend_from_slice(&h_pk);
    sk.extend_from_slice(z);

    validate::key_generation(
        pk.len() == P::PUBLIC_KEY_BYTES && sk.len() == P::SECRET_KEY_BYTES,
        P::NAME,
        "serialized key has unexpected length",
    )?;
    Ok((pk, sk))
}

/// IND-CCA2 key generation
pub(crate) fn kem_keygen<P: KyberParams, R: RngCore + CryptoRng>(
    rng: &mut R,
) -> Result<(Vec<u8>, Zeroizing<Vec<u8>>)> {
    debug!("{}: generating keypair", P::NAME);
    let d = fill_random(rng, "keypair")?;
    let z = fill_random(rng, "keypair")?;
    kem_keygen_derand::<P>(&d, &z)
}

/// Deterministic encapsulation. `seed` plays the role of the random bytes;
/// it is hashed before use, exactly as fresh randomness would be.
pub(crate) fn kem_encaps_derand<P: KyberParams>(
    pk: &[u8],
    seed: &[u8; KYBER_SYMBYTES],
) -> Result<(Vec<u8>, SharedSecretBytes)> {
    validate::key(
        pk.len() == P::PUBLIC_KEY_BYTES,
        "public",
        "wrong public key length",
    )?;

    let m = Zeroizing::new(h_func(seed)?);
    let h_pk = h_func(pk)?;
    let (k_bar, coins) = g_func(&m, &h_pk)?;

    let ct = encrypt_cpa::<P>(pk, &m, &coins)?;
    validate::encapsulation(
        ct.len() == P::CIPHERTEXT_BYTES,
        P::NAME,
        "ciphertext has unexpected length",
    )?;

    let h_ct = h_func(&ct)?;
    let ss = kdf(&k_bar, &h_ct)?;
    Ok((ct, ss))
}

/// IND-CCA2 encapsulation
pub(crate) fn kem_encaps<P: KyberParams, R: RngCore + CryptoRng>(
    pk: &[u8],
    rng: &mut R,
) -> Result<(Vec<u8>, SharedSecretBytes)> {
    debug!("{}: encapsulating", P::NAME);
    let seed = fill_random(rng, "encapsulate")?;
    kem_encaps_derand::<P>(pk, &seed)
}

/// IND-CCA2 decapsulation.
///
/// A ciphertext that does not re-encrypt to itself yields
/// `KDF(z || H(ct))` instead of an error. The comparison and the selection
/// are constant time and nothing branches on their outcome.
pub(crate) fn kem_decaps<P: KyberParams>(sk: &[u8], ct: &[u8]) -> Result<SharedSecretBytes> {
    debug!("{}: decapsulating", P::NAME);
    let parts = split_sk::<P>(sk)?;
    validate::ciphertext(
        ct.len() == P::CIPHERTEXT_BYTES,
        P::NAME,
        "wrong ciphertext length",
    )?;

    let m_prime = decrypt_cpa::<P>(parts.indcpa, ct)?;
    let (mut k_bar, coins) = g_func(&m_prime, parts.h_pk)?;
    let ct_prime = encrypt_cpa::<P>(parts.pk, &m_prime, &coins)?;

    let fail = !ct_eq_choice(ct, &ct_prime);
    ct_assign(&mut *k_bar, parts.z, fail);

    let h_ct = h_func(ct)?;
    kdf(&k_bar, &h_ct)
}

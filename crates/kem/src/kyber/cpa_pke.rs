//! Kyber CPA-secure public key encryption.
//!
//! All three operations are deterministic: randomness enters only through the
//! 32-byte seeds passed in by the CCA layer.

use alloc::vec;
use alloc::vec::Vec;

use algorithms::hash::{HashFunction, Sha3_512};
use algorithms::poly::polynomial::Polynomial;
use algorithms::poly::sampling::{CbdSampler, DefaultSamplers, UniformSampler};
use algorithms::poly::serialize::{poly_from_msg, poly_to_msg};
use common::EphemeralSecret;
use log::trace;
use zeroize::Zeroizing;

use super::params::{KyberParams, KYBER_SYMBYTES};
use super::polyvec::PolyVec;
use super::serialize::{pack_ciphertext, pack_pk, pack_sk, unpack_ciphertext, unpack_pk, unpack_sk};
use crate::error::Result;

/// Expands `rho` into the public matrix, already in the NTT domain.
///
/// Entry `(i, j)` is sampled from `rho || j || i`, or from `rho || i || j`
/// when `transposed` is set.
pub(crate) fn gen_matrix<P: KyberParams>(
    rho: &[u8; KYBER_SYMBYTES],
    transposed: bool,
) -> Result<Vec<PolyVec<P>>> {
    let mut rows = Vec::with_capacity(P::K);
    for i in 0..P::K {
        let mut polys = Vec::with_capacity(P::K);
        for j in 0..P::K {
            let (x, y) = if transposed { (i, j) } else { (j, i) };
            polys.push(DefaultSamplers::sample_uniform(rho, x as u8, y as u8)?);
        }
        rows.push(PolyVec::from_polys(polys));
    }
    Ok(rows)
}

/// Samples `P::K` noise polynomials with consecutive nonces.
fn sample_noise_vec<P: KyberParams>(
    seed: &[u8; KYBER_SYMBYTES],
    first_nonce: u8,
    eta: u8,
) -> Result<EphemeralSecret<PolyVec<P>>> {
    let polys = (0..P::K)
        .map(|i| DefaultSamplers::sample_cbd(seed, first_nonce + i as u8, eta))
        .collect::<algorithms::Result<Vec<_>>>()?;
    Ok(EphemeralSecret::new(PolyVec::from_polys(polys)))
}

/// CPA key generation from a 32-byte seed.
///
/// Returns the packed public key and the packed secret vector `s_hat`.
pub(crate) fn keypair_cpa_derand<P: KyberParams>(
    d: &[u8; KYBER_SYMBYTES],
) -> Result<(Vec<u8>, Zeroizing<Vec<u8>>)> {
    trace!("{}: CPA key generation", P::NAME);

    let seeds = Zeroizing::new(Sha3_512::digest(d)?);
    let mut rho = [0u8; KYBER_SYMBYTES];
    rho.copy_from_slice(&seeds[..KYBER_SYMBYTES]);
    let mut sigma = Zeroizing::new([0u8; KYBER_SYMBYTES]);
    sigma.copy_from_slice(&seeds[KYBER_SYMBYTES..]);

    let a = gen_matrix::<P>(&rho, false)?;

    let mut s_hat = sample_noise_vec::<P>(&sigma, 0, P::ETA1)?;
    let mut e_hat = sample_noise_vec::<P>(&sigma, P::K as u8, P::ETA1)?;
    s_hat.ntt();
    e_hat.ntt();

    let mut t_hat = PolyVec::<P>::from_polys(
        a.iter()
            .map(|row| {
                let mut t = row.basemul_acc(&s_hat);
                t.to_mont();
                t
            })
            .collect(),
    );
    t_hat.add_assign(&e_hat);
    t_hat.reduce();

    let pk = pack_pk::<P>(&t_hat, &rho)?;
    let mut sk = Zeroizing::new(vec![0u8; P::POLYVEC_BYTES]);
    pack_sk::<P>(&s_hat, &mut sk)?;
    Ok((pk, sk))
}

/// CPA encryption of the 32-byte message `m` under `pk` with explicit coins.
pub(crate) fn encrypt_cpa<P: KyberParams>(
    pk: &[u8],
    m: &[u8; KYBER_SYMBYTES],
    coins: &[u8; KYBER_SYMBYTES],
) -> Result<Vec<u8>> {
    let (t_hat, rho) = unpack_pk::<P>(pk)?;
    let at = gen_matrix::<P>(&rho, true)?;
    let k = EphemeralSecret::new(poly_from_msg(m)?);

    let mut r_hat = sample_noise_vec::<P>(coins, 0, P::ETA1)?;
    let e1 = sample_noise_vec::<P>(coins, P::K as u8, P::ETA2)?;
    let e2 = EphemeralSecret::new(DefaultSamplers::sample_cbd(coins, 2 * P::K as u8, P::ETA2)?);
    r_hat.ntt();

    let mut u = PolyVec::<P>::from_polys(at.iter().map(|row| row.basemul_acc(&r_hat)).collect());
    let mut v = t_hat.basemul_acc(&r_hat);

    u.invntt_tomont();
    v.invntt_tomont();

    u.add_assign(&e1);
    v.add_assign(&e2);
    v.add_assign(&k);
    u.reduce();
    v.reduce();

    pack_ciphertext::<P>(&u, &v)
}

/// CPA decryption of `ct` with the packed secret vector `sk`.
pub(crate) fn decrypt_cpa<P: KyberParams>(
    sk: &[u8],
    ct: &[u8],
) -> Result<Zeroizing<[u8; KYBER_SYMBYTES]>> {
    let (mut u, v) = unpack_ciphertext::<P>(ct)?;
    let s_hat = EphemeralSecret::new(unpack_sk::<P>(sk)?);

    u.ntt();
    let mut mp = EphemeralSecret::new(s_hat.basemul_acc(&u));
    mp.invntt_tomont();

    let mut w: EphemeralSecret<Polynomial> = EphemeralSecret::new(v.sub(&mp));
    w.reduce();
    Ok(Zeroizing::new(poly_to_msg(&w)))
}

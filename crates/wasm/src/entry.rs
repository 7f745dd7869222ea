//! Safe entry points over caller-provided buffers.
//!
//! Every operation checks buffer lengths, runs the KEM to completion and only
//! then copies the results out. On failure the output buffers are left
//! exactly as the caller passed them.

use api::error::validate;
use api::{Kem, Serialize, SerializeSecret};
use kem::{KemSizes, Kyber512, KyberCiphertext, KyberPublicKey, KyberSecretKey, KYBER512_SIZES};
use log::{debug, error, warn};
use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};

/// Outcome of a boundary call, as seen by the host.
#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// The operation completed and every output buffer was written
    Success = 0,
    /// The operation failed and no output buffer was touched
    Failure = 1,
}

impl Status {
    /// True for [`Status::Success`]
    pub fn is_success(self) -> bool {
        self == Status::Success
    }
}

impl From<Status> for i32 {
    fn from(status: Status) -> Self {
        status as i32
    }
}

/// Byte sizes of the compiled-in parameter set.
pub const fn sizes() -> KemSizes {
    KYBER512_SIZES
}

fn check_len(context: &'static str, actual: usize, expected: usize) -> api::Result<()> {
    validate::length(context, actual, expected)
}

fn report(operation: &'static str, result: api::Result<()>) -> Status {
    match result {
        Ok(()) => Status::Success,
        Err(e) if e.is_entropy_failure() => {
            error!("{}: {}", operation, e);
            Status::Failure
        }
        Err(e) => {
            warn!("{}: rejected: {}", operation, e);
            Status::Failure
        }
    }
}

fn try_keypair<R: RngCore + CryptoRng>(pk: &mut [u8], sk: &mut [u8], rng: &mut R) -> api::Result<()> {
    let sizes = sizes();
    check_len("public key buffer", pk.len(), sizes.public_key)?;
    check_len("secret key buffer", sk.len(), sizes.secret_key)?;

    let (public, secret) = Kyber512::keypair(rng)?;
    pk.copy_from_slice(public.as_ref());
    sk.copy_from_slice(secret.as_ref());
    Ok(())
}

fn try_encapsulate<R: RngCore + CryptoRng>(
    ct: &mut [u8],
    ss: &mut [u8],
    pk: &[u8],
    rng: &mut R,
) -> api::Result<()> {
    let sizes = sizes();
    check_len("ciphertext buffer", ct.len(), sizes.ciphertext)?;
    check_len("shared secret buffer", ss.len(), sizes.shared_secret)?;
    check_len("public key", pk.len(), sizes.public_key)?;

    let public = KyberPublicKey::from_bytes(pk)?;
    let (ciphertext, shared) = Kyber512::encapsulate(rng, &public)?;
    ct.copy_from_slice(ciphertext.as_ref());
    ss.copy_from_slice(shared.as_ref());
    Ok(())
}

fn try_decapsulate(ss: &mut [u8], ct: &[u8], sk: &[u8]) -> api::Result<()> {
    let sizes = sizes();
    check_len("shared secret buffer", ss.len(), sizes.shared_secret)?;
    check_len("ciphertext", ct.len(), sizes.ciphertext)?;
    check_len("secret key", sk.len(), sizes.secret_key)?;

    let secret = KyberSecretKey::from_bytes(sk)?;
    let ciphertext = KyberCiphertext::from_bytes(ct)?;
    let shared = Kyber512::decapsulate(&secret, &ciphertext)?;
    ss.copy_from_slice(shared.as_ref());
    Ok(())
}

/// Generates a keypair into `pk` and `sk` using the OS entropy source.
pub fn keypair_into(pk: &mut [u8], sk: &mut [u8]) -> Status {
    keypair_into_with_rng(pk, sk, &mut OsRng)
}

/// Generates a keypair into `pk` and `sk` using `rng`.
pub fn keypair_into_with_rng<R: RngCore + CryptoRng>(
    pk: &mut [u8],
    sk: &mut [u8],
    rng: &mut R,
) -> Status {
    debug!("generate_keypair");
    report("generate_keypair", try_keypair(pk, sk, rng))
}

/// Encapsulates to `pk`, writing the ciphertext to `ct` and the shared
/// secret to `ss`. Uses the OS entropy source.
pub fn encapsulate_into(ct: &mut [u8], ss: &mut [u8], pk: &[u8]) -> Status {
    encapsulate_into_with_rng(ct, ss, pk, &mut OsRng)
}

/// Encapsulates to `pk` using `rng`.
pub fn encapsulate_into_with_rng<R: RngCore + CryptoRng>(
    ct: &mut [u8],
    ss: &mut [u8],
    pk: &[u8],
    rng: &mut R,
) -> Status {
    debug!("encapsulate");
    report("encapsulate", try_encapsulate(ct, ss, pk, rng))
}

/// Recovers the shared secret carried by `ct` into `ss`.
///
/// A ciphertext that was tampered with still succeeds and yields an
/// unrelated secret.
pub fn decapsulate_into(ss: &mut [u8], ct: &[u8], sk: &[u8]) -> Status {
    debug!("decapsulate");
    report("decapsulate", try_decapsulate(ss, ct, sk))
}

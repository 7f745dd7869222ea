//! Typed Kyber keys and the [`api::Kem`] implementation.

use alloc::vec::Vec;
use core::fmt;
use core::marker::PhantomData;

use api::error::validate;
use api::{Kem as KemTrait, Result as ApiResult, Serialize, SerializeSecret};
use common::SecretBuffer;
use rand::{CryptoRng, RngCore};
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

use super::ind_cca::{kem_decaps, kem_encaps, kem_encaps_derand, kem_keygen, kem_keygen_derand};
use super::params::{Kyber512Params, KyberParams, KYBER_SS_BYTES, KYBER_SYMBYTES};

/// Byte sizes of every object a KEM produces or consumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KemSizes {
    /// Public key length
    pub public_key: usize,
    /// Secret key length
    pub secret_key: usize,
    /// Ciphertext length
    pub ciphertext: usize,
    /// Shared secret length
    pub shared_secret: usize,
}

impl KemSizes {
    /// Sizes for the parameter set `P`
    pub const fn of<P: KyberParams>() -> Self {
        Self {
            public_key: P::PUBLIC_KEY_BYTES,
            secret_key: P::SECRET_KEY_BYTES,
            ciphertext: P::CIPHERTEXT_BYTES,
            shared_secret: KYBER_SS_BYTES,
        }
    }
}

/// Kyber public key: `encode12(t_hat) || rho`
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "Vec<u8>", into = "Vec<u8>", bound = "")
)]
pub struct KyberPublicKey<P: KyberParams = Kyber512Params> {
    bytes: Vec<u8>,
    _params: PhantomData<P>,
}

/// Kyber secret key: `encode12(s_hat) || pk || H(pk) || z`. Wiped on drop.
pub struct KyberSecretKey<P: KyberParams = Kyber512Params> {
    bytes: Vec<u8>,
    _params: PhantomData<P>,
}

/// Kyber ciphertext: `compress(u) || compress(v)`
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "Vec<u8>", into = "Vec<u8>", bound = "")
)]
pub struct KyberCiphertext<P: KyberParams = Kyber512Params> {
    bytes: Vec<u8>,
    _params: PhantomData<P>,
}

/// 32-byte shared secret, wiped on drop.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct KyberSharedSecret(SecretBuffer<KYBER_SS_BYTES>);

macro_rules! byte_wrapper {
    ($name:ident, $len:ident, $what:literal) => {
        impl<P: KyberParams> $name<P> {
            /// Wraps `bytes`, checking the length for this parameter set
            pub fn new(bytes: Vec<u8>) -> ApiResult<Self> {
                validate::length(concat!("Kyber ", $what), bytes.len(), P::$len)?;
                Ok(Self {
                    bytes,
                    _params: PhantomData,
                })
            }

            /// Length in bytes
            pub fn len(&self) -> usize {
                self.bytes.len()
            }

            /// Always false for a validated value
            pub fn is_empty(&self) -> bool {
                self.bytes.is_empty()
            }
        }

        impl<P: KyberParams> Clone for $name<P> {
            fn clone(&self) -> Self {
                Self {
                    bytes: self.bytes.clone(),
                    _params: PhantomData,
                }
            }
        }

        impl<P: KyberParams> AsRef<[u8]> for $name<P> {
            fn as_ref(&self) -> &[u8] {
                &self.bytes
            }
        }
    };
}

byte_wrapper!(KyberPublicKey, PUBLIC_KEY_BYTES, "public key");
byte_wrapper!(KyberSecretKey, SECRET_KEY_BYTES, "secret key");
byte_wrapper!(KyberCiphertext, CIPHERTEXT_BYTES, "ciphertext");

impl<P: KyberParams> PartialEq for KyberPublicKey<P> {
    fn eq(&self, other: &Self) -> bool {
        self.bytes == other.bytes
    }
}

impl<P: KyberParams> Eq for KyberPublicKey<P> {}

impl<P: KyberParams> PartialEq for KyberCiphertext<P> {
    fn eq(&self, other: &Self) -> bool {
        self.bytes == other.bytes
    }
}

impl<P: KyberParams> Eq for KyberCiphertext<P> {}

impl<P: KyberParams> fmt::Debug for KyberPublicKey<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "KyberPublicKey<{}>({} bytes)", P::NAME, self.bytes.len())
    }
}

impl<P: KyberParams> fmt::Debug for KyberCiphertext<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "KyberCiphertext<{}>({} bytes)", P::NAME, self.bytes.len())
    }
}

impl<P: KyberParams> fmt::Debug for KyberSecretKey<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "KyberSecretKey<{}>([REDACTED])", P::NAME)
    }
}

impl fmt::Debug for KyberSharedSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "KyberSharedSecret([REDACTED])")
    }
}

impl<P: KyberParams> Zeroize for KyberSecretKey<P> {
    fn zeroize(&mut self) {
        self.bytes.zeroize();
    }
}

impl<P: KyberParams> Drop for KyberSecretKey<P> {
    fn drop(&mut self) {
        self.bytes.zeroize();
    }
}

impl<P: KyberParams> TryFrom<Vec<u8>> for KyberPublicKey<P> {
    type Error = api::Error;

    fn try_from(bytes: Vec<u8>) -> ApiResult<Self> {
        Self::new(bytes)
    }
}

impl<P: KyberParams> From<KyberPublicKey<P>> for Vec<u8> {
    fn from(pk: KyberPublicKey<P>) -> Self {
        pk.bytes
    }
}

impl<P: KyberParams> TryFrom<Vec<u8>> for KyberCiphertext<P> {
    type Error = api::Error;

    fn try_from(bytes: Vec<u8>) -> ApiResult<Self> {
        Self::new(bytes)
    }
}

impl<P: KyberParams> From<KyberCiphertext<P>> for Vec<u8> {
    fn from(ct: KyberCiphertext<P>) -> Self {
        ct.bytes
    }
}

impl<P: KyberParams> Serialize for KyberPublicKey<P> {
    fn from_bytes(bytes: &[u8]) -> ApiResult<Self> {
        validate::key(
            bytes.len() == P::PUBLIC_KEY_BYTES,
            "KyberPublicKey::from_bytes",
            "wrong public key length",
        )?;
        Self::new(bytes.to_vec())
    }

    fn to_bytes(&self) -> Vec<u8> {
        self.bytes.clone()
    }
}

impl<P: KyberParams> Serialize for KyberCiphertext<P> {
    fn from_bytes(bytes: &[u8]) -> ApiResult<Self> {
        validate::ciphertext(
            bytes.len() == P::CIPHERTEXT_BYTES,
            "KyberCiphertext::from_bytes",
            "wrong ciphertext length",
        )?;
        Self::new(bytes.to_vec())
    }

    fn to_bytes(&self) -> Vec<u8> {
        self.bytes.clone()
    }
}

impl<P: KyberParams> SerializeSecret for KyberSecretKey<P> {
    fn from_bytes(bytes: &[u8]) -> ApiResult<Self> {
        validate::key(
            bytes.len() == P::SECRET_KEY_BYTES,
            "KyberSecretKey::from_bytes",
            "wrong secret key length",
        )?;
        Self::new(bytes.to_vec())
    }

    fn to_bytes_zeroizing(&self) -> Zeroizing<Vec<u8>> {
        Zeroizing::new(self.bytes.clone())
    }
}

impl KyberSharedSecret {
    /// Wraps 32 secret bytes
    pub fn new(bytes: [u8; KYBER_SS_BYTES]) -> Self {
        Self(SecretBuffer::new(bytes))
    }

    /// Borrow the secret bytes
    pub fn as_bytes(&self) -> &[u8; KYBER_SS_BYTES] {
        self.0.as_array()
    }
}

impl AsRef<[u8]> for KyberSharedSecret {
    fn as_ref(&self) -> &[u8] {
        self.0.as_slice()
    }
}

impl PartialEq for KyberSharedSecret {
    fn eq(&self, other: &Self) -> bool {
        internal::constant_time::ct_eq(self.0.as_slice(), other.0.as_slice())
    }
}

impl Eq for KyberSharedSecret {}

impl SerializeSecret for KyberSharedSecret {
    fn from_bytes(bytes: &[u8]) -> ApiResult<Self> {
        Ok(Self(SecretBuffer::from_slice(bytes)?))
    }

    fn to_bytes_zeroizing(&self) -> Zeroizing<Vec<u8>> {
        Zeroizing::new(self.0.as_slice().to_vec())
    }
}

/// The Kyber KEM for parameter set `P`.
///
/// A zero-sized marker: every operation is an associated function and no
/// state survives between calls.
pub struct KyberKem<P: KyberParams + 'static> {
    _params: PhantomData<P>,
}

impl<P: KyberParams> KyberKem<P> {
    /// Byte sizes for this parameter set
    pub const fn sizes() -> KemSizes {
        KemSizes::of::<P>()
    }

    /// Key generation from explicit seeds: `d` drives the CPA key, `z` is the
    /// implicit-rejection secret.
    pub fn keypair_derand(
        d: &[u8; KYBER_SYMBYTES],
        z: &[u8; KYBER_SYMBYTES],
    ) -> ApiResult<(KyberPublicKey<P>, KyberSecretKey<P>)> {
        let (pk, sk) = kem_keygen_derand::<P>(d, z)?;
        Ok((KyberPublicKey::new(pk)?, KyberSecretKey::new(sk.to_vec())?))
    }

    /// Encapsulation with `seed` in place of fresh random bytes.
    pub fn encapsulate_derand(
        public_key: &KyberPublicKey<P>,
        seed: &[u8; KYBER_SYMBYTES],
    ) -> ApiResult<(KyberCiphertext<P>, KyberSharedSecret)> {
        let (ct, ss) = kem_encaps_derand::<P>(public_key.as_ref(), seed)?;
        Ok((KyberCiphertext::new(ct)?, KyberSharedSecret::new(*ss)))
    }
}

impl<P: KyberParams> KemTrait for KyberKem<P> {
    type PublicKey = KyberPublicKey<P>;
    type SecretKey = KyberSecretKey<P>;
    type SharedSecret = KyberSharedSecret;
    type Ciphertext = KyberCiphertext<P>;
    type KeyPair = (Self::PublicKey, Self::SecretKey);

    fn name() -> &'static str {
        P::NAME
    }

    fn keypair<R: CryptoRng + RngCore>(rng: &mut R) -> ApiResult<Self::KeyPair> {
        let (pk, sk) = kem_keygen::<P, R>(rng)?;
        Ok((KyberPublicKey::new(pk)?, KyberSecretKey::new(sk.to_vec())?))
    }

    fn public_key(keypair: &Self::KeyPair) -> Self::PublicKey {
        keypair.0.clone()
    }

    fn secret_key(keypair: &Self::KeyPair) -> Self::SecretKey {
        keypair.1.clone()
    }

    fn encapsulate<R: CryptoRng + RngCore>(
        rng: &mut R,
        public_key: &Self::PublicKey,
    ) -> ApiResult<(Self::Ciphertext, Self::SharedSecret)> {
        let (ct, ss) = kem_encaps::<P, R>(public_key.as_ref(), rng)?;
        Ok((KyberCiphertext::new(ct)?, KyberSharedSecret::new(*ss)))
    }

    fn decapsulate(
        secret_key: &Self::SecretKey,
        ciphertext: &Self::Ciphertext,
    ) -> ApiResult<Self::SharedSecret> {
        let ss = kem_decaps::<P>(secret_key.as_ref(), ciphertext.as_ref())?;
        Ok(KyberSharedSecret::new(*ss))
    }
}

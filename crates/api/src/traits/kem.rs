//! Trait definition for key encapsulation mechanisms

use super::serialize::{Serialize, SerializeSecret};
use crate::Result;
use rand::{CryptoRng, RngCore};
use zeroize::Zeroize;

/// A key encapsulation mechanism with strongly typed keys and ciphertexts.
///
/// Implementations are stateless: every function is a pure function of its
/// arguments and of the randomness drawn from the supplied generator.
pub trait Kem {
    /// Public key, freely serializable.
    type PublicKey: Clone + Serialize;

    /// Secret key. Must wipe itself and only serializes into zeroizing
    /// buffers.
    type SecretKey: Zeroize + Clone + SerializeSecret;

    /// Shared secret produced by both parties.
    type SharedSecret: Zeroize + Clone + SerializeSecret;

    /// Ciphertext carrying the encapsulated secret.
    type Ciphertext: Clone + Serialize;

    /// Keypair as returned by [`Kem::keypair`].
    type KeyPair: Clone;

    /// Returns the algorithm name.
    fn name() -> &'static str;

    /// Generate a new keypair using `rng` for all randomness.
    ///
    /// Fails only when the generator fails.
    fn keypair<R: CryptoRng + RngCore>(rng: &mut R) -> Result<Self::KeyPair>;

    /// Extract public key from keypair.
    fn public_key(keypair: &Self::KeyPair) -> Self::PublicKey;

    /// Extract secret key from keypair.
    fn secret_key(keypair: &Self::KeyPair) -> Self::SecretKey;

    /// Encapsulate a fresh shared secret to `public_key`.
    fn encapsulate<R: CryptoRng + RngCore>(
        rng: &mut R,
        public_key: &Self::PublicKey,
    ) -> Result<(Self::Ciphertext, Self::SharedSecret)>;

    /// Recover the shared secret carried by `ciphertext`.
    ///
    /// Schemes with implicit rejection return a pseudorandom secret for a
    /// forged ciphertext instead of an error.
    fn decapsulate(
        secret_key: &Self::SecretKey,
        ciphertext: &Self::Ciphertext,
    ) -> Result<Self::SharedSecret>;
}

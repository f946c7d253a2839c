//! ECDSA over NIST P-384.
//!
//! Private keys are SEC1 `EC PRIVATE KEY` PEM blocks, public keys are X.509
//! SubjectPublicKeyInfo `PUBLIC KEY` blocks. Payloads are hashed with
//! SHA-256 and signed with a randomized (hedged) nonce, so signing the same
//! payload twice yields different, equally valid signatures.
//!
//! # Signature format
//!
//! A signature is `r || s`, each a big-endian integer left-padded to
//! [`ECC_SCALAR_LEN`] bytes. There is no length prefix; verifiers split the
//! [`ECC_SIGNATURE_LEN`]-byte value at the midpoint.

use p384::ecdsa::{Signature, SigningKey, VerifyingKey};
use p384::pkcs8::{DecodePublicKey, EncodePublicKey, LineEnding};
use p384::{PublicKey, SecretKey};
use rand::rngs::OsRng;
use sha2::{Digest, Sha256};
use signature::hazmat::{PrehashVerifier, RandomizedPrehashSigner};

use crate::error::{CryptoError, CryptoResult};
use crate::keys::{EncodedKeyPair, KeyMarshaler, KeyPairGenerator, Signer, Verifier};

/// Byte width of one P-384 scalar.
pub const ECC_SCALAR_LEN: usize = 48;

/// Byte width of an encoded `r || s` signature.
pub const ECC_SIGNATURE_LEN: usize = 2 * ECC_SCALAR_LEN;

/// A P-384 key pair. The public key is always derived from the private key.
#[derive(Clone)]
pub struct EccKeyPair {
    pub public: PublicKey,
    pub private: SecretKey,
}

/// ECDSA P-384 generator, marshaler and signer.
#[derive(Debug, Clone, Copy, Default)]
pub struct EcdsaP384;

impl EcdsaP384 {
    pub fn new() -> Self {
        Self
    }
}

impl KeyPairGenerator for EcdsaP384 {
    type KeyPair = EccKeyPair;

    fn generate(&self) -> CryptoResult<EccKeyPair> {
        let private = SecretKey::random(&mut OsRng);
        let public = private.public_key();
        Ok(EccKeyPair { public, private })
    }
}

impl KeyMarshaler for EcdsaP384 {
    type KeyPair = EccKeyPair;

    fn marshal(&self, key_pair: &EccKeyPair) -> CryptoResult<EncodedKeyPair> {
        let private_pem = key_pair
            .private
            .to_sec1_pem(LineEnding::LF)
            .map_err(CryptoError::encoding)?;
        let public_pem = key_pair
            .public
            .to_public_key_pem(LineEnding::LF)
            .map_err(CryptoError::encoding)?;

        Ok(EncodedKeyPair {
            public_pem,
            private_pem,
        })
    }

    fn unmarshal(&self, private_pem: &str) -> CryptoResult<EccKeyPair> {
        let private = SecretKey::from_sec1_pem(private_pem).map_err(CryptoError::decoding)?;
        let public = private.public_key();
        Ok(EccKeyPair { public, private })
    }
}

impl Signer for EcdsaP384 {
    fn sign(&self, private_pem: &str, payload: &[u8]) -> CryptoResult<Vec<u8>> {
        let key_pair = self.unmarshal(private_pem)?;
        let signing_key = SigningKey::from(&key_pair.private);
        let digest = Sha256::digest(payload);

        let signature: Signature = signing_key
            .sign_prehash_with_rng(&mut OsRng, &digest)
            .map_err(CryptoError::signing)?;

        Ok(signature.to_bytes().to_vec())
    }
}

impl Verifier for EcdsaP384 {
    fn verify(&self, public_pem: &str, payload: &[u8], signature: &[u8]) -> CryptoResult<()> {
        let public = PublicKey::from_public_key_pem(public_pem).map_err(CryptoError::decoding)?;
        if signature.len() != ECC_SIGNATURE_LEN {
            return Err(CryptoError::VerificationFailed {
                reason: format!(
                    "expected {} signature bytes, got {}",
                    ECC_SIGNATURE_LEN,
                    signature.len()
                ),
            });
        }
        let signature = Signature::from_slice(signature).map_err(CryptoError::verification)?;
        let digest = Sha256::digest(payload);

        VerifyingKey::from(&public)
            .verify_prehash(&digest, &signature)
            .map_err(CryptoError::verification)
    }
}

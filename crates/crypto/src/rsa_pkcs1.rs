//! RSA with PKCS#1 v1.5 signatures over SHA-256.
//!
//! Both halves of the key pair are PKCS#1 PEM blocks (`RSA PRIVATE KEY` /
//! `RSA PUBLIC KEY`). Signing is deterministic for a given key and payload.
//!
//! # Security
//!
//! The modulus size is configurable. The default of 512 bits is only a
//! demonstration parameter and offers no real security.

use rsa::pkcs1::{
    DecodeRsaPrivateKey, DecodeRsaPublicKey, EncodeRsaPrivateKey, EncodeRsaPublicKey, LineEnding,
};
use rsa::{Pkcs1v15Sign, RsaPrivateKey, RsaPublicKey};
use rand::rngs::OsRng;
use sha2::{Digest, Sha256};

use crate::error::{CryptoError, CryptoResult};
use crate::keys::{EncodedKeyPair, KeyMarshaler, KeyPairGenerator, Signer, Verifier};

/// Default modulus size in bits. Insecure; suitable for demonstrations only.
pub const DEFAULT_RSA_MODULUS_BITS: usize = 512;

/// An RSA key pair. The public key is always derived from the private key.
#[derive(Clone)]
pub struct RsaKeyPair {
    pub public: RsaPublicKey,
    pub private: RsaPrivateKey,
}

/// RSA generator, marshaler and signer.
#[derive(Debug, Clone, Copy)]
pub struct RsaPkcs1 {
    modulus_bits: usize,
}

impl RsaPkcs1 {
    pub fn new(modulus_bits: usize) -> Self {
        Self { modulus_bits }
    }

    pub fn modulus_bits(&self) -> usize {
        self.modulus_bits
    }
}

impl Default for RsaPkcs1 {
    fn default() -> Self {
        Self::new(DEFAULT_RSA_MODULUS_BITS)
    }
}

impl KeyPairGenerator for RsaPkcs1 {
    type KeyPair = RsaKeyPair;

    fn generate(&self) -> CryptoResult<RsaKeyPair> {
        let private =
            RsaPrivateKey::new(&mut OsRng, self.modulus_bits).map_err(CryptoError::key_generation)?;
        let public = private.to_public_key();
        Ok(RsaKeyPair { public, private })
    }
}

impl KeyMarshaler for RsaPkcs1 {
    type KeyPair = RsaKeyPair;

    fn marshal(&self, key_pair: &RsaKeyPair) -> CryptoResult<EncodedKeyPair> {
        let private_pem = key_pair
            .private
            .to_pkcs1_pem(LineEnding::LF)
            .map_err(CryptoError::encoding)?;
        let public_pem = key_pair
            .public
            .to_pkcs1_pem(LineEnding::LF)
            .map_err(CryptoError::encoding)?;

        Ok(EncodedKeyPair {
            public_pem,
            private_pem,
        })
    }

    fn unmarshal(&self, private_pem: &str) -> CryptoResult<RsaKeyPair> {
        let private = RsaPrivateKey::from_pkcs1_pem(private_pem).map_err(CryptoError::decoding)?;
        let public = private.to_public_key();
        Ok(RsaKeyPair { public, private })
    }
}

impl Signer for RsaPkcs1 {
    fn sign(&self, private_pem: &str, payload: &[u8]) -> CryptoResult<Vec<u8>> {
        let key_pair = self.unmarshal(private_pem)?;
        let digest = Sha256::digest(payload);

        key_pair
            .private
            .sign(Pkcs1v15Sign::new::<Sha256>(), &digest)
            .map_err(CryptoError::signing)
    }
}

impl Verifier for RsaPkcs1 {
    fn verify(&self, public_pem: &str, payload: &[u8], signature: &[u8]) -> CryptoResult<()> {
        let public = RsaPublicKey::from_pkcs1_pem(public_pem).map_err(CryptoError::decoding)?;
        let digest = Sha256::digest(payload);

        public
            .verify(Pkcs1v15Sign::new::<Sha256>(), &digest, signature)
            .map_err(CryptoError::verification)
    }
}

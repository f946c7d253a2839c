//! Key-pair generation, PEM marshaling and signing capabilities.
//!
//! Each supported algorithm provides one implementation of every trait in
//! this module. [`crate::AlgorithmRegistry`] picks the implementation for a
//! device's [`crate::Algorithm`].

use std::fmt;
use zeroize::Zeroizing;

use crate::error::CryptoResult;

/// Produces fresh asymmetric key pairs from the OS entropy source.
pub trait KeyPairGenerator {
    type KeyPair;

    fn generate(&self) -> CryptoResult<Self::KeyPair>;
}

/// Converts key pairs to and from PEM text.
pub trait KeyMarshaler {
    type KeyPair;

    /// Encodes both halves of a key pair.
    fn marshal(&self, key_pair: &Self::KeyPair) -> CryptoResult<EncodedKeyPair>;

    /// Decodes a private key and derives its public counterpart from it.
    fn unmarshal(&self, private_pem: &str) -> CryptoResult<Self::KeyPair>;
}

/// Signs payloads with a PEM-encoded private key.
pub trait Signer {
    /// Hashes `payload` with SHA-256 and signs the digest.
    fn sign(&self, private_pem: &str, payload: &[u8]) -> CryptoResult<Vec<u8>>;
}

/// Checks signatures produced by the matching [`Signer`].
pub trait Verifier {
    fn verify(&self, public_pem: &str, payload: &[u8], signature: &[u8]) -> CryptoResult<()>;
}

/// PEM-encoded public and private key.
///
/// The private half is zeroized on drop and redacted from `Debug` output.
#[derive(Clone)]
pub struct EncodedKeyPair {
    pub public_pem: String,
    pub private_pem: Zeroizing<String>,
}

impl fmt::Debug for EncodedKeyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EncodedKeyPair")
            .field("public_pem", &self.public_pem)
            .field("private_pem", &"<redacted>")
            .finish()
    }
}

/// Generates a key pair and encodes it in one step.
pub fn generate_encoded<S>(scheme: &S) -> CryptoResult<EncodedKeyPair>
where
    S: KeyPairGenerator + KeyMarshaler<KeyPair = <S as KeyPairGenerator>::KeyPair>,
{
    let key_pair = scheme.generate()?;
    scheme.marshal(&key_pair)
}

/// Stable short identifier for a public key, safe to log.
pub fn fingerprint(public_pem: &str) -> String {
    let hash = blake3::hash(public_pem.as_bytes());
    hex::encode(&hash.as_bytes()[..16])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fingerprint_is_stable_and_short() {
        let a = fingerprint("-----BEGIN PUBLIC KEY-----\nAAAA\n-----END PUBLIC KEY-----\n");
        let b = fingerprint("-----BEGIN PUBLIC KEY-----\nAAAA\n-----END PUBLIC KEY-----\n");
        let c = fingerprint("-----BEGIN PUBLIC KEY-----\nAAAB\n-----END PUBLIC KEY-----\n");

        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(a.len(), 32);
    }

    #[test]
    fn test_debug_redacts_private_key() {
        let pair = EncodedKeyPair {
            public_pem: "public".to_string(),
            private_pem: Zeroizing::new("super-secret".to_string()),
        };

        let rendered = format!("{:?}", pair);
        assert!(rendered.contains("public"));
        assert!(!rendered.contains("super-secret"));
    }
}

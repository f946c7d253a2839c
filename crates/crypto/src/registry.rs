//! Algorithm dispatch.
//!
//! [`AlgorithmRegistry`] owns one instance of every scheme and routes each
//! capability (generate, marshal, unmarshal, sign, verify) to the scheme that
//! matches a device's [`Algorithm`]. The match is exhaustive, so adding an
//! algorithm variant without wiring it here does not compile.

use crate::algorithm::Algorithm;
use crate::ecc::EcdsaP384;
use crate::error::CryptoResult;
use crate::keys::{generate_encoded, EncodedKeyPair, KeyMarshaler, Signer, Verifier};
use crate::rsa_pkcs1::{RsaPkcs1, DEFAULT_RSA_MODULUS_BITS};

#[derive(Debug, Clone, Copy)]
pub struct AlgorithmRegistry {
    ecc: EcdsaP384,
    rsa: RsaPkcs1,
}

impl AlgorithmRegistry {
    pub fn new(rsa_modulus_bits: usize) -> Self {
        Self {
            ecc: EcdsaP384::new(),
            rsa: RsaPkcs1::new(rsa_modulus_bits),
        }
    }

    /// Generates and PEM-encodes a fresh key pair for `algorithm`.
    pub fn generate(&self, algorithm: Algorithm) -> CryptoResult<EncodedKeyPair> {
        tracing::debug!(algorithm = %algorithm, "Generating key pair");
        match algorithm {
            Algorithm::Ecc => generate_encoded(&self.ecc),
            Algorithm::Rsa => generate_encoded(&self.rsa),
        }
    }

    /// Decodes `private_pem` and re-encodes the pair, deriving the public key
    /// from the private one.
    pub fn reencode(&self, algorithm: Algorithm, private_pem: &str) -> CryptoResult<EncodedKeyPair> {
        match algorithm {
            Algorithm::Ecc => self.ecc.marshal(&self.ecc.unmarshal(private_pem)?),
            Algorithm::Rsa => self.rsa.marshal(&self.rsa.unmarshal(private_pem)?),
        }
    }

    pub fn signer(&self, algorithm: Algorithm) -> &dyn Signer {
        match algorithm {
            Algorithm::Ecc => &self.ecc,
            Algorithm::Rsa => &self.rsa,
        }
    }

    pub fn verifier(&self, algorithm: Algorithm) -> &dyn Verifier {
        match algorithm {
            Algorithm::Ecc => &self.ecc,
            Algorithm::Rsa => &self.rsa,
        }
    }

    pub fn sign(
        &self,
        algorithm: Algorithm,
        private_pem: &str,
        payload: &[u8],
    ) -> CryptoResult<Vec<u8>> {
        self.signer(algorithm).sign(private_pem, payload)
    }

    pub fn verify(
        &self,
        algorithm: Algorithm,
        public_pem: &str,
        payload: &[u8],
        signature: &[u8],
    ) -> CryptoResult<()> {
        self.verifier(algorithm).verify(public_pem, payload, signature)
    }

    pub fn rsa_modulus_bits(&self) -> usize {
        self.rsa.modulus_bits()
    }
}

impl Default for AlgorithmRegistry {
    fn default() -> Self {
        Self::new(DEFAULT_RSA_MODULUS_BITS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CryptoError;

    #[test]
    fn test_round_trip_preserves_pairing_for_all_algorithms() {
        let registry = AlgorithmRegistry::default();

        for algorithm in Algorithm::ALL {
            let encoded = registry.generate(algorithm).unwrap();
            let reencoded = registry.reencode(algorithm, &encoded.private_pem).unwrap();

            assert_eq!(reencoded.public_pem, encoded.public_pem, "{}", algorithm);
            assert_eq!(*reencoded.private_pem, *encoded.private_pem, "{}", algorithm);
        }
    }

    #[test]
    fn test_dispatch_signs_and_verifies_for_all_algorithms() {
        let registry = AlgorithmRegistry::default();

        for algorithm in Algorithm::ALL {
            let encoded = registry.generate(algorithm).unwrap();
            let signature = registry
                .sign(algorithm, &encoded.private_pem, b"0.hello.previous")
                .unwrap();

            registry
                .verify(algorithm, &encoded.public_pem, b"0.hello.previous", &signature)
                .unwrap();
        }
    }

    #[test]
    fn test_signing_with_wrong_algorithm_fails_to_decode() {
        let registry = AlgorithmRegistry::default();
        let ecc = registry.generate(Algorithm::Ecc).unwrap();
        let rsa = registry.generate(Algorithm::Rsa).unwrap();

        assert!(matches!(
            registry.sign(Algorithm::Rsa, &ecc.private_pem, b"data"),
            Err(CryptoError::DecodingFailed { .. })
        ));
        assert!(matches!(
            registry.sign(Algorithm::Ecc, &rsa.private_pem, b"data"),
            Err(CryptoError::DecodingFailed { .. })
        ));
    }

    #[test]
    fn test_configured_modulus() {
        let registry = AlgorithmRegistry::new(1024);
        assert_eq!(registry.rsa_modulus_bits(), 1024);

        let encoded = registry.generate(Algorithm::Rsa).unwrap();
        let signature = registry
            .sign(Algorithm::Rsa, &encoded.private_pem, b"data")
            .unwrap();
        assert_eq!(signature.len(), 128);
    }
}

//! Cryptographic primitives for the Sigchain signing service.
//!
//! This crate provides algorithm-agnostic key-pair generation, PEM key
//! (de)serialization and payload signing for the signature schemes a device
//! can be bound to.
//!
//! # Supported Algorithms
//!
//! - **ECC**: ECDSA over NIST P-384, SHA-256 digest, `r || s` signatures
//! - **RSA**: PKCS#1 v1.5 over SHA-256 (default modulus is a 512-bit
//!   demonstration size and is NOT secure)
//!
//! # Security Principles
//!
//! - Private keys are held in zeroizing buffers and never logged
//! - Public keys are always derived from the decoded private key
//! - Entropy comes from the operating system RNG

pub mod algorithm;
pub mod ecc;
pub mod error;
pub mod keys;
pub mod registry;
pub mod rsa_pkcs1;

pub use algorithm::{Algorithm, ParseAlgorithmError};
pub use ecc::{EccKeyPair, EcdsaP384, ECC_SCALAR_LEN, ECC_SIGNATURE_LEN};
pub use error::{CryptoError, CryptoResult};
pub use keys::{
    fingerprint, generate_encoded, EncodedKeyPair, KeyMarshaler, KeyPairGenerator, Signer,
    Verifier,
};
pub use registry::AlgorithmRegistry;
pub use rsa_pkcs1::{RsaKeyPair, RsaPkcs1, DEFAULT_RSA_MODULUS_BITS};

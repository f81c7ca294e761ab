//! Cryptographic layer for CredVault.
//!
//! This module provides the `SecretCodec`, the reversible transform
//! between plaintext secrets and their at-rest ciphertext form
//! (AES-128-ECB + PKCS#7, base64-encoded).

pub mod codec;

pub use codec::SecretCodec;

//! AES-128-ECB secret encoding.
//!
//! The key is the first 16 bytes of the SHA-256 digest of the configured
//! passphrase, derived once at construction and immutable afterwards.
//! Ciphertext is returned as a standard-alphabet base64 string.
//!
//! ECB with no IV means encoding is **deterministic**: the same plaintext
//! under the same key always yields the same ciphertext, so equal secrets
//! have equal ciphertexts at rest.  This matches the stored-record format
//! this vault is committed to; it is a known weakness, not an accident.

use aes::Aes128;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use ecb::cipher::{block_padding::Pkcs7, BlockDecryptMut, BlockEncryptMut, KeyInit};
use sha2::{Digest, Sha256};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::errors::{Result, VaultError};

/// AES-128 key length in bytes.
const KEY_LEN: usize = 16;

type Aes128EcbEnc = ecb::Encryptor<Aes128>;
type Aes128EcbDec = ecb::Decryptor<Aes128>;

/// Reversible plaintext <-> ciphertext transform for stored secrets.
///
/// Construct one per process with the vault passphrase; the derived key
/// lives inside and is zeroized when the codec is dropped.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct SecretCodec {
    key: [u8; KEY_LEN],
}

impl SecretCodec {
    /// Derive the AES key from the passphrase (SHA-256, first 16 bytes).
    pub fn new(passphrase: &str) -> Self {
        let digest = Sha256::digest(passphrase.as_bytes());
        let mut key = [0u8; KEY_LEN];
        key.copy_from_slice(&digest[..KEY_LEN]);
        Self { key }
    }

    /// Encrypt `plaintext` and return it base64-encoded.
    ///
    /// The empty string passes through unchanged: zero-length input is a
    /// no-op for this codec so empty secrets stay empty at rest.
    pub fn encode(&self, plaintext: &str) -> Result<String> {
        if plaintext.is_empty() {
            return Ok(String::new());
        }

        let cipher = Aes128EcbEnc::new(&self.key.into());
        let ciphertext = cipher.encrypt_padded_vec_mut::<Pkcs7>(plaintext.as_bytes());

        Ok(BASE64.encode(ciphertext))
    }

    /// Decrypt a base64 ciphertext produced by `encode`.
    ///
    /// Fails with a `Decode` error when the input is not valid base64,
    /// when block/padding validation fails after decryption, or when the
    /// recovered bytes are not valid UTF-8.
    pub fn decode(&self, ciphertext: &str) -> Result<String> {
        if ciphertext.is_empty() {
            return Ok(String::new());
        }

        let raw = BASE64
            .decode(ciphertext)
            .map_err(|e| VaultError::Decode(format!("invalid base64: {e}")))?;

        let cipher = Aes128EcbDec::new(&self.key.into());
        let plaintext_bytes = cipher
            .decrypt_padded_vec_mut::<Pkcs7>(&raw)
            .map_err(|_| VaultError::Decode("bad block or padding".into()))?;

        String::from_utf8(plaintext_bytes)
            .map_err(|_| VaultError::Decode("decrypted secret is not valid UTF-8".into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_decode_roundtrip() {
        let codec = SecretCodec::new("test-passphrase");
        let ciphertext = codec.encode("hunter2").unwrap();
        assert_ne!(ciphertext, "hunter2");
        assert_eq!(codec.decode(&ciphertext).unwrap(), "hunter2");
    }

    #[test]
    fn empty_string_is_a_noop_both_ways() {
        let codec = SecretCodec::new("test-passphrase");
        assert_eq!(codec.encode("").unwrap(), "");
        assert_eq!(codec.decode("").unwrap(), "");
    }

    #[test]
    fn encode_is_deterministic() {
        let codec = SecretCodec::new("test-passphrase");
        let a = codec.encode("same secret").unwrap();
        let b = codec.encode("same secret").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn decode_rejects_invalid_base64() {
        let codec = SecretCodec::new("test-passphrase");
        let err = codec.decode("not base64!!!").unwrap_err();
        assert!(matches!(err, VaultError::Decode(_)));
    }

    #[test]
    fn decode_rejects_corrupt_padding() {
        let codec = SecretCodec::new("test-passphrase");
        // Valid base64, but not a multiple of the AES block size.
        let garbage = BASE64.encode(b"short");
        let err = codec.decode(&garbage).unwrap_err();
        assert!(matches!(err, VaultError::Decode(_)));
    }

    #[test]
    fn different_passphrases_do_not_interop() {
        let a = SecretCodec::new("passphrase-a");
        let b = SecretCodec::new("passphrase-b");
        let ciphertext = a.encode("secret").unwrap();
        // Either the padding check fails or the bytes are garbage;
        // it must not silently return the original plaintext.
        match b.decode(&ciphertext) {
            Ok(decoded) => assert_ne!(decoded, "secret"),
            Err(e) => assert!(matches!(e, VaultError::Decode(_))),
        }
    }

    #[test]
    fn unicode_roundtrip() {
        let codec = SecretCodec::new("test-passphrase");
        let secret = "pässwörd-日本語-🔑";
        let ciphertext = codec.encode(secret).unwrap();
        assert_eq!(codec.decode(&ciphertext).unwrap(), secret);
    }
}

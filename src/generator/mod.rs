//! Random secret generation with guaranteed character-class coverage.
//!
//! Every generated secret contains at least one lowercase letter, one
//! uppercase letter, one digit, and one symbol.  One character from each
//! class is placed first, the rest of the requested length is sampled
//! uniformly from the union of all classes, and the whole buffer is
//! shuffled so the guaranteed characters are not predictably positioned.
//!
//! All randomness comes from `rand::rng()`, a CSPRNG seeded from the
//! operating system — never a plain pseudo-random generator.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::errors::{Result, VaultError};

const LOWERCASE: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
const UPPERCASE: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const DIGITS: &[u8] = b"0123456789";
const SYMBOLS: &[u8] = b"!@#$%^&*()-_=+[]{}|;:'\",.<>/?";

/// Minimum accepted secret length.
pub const MIN_LENGTH: usize = 8;

/// Generates random secrets meeting the minimum complexity rules.
#[derive(Debug, Clone, Copy, Default)]
pub struct SecretGenerator;

impl SecretGenerator {
    pub fn new() -> Self {
        Self
    }

    /// Generate a random secret of exactly `length` characters.
    ///
    /// Fails with a `Validation` error when `length` is below
    /// [`MIN_LENGTH`].
    pub fn generate(&self, length: usize) -> Result<String> {
        if length < MIN_LENGTH {
            return Err(VaultError::Validation(format!(
                "secret length must be at least {MIN_LENGTH} characters (got {length})"
            )));
        }

        let mut rng = rand::rng();
        let mut chars: Vec<u8> = Vec::with_capacity(length);

        // One character from each class so even length-8 secrets cover all four.
        for class in [LOWERCASE, UPPERCASE, DIGITS, SYMBOLS] {
            chars.push(class[rng.random_range(0..class.len())]);
        }

        // Fill the rest from the union of all classes, with replacement.
        let pool: Vec<u8> = [LOWERCASE, UPPERCASE, DIGITS, SYMBOLS].concat();
        for _ in chars.len()..length {
            chars.push(pool[rng.random_range(0..pool.len())]);
        }

        // Shuffle so the guaranteed-class characters are not always first.
        chars.shuffle(&mut rng);

        // Every class byte is ASCII, so this cannot fail.
        String::from_utf8(chars)
            .map_err(|_| VaultError::Validation("generated secret is not ASCII".into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn has_class(secret: &str, class: &[u8]) -> bool {
        secret.bytes().any(|b| class.contains(&b))
    }

    #[test]
    fn output_length_matches_request() {
        let generator = SecretGenerator::new();
        for length in [8, 12, 16, 64] {
            assert_eq!(generator.generate(length).unwrap().len(), length);
        }
    }

    #[test]
    fn minimum_length_secret_covers_all_classes() {
        let generator = SecretGenerator::new();
        // Repeat so a lucky draw can't mask a coverage bug.
        for _ in 0..50 {
            let secret = generator.generate(8).unwrap();
            assert!(has_class(&secret, LOWERCASE), "missing lowercase: {secret}");
            assert!(has_class(&secret, UPPERCASE), "missing uppercase: {secret}");
            assert!(has_class(&secret, DIGITS), "missing digit: {secret}");
            assert!(has_class(&secret, SYMBOLS), "missing symbol: {secret}");
        }
    }

    #[test]
    fn length_below_minimum_is_rejected() {
        let generator = SecretGenerator::new();
        let err = generator.generate(7).unwrap_err();
        assert!(matches!(err, VaultError::Validation(_)));
        assert!(generator.generate(8).is_ok());
    }

    #[test]
    fn successive_secrets_differ() {
        let generator = SecretGenerator::new();
        let a = generator.generate(16).unwrap();
        let b = generator.generate(16).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn only_known_characters_appear() {
        let generator = SecretGenerator::new();
        let pool: Vec<u8> = [LOWERCASE, UPPERCASE, DIGITS, SYMBOLS].concat();
        let secret = generator.generate(32).unwrap();
        assert!(secret.bytes().all(|b| pool.contains(&b)));
    }
}

//! Vigenère cipher over normalized text

use crate::alphabet::{index_of, symbol_at};
use crate::error::{AnalysisError, Result};
use crate::normalize::normalize;

/// Encrypts normalized plaintext with a cyclic key.
///
/// Each output symbol is `(plaintext[i] + key[i mod |key|]) mod 26` in
/// alphabet indices. The key is normalized before use, so raw strings like
/// `"lemon"` are accepted; plaintext must already be normalized and any
/// symbol outside the alphabet fails with [`AnalysisError::UnknownSymbol`].
///
/// # Errors
///
/// [`AnalysisError::EmptyKey`] if the key contains no alphabet symbols.
pub fn encrypt(plaintext: &str, key: &str) -> Result<String> {
    transform(plaintext, key, false)
}

/// Decrypts normalized ciphertext with a cyclic key.
///
/// The algebraic inverse of [`encrypt`]: subtracts the key index mod 26,
/// so `decrypt(encrypt(p, k)?, k)` recovers `p` exactly.
pub fn decrypt(ciphertext: &str, key: &str) -> Result<String> {
    transform(ciphertext, key, true)
}

fn transform(text: &str, key: &str, invert: bool) -> Result<String> {
    let key = normalize(key);
    if key.is_empty() {
        return Err(AnalysisError::EmptyKey);
    }

    let key_indices: Vec<u8> = key
        .chars()
        .map(index_of)
        .collect::<Result<_>>()?;

    let mut result = String::with_capacity(text.len());
    for (i, c) in text.chars().enumerate() {
        let index = index_of(c)?;
        let shift = key_indices[i % key_indices.len()];
        // Adding 26 keeps the subtraction from wrapping below zero
        let shifted = if invert {
            (index + 26 - shift) % 26
        } else {
            (index + shift) % 26
        };
        result.push(symbol_at(shifted));
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_worked_example() {
        let ciphertext = encrypt("ATTACKATDAWN", "LEMON").unwrap();
        assert_eq!(ciphertext, "LXFOPVEFRNHR");
    }

    #[test]
    fn test_decrypt_inverts_encrypt() {
        let plaintext = "THEQUICKBROWNFOXJUMPSOVERTHELAZYDOG";
        let ciphertext = encrypt(plaintext, "CODING").unwrap();
        assert_ne!(ciphertext, plaintext);
        assert_eq!(decrypt(&ciphertext, "CODING").unwrap(), plaintext);
    }

    #[test]
    fn test_key_is_normalized() {
        assert_eq!(
            encrypt("ATTACKATDAWN", "lemon").unwrap(),
            encrypt("ATTACKATDAWN", "LEMON").unwrap()
        );
    }

    #[test]
    fn test_empty_key_rejected() {
        assert_eq!(encrypt("ABC", ""), Err(AnalysisError::EmptyKey));
        assert_eq!(encrypt("ABC", " 123 "), Err(AnalysisError::EmptyKey));
    }

    #[test]
    fn test_unnormalized_plaintext_rejected() {
        assert_eq!(
            encrypt("attack", "LEMON"),
            Err(AnalysisError::UnknownSymbol('a'))
        );
    }

    #[test]
    fn test_empty_plaintext() {
        assert_eq!(encrypt("", "KEY").unwrap(), "");
    }

    #[test]
    fn test_deterministic() {
        let a = encrypt("ATTACKATDAWN", "LEMON").unwrap();
        let b = encrypt("ATTACKATDAWN", "LEMON").unwrap();
        assert_eq!(a, b);
    }
}

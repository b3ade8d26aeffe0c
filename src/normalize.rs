//! Text canonicalization for cipher and analysis input

/// Canonicalizes raw text into a sequence of alphabet symbols.
///
/// Converts to uppercase and keeps only ASCII letters; whitespace and any
/// other non-alphabetic character (punctuation, digits, accented letters)
/// are silently dropped. Downstream frequency and IC computation relies on
/// every remaining symbol being a member of the alphabet, so filtering
/// rather than rejecting keeps the pipeline total over arbitrary input.
///
/// Empty input yields an empty string.
///
/// # Example
///
/// ```rust
/// use vigenere_analysis::normalize;
///
/// assert_eq!(normalize("Attack at dawn!\n"), "ATTACKATDAWN");
/// ```
pub fn normalize(raw: &str) -> String {
    raw.chars()
        .filter(|c| c.is_ascii_alphabetic())
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

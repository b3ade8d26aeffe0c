//! # Vigenère Analysis Library
//!
//! Classical Vigenère cipher plus statistical key length recovery via the
//! index of coincidence (IC).
//!
//! The core is the cryptanalysis pipeline: normalize the ciphertext,
//! partition it at each candidate key length, measure how English-like the
//! letter frequencies of each partition look (IC), and pick the candidate
//! whose averaged IC lies closest to English prose (0.0686). Encryption is
//! included as a generator of test ciphertexts; decryption as its algebraic
//! inverse.
//!
//! ## Usage
//!
//! ```rust
//! use vigenere_analysis::{encrypt, guess_key_length, normalize};
//!
//! let plaintext = normalize("Attack at dawn, attack at dawn, attack at dawn!");
//! let ciphertext = encrypt(&plaintext, "LEMON")?;
//!
//! let guess = guess_key_length(&ciphertext, &[2, 3, 4, 5, 6])?;
//! println!("most likely key length: {}", guess.key_length);
//! # Ok::<(), vigenere_analysis::AnalysisError>(())
//! ```
//!
//! ## Guarantees
//!
//! - Pure, synchronous, deterministic computation; no shared mutable state
//! - Every contract violation surfaces immediately as an [`AnalysisError`]
//! - The guess is statistical: the returned IC deviation is a score the
//!   caller may threshold, not a proof of the true key length
//!
//! With the `parallel` feature, candidate scoring runs on the rayon pool
//! with identical results, tie-break included.

// Public modules
pub mod alphabet;
pub mod analysis;
pub mod cipher;
pub mod error;
pub mod normalize;

// Re-exports for easy access
pub use alphabet::ALPHABET_LEN;
pub use analysis::{
    average_ic, count_frequencies, guess_key_length, index_of_coincidence, FrequencyTable,
    KeyLengthGuess, ENGLISH_IC, UNIFORM_IC,
};
pub use cipher::{decrypt, encrypt};
pub use error::{AnalysisError, Result};
pub use normalize::normalize;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

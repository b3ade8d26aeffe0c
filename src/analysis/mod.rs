//! Ciphertext analysis pipeline: frequency counting, index of
//! coincidence, and key length estimation

pub mod coincidence;
pub mod frequency;
pub mod key_length;

pub use coincidence::{index_of_coincidence, ENGLISH_IC, UNIFORM_IC};
pub use frequency::{count_frequencies, FrequencyTable};
pub use key_length::{average_ic, guess_key_length, KeyLengthGuess};

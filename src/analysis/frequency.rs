//! Symbol frequency counting

use crate::alphabet::ALPHABET_LEN;

/// Occurrence counts indexed by alphabet index (A=0, ..., Z=25).
///
/// All 26 symbols are always present; unseen symbols count 0. The counts
/// sum to the number of alphabet symbols in the counted text.
pub type FrequencyTable = [u32; ALPHABET_LEN];

/// Counts the frequency of each letter in the given text.
///
/// Runs in O(n) over the text. Letters are counted case-insensitively;
/// non-alphabetic characters are ignored, though normalized input never
/// contains any.
pub fn count_frequencies(text: &str) -> FrequencyTable {
    let mut frequencies: FrequencyTable = [0; ALPHABET_LEN];

    for c in text.chars() {
        if c.is_ascii_alphabetic() {
            let index = (c.to_ascii_uppercase() as u8 - b'A') as usize;
            frequencies[index] += 1;
        }
    }

    frequencies
}

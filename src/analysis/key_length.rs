//! IC-based key length estimation

use log::{debug, trace};

use crate::analysis::coincidence::{index_of_coincidence, ENGLISH_IC};
use crate::analysis::frequency::count_frequencies;
use crate::error::{AnalysisError, Result};

/// The most probable key length among the supplied candidates, together
/// with how far its averaged IC lies from [`ENGLISH_IC`].
///
/// The deviation is a confidence-adjacent score, not a guarantee: callers
/// may threshold it, but a low value only means the partition statistics
/// look English-like.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KeyLengthGuess {
    /// The candidate whose averaged IC was closest to English.
    pub key_length: usize,
    /// Absolute difference between that candidate's averaged IC and
    /// [`ENGLISH_IC`].
    pub ic_deviation: f64,
}

/// Splits text into `n` interleaved subsequences by position mod `n`.
///
/// Subsequence `j` holds the symbols at positions `i` with `i mod n = j`,
/// in original order. When `n` equals the true key length, each
/// subsequence was encrypted under a single fixed shift.
fn split_by_modulus(text: &str, n: usize) -> Vec<String> {
    let mut subsequences = vec![String::new(); n];

    for (i, c) in text.chars().enumerate() {
        subsequences[i % n].push(c);
    }

    subsequences
}

/// Averaged index of coincidence of a ciphertext partitioned at key
/// length `n`.
///
/// Computes the IC of each of the `n` interleaved subsequences and
/// returns their arithmetic mean. A correct `n` yields subsequences that
/// are Caesar-shifted English and an average near [`ENGLISH_IC`]; a wrong
/// `n` mixes shifts and flattens toward the uniform 1/26.
///
/// # Errors
///
/// [`AnalysisError::DegenerateInput`] if `n` is 0 or any subsequence has
/// fewer than 2 symbols.
pub fn average_ic(ciphertext: &str, n: usize) -> Result<f64> {
    if n == 0 {
        return Err(AnalysisError::DegenerateInput(0));
    }

    let mut total_ic = 0.0;
    for subsequence in split_by_modulus(ciphertext, n) {
        total_ic += index_of_coincidence(&count_frequencies(&subsequence))?;
    }

    Ok(total_ic / n as f64)
}

/// Guesses the key length of a Vigenère ciphertext from an ordered list
/// of candidates.
///
/// Scores every candidate by `|average_ic(n) − ENGLISH_IC|` and returns
/// the one with the smallest deviation. Ties go to the earliest candidate
/// in the supplied order (comparison is strict less-than against a running
/// minimum initialized to infinity). With the `parallel` feature enabled,
/// candidates are scored on the rayon pool; scores are reduced in original
/// order, so the tie-break is identical to the sequential path.
///
/// Accuracy degrades on short ciphertexts and when candidates share common
/// factors with the true key length.
///
/// # Errors
///
/// [`AnalysisError::EmptyCandidateList`] if `candidates` is empty;
/// [`AnalysisError::DegenerateInput`] propagates from any candidate whose
/// subsequences are too short to score.
pub fn guess_key_length(ciphertext: &str, candidates: &[usize]) -> Result<KeyLengthGuess> {
    if candidates.is_empty() {
        return Err(AnalysisError::EmptyCandidateList);
    }

    trace!(
        "scoring {} key length candidates over {} symbols",
        candidates.len(),
        ciphertext.len()
    );
    let deviations = score_candidates(ciphertext, candidates)?;

    let mut best_guess = 0;
    let mut best_deviation = f64::INFINITY;
    for (&candidate, deviation) in candidates.iter().zip(deviations) {
        debug!("key length {candidate}: IC deviation {deviation:.6}");
        if deviation < best_deviation {
            best_deviation = deviation;
            best_guess = candidate;
        }
    }

    Ok(KeyLengthGuess {
        key_length: best_guess,
        ic_deviation: best_deviation,
    })
}

/// Per-candidate IC deviations, in candidate order.
#[cfg(not(feature = "parallel"))]
fn score_candidates(ciphertext: &str, candidates: &[usize]) -> Result<Vec<f64>> {
    candidates
        .iter()
        .map(|&n| Ok((average_ic(ciphertext, n)? - ENGLISH_IC).abs()))
        .collect()
}

/// Per-candidate IC deviations, in candidate order.
///
/// Candidates are independent, so they score on the rayon pool; collecting
/// an indexed parallel iterator preserves input order for the reduction.
#[cfg(feature = "parallel")]
fn score_candidates(ciphertext: &str, candidates: &[usize]) -> Result<Vec<f64>> {
    use rayon::prelude::*;

    candidates
        .par_iter()
        .map(|&n| Ok((average_ic(ciphertext, n)? - ENGLISH_IC).abs()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_interleaves() {
        let subsequences = split_by_modulus("ABCDEFGH", 3);
        assert_eq!(subsequences, vec!["ADG", "BEH", "CF"]);
    }

    #[test]
    fn test_average_ic_of_monoalphabetic_text() {
        // Every subsequence is all one letter, so each IC is exactly 1
        assert_eq!(average_ic("ABABABABAB", 2).unwrap(), 1.0);
    }

    #[test]
    fn test_empty_candidate_list_rejected() {
        assert_eq!(
            guess_key_length("LXFOPVEFRNHR", &[]),
            Err(AnalysisError::EmptyCandidateList)
        );
    }

    #[test]
    fn test_degenerate_partition_propagates() {
        // Candidate 3 over 4 symbols leaves subsequences of length 1
        assert_eq!(
            guess_key_length("ABCD", &[3]),
            Err(AnalysisError::DegenerateInput(1))
        );
    }

    #[test]
    fn test_zero_candidate_is_degenerate() {
        assert_eq!(
            average_ic("ABCDEFGH", 0),
            Err(AnalysisError::DegenerateInput(0))
        );
    }

    #[test]
    fn test_tie_break_prefers_earlier_candidate() {
        // All subsequences of a one-letter text score IC = 1 for every
        // modulus, so each candidate carries an identical deviation
        let ciphertext = "AAAAAAAA";
        let forward = guess_key_length(ciphertext, &[2, 4]).unwrap();
        assert_eq!(forward.key_length, 2);

        let reversed = guess_key_length(ciphertext, &[4, 2]).unwrap();
        assert_eq!(reversed.key_length, 4);
        assert_eq!(forward.ic_deviation, reversed.ic_deviation);
    }

    #[test]
    fn test_deterministic() {
        let ciphertext = "LXFOPVEFRNHRLXFOPVEFRNHR";
        let a = guess_key_length(ciphertext, &[2, 3, 4]).unwrap();
        let b = guess_key_length(ciphertext, &[2, 3, 4]).unwrap();
        assert_eq!(a, b);
    }
}

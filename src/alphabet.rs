//! The 26-letter cipher alphabet with O(1) symbol/index mapping

use crate::error::{AnalysisError, Result};

/// Number of symbols in the alphabet.
pub const ALPHABET_LEN: usize = 26;

/// Maps an uppercase ASCII letter to its alphabet index (A=0, ..., Z=25).
///
/// The mapping is an arithmetic offset from `b'A'`, so lookups are O(1)
/// regardless of text length. Anything outside `A..=Z` (lowercase letters
/// included, since all analysis operates on normalized text) fails with
/// [`AnalysisError::UnknownSymbol`].
pub fn index_of(symbol: char) -> Result<u8> {
    if symbol.is_ascii_uppercase() {
        Ok(symbol as u8 - b'A')
    } else {
        Err(AnalysisError::UnknownSymbol(symbol))
    }
}

/// Maps an alphabet index back to its uppercase letter.
///
/// Callers always pass values reduced mod 26.
pub fn symbol_at(index: u8) -> char {
    debug_assert!((index as usize) < ALPHABET_LEN);
    (b'A' + index) as char
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_of_bounds() {
        assert_eq!(index_of('A'), Ok(0));
        assert_eq!(index_of('Z'), Ok(25));
    }

    #[test]
    fn test_index_symbol_roundtrip() {
        for i in 0..ALPHABET_LEN as u8 {
            assert_eq!(index_of(symbol_at(i)), Ok(i));
        }
    }

    #[test]
    fn test_unknown_symbols_rejected() {
        for c in ['a', ' ', '1', 'ä', '\n'] {
            assert_eq!(index_of(c), Err(AnalysisError::UnknownSymbol(c)));
        }
    }
}

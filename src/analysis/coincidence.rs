//! Index of coincidence computation

use crate::analysis::frequency::FrequencyTable;
use crate::error::{AnalysisError, Result};

/// Index of coincidence of natural English prose, the reference value
/// candidate key lengths are scored against.
pub const ENGLISH_IC: f64 = 0.0686;

/// Index of coincidence of text drawn uniformly from the 26-letter
/// alphabet (1/26), the value wrong key-length partitions flatten toward.
pub const UNIFORM_IC: f64 = 1.0 / 26.0;

/// Computes the index of coincidence from a frequency table.
///
/// The IC is the probability that two distinct positions drawn at random
/// from the counted text hold the same symbol:
///
/// `Σ f_s·(f_s − 1) / (N·(N − 1))` where N is the total count.
///
/// # Errors
///
/// [`AnalysisError::DegenerateInput`] if N < 2 — the statistic needs at
/// least two samples, and returning 0.0 or NaN would silently skew any
/// downstream average.
pub fn index_of_coincidence(table: &FrequencyTable) -> Result<f64> {
    let total: u32 = table.iter().sum();
    if total < 2 {
        return Err(AnalysisError::DegenerateInput(total as usize));
    }

    let numerator: f64 = table
        .iter()
        .map(|&f| (f as f64) * (f as f64 - 1.0))
        .sum();

    Ok(numerator / ((total as f64) * (total as f64 - 1.0)))
}

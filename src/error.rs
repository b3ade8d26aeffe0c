//! Error types for cipher and analysis operations

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum AnalysisError {
    #[error("Symbol '{0}' is not part of the 26-letter alphabet")]
    UnknownSymbol(char),

    #[error("Cipher key must contain at least one alphabet symbol")]
    EmptyKey,

    #[error("Key length candidate list is empty")]
    EmptyCandidateList,

    #[error("Index of coincidence is undefined for fewer than 2 symbols (got {0})")]
    DegenerateInput(usize),
}

pub type Result<T> = std::result::Result<T, AnalysisError>;

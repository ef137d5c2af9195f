//! Error types for caller-side contract violations
//!
//! Bad input data never surfaces here: malformed records and missing region
//! files are dropped during ingestion. These errors mean the calling layer
//! asked for something that does not exist.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RankError {
    #[error("unknown event key '{0}'")]
    UnknownEvent(String),

    #[error("unknown gender '{0}' (expected 남/여 or male/female)")]
    UnknownGender(String),

    #[error("unknown region '{0}'")]
    UnknownRegion(String),

    #[error("histogram needs at least one bin (got {0})")]
    InvalidBinCount(usize),
}

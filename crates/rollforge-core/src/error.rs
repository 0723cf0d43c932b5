//! Generation error types.
//!
//! A failure during allocation is fatal to that generation run and is
//! surfaced to the caller rather than degraded into a partial result.

use thiserror::Error;

/// Errors that can occur while generating a character.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenError {
    /// Both selection pools were empty after exclusions.
    #[error("ability selection pool exhausted after {assigned} assignments")]
    PoolExhausted { assigned: usize },

    /// The score array does not hold one value per ability.
    #[error("score array must hold {expected} values, got {got}")]
    ScoreCountMismatch { expected: usize, got: usize },
}

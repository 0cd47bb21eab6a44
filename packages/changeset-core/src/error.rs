//! Change-set error types.

use thiserror::Error;

/// Change and change-set operation errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChangeSetError {
    /// Range change built with a zero span
    #[error("Invalid change count {count}: a change must span at least one item")]
    InvalidCount { count: usize },

    /// Payload length does not match the change span
    #[error("Payload length mismatch: expected {expected} render infos, got {got}")]
    PayloadLengthMismatch { expected: usize, got: usize },

    /// Record lookup outside the recorded changes
    #[error("Change index {index} out of range (change count: {len})")]
    IndexOutOfRange { index: usize, len: usize },

    /// Remove would drive the logical count below zero
    #[error("Removing {removed} items from a sequence of {count} would underflow")]
    CountUnderflow { count: usize, removed: usize },

    /// Count or index arithmetic overflow
    #[error("Capacity overflow during {operation}")]
    CapacityOverflow { operation: &'static str },
}

pub type Result<T> = std::result::Result<T, ChangeSetError>;

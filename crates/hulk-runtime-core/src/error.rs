//! Error types for string concatenation.

use std::error::Error;
use std::fmt;

/// Which input of a concatenation an error refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operand {
    /// The first input, copied at offset 0.
    Left,
    /// The second input, copied after the first.
    Right,
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left => write!(f, "left"),
            Self::Right => write!(f, "right"),
        }
    }
}

/// Errors that can occur while concatenating two byte sequences.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConcatError {
    /// The output buffer could not be allocated: the allocator refused,
    /// the size overflowed `usize`, or it exceeded the configured ceiling.
    AllocationFailed {
        /// Bytes requested, terminator included. Saturates at `usize::MAX`
        /// when the size itself overflowed.
        requested: usize,
    },
    /// An input slice has no null terminator.
    Unterminated {
        /// The input that was missing its terminator.
        operand: Operand,
    },
    /// A [`ConcatConfig`](crate::ConcatConfig) failed validation.
    InvalidConfig {
        /// Description of what is wrong.
        reason: String,
    },
}

impl fmt::Display for ConcatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AllocationFailed { requested } => {
                write!(f, "allocation failed: requested {requested} bytes")
            }
            Self::Unterminated { operand } => {
                write!(f, "{operand} operand is not null-terminated")
            }
            Self::InvalidConfig { reason } => write!(f, "invalid config: {reason}"),
        }
    }
}

impl Error for ConcatError {}

//! Concatenator configuration parameters.

use crate::error::ConcatError;

/// Configuration for a [`Concatenator`](crate::Concatenator).
///
/// Holds the allocation ceiling only; there is no other tunable. All
/// values are immutable once the concatenator is built.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ConcatConfig {
    /// Largest output length, in bytes and excluding the terminator, that
    /// will be requested from the allocator.
    ///
    /// Default: [`DEFAULT_MAX_OUTPUT_LEN`](Self::DEFAULT_MAX_OUTPUT_LEN).
    /// Requests above the ceiling fail with
    /// [`ConcatError::AllocationFailed`] without calling the allocator.
    pub max_output_len: usize,
}

impl ConcatConfig {
    /// Largest length whose buffer (`len + 1` bytes) is still a valid
    /// Rust allocation, which is capped at `isize::MAX` bytes.
    pub const DEFAULT_MAX_OUTPUT_LEN: usize = isize::MAX as usize - 1;

    /// Create a config with the default ceiling.
    pub fn new() -> Self {
        Self {
            max_output_len: Self::DEFAULT_MAX_OUTPUT_LEN,
        }
    }

    /// Create a config with a custom ceiling.
    pub fn with_max_output_len(max_output_len: usize) -> Self {
        Self { max_output_len }
    }

    /// Check that the config describes allocations Rust can make.
    pub fn validate(&self) -> Result<(), ConcatError> {
        if self.max_output_len > Self::DEFAULT_MAX_OUTPUT_LEN {
            return Err(ConcatError::InvalidConfig {
                reason: format!(
                    "max_output_len {} exceeds the largest allocatable length {}",
                    self.max_output_len,
                    Self::DEFAULT_MAX_OUTPUT_LEN
                ),
            });
        }
        Ok(())
    }
}

impl Default for ConcatConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(ConcatConfig::default().validate().is_ok());
    }

    #[test]
    fn default_buffer_fits_isize() {
        let buffer = ConcatConfig::DEFAULT_MAX_OUTPUT_LEN + 1;
        assert_eq!(buffer, isize::MAX as usize);
    }

    #[test]
    fn zero_ceiling_is_valid() {
        assert!(ConcatConfig::with_max_output_len(0).validate().is_ok());
    }

    #[test]
    fn ceiling_above_isize_rejected() {
        let config = ConcatConfig::with_max_output_len(usize::MAX);
        match config.validate() {
            Err(ConcatError::InvalidConfig { reason }) => {
                assert!(reason.contains("max_output_len"), "got: {reason}");
            }
            other => panic!("expected InvalidConfig, got {other:?}"),
        }
    }
}

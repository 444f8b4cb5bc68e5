//! The concatenation primitive.
//!
//! [`Concatenator::concat`] measures both inputs, reserves exactly
//! `la + lb + 1` bytes, and only then copies. A failed reservation returns
//! before any byte is written, so the error path leaves nothing behind.

use std::ffi::{CStr, CString};

use crate::config::ConcatConfig;
use crate::error::{ConcatError, Operand};

/// Joins null-terminated byte sequences into freshly allocated strings.
///
/// Holds configuration only. It is `Copy`, `Send` and `Sync`, and may be
/// shared freely between threads: every call works on its own buffer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Concatenator {
    config: ConcatConfig,
}

impl Concatenator {
    /// Create a concatenator from a validated config.
    pub fn new(config: ConcatConfig) -> Result<Self, ConcatError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The config this concatenator was built with.
    pub fn config(&self) -> &ConcatConfig {
        &self.config
    }

    /// Exact buffer size, terminator included, for inputs of length `la`
    /// and `lb`.
    ///
    /// Fails with [`ConcatError::AllocationFailed`] when `la + lb`
    /// overflows or exceeds the configured ceiling.
    pub fn required_capacity(&self, la: usize, lb: usize) -> Result<usize, ConcatError> {
        let Some(len) = la.checked_add(lb) else {
            return Err(ConcatError::AllocationFailed {
                requested: usize::MAX,
            });
        };
        if len > self.config.max_output_len {
            return Err(ConcatError::AllocationFailed {
                requested: len.saturating_add(1),
            });
        }
        Ok(len + 1)
    }

    /// Concatenate `a` and `b` into a new, independently owned string.
    ///
    /// The result holds `a`'s bytes followed by `b`'s bytes and a single
    /// terminator. Neither input is modified, on success or failure.
    pub fn concat(&self, a: &CStr, b: &CStr) -> Result<CString, ConcatError> {
        self.join(a.to_bytes(), b.to_bytes())
    }

    /// Concatenate two raw byte buffers, each read up to its first NUL.
    ///
    /// Bytes after an input's first NUL are past its terminator and are
    /// ignored. An input with no NUL at all is rejected with
    /// [`ConcatError::Unterminated`].
    pub fn concat_bytes(&self, a: &[u8], b: &[u8]) -> Result<CString, ConcatError> {
        let a = until_nul(a, Operand::Left)?;
        let b = until_nul(b, Operand::Right)?;
        self.join(a, b)
    }

    /// `a` and `b` must not contain NUL bytes.
    fn join(&self, a: &[u8], b: &[u8]) -> Result<CString, ConcatError> {
        let capacity = self.required_capacity(a.len(), b.len())?;
        let mut buf = alloc_exact(capacity)?;
        buf.extend_from_slice(a);
        buf.extend_from_slice(b);
        buf.push(0);
        debug_assert_eq!(buf.len(), capacity);

        // SAFETY: `a` and `b` are NUL-free (they were cut at their first
        // NUL), so the byte pushed last is the only NUL in `buf`.
        #[allow(unsafe_code)]
        let joined = unsafe { CString::from_vec_with_nul_unchecked(buf) };
        Ok(joined)
    }
}

/// Concatenate `a` and `b` with the default configuration.
pub fn concatenate(a: &CStr, b: &CStr) -> Result<CString, ConcatError> {
    Concatenator::default().concat(a, b)
}

/// Reserve an empty buffer of exactly `capacity` bytes.
fn alloc_exact(capacity: usize) -> Result<Vec<u8>, ConcatError> {
    let mut buf = Vec::new();
    buf.try_reserve_exact(capacity)
        .map_err(|_| ConcatError::AllocationFailed {
            requested: capacity,
        })?;
    Ok(buf)
}

fn until_nul(bytes: &[u8], operand: Operand) -> Result<&[u8], ConcatError> {
    CStr::from_bytes_until_nul(bytes)
        .map(CStr::to_bytes)
        .map_err(|_| ConcatError::Unterminated { operand })
}

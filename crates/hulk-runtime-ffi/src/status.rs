//! C-compatible status codes.
//!
//! [`HulkStatus`] is a `repr(i32)` enum covering every outcome of the C
//! entry points. A conversion from [`ConcatError`] is provided.

use hulk_runtime_core::ConcatError;

/// C-compatible status code returned by status-reporting FFI functions.
///
/// `Ok` = 0, all errors are negative. Values are ABI-stable.
#[repr(i32)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HulkStatus {
    /// Success.
    Ok = 0,
    /// The output buffer could not be allocated.
    AllocationFailed = -1,
    /// An argument is null or otherwise invalid.
    InvalidArgument = -2,
    /// A Rust panic was caught at the FFI boundary.
    Panicked = -128,
}

impl From<&ConcatError> for HulkStatus {
    fn from(e: &ConcatError) -> Self {
        match e {
            ConcatError::AllocationFailed { .. } => HulkStatus::AllocationFailed,
            ConcatError::Unterminated { .. } | ConcatError::InvalidConfig { .. } => {
                HulkStatus::InvalidArgument
            }
        }
    }
}

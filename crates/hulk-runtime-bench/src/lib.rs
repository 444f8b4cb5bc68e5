//! Benchmark workloads for the HULK language runtime.
//!
//! - [`operand_pair`]: two inputs of a given total length
//! - [`SIZES`]: the output lengths every benchmark sweeps
//! - [`chained_concat`]: the allocation pattern of `s @ s @ ... @ s`

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use std::ffi::{CStr, CString};

use hulk_runtime_core::{ConcatError, Concatenator};
use hulk_runtime_test_utils::filled_c_string;

/// Output lengths, in bytes, swept by the benchmarks.
pub const SIZES: &[usize] = &[0, 16, 256, 4096, 65536];

/// Two inputs whose concatenation is `total` bytes long.
///
/// The left input takes the larger half so odd totals stay exact.
pub fn operand_pair(total: usize) -> (CString, CString) {
    let left = total - total / 2;
    (filled_c_string(b'a', left), filled_c_string(b'b', total / 2))
}

/// Append `piece` to an empty string `times` times, releasing each
/// intermediate result, as generated code does for a chain of `@`.
pub fn chained_concat(
    concatenator: &Concatenator,
    piece: &CStr,
    times: usize,
) -> Result<CString, ConcatError> {
    let mut acc = CString::default();
    for _ in 0..times {
        acc = concatenator.concat(&acc, piece)?;
    }
    Ok(acc)
}

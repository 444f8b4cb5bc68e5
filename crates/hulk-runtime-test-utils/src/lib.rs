//! Test fixtures and proptest strategies for HULK runtime development.
//!
//! Shared by the unit tests, integration tests and benchmarks of the
//! runtime crates so that every layer checks the same cases.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

use std::ffi::CString;
use std::ops::Range;

use proptest::prelude::*;

/// `(left, right, expected)` triples, terminators omitted.
pub const CONCAT_CASES: &[(&[u8], &[u8], &[u8])] = &[
    (b"foo", b"bar", b"foobar"),
    (b"", b"", b""),
    (b"hello, ", b"world!", b"hello, world!"),
    (b"abc", b"", b"abc"),
    (b"", b"xyz", b"xyz"),
    (b"The meaning of life is ", b"42", b"The meaning of life is 42"),
];

/// Returns `true` if the two slices occupy non-overlapping memory.
///
/// Zero-length slices never overlap anything.
pub fn storage_disjoint(a: &[u8], b: &[u8]) -> bool {
    let a = address_range(a);
    let b = address_range(b);
    a.is_empty() || b.is_empty() || a.end <= b.start || b.end <= a.start
}

fn address_range(s: &[u8]) -> Range<usize> {
    let start = s.as_ptr() as usize;
    start..start + s.len()
}

/// A `CString` of `len` copies of `byte`, for sizing benchmarks.
///
/// # Panics
///
/// Panics if `byte` is zero.
pub fn filled_c_string(byte: u8, len: usize) -> CString {
    assert_ne!(byte, 0, "fill byte must not be the terminator");
    CString::new(vec![byte; len]).expect("fill byte is non-zero")
}

/// Arbitrary `CString`s of up to 64 non-NUL bytes, not necessarily UTF-8.
pub fn arb_c_string() -> impl Strategy<Value = CString> {
    proptest::collection::vec(1u8..=255, 0..64)
        .prop_map(|bytes| CString::new(bytes).expect("strategy excludes NUL"))
}

/// Arbitrary byte buffers holding at least one NUL, possibly followed by
/// trailing bytes that lie past the terminator.
pub fn arb_terminated_bytes() -> impl Strategy<Value = Vec<u8>> {
    (
        proptest::collection::vec(1u8..=255, 0..32),
        proptest::collection::vec(any::<u8>(), 0..8),
    )
        .prop_map(|(mut head, tail)| {
            head.push(0);
            head.extend(tail);
            head
        })
}

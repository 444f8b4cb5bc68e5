//! String concatenation primitive for the HULK language runtime.
//!
//! Compiled HULK programs join strings through a single runtime call:
//! take two null-terminated byte sequences, allocate a fresh buffer of
//! exactly `len(a) + len(b) + 1` bytes, and hand ownership of it back to
//! the caller. This crate is that primitive in safe Rust form; the C
//! symbol lives in `hulk-runtime-ffi`.
//!
//! # Contract
//!
//! - The output is `a`'s bytes, then `b`'s bytes, then one terminator.
//! - The output is new storage, disjoint from both inputs.
//! - Allocation failure is reported as [`ConcatError::AllocationFailed`];
//!   nothing is copied and nothing leaks.
//! - Inputs are never mutated.
//!
//! ```
//! use hulk_runtime_core::concatenate;
//!
//! let joined = concatenate(c"hello, ", c"world!").unwrap();
//! assert_eq!(joined.as_bytes(), b"hello, world!");
//! ```
//!
//! This crate may contain `unsafe` code only in `concat.rs`, where the
//! terminator invariant of the assembled buffer is established by
//! construction.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_code)]

pub mod concat;
pub mod config;
pub mod error;

// Public re-exports for the primary API surface.
pub use concat::{concatenate, Concatenator};
pub use config::ConcatConfig;
pub use error::{ConcatError, Operand};

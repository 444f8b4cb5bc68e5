//! C ABI for the HULK language runtime.
//!
//! Compiled HULK programs link against this library and call `concat`
//! (LLVM: `declare i8* @concat(i8*, i8*)`) to join strings. Alongside that
//! symbol the crate exports a status-code variant, the matching release
//! function and panic diagnostics. The header is generated into
//! `include/hulk_runtime.h` by `build.rs`.
//!
//! Every entry point that does real work runs inside `ffi_guard!`, so a
//! Rust panic never unwinds into C: it becomes [`HulkStatus::Panicked`] and
//! its message is kept for [`hulk_last_panic_message`].

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_code)]

use std::any::Any;
use std::cell::RefCell;
use std::ffi::c_char;

/// Run an FFI body, converting a panic into `HulkStatus::Panicked`.
///
/// The body must evaluate to an `i32` status; `return` inside it returns
/// from the guarded closure, not the enclosing function.
macro_rules! ffi_guard {
    ($body:block) => {
        match std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| -> i32 { $body })) {
            Ok(status) => status,
            Err(payload) => {
                $crate::record_panic(payload.as_ref());
                $crate::status::HulkStatus::Panicked as i32
            }
        }
    };
}

pub mod status;
pub mod string;

pub use status::HulkStatus;
pub use string::{concat, hulk_concat, hulk_string_free};

thread_local! {
    /// Message of the most recent panic caught by `ffi_guard!` on this thread.
    pub(crate) static LAST_PANIC: RefCell<String> = const { RefCell::new(String::new()) };
}

pub(crate) fn record_panic(payload: &(dyn Any + Send)) {
    let message = if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "panic with non-string payload".to_string()
    };
    LAST_PANIC.with(|cell| *cell.borrow_mut() = message);
}

/// Copy the last panic message caught on this thread into `buf`.
///
/// Writes at most `cap - 1` bytes followed by a null terminator. Returns
/// the full message length in bytes (0 if no panic has been caught), so a
/// caller can pass a null `buf` first to size its buffer. Lengths beyond
/// `i32::MAX` are reported as `i32::MAX`.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn hulk_last_panic_message(buf: *mut c_char, cap: usize) -> i32 {
    LAST_PANIC.with(|cell| {
        let message = cell.borrow();
        let bytes = message.as_bytes();

        if !buf.is_null() && cap > 0 {
            let copy_len = bytes.len().min(cap - 1);
            // SAFETY: buf points to cap valid bytes per caller contract.
            unsafe {
                std::ptr::copy_nonoverlapping(bytes.as_ptr(), buf as *mut u8, copy_len);
                *buf.add(copy_len) = 0;
            }
        }

        i32::try_from(bytes.len()).unwrap_or(i32::MAX)
    })
}

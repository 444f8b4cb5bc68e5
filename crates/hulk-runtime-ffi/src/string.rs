//! String concatenation FFI.
//!
//! Strings returned from here are allocated by the Rust global allocator
//! and must be released with [`hulk_string_free`], never with `free(3)`.

use std::ffi::{c_char, CStr, CString};

use hulk_runtime_core::Concatenator;

use crate::status::HulkStatus;

/// Concatenate two null-terminated strings into a new string.
///
/// On success writes the new string to `*out` and returns `Ok`; ownership
/// passes to the caller, who releases it with [`hulk_string_free`]. On
/// any error `*out` is left untouched. Null `a`, `b` or `out` yields
/// `InvalidArgument`.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn hulk_concat(a: *const c_char, b: *const c_char, out: *mut *mut c_char) -> i32 {
    ffi_guard!({
        if a.is_null() || b.is_null() || out.is_null() {
            return HulkStatus::InvalidArgument as i32;
        }
        // SAFETY: a and b are non-null and, per caller contract, point to
        // null-terminated strings that stay valid for this call.
        let (a, b) = unsafe { (CStr::from_ptr(a), CStr::from_ptr(b)) };

        match Concatenator::default().concat(a, b) {
            Ok(joined) => {
                // SAFETY: out is non-null and valid per caller contract.
                unsafe { *out = joined.into_raw() };
                HulkStatus::Ok as i32
            }
            Err(e) => HulkStatus::from(&e) as i32,
        }
    })
}

/// Runtime entry point called by compiled HULK programs.
///
/// Returns a new string holding `a` followed by `b`, or null if either
/// input is null or the allocation failed. Release the result with
/// [`hulk_string_free`].
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn concat(a: *const c_char, b: *const c_char) -> *mut c_char {
    let mut out: *mut c_char = std::ptr::null_mut();
    // Any non-Ok status leaves `out` null, which is this symbol's failure signal.
    let _ = hulk_concat(a, b, &mut out);
    out
}

/// Release a string returned by [`concat`] or [`hulk_concat`].
///
/// Null is a no-op. Any other pointer not obtained from this library, or
/// already released, is undefined behavior.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn hulk_string_free(s: *mut c_char) {
    if s.is_null() {
        return;
    }
    // SAFETY: s came from CString::into_raw in hulk_concat and has not been
    // released yet, per caller contract.
    drop(unsafe { CString::from_raw(s) });
}

//! Null-safe views over C strings

use std::ffi::{c_char, CStr};

use crate::iter::Folded;

/// Borrow the bytes of a NUL-terminated C string, treating null as empty.
///
/// The terminator is not part of the returned slice.
///
/// # Safety
///
/// When `raw` is non-null it must point to a NUL-terminated sequence that
/// stays valid and unmodified for `'a`. A null `raw` is never dereferenced.
pub unsafe fn safe_string<'a>(raw: *const c_char) -> &'a [u8] {
    if raw.is_null() {
        return &[];
    }
    // SAFETY: non-null, and the caller guarantees a live terminated string
    unsafe { CStr::from_ptr(raw) }.to_bytes()
}

/// Same as [`safe_string`] for callers that already hold an optional `CStr`.
pub fn safe_cstr(s: Option<&CStr>) -> &[u8] {
    s.map(CStr::to_bytes).unwrap_or_default()
}

/// Lowercased view of a possibly-null C string.
///
/// # Safety
///
/// Same contract as [`safe_string`].
pub unsafe fn safe_folded<'a>(raw: *const c_char) -> Folded<'a> {
    // SAFETY: forwarded to the caller
    Folded::of(unsafe { safe_string(raw) })
}

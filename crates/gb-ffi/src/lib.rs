//! `gb-ffi` - C boundary for geobridge.
//!
//! For embedders whose geometry engine lives in C: create a `GBReporter`,
//! hand `gb_notice_handler()`, `gb_error_handler()`, and
//! `gb_reporter_user_data()` to the engine's own re-entrant context
//! initialization, then read diagnostics back with `gb_last_error()`.

mod types;

pub use types::*;

use std::ffi::CString;
use std::os::raw::{c_char, c_void};

use gb_engine::reporter::{error_trampoline, notice_trampoline};
use gb_engine::Reporter;

/// Opaque reporter handle owning one isolated error store and the stderr
/// notice sink.
pub struct GBReporter {
    inner: Reporter,
}

/// Execute a closure that returns a `GBStatus`, catching any panics and
/// converting them into `GBStatus::ErrorInternal`.
fn catch_panic<F: FnOnce() -> GBStatus + std::panic::UnwindSafe>(f: F) -> GBStatus {
    match std::panic::catch_unwind(f) {
        Ok(status) => status,
        Err(_) => GBStatus::ErrorInternal,
    }
}

/// Create a new reporter.
///
/// On success, writes a heap-allocated `GBReporter` pointer into `*out` and
/// returns `GBStatus::Ok`. The caller must later call `gb_reporter_destroy`
/// to free it, and must not do so while the engine can still invoke the
/// handlers registered with its user-data pointer.
#[no_mangle]
pub extern "C" fn gb_reporter_create(out: *mut *mut GBReporter) -> GBStatus {
    catch_panic(std::panic::AssertUnwindSafe(|| {
        if out.is_null() {
            return GBStatus::ErrorInvalidArgument;
        }
        let reporter = Box::new(GBReporter {
            inner: Reporter::with_stderr_notices(),
        });
        unsafe {
            *out = Box::into_raw(reporter);
        }
        GBStatus::Ok
    }))
}

/// Destroy a reporter previously created by `gb_reporter_create`.
///
/// Passing a null pointer is a no-op and returns `GBStatus::Ok`.
#[no_mangle]
pub unsafe extern "C" fn gb_reporter_destroy(reporter: *mut GBReporter) -> GBStatus {
    if reporter.is_null() {
        return GBStatus::Ok;
    }
    drop(Box::from_raw(reporter));
    GBStatus::Ok
}

/// The notice handler to register with the engine. Forwards messages to the
/// reporter's notice sink.
#[no_mangle]
pub extern "C" fn gb_notice_handler() -> GBMessageHandler {
    Some(notice_trampoline)
}

/// The error handler to register with the engine. Records messages in the
/// reporter's store, replacing any previous one.
#[no_mangle]
pub extern "C" fn gb_error_handler() -> GBMessageHandler {
    Some(error_trampoline)
}

/// The user-data pointer to register alongside the two handlers.
///
/// Returns null if `reporter` is null. The pointer is valid until
/// `gb_reporter_destroy` is called on `reporter`.
#[no_mangle]
pub unsafe extern "C" fn gb_reporter_user_data(reporter: *mut GBReporter) -> *mut c_void {
    if reporter.is_null() {
        return std::ptr::null_mut();
    }
    &(*reporter).inner as *const Reporter as *mut c_void
}

/// Retrieve the most recent error message.
///
/// On success, writes a heap-allocated C string into `*out` (the empty string
/// if no error has been recorded) and returns `GBStatus::Ok`. The caller must
/// free the string with `gb_free_string`. The store is not cleared; a later
/// error overwrites it.
#[no_mangle]
pub unsafe extern "C" fn gb_last_error(
    reporter: *mut GBReporter,
    out: *mut *mut c_char,
) -> GBStatus {
    catch_panic(std::panic::AssertUnwindSafe(|| {
        if reporter.is_null() || out.is_null() {
            return GBStatus::ErrorInvalidArgument;
        }
        let message = unsafe { &(*reporter).inner }.store().last_error();
        // record() only ever stores text decoded from a C string, so an
        // interior NUL cannot occur here; guard anyway.
        match CString::new(message) {
            Ok(c) => {
                unsafe { *out = c.into_raw() };
                GBStatus::Ok
            }
            Err(_) => GBStatus::ErrorInternal,
        }
    }))
}

/// Free a string previously returned by `gb_last_error`.
#[no_mangle]
pub unsafe extern "C" fn gb_free_string(s: *mut c_char) {
    if !s.is_null() {
        drop(CString::from_raw(s));
    }
}

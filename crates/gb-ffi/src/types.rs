use std::os::raw::{c_char, c_void};

/// Status codes returned by all FFI functions.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GBStatus {
    Ok = 0,
    ErrorInvalidArgument = 1,
    ErrorInternal = 2,
}

/// Message handler signature the engine invokes: an already-formatted,
/// NUL-terminated message plus the user-data pointer registered with it.
pub type GBMessageHandler =
    Option<unsafe extern "C" fn(msg: *const c_char, user_data: *mut c_void)>;

use std::ffi::CString;
use std::os::raw::{c_char, c_void};

/// Handler invoked by the engine with an already-formatted, NUL-terminated
/// message and the user-data pointer it was registered with.
///
/// This is the fixed-arity, re-entrant handler style; the engine does its own
/// printf-style formatting before the call, so no variadic contract crosses
/// the boundary.
pub type MessageHandler =
    Option<unsafe extern "C" fn(msg: *const c_char, user_data: *mut c_void)>;

/// The pair of callbacks an engine context is bound to at initialization,
/// plus the user-data pointer both are invoked with.
///
/// `user_data` identifies the context's [`Reporter`](crate::Reporter) and is
/// only meaningful to the handlers it was paired with; hooks obtained from
/// [`Reporter::hooks`](crate::Reporter::hooks) must not outlive that reporter.
#[derive(Debug, Clone, Copy)]
pub struct EngineHooks {
    pub notice: MessageHandler,
    pub error: MessageHandler,
    pub user_data: *mut c_void,
}

impl EngineHooks {
    /// Fire the notice handler with `msg`. No-op if no handler is registered.
    pub fn emit_notice(&self, msg: &str) {
        invoke(self.notice, self.user_data, msg);
    }

    /// Fire the error handler with `msg`. No-op if no handler is registered.
    pub fn emit_error(&self, msg: &str) {
        invoke(self.error, self.user_data, msg);
    }
}

/// Invoke a message handler with a Rust string.
///
/// Interior NUL bytes are replaced rather than dropping the message, since a
/// mangled diagnostic is still worth more than a silent one.
fn invoke(handler: MessageHandler, user_data: *mut c_void, msg: &str) {
    let Some(cb) = handler else {
        return;
    };
    // Sanitizing up front makes the conversion infallible.
    let Ok(c_str) = CString::new(msg.replace('\0', " ")) else {
        return;
    };
    // The handler/user_data pair was constructed together; see EngineHooks.
    unsafe { cb(c_str.as_ptr(), user_data) }
}

use std::ffi::CStr;
use std::os::raw::{c_char, c_void};
use std::sync::Arc;

use gb_report::{ErrorStore, NoticeSink, StderrNotices};

use crate::hooks::EngineHooks;

/// Destination for everything an engine context reports: one isolated
/// error store plus a notice sink.
///
/// The trampolines below resolve a handler's `user_data` pointer back to the
/// `Reporter` it belongs to, so two contexts (or two threads with their own
/// contexts) never share a buffer.
pub struct Reporter {
    store: ErrorStore,
    sink: Box<dyn NoticeSink>,
}

impl Reporter {
    pub fn new(sink: Box<dyn NoticeSink>) -> Self {
        Reporter {
            store: ErrorStore::new(),
            sink,
        }
    }

    /// Reporter with the engine's native stderr notice convention.
    pub fn with_stderr_notices() -> Self {
        Reporter::new(Box::new(StderrNotices))
    }

    pub fn store(&self) -> &ErrorStore {
        &self.store
    }

    pub fn notice(&self, msg: &str) {
        self.sink.notice(msg);
    }

    /// Build the handler triple to register with an engine.
    ///
    /// `user_data` borrows from `self`; the hooks are only valid while this
    /// `Arc` is alive, which `EngineContext` guarantees by holding its
    /// reporter for the lifetime of the engine binding.
    pub fn hooks(self: &Arc<Self>) -> EngineHooks {
        EngineHooks {
            notice: Some(notice_trampoline),
            error: Some(error_trampoline),
            user_data: Arc::as_ptr(self) as *mut c_void,
        }
    }
}

impl std::fmt::Debug for Reporter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Reporter").field("store", &self.store).finish()
    }
}

/// Notice handler registered with the engine. Decodes the message (lossily if
/// the engine emitted invalid UTF-8) and forwards it to the reporter's sink.
///
/// Null `msg` or `user_data` is tolerated as a no-op; `user_data` must
/// otherwise be the pointer produced by [`Reporter::hooks`].
pub unsafe extern "C" fn notice_trampoline(msg: *const c_char, user_data: *mut c_void) {
    if msg.is_null() || user_data.is_null() {
        return;
    }
    let reporter = &*(user_data as *const Reporter);
    let text = CStr::from_ptr(msg).to_string_lossy();
    reporter.notice(&text);
}

/// Error handler registered with the engine. Records the message in the
/// reporter's store, replacing any previous one (last-write-wins).
pub unsafe extern "C" fn error_trampoline(msg: *const c_char, user_data: *mut c_void) {
    if msg.is_null() || user_data.is_null() {
        return;
    }
    let reporter = &*(user_data as *const Reporter);
    let text = CStr::from_ptr(msg).to_string_lossy();
    reporter.store.record(&text);
}

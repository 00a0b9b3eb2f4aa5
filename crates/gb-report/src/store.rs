use std::sync::{Mutex, PoisonError};

use crate::buffer::ErrorBuffer;

/// Synchronized last-error store, one per engine context.
///
/// A single process-wide buffer would lose updates as soon as two threads
/// drive the engine concurrently. Instead every context owns its own store
/// and the buffer sits behind a mutex, so each
/// write and each read is a critical section: concurrent writers race only on
/// ordering, and a read always observes one complete message, never an
/// interleaving of two.
///
/// Retrieval discipline still applies within one context: a store holds only
/// the most recent message, so the caller should read it immediately after a
/// failed operation, before issuing another one.
#[derive(Debug, Default)]
pub struct ErrorStore {
    inner: Mutex<ErrorBuffer>,
}

impl ErrorStore {
    pub fn new() -> Self {
        ErrorStore {
            inner: Mutex::new(ErrorBuffer::new()),
        }
    }

    /// Record an error message, replacing any previous one.
    ///
    /// This is the write path invoked by the engine's error handler at the
    /// moment it detects a failure.
    pub fn record(&self, msg: &str) {
        self.lock().write(msg);
    }

    /// Current last-error text; empty string if nothing has been recorded.
    pub fn last_error(&self) -> String {
        self.lock().message().to_string()
    }

    /// Read and clear in one step; `None` if nothing has been recorded.
    pub fn take_error(&self) -> Option<String> {
        let mut buf = self.lock();
        if buf.is_empty() {
            return None;
        }
        let msg = buf.message().to_string();
        buf.clear();
        Some(msg)
    }

    /// True if no error is currently pending.
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    // A diagnostics store must stay readable after a panicking writer, so
    // poisoning is absorbed rather than propagated.
    fn lock(&self) -> std::sync::MutexGuard<'_, ErrorBuffer> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_empty_store_reads_empty_string() {
        let store = ErrorStore::new();
        assert!(store.is_empty());
        assert_eq!(store.last_error(), "");
        assert_eq!(store.take_error(), None);
    }

    #[test]
    fn test_record_then_read() {
        let store = ErrorStore::new();
        store.record("IllegalArgumentException: point array must contain 0 or >1 elements");
        assert_eq!(
            store.last_error(),
            "IllegalArgumentException: point array must contain 0 or >1 elements"
        );
        // Non-destructive read.
        assert!(!store.is_empty());
    }

    #[test]
    fn test_last_write_wins_across_records() {
        let store = ErrorStore::new();
        store.record("first");
        store.record("second");
        store.record("third");
        assert_eq!(store.last_error(), "third");
    }

    #[test]
    fn test_take_error_clears() {
        let store = ErrorStore::new();
        store.record("boom");
        assert_eq!(store.take_error().as_deref(), Some("boom"));
        assert_eq!(store.take_error(), None);
        assert_eq!(store.last_error(), "");
    }

    #[test]
    fn test_concurrent_writers_never_interleave() {
        // Mutex policy: a read after concurrent writes yields exactly one of
        // the written messages in full.
        let store = Arc::new(ErrorStore::new());
        let a = "thread A: topology exception at or near point 3.14 2.71";
        let b = "thread B: side location conflict";

        for _ in 0..100 {
            let sa = Arc::clone(&store);
            let sb = Arc::clone(&store);
            let ta = thread::spawn(move || sa.record(a));
            let tb = thread::spawn(move || sb.record(b));
            ta.join().unwrap();
            tb.join().unwrap();

            let got = store.last_error();
            assert!(got == a || got == b, "interleaved message: {got:?}");
        }
    }
}

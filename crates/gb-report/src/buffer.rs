use std::fmt;

/// Capacity of the last-error buffer in bytes.
///
/// One byte is held back from every write so the stored text always fits a
/// C-side buffer of the same size including its NUL terminator.
pub const ERROR_BUF_CAP: usize = 256;

/// Fixed-capacity buffer holding the most recently recorded error text.
///
/// Writes are bounded and last-write-wins: each `write` replaces the previous
/// message entirely, truncating input longer than `ERROR_BUF_CAP - 1` bytes.
/// There is no history and no queue; the engine reports at most one failure
/// per operation and the caller is expected to read it before issuing the
/// next operation.
#[derive(Clone)]
pub struct ErrorBuffer {
    buf: [u8; ERROR_BUF_CAP],
    len: usize,
}

impl ErrorBuffer {
    /// Create an empty buffer. `message()` returns `""` until the first write.
    pub fn new() -> Self {
        ErrorBuffer {
            buf: [0; ERROR_BUF_CAP],
            len: 0,
        }
    }

    /// Replace the stored message with `msg`, truncated to at most
    /// `ERROR_BUF_CAP - 1` bytes.
    ///
    /// Truncation backs off to the nearest UTF-8 character boundary, so the
    /// stored text is always valid UTF-8. Input of any length is safe; excess
    /// bytes are dropped, never written past the buffer.
    pub fn write(&mut self, msg: &str) {
        let mut end = msg.len().min(ERROR_BUF_CAP - 1);
        while !msg.is_char_boundary(end) {
            end -= 1;
        }
        self.buf[..end].copy_from_slice(&msg.as_bytes()[..end]);
        self.len = end;
    }

    /// Current message text; empty before the first write.
    pub fn message(&self) -> &str {
        // write() only ever stores whole characters, so this cannot fail.
        std::str::from_utf8(&self.buf[..self.len]).unwrap_or("")
    }

    /// True if no message is stored.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Discard the stored message.
    pub fn clear(&mut self) {
        self.len = 0;
    }
}

impl Default for ErrorBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ErrorBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ErrorBuffer")
            .field("len", &self.len)
            .field("message", &self.message())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_before_first_write() {
        let buf = ErrorBuffer::new();
        assert!(buf.is_empty());
        assert_eq!(buf.message(), "");
    }

    #[test]
    fn test_short_message_roundtrip() {
        let mut buf = ErrorBuffer::new();
        for msg in ["x", "ParseException: unexpected token", "側道の幅が不正です"] {
            buf.write(msg);
            assert_eq!(buf.message(), msg);
        }
    }

    #[test]
    fn test_long_message_truncates_to_cap_minus_one() {
        let mut buf = ErrorBuffer::new();
        let long: String = std::iter::repeat('a').take(ERROR_BUF_CAP * 3).collect();
        buf.write(&long);
        assert_eq!(buf.message().len(), ERROR_BUF_CAP - 1);
        assert!(long.starts_with(buf.message()));
    }

    #[test]
    fn test_truncation_respects_char_boundary() {
        let mut buf = ErrorBuffer::new();
        // 3-byte characters; 255 is not a multiple of 3, so the cut must
        // back off to a boundary and still be valid UTF-8.
        let long: String = std::iter::repeat('日').take(ERROR_BUF_CAP).collect();
        buf.write(&long);
        let stored = buf.message();
        assert!(stored.len() <= ERROR_BUF_CAP - 1);
        assert_eq!(stored.len() % 3, 0);
        assert!(stored.chars().all(|c| c == '日'));
    }

    #[test]
    fn test_last_write_wins() {
        let mut buf = ErrorBuffer::new();
        buf.write("first failure");
        buf.write("second failure");
        assert_eq!(buf.message(), "second failure");
    }

    #[test]
    fn test_short_write_after_long_write() {
        let mut buf = ErrorBuffer::new();
        let long: String = std::iter::repeat('z').take(1024).collect();
        buf.write(&long);
        buf.write("ok");
        assert_eq!(buf.message(), "ok");
    }

    #[test]
    fn test_clear() {
        let mut buf = ErrorBuffer::new();
        buf.write("boom");
        buf.clear();
        assert!(buf.is_empty());
        assert_eq!(buf.message(), "");
    }
}

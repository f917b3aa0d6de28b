use std::fmt;

use crate::log_error::LogError;

/// Renders format arguments into a caller-owned fixed-capacity buffer.
///
/// Convenience for callers that assemble a message without allocating before
/// handing it to [`crate::Logger::emit`]. The write is bounded: it never runs
/// past the slice. On success returns the number of bytes written; the
/// rendered text is `&buf[..n]`.
///
/// # Errors
///
/// Returns [`LogError::BufferTooSmall`] when the rendered text does not fit.
/// A prefix of the text may already have been written to the buffer.
///
/// # Examples
///
/// ```
/// let mut buf = [0u8; 32];
/// let n = fanlog::format_into(&mut buf, format_args!("port {} closed", 8080)).unwrap();
/// assert_eq!(&buf[..n], b"port 8080 closed");
/// ```
pub fn format_into(buf: &mut [u8], args: fmt::Arguments<'_>) -> Result<usize, LogError> {
    let mut cursor = BufCursor { buf, len: 0 };
    fmt::write(&mut cursor, args).map_err(|_| LogError::BufferTooSmall)?;
    Ok(cursor.len)
}

struct BufCursor<'a> {
    buf: &'a mut [u8],
    len: usize,
}

impl fmt::Write for BufCursor<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        let bytes = s.as_bytes();
        let end = self.len.checked_add(bytes.len()).ok_or(fmt::Error)?;
        if end > self.buf.len() {
            return Err(fmt::Error);
        }
        self.buf[self.len..end].copy_from_slice(bytes);
        self.len = end;
        Ok(())
    }
}

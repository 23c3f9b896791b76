//! Byte sinks for trace output.
//!
//! [`Stream`] is the write-only contract the logging decorator needs. Three
//! sinks ship with the crate:
//!
//! - [`MemoryStream`] collects everything in a buffer (tests, tools that
//!   post-process the trace).
//! - [`WriteStream`] adapts any [`io::Write`]. I/O failures never reach the
//!   decorator; the first one is kept and later output is dropped.
//! - [`TracingStream`] re-emits each complete line as a `tracing` event on
//!   target `wasm_events::trace`.

use std::borrow::Cow;
use std::fmt;
use std::io;

use memchr::memchr;

use crate::error::StreamError;

/// Write-only text sink.
///
/// Writes cannot fail at this level. Sinks with fallible backends keep the
/// failure themselves (see [`WriteStream::take_error`]).
pub trait Stream {
    fn write_data(&mut self, data: &[u8]);

    /// Formatted write, so `write!(stream, ...)` works on any stream.
    fn write_fmt(&mut self, args: fmt::Arguments<'_>) {
        struct Adapter<'a, S: ?Sized>(&'a mut S);

        impl<S: Stream + ?Sized> fmt::Write for Adapter<'_, S> {
            fn write_str(&mut self, s: &str) -> fmt::Result {
                self.0.write_data(s.as_bytes());
                Ok(())
            }
        }

        // The adapter never fails; an error here can only come from a
        // misbehaving Display impl, and is dropped with its output.
        let _ = fmt::write(&mut Adapter(self), args);
    }
}

impl<S: Stream + ?Sized> Stream for &mut S {
    #[inline]
    fn write_data(&mut self, data: &[u8]) {
        (**self).write_data(data)
    }
}

// ============================================================================
// MemoryStream
// ============================================================================

/// Buffers all output in memory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryStream {
    buf: Vec<u8>,
}

impl MemoryStream {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }

    /// The buffer as text. Names are written unescaped, so invalid UTF-8 is
    /// replaced.
    pub fn to_string_lossy(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.buf)
    }

    pub fn clear(&mut self) {
        self.buf.clear();
    }

    pub fn into_inner(self) -> Vec<u8> {
        self.buf
    }
}

impl Stream for MemoryStream {
    #[inline]
    fn write_data(&mut self, data: &[u8]) {
        self.buf.extend_from_slice(data);
    }
}

// ============================================================================
// WriteStream
// ============================================================================

/// Adapts an [`io::Write`] sink.
///
/// The first write error is stored and every later write is dropped, so the
/// trace is a clean prefix of what was produced. Retrieve the error with
/// [`take_error`](Self::take_error).
#[derive(Debug)]
pub struct WriteStream<W: io::Write> {
    inner: W,
    failed: bool,
    error: Option<io::Error>,
}

impl<W: io::Write> WriteStream<W> {
    pub fn new(inner: W) -> Self {
        Self {
            inner,
            failed: false,
            error: None,
        }
    }

    /// Whether a write has failed. Stays set after the error is taken.
    #[inline]
    pub fn has_failed(&self) -> bool {
        self.failed
    }

    /// The first write error, if one occurred and was not taken yet.
    pub fn take_error(&mut self) -> Option<StreamError> {
        self.error.take().map(StreamError::from)
    }

    pub fn flush(&mut self) -> Result<(), StreamError> {
        if let Some(err) = self.take_error() {
            return Err(err);
        }
        self.inner.flush()?;
        Ok(())
    }

    pub fn get_ref(&self) -> &W {
        &self.inner
    }

    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl<W: io::Write> Stream for WriteStream<W> {
    fn write_data(&mut self, data: &[u8]) {
        if self.failed {
            return;
        }
        if let Err(err) = self.inner.write_all(data) {
            tracing::warn!(error = %err, "trace sink write failed, dropping further output");
            self.failed = true;
            self.error = Some(err);
        }
    }
}

// ============================================================================
// TracingStream
// ============================================================================

/// Emits each complete trace line as a `tracing` debug event.
///
/// Partial lines are buffered until their newline arrives. Whatever is left
/// without one is emitted on [`flush`](Self::flush) or drop.
#[derive(Debug, Default)]
pub struct TracingStream {
    pending: Vec<u8>,
}

impl TracingStream {
    pub fn new() -> Self {
        Self::default()
    }

    /// Emit any buffered partial line.
    pub fn flush(&mut self) {
        if !self.pending.is_empty() {
            emit(&self.pending);
            self.pending.clear();
        }
    }
}

impl Stream for TracingStream {
    fn write_data(&mut self, data: &[u8]) {
        self.pending.extend_from_slice(data);

        let mut start = 0;
        while let Some(pos) = memchr(b'\n', &self.pending[start..]) {
            emit(&self.pending[start..start + pos]);
            start += pos + 1;
        }
        if start > 0 {
            self.pending.drain(..start);
        }
    }
}

impl Drop for TracingStream {
    fn drop(&mut self) {
        self.flush();
    }
}

#[inline]
fn emit(line: &[u8]) {
    tracing::debug!(target: "wasm_events::trace", "{}", String::from_utf8_lossy(line));
}

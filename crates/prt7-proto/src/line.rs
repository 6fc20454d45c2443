//! Byte stream to line framing, and line classification.
//!
//! The device writes ASCII lines terminated by `\n`, `\r\n` or a bare `\r`.
//! [`LineAssembler`] is the Sans-IO half of the transport: feed it whatever
//! bytes a read returned and it hands back every line completed so far,
//! keeping the unterminated tail for the next read.

use bytes::{BufMut, BytesMut};

use crate::frame::{LOAD_TAG, MAP_TAG};

/// Longest line the assembler buffers before forcing a break.
pub const DEFAULT_MAX_LINE_LEN: usize = 255;

/// A received line, sorted by what the receiver should do with it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Line<'a> {
    /// Starts with a frame tag and must go through [`crate::parse`].
    Frame(&'a str),

    /// Out-of-band text from the device. Shown, never decoded.
    Info(&'a str),
}

/// Sort a line into a frame candidate or informational text.
///
/// Only the first character is inspected. A candidate may still fail to
/// parse (`"L"`, `"MX5"`); that is reported as a rejected frame rather than
/// as info.
pub fn classify(line: &str) -> Line<'_> {
    match line.chars().next() {
        Some(LOAD_TAG | MAP_TAG) => Line::Frame(line),
        _ => Line::Info(line),
    }
}

/// Incremental line splitter over a raw byte stream.
///
/// - `\r` and `\n` both end a line; empty lines are never produced
/// - a line reaching `max_len` bytes is emitted and a new one begins
/// - bytes are decoded as lossy UTF-8
#[derive(Debug, Clone)]
pub struct LineAssembler {
    buf: BytesMut,
    max_len: usize,
}

impl LineAssembler {
    /// Assembler with [`DEFAULT_MAX_LINE_LEN`].
    pub fn new() -> Self {
        Self::with_max_len(DEFAULT_MAX_LINE_LEN)
    }

    /// Assembler that breaks lines at `max_len` bytes (at least 1).
    pub fn with_max_len(max_len: usize) -> Self {
        let max_len = max_len.max(1);
        Self { buf: BytesMut::with_capacity(max_len.min(DEFAULT_MAX_LINE_LEN)), max_len }
    }

    /// Bytes buffered for the current, unterminated line.
    pub fn pending(&self) -> usize {
        self.buf.len()
    }

    /// Feed received bytes and collect every line they complete.
    pub fn push(&mut self, bytes: &[u8]) -> Vec<String> {
        let mut lines = Vec::new();

        for &byte in bytes {
            if byte == b'\n' || byte == b'\r' {
                if !self.buf.is_empty() {
                    lines.push(self.take_line());
                }
                continue;
            }

            self.buf.put_u8(byte);
            if self.buf.len() >= self.max_len {
                lines.push(self.take_line());
            }
        }

        lines
    }

    /// Flush the unterminated tail at end of stream.
    pub fn finish(&mut self) -> Option<String> {
        if self.buf.is_empty() { None } else { Some(self.take_line()) }
    }

    fn take_line(&mut self) -> String {
        let bytes = self.buf.split();
        String::from_utf8_lossy(&bytes).into_owned()
    }
}

impl Default for LineAssembler {
    fn default() -> Self {
        Self::new()
    }
}

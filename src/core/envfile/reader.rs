// loadenv-rs: `cronsh` Environment Loader - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Bounded line reading.
//!
//! # Architecture
//!
//! ```text
//! BoundedLineReader<R: BufRead>
//! next_chunk() -> LineChunk { text, line }
//!
//! chunk ends at '\n' (kept) or at MAX_LINE bytes, whichever first
//! Split mode:  oversized lines continue in the next chunk
//! Strict mode: oversized lines are EnvFileError::LineTooLong
//! ```
//!
//! The original loader read lines with `fgets` into a 4096-byte buffer,
//! so a physical line longer than 4095 bytes (newline included) arrived
//! as multiple independent chunks. [`LineMode::Split`] reproduces that
//! chunking exactly; [`LineMode::Strict`] rejects such lines instead.

use std::io::BufRead;

use super::LineMode;
use crate::error::EnvFileError;

/// Longest chunk a single read can produce: 4096-byte buffer minus the
/// terminator byte, matching `fgets(buf, 4096, f)`.
pub(crate) const MAX_LINE: usize = 4095;

/// One chunk of input, at most [`MAX_LINE`] bytes, newline included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct LineChunk {
    /// Chunk text. Ends with `'\n'` unless the line was cut or the file
    /// did not end with a newline.
    pub(crate) text: String,
    /// 1-based physical line this chunk started on. Continuation chunks
    /// of a split line report the same number.
    pub(crate) line: usize,
}

/// Reads input in `fgets`-sized chunks.
pub(crate) struct BoundedLineReader<R> {
    inner: R,
    path: String,
    mode: LineMode,
    line: usize,
}

impl<R: BufRead> BoundedLineReader<R> {
    pub(crate) fn new(inner: R, path: impl Into<String>, mode: LineMode) -> Self {
        Self {
            inner,
            path: path.into(),
            mode,
            line: 1,
        }
    }

    /// Returns the next chunk, or `None` at end of input.
    ///
    /// # Errors
    ///
    /// Returns an error when the underlying read fails, when a chunk is
    /// not valid UTF-8, or (strict mode) when a line keeps going past
    /// [`MAX_LINE`] bytes.
    pub(crate) fn next_chunk(&mut self) -> Result<Option<LineChunk>, EnvFileError> {
        let mut buf: Vec<u8> = Vec::new();
        let mut terminated = false;

        while buf.len() < MAX_LINE {
            let available = match self.inner.fill_buf() {
                Ok(data) => data,
                Err(source) => return Err(self.read_error(source)),
            };
            if available.is_empty() {
                break;
            }

            let want = MAX_LINE - buf.len();
            let window = &available[..available.len().min(want)];
            if let Some(pos) = window.iter().position(|&b| b == b'\n') {
                buf.extend_from_slice(&window[..=pos]);
                self.inner.consume(pos + 1);
                terminated = true;
                break;
            }

            let take = window.len();
            buf.extend_from_slice(window);
            self.inner.consume(take);
        }

        if buf.is_empty() {
            return Ok(None);
        }

        let line = self.line;
        if terminated {
            self.line += 1;
        } else if buf.len() == MAX_LINE && self.mode == LineMode::Strict {
            // A full chunk without a newline is fine at EOF (final line
            // without terminator). It is only oversized if more follows.
            let more = match self.inner.fill_buf() {
                Ok(data) => !data.is_empty(),
                Err(source) => return Err(self.read_error(source)),
            };
            if more {
                return Err(EnvFileError::LineTooLong {
                    path: self.path.clone(),
                    line,
                    limit: MAX_LINE,
                });
            }
        }

        match String::from_utf8(buf) {
            Ok(text) => Ok(Some(LineChunk { text, line })),
            Err(_) => Err(EnvFileError::InvalidUtf8 {
                path: self.path.clone(),
                line,
            }),
        }
    }

    fn read_error(&self, source: std::io::Error) -> EnvFileError {
        EnvFileError::Read {
            path: self.path.clone(),
            source,
        }
    }
}

//! Line Reader
//!
//! Splits a raw byte stream into logical lines.

use std::fs::File;
use std::io::{ErrorKind, Read};
use std::path::Path;

use crate::config::DEFAULT_READ_BUFFER_SIZE;
use crate::error::{FileListError, Result};

use super::is_terminator;

/// Reads logical lines from a byte stream
///
/// Every `\r` and every `\n` ends a line on its own. Empty runs between
/// terminators are dropped, so `a\r\nb` yields `a`, `b`. Bytes after the
/// last terminator are still emitted as a final line. Invalid UTF-8 is
/// replaced rather than rejected.
pub struct LineReader<R> {
    inner: R,
    buf: Vec<u8>,
    pos: usize,
    filled: usize,
    line: Vec<u8>,
    bytes_read: u64,
    done: bool,
}

impl LineReader<File> {
    /// Open a file for line reading
    pub fn open(path: &Path, buffer_size: usize) -> Result<Self> {
        let file = File::open(path).map_err(|source| FileListError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::with_capacity(file, buffer_size))
    }
}

impl<R: Read> LineReader<R> {
    /// Wrap a reader using the default chunk size
    pub fn new(inner: R) -> Self {
        Self::with_capacity(inner, DEFAULT_READ_BUFFER_SIZE)
    }

    /// Wrap a reader using a chunk of `buffer_size` bytes (at least 1)
    pub fn with_capacity(inner: R, buffer_size: usize) -> Self {
        Self {
            inner,
            buf: vec![0u8; buffer_size.max(1)],
            pos: 0,
            filled: 0,
            line: Vec::new(),
            bytes_read: 0,
            done: false,
        }
    }

    /// Total bytes pulled from the underlying reader so far
    pub fn bytes_read(&self) -> u64 {
        self.bytes_read
    }

    /// Read the next logical line
    ///
    /// Returns `Ok(None)` at end of stream.
    pub fn next_line(&mut self) -> Result<Option<String>> {
        loop {
            // Drain what is buffered before touching the reader again
            while self.pos < self.filled {
                let chunk = &self.buf[self.pos..self.filled];
                match chunk.iter().position(|&b| is_terminator(b)) {
                    Some(offset) => {
                        self.line.extend_from_slice(&chunk[..offset]);
                        self.pos += offset + 1;
                        if !self.line.is_empty() {
                            return Ok(Some(self.take_line()));
                        }
                    }
                    None => {
                        self.line.extend_from_slice(chunk);
                        self.pos = self.filled;
                    }
                }
            }

            if self.done {
                return Ok(None);
            }

            match self.inner.read(&mut self.buf) {
                Ok(0) => {
                    self.done = true;
                    if !self.line.is_empty() {
                        return Ok(Some(self.take_line()));
                    }
                    return Ok(None);
                }
                Ok(n) => {
                    self.pos = 0;
                    self.filled = n;
                    self.bytes_read += n as u64;
                }
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(source) => {
                    self.done = true;
                    return Err(FileListError::Read {
                        bytes: self.bytes_read,
                        source,
                    });
                }
            }
        }
    }

    fn take_line(&mut self) -> String {
        let bytes = std::mem::take(&mut self.line);
        match String::from_utf8(bytes) {
            Ok(line) => line,
            Err(e) => String::from_utf8_lossy(e.as_bytes()).into_owned(),
        }
    }
}

impl<R: Read> Iterator for LineReader<R> {
    type Item = Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_line().transpose()
    }
}

/// Read every logical line of a file
pub fn read_lines(path: &Path, buffer_size: usize) -> Result<Vec<String>> {
    LineReader::open(path, buffer_size)?.collect()
}

//! Line Writer
//!
//! Writes terminated lines and keeps count of the bytes that made it out.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::config::LineEnding;
use crate::error::{FileListError, Result};

/// Writes lines, each followed by the configured terminator
///
/// Output is buffered. The byte count is taken below the buffer, so it only
/// covers bytes the underlying writer has accepted.
pub struct LineWriter<W: Write> {
    inner: BufWriter<Counting<W>>,
    line_ending: LineEnding,
}

impl LineWriter<File> {
    /// Create or truncate a file for writing
    pub fn create(path: &Path, line_ending: LineEnding) -> Result<Self> {
        let file = File::create(path).map_err(|source| FileListError::Create {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::new(file, line_ending))
    }
}

impl<W: Write> LineWriter<W> {
    pub fn new(inner: W, line_ending: LineEnding) -> Self {
        Self {
            inner: BufWriter::new(Counting {
                inner,
                bytes: 0,
            }),
            line_ending,
        }
    }

    /// Write `line` followed by the terminator
    pub fn write_line(&mut self, line: &str) -> Result<()> {
        let terminator = self.line_ending.as_bytes();
        self.write_raw(line.as_bytes())?;
        self.write_raw(terminator)
    }

    /// Bytes the underlying writer has accepted so far
    ///
    /// Anything still sitting in the buffer is not counted.
    pub fn bytes_written(&self) -> u64 {
        self.inner.get_ref().bytes
    }

    /// Flush everything and hand back the total byte count
    pub fn finish(mut self) -> Result<u64> {
        self.inner.flush().map_err(|source| self.write_error(source))?;
        Ok(self.bytes_written())
    }

    fn write_raw(&mut self, bytes: &[u8]) -> Result<()> {
        self.inner
            .write_all(bytes)
            .map_err(|source| self.write_error(source))
    }

    fn write_error(&self, source: io::Error) -> FileListError {
        FileListError::Write {
            bytes: self.bytes_written(),
            source,
        }
    }
}

/// Counts bytes accepted by the wrapped writer
struct Counting<W> {
    inner: W,
    bytes: u64,
}

impl<W: Write> Write for Counting<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let n = self.inner.write(buf)?;
        self.bytes += n as u64;
        Ok(n)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}

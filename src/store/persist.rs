//! Load and save
//!
//! Moves a `FileList` to and from its text file.

use std::io::Write;
use std::path::Path;

use crate::codec::{format_line, parse_line};
use crate::config::Config;
use crate::error::Result;
use crate::file::{LineReader, LineWriter};

use super::FileList;

impl FileList {
    /// Load a list from `path` using the default config
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        Self::load_with_config(path, Config::default())
    }

    /// Load a list from `path`
    ///
    /// Blank lines and comment-only lines are dropped. The result is
    /// unchanged and stamped with the time of this call, not the file's
    /// modification time.
    pub fn load_with_config(path: impl AsRef<Path>, config: Config) -> Result<Self> {
        let path = path.as_ref();
        let mut reader = LineReader::open(path, config.read_buffer_size)?;
        let mut list = Self::with_config(config);

        let mut skipped = 0usize;
        while let Some(line) = reader.next_line()? {
            let item = parse_line(&line);
            if item.is_empty() {
                skipped += 1;
                continue;
            }
            list.push(item);
        }

        list.changed = false;

        tracing::debug!(
            "Loaded {} items from {} ({} bytes, {} lines skipped)",
            list.count(),
            path.display(),
            reader.bytes_read(),
            skipped
        );

        Ok(list)
    }

    /// Save the list to `path`, replacing any existing file
    ///
    /// Every line is followed by the configured terminator. On failure the
    /// file contents are unreliable and `changed` is left as it was.
    pub fn save(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let writer = LineWriter::create(path, self.config.line_ending)?;
        let bytes = self.write_items(writer)?;

        tracing::debug!(
            "Saved {} items to {} ({} bytes)",
            self.count(),
            path.display(),
            bytes
        );

        Ok(())
    }

    /// Save the list into any writer, returning the bytes written
    ///
    /// Same format and failure rules as `save`; the list counts as saved
    /// once the writer has been flushed.
    pub fn save_to_writer<W: Write>(&mut self, writer: W) -> Result<u64> {
        self.write_items(LineWriter::new(writer, self.config.line_ending))
    }

    fn write_items<W: Write>(&mut self, mut writer: LineWriter<W>) -> Result<u64> {
        for item in &self.items {
            let line = format_line(item);
            if line.is_empty() {
                tracing::trace!("Skipping item with empty value");
                continue;
            }
            writer.write_line(&line)?;
        }

        let bytes = writer.finish()?;
        self.changed = false;
        Ok(bytes)
    }
}

//! Configuration for filelist
//!
//! Centralized configuration with sensible defaults.

/// Default chunk size for the raw line reader (32 KiB)
pub const DEFAULT_READ_BUFFER_SIZE: usize = 32 * 1024;

/// Configuration carried by a `FileList`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Write Configuration
    // -------------------------------------------------------------------------
    /// Terminator appended after every saved line
    pub line_ending: LineEnding,

    // -------------------------------------------------------------------------
    // Read Configuration
    // -------------------------------------------------------------------------
    /// Size of each raw chunk read from disk (in bytes)
    pub read_buffer_size: usize,
}

/// Line terminator written on save
///
/// Reading never depends on this: both `\r` and `\n` always end a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineEnding {
    /// Carriage return only (`\r`)
    Cr,

    /// Carriage return + line feed (`\r\n`)
    CrLf,
}

impl LineEnding {
    /// Terminator used by the host the process runs on
    ///
    /// `CrLf` on Windows, `Cr` everywhere else.
    pub fn native() -> Self {
        if cfg!(windows) {
            LineEnding::CrLf
        } else {
            LineEnding::Cr
        }
    }

    /// Raw bytes of the terminator
    pub fn as_bytes(&self) -> &'static [u8] {
        match self {
            LineEnding::Cr => b"\r",
            LineEnding::CrLf => b"\r\n",
        }
    }
}

impl Default for LineEnding {
    fn default() -> Self {
        Self::native()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            line_ending: LineEnding::native(),
            read_buffer_size: DEFAULT_READ_BUFFER_SIZE,
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the terminator written after each line
    pub fn line_ending(mut self, line_ending: LineEnding) -> Self {
        self.config.line_ending = line_ending;
        self
    }

    /// Set the raw read chunk size (in bytes, clamped to at least 1)
    pub fn read_buffer_size(mut self, size: usize) -> Self {
        self.config.read_buffer_size = size.max(1);
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}

//! File Module
//!
//! Raw line I/O underneath load and save.
//!
//! ## Responsibilities
//! - Split a byte stream into lines, treating `\r` and `\n` as independent
//!   terminators
//! - Write lines with a single configured terminator
//! - Report how many bytes were processed when an I/O call fails
//!
//! Handles are scoped: each reader or writer owns its file and closes it
//! when dropped, on success and error paths alike.

mod reader;
mod writer;

pub use reader::{read_lines, LineReader};
pub use writer::LineWriter;

/// Line feed
pub const LF: u8 = 0x0A;

/// Carriage return
pub const CR: u8 = 0x0D;

fn is_terminator(byte: u8) -> bool {
    byte == LF || byte == CR
}

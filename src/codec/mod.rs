//! Line Codec Module
//!
//! Converts between a single text line and an `Item`.
//!
//! ## Line Format
//! ```text
//! <value><TAB>//<comment>
//! <value>
//! // full-line comment (ignored)
//! ```
//!
//! Parsing trims whitespace around both fields, so hand-edited files with
//! spaces instead of a tab still load. Formatting is canonical: one tab,
//! the marker, then the comment with no separating space.

mod line;

pub use line::{format_line, parse_line};

/// Marker that starts a comment
pub const COMMENT_MARKER: &str = "//";

/// Separator written between value and inline comment
pub const FIELD_SEPARATOR: char = '\t';

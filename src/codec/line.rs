//! Line parsing and formatting

use crate::item::Item;

use super::{COMMENT_MARKER, FIELD_SEPARATOR};

/// Parse a raw line into an `Item`
///
/// Blank lines and lines starting with the comment marker yield the empty
/// item. Only the first marker splits the line; anything after it, further
/// markers included, belongs to the comment.
pub fn parse_line(raw: &str) -> Item {
    let line = raw.trim();
    if line.is_empty() || line.starts_with(COMMENT_MARKER) {
        return Item::default();
    }

    match line.split_once(COMMENT_MARKER) {
        Some((value, comment)) => Item::new(value.trim(), comment.trim()),
        None => Item::new(line, ""),
    }
}

/// Format an `Item` as a line, without terminator
///
/// Returns an empty string for an item with an empty value, which callers
/// treat as "omit this line".
pub fn format_line(item: &Item) -> String {
    if item.value.is_empty() {
        return String::new();
    }

    if item.comment.is_empty() {
        return item.value.clone();
    }

    let mut line = String::with_capacity(
        item.value.len() + 1 + COMMENT_MARKER.len() + item.comment.len(),
    );
    line.push_str(&item.value);
    line.push(FIELD_SEPARATOR);
    line.push_str(COMMENT_MARKER);
    line.push_str(&item.comment);
    line
}
